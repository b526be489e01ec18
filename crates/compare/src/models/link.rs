use std::fmt::{Display, Formatter, Result as FmtResult};

/// Where to buy a phone.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PurchaseLink {
    /// Retailer name (e.g. "Amazon")
    pub retailer: String,
    pub url: String,
}
impl<R: Into<String>, U: Into<String>> From<(R, U)> for PurchaseLink {
    fn from((retailer, url): (R, U)) -> Self {
        Self {
            retailer: retailer.into(),
            url: url.into(),
        }
    }
}
impl Display for PurchaseLink {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{} <{}>", self.retailer, self.url)
    }
}

/// A reference to a CMS-hosted image asset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Image {
    pub url: String,
    /// Alt text / asset title
    pub title: Option<String>,
}
impl From<String> for Image {
    fn from(url: String) -> Self {
        Self { url, title: None }
    }
}
impl Display for Image {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match &self.title {
            Some(title) => write!(f, "{title} <{}>", self.url),
            None => write!(f, "{}", self.url),
        }
    }
}
