use std::fmt::{Display, Formatter, Result as FmtResult};

/// One purchasable configuration of a phone (e.g. a storage tier).
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    pub name: String,
    /// Price in the store's currency; `None` when the CMS has no price yet
    pub price: Option<f64>,
}
impl Variant {
    pub fn new(name: impl Into<String>, price: Option<f64>) -> Self {
        Self { name: name.into(), price }
    }
}
impl<N: Into<String>> From<(N, f64)> for Variant {
    fn from((name, price): (N, f64)) -> Self {
        Self::new(name, Some(price))
    }
}
impl Display for Variant {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.price {
            Some(price) => write!(f, "{} ({price:.2})", self.name),
            None => write!(f, "{}", self.name),
        }
    }
}
