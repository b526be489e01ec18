//! Comparison Path Codec
//!
//! A comparison page lives at `/compare/{slug}-vs-{slug}[-vs-{slug}[-vs-{slug}]]`.
//! Encoding slugs each title and joins them with the literal `-vs-`
//! separator; decoding splits on *every* occurrence of the separator, so a
//! three- or four-way comparison round-trips in order.
//!
//! > **Note:** A title whose slug itself contains `-vs-` (say, "Phone vs
//! >           Edition") can't be told apart from two phones. That input is
//! >           unsupported; no escaping scheme is attempted.

use crate::consts::{PATH_PREFIX, SEPARATOR};
use crate::error::{Error, ErrorKind, Result};
use crate::slug::Slug;
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::str::FromStr;
use tracing::instrument;

/// An ordered list of slugs addressed by a comparison path.
///
/// Only the lower bound (two slugs) is enforced here; the four-phone cap
/// belongs to [`SlotSet`](crate::SlotSet).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ComparisonPath {
    slugs: Vec<Slug>,
}
impl ComparisonPath {
    /// Builds a path from display titles, in the given order. Duplicate
    /// titles are kept as-is.
    pub fn from_titles<T: AsRef<str>>(titles: impl IntoIterator<Item = T>) -> Result<Self> {
        Self::from_slugs(titles.into_iter().map(Slug::from_title))
    }

    pub fn from_slugs(slugs: impl IntoIterator<Item = Slug>) -> Result<Self> {
        let slugs: Vec<Slug> = slugs.into_iter().collect();
        if slugs.len() < 2 {
            exn::bail!(ErrorKind::TooFewProducts(slugs.len()));
        }
        Ok(Self { slugs })
    }

    pub fn slugs(&self) -> &[Slug] {
        &self.slugs
    }

    pub fn into_slugs(self) -> Vec<Slug> {
        self.slugs
    }

    pub fn len(&self) -> usize {
        self.slugs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slugs.is_empty()
    }
}
impl FromStr for ComparisonPath {
    type Err = Error;

    /// Accepts either the segment after `/compare/`, or the full path.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self { slugs: decode(s)? })
    }
}
impl Display for ComparisonPath {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{PATH_PREFIX}")?;
        for (i, slug) in self.slugs.iter().enumerate() {
            if i > 0 {
                write!(f, "{SEPARATOR}")?;
            }
            write!(f, "{slug}")?;
        }
        Ok(())
    }
}

/// Builds `/compare/<slug>-vs-<slug>...` from two or more titles.
///
/// ```rust
/// use phonecmp_compare::encode;
/// let path = encode(["iPhone 16 Pro", "Samsung Galaxy S24 Ultra"]).unwrap();
/// assert_eq!(path, "/compare/iphone-16-pro-vs-samsung-galaxy-s24-ultra");
/// assert!(encode(["Pixel 9"]).is_err());
/// ```
pub fn encode<T: AsRef<str>>(titles: impl IntoIterator<Item = T>) -> Result<String> {
    Ok(ComparisonPath::from_titles(titles)?.to_string())
}

/// Recovers the ordered slugs from a comparison path segment.
///
/// Fails with [`InvalidFormat`](ErrorKind::InvalidFormat) when there's no
/// `-vs-` separator, or fewer than two non-empty slugs remain after
/// splitting. Empty segments (`"a-vs--vs-b"`) are discarded.
///
/// ```rust
/// use phonecmp_compare::decode;
/// let slugs = decode("oneplus-13-vs-pixel-9-vs-galaxy-s24").unwrap();
/// assert_eq!(slugs, ["oneplus-13", "pixel-9", "galaxy-s24"]);
/// assert!(decode("-vs-").is_err());
/// ```
#[instrument(level = "debug")]
pub fn decode(segment: &str) -> Result<Vec<Slug>> {
    let trimmed = segment.trim().trim_end_matches('/');
    let trimmed = trimmed.strip_prefix(PATH_PREFIX).unwrap_or(trimmed);
    if !trimmed.contains(SEPARATOR) {
        exn::bail!(ErrorKind::InvalidFormat(segment.to_string()));
    }
    let slugs: Vec<Slug> = trimmed.split(SEPARATOR).filter(|s| !s.is_empty()).map(Slug::from).collect();
    if slugs.len() < 2 {
        exn::bail!(ErrorKind::InvalidFormat(segment.to_string()));
    }
    tracing::debug!(count = slugs.len(), "Decoded comparison path");
    Ok(slugs)
}
