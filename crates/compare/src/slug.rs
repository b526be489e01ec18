//! URL-safe tokens derived from phone titles.

use crate::consts::{HYPHEN_RUN_REGEX, SLUG_DISALLOWED_REGEX, WHITESPACE_RUN_REGEX};
use derive_more::Display;
use std::ops::Deref;

/// Converts a free-text title into a lowercase, hyphen-delimited slug.
///
/// Anything that isn't an ASCII letter, digit, whitespace or hyphen is
/// dropped; whitespace runs become a single hyphen, hyphen runs collapse, and
/// leading/trailing hyphens are trimmed. A title with nothing usable produces
/// an empty slug.
///
/// ```rust
/// use phonecmp_compare::slugify;
/// assert_eq!(slugify("iPhone 16 Pro"), "iphone-16-pro");
/// assert_eq!(slugify("Galaxy Z Fold6 (5G)"), "galaxy-z-fold6-5g");
/// assert_eq!(slugify("™®"), "");
/// ```
pub fn slugify(title: impl AsRef<str>) -> String {
    let lower = title.as_ref().to_lowercase();
    let kept = SLUG_DISALLOWED_REGEX.replace_all(&lower, "");
    let hyphenated = WHITESPACE_RUN_REGEX.replace_all(&kept, "-");
    HYPHEN_RUN_REGEX.replace_all(&hyphenated, "-").trim_matches('-').to_string()
}

/// A slug as it appears in a comparison path.
///
/// Slugs decoded from a URL are kept exactly as written; they're only
/// guaranteed to be canonical when built with [`Slug::from_title`].
#[derive(Debug, Display, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slug(String);
impl Slug {
    /// Generates the canonical slug for a title.
    pub fn from_title(title: impl AsRef<str>) -> Self {
        Self(slugify(title))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if re-slugging this value would leave it unchanged.
    pub fn is_canonical(&self) -> bool {
        slugify(&self.0) == self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
impl From<&str> for Slug {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}
impl From<String> for Slug {
    fn from(value: String) -> Self {
        Self(value)
    }
}
impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
impl Deref for Slug {
    type Target = str;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}
impl PartialEq<str> for Slug {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}
impl PartialEq<&str> for Slug {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}
