use regex::Regex;
use std::sync::LazyLock;

macro_rules! regex {
    ($name:ident, $regex:expr) => {
        pub(crate) static $name: LazyLock<Regex> = LazyLock::new(|| Regex::new($regex).unwrap());
    };
}

/// Path prefix for comparison pages.
pub const PATH_PREFIX: &str = "/compare/";
/// Literal separator between slugs in a comparison path.
pub const SEPARATOR: &str = "-vs-";

// Everything a slug is allowed to keep before whitespace becomes hyphens.
regex!(SLUG_DISALLOWED_REGEX, r"[^a-z0-9\s-]");
regex!(WHITESPACE_RUN_REGEX, r"\s+");
regex!(HYPHEN_RUN_REGEX, r"-+");
// First ASCII decimal number in a specification value, e.g. "6.7" in `6.7" OLED`.
regex!(MAGNITUDE_REGEX, r"[0-9]+(?:\.[0-9]+)?");
