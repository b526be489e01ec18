//! Specification Ranking
//!
//! Decides which phone(s) "win" a specification row. Values are raw CMS
//! strings such as `"8GB"`, `"4000mAh"` or `"200g"`; the first decimal number
//! in each is taken as its magnitude. A value without a number is not a
//! losing value, it simply takes no part in the ranking.

use crate::consts::MAGNITUDE_REGEX;
use crate::models::{Polarity, Specification};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// Default text shown for a missing specification value.
pub const NOT_AVAILABLE: &str = "N/A";

/// Extracts the first decimal number from a specification value.
///
/// ```rust
/// use phonecmp_compare::magnitude;
/// assert_eq!(magnitude("4000mAh"), Some(4000.0));
/// assert_eq!(magnitude("6.7\" OLED, 120Hz"), Some(6.7));
/// assert_eq!(magnitude("N/A"), None);
/// ```
pub fn magnitude(value: impl AsRef<str>) -> Option<f64> {
    MAGNITUDE_REGEX.find(value.as_ref()).and_then(|m| m.as_str().parse().ok())
}

/// What to show in a comparison cell.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Cell {
    /// The raw value, exactly as supplied.
    Value(String),
    /// The phone has no value for this specification.
    NotAvailable,
}
impl Cell {
    fn new(value: Option<&str>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Cell::Value(v.to_string()),
            _ => Cell::NotAvailable,
        }
    }

    /// The cell text, using `placeholder` for missing values.
    pub fn display_or<'a>(&'a self, placeholder: &'a str) -> &'a str {
        match self {
            Cell::Value(value) => value,
            Cell::NotAvailable => placeholder,
        }
    }

    pub fn as_value(&self) -> Option<&str> {
        match self {
            Cell::Value(value) => Some(value),
            Cell::NotAvailable => None,
        }
    }
}
impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.display_or(NOT_AVAILABLE))
    }
}

/// One phone's outcome in a specification row.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Ranked {
    pub winner: bool,
    pub cell: Cell,
}

/// Ranks one value per phone for the given specification key.
///
/// The key's [`Polarity`] comes from the [`SPECIFICATIONS`](crate::SPECIFICATIONS)
/// table; keys not in the table never produce a winner.
pub fn rank<S: AsRef<str>>(key: impl AsRef<str>, values: impl IntoIterator<Item = Option<S>>) -> Vec<Ranked> {
    rank_with(Specification::polarity_of(key), values)
}

/// Ranks one value per phone with an explicit polarity.
///
/// - At least two values need a magnitude before anything can win.
/// - Every phone matching the best magnitude wins (ties are allowed).
/// - Phones without a magnitude never win.
pub fn rank_with<S: AsRef<str>>(polarity: Polarity, values: impl IntoIterator<Item = Option<S>>) -> Vec<Ranked> {
    let values: Vec<Option<S>> = values.into_iter().collect();
    let magnitudes: Vec<Option<f64>> = values.iter().map(|v| v.as_ref().and_then(magnitude)).collect();
    let eligible: Vec<f64> = magnitudes.iter().flatten().copied().collect();
    let best = match eligible.as_slice() {
        [first, rest @ ..] if !rest.is_empty() => rest.iter().try_fold(*first, |b, m| polarity.best(b, *m)),
        _ => None,
    };
    values
        .iter()
        .zip(magnitudes)
        .map(|(value, m)| Ranked {
            winner: best.is_some() && m == best,
            cell: Cell::new(value.as_ref().map(|v| v.as_ref())),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn winners(ranked: &[Ranked]) -> Vec<bool> {
        ranked.iter().map(|r| r.winner).collect()
    }

    #[rstest]
    #[case("8GB", Some(8.0))]
    #[case("4000mAh", Some(4000.0))]
    #[case("6.7 inches", Some(6.7))]
    #[case("50MP + 12MP", Some(50.0))]
    #[case("1,000 nits", Some(1.0))]
    #[case("Approx. 199.5g", Some(199.5))]
    #[case("5.", Some(5.0))]
    #[case(".5", Some(5.0))]
    #[case("8\u{0663}GB", Some(8.0))]
    #[case("\u{0668} / 8GB", Some(8.0))]
    #[case("\u{FF18}GB", None)]
    #[case("N/A", None)]
    #[case("", None)]
    fn test_magnitude(#[case] value: &str, #[case] expected: Option<f64>) {
        assert_eq!(magnitude(value), expected);
    }

    #[test]
    fn test_ties_all_win() {
        let ranked = rank("ram", [Some("8GB"), Some("8GB"), Some("4GB")]);
        assert_eq!(winners(&ranked), [true, true, false]);
    }

    #[test]
    fn test_lower_is_better() {
        let ranked = rank("weight", [Some("150g"), Some("200g")]);
        assert_eq!(winners(&ranked), [true, false]);
    }

    #[test]
    fn test_higher_is_better() {
        let ranked = rank("battery", [Some("4000mAh"), Some("5000 mAh"), Some("4500mAh")]);
        assert_eq!(winners(&ranked), [false, true, false]);
    }

    #[test]
    fn test_fewer_than_two_eligible() {
        let ranked = rank("ram", [Some(""), Some("N/A"), Some("8GB")]);
        assert_eq!(winners(&ranked), [false, false, false]);
        assert_eq!(ranked[0].cell, Cell::NotAvailable);
        assert_eq!(ranked[1].cell, Cell::Value("N/A".to_string()));
        assert_eq!(ranked[2].cell, Cell::Value("8GB".to_string()));
    }

    #[test]
    fn test_ineligible_never_wins() {
        let ranked = rank("ram", [None, Some("12GB"), Some("Unknown"), Some("8GB")]);
        assert_eq!(winners(&ranked), [false, true, false, false]);
        assert_eq!(ranked[0].cell, Cell::NotAvailable);
    }

    #[test]
    fn test_lower_is_better_ignores_missing() {
        // A missing weight must not count as zero and "win".
        let ranked = rank("weight", [Some(""), Some("221g"), Some("187 g")]);
        assert_eq!(winners(&ranked), [false, false, true]);
    }

    #[rstest]
    #[case("processor")]
    #[case("display")]
    #[case("not_a_real_spec")]
    fn test_not_comparable(#[case] key: &str) {
        let ranked = rank(key, [Some("6.1\""), Some("6.7\"")]);
        assert_eq!(winners(&ranked), [false, false]);
    }

    #[test]
    fn test_values_pass_through_unchanged() {
        let ranked = rank("storage", [Some(" 256 GB "), Some("128GB")]);
        assert_eq!(ranked[0].cell, Cell::Value(" 256 GB ".to_string()));
        assert!(ranked[0].winner);
    }

    #[test]
    fn test_non_ascii_digits_do_not_hide_magnitude() {
        let ranked = rank("ram", [Some("8\u{0663}GB"), Some("4GB")]);
        assert_eq!(winners(&ranked), [true, false]);
    }

    #[test]
    fn test_whitespace_value_passes_through() {
        let ranked = rank("ram", [Some("   "), Some("12GB"), Some("8GB")]);
        assert_eq!(ranked[0].cell, Cell::Value("   ".to_string()));
        assert_eq!(winners(&ranked), [false, true, false]);
    }

    #[test]
    fn test_empty_input() {
        assert!(rank("ram", Vec::<Option<&str>>::new()).is_empty());
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::NotAvailable.to_string(), "N/A");
        assert_eq!(Cell::NotAvailable.display_or("-"), "-");
        assert_eq!(Cell::Value("8GB".to_string()).display_or("-"), "8GB");
    }
}
