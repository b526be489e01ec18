use std::fmt::{Display, Formatter, Result as FmtResult};

/// Which direction of a numeric specification value counts as "better".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Polarity {
    /// Values are shown side-by-side, but nothing wins (e.g. processor name).
    #[default]
    NotComparable,
    /// Bigger numbers win (e.g. RAM, battery capacity).
    HigherIsBetter,
    /// Smaller numbers win (e.g. weight).
    LowerIsBetter,
}
impl Polarity {
    /// Picks the better of two magnitudes, or `None` when this specification
    /// can't be ranked.
    pub fn best(&self, a: f64, b: f64) -> Option<f64> {
        match self {
            Polarity::NotComparable => None,
            Polarity::HigherIsBetter => Some(a.max(b)),
            Polarity::LowerIsBetter => Some(a.min(b)),
        }
    }

    pub fn is_comparable(&self) -> bool {
        !matches!(self, Polarity::NotComparable)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Polarity::NotComparable => "not comparable",
            Polarity::HigherIsBetter => "higher is better",
            Polarity::LowerIsBetter => "lower is better",
        }
    }
}
impl Display for Polarity {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

/// A row in the comparison table: which specification key to read from each
/// phone, what to call it, and how to rank it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Specification {
    pub key: &'static str,
    pub label: &'static str,
    pub polarity: Polarity,
}
impl Specification {
    const fn new(key: &'static str, label: &'static str, polarity: Polarity) -> Self {
        Self { key, label, polarity }
    }

    /// Finds the descriptor for a specification key.
    pub fn lookup(key: impl AsRef<str>) -> Option<&'static Specification> {
        let key = key.as_ref();
        SPECIFICATIONS.iter().find(|spec| spec.key == key)
    }

    /// Polarity for a specification key; unknown keys are never ranked.
    pub fn polarity_of(key: impl AsRef<str>) -> Polarity {
        Self::lookup(key).map(|spec| spec.polarity).unwrap_or_default()
    }
}
impl Display for Specification {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.label)
    }
}

/// Every specification shown on a comparison page, in display order.
pub const SPECIFICATIONS: &[Specification] = &[
    Specification::new("display", "Display", Polarity::NotComparable),
    Specification::new("processor", "Processor", Polarity::NotComparable),
    Specification::new("ram", "RAM", Polarity::HigherIsBetter),
    Specification::new("storage", "Storage", Polarity::HigherIsBetter),
    Specification::new("battery", "Battery", Polarity::HigherIsBetter),
    Specification::new("main_camera", "Main Camera", Polarity::HigherIsBetter),
    Specification::new("front_camera", "Front Camera", Polarity::HigherIsBetter),
    Specification::new("refresh_rate", "Refresh Rate", Polarity::HigherIsBetter),
    Specification::new("charging", "Charging", Polarity::HigherIsBetter),
    Specification::new("weight", "Weight", Polarity::LowerIsBetter),
    Specification::new("operating_system", "Operating System", Polarity::NotComparable),
    Specification::new("dimensions", "Dimensions", Polarity::NotComparable),
];
