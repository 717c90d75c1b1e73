use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;

/// Reference data for a single chemical element.
///
/// Records are owned by an [`ElementDatabase`](super::database::ElementDatabase).
/// Only the symbol is mandatory; custom or synthetic symbols start out with a
/// zero atomic weight so they can take part in formulas without contributing
/// to molar masses.
///
/// # Examples
///
/// ```
/// use formula_forge::ElementRecord;
///
/// let custom = ElementRecord::new("Aa");
/// assert_eq!(custom.symbol, "Aa");
/// assert_eq!(custom.atomic_weight, 0.0);
///
/// let heavy = ElementRecord::new("D")
///     .with_name("Deuterium")
///     .with_atomic_number(1)
///     .with_atomic_weight(0.0020141)
///     .with_tags(["isotope"]);
/// assert!(heavy.has_tag("isotope"));
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ElementRecord {
    /// Element symbol, e.g. `"Fe"`.
    pub symbol: String,
    /// Full element name; empty for custom symbols.
    #[serde(default)]
    pub name: String,
    /// Atomic number; zero for custom symbols.
    #[serde(default)]
    pub atomic_number: u32,
    /// Standard atomic weight in kg/mol.
    #[serde(default)]
    pub atomic_weight: f64,
    /// Free-form classification labels.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl ElementRecord {
    /// Creates a zero-weight record carrying only `symbol`.
    pub fn new(symbol: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            name: String::new(),
            atomic_number: 0,
            atomic_weight: 0.0,
            tags: BTreeSet::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_atomic_number(mut self, atomic_number: u32) -> Self {
        self.atomic_number = atomic_number;
        self
    }

    /// Sets the atomic weight in kg/mol.
    pub fn with_atomic_weight(mut self, atomic_weight: f64) -> Self {
        self.atomic_weight = atomic_weight;
        self
    }

    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    #[inline]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }
}

impl fmt::Display for ElementRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.symbol)
    }
}
