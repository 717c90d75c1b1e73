//! Chemical formula parsing.
//!
//! A [`Formula`] is the structured form of strings such as `"H2O"`,
//! `"Ca(CO3)2"`, `"Fe+++"` or `"HCO3-"`: an ordered list of element symbols
//! with their stoichiometric coefficients, plus a net electric charge.
//!
//! The charge is held in its own field and never mixed into the element list.
//! Callers that expect the charge as a pseudo-element can query the reserved
//! symbol [`CHARGE_SYMBOL`] through [`Formula::coefficient`] or use
//! [`Formula::elements_with_charge`].
//!
//! # Canonical text
//!
//! The element portion of the input is kept verbatim. The charge suffix is
//! rewritten from the resolved charge: a bare sign for ±1, a signed integer
//! otherwise, nothing for zero. `"CO3--"` becomes `"CO3-2"`, `"Na+1"` becomes
//! `"Na+"` and `"Fe-0"` becomes `"Fe"`. Every notation of the same charge
//! therefore yields an equal formula, and parsing the canonical text always
//! yields an identical one.

mod charge;
mod error;
mod parser;
mod scanner;

pub use error::ParseError;

use crate::mass;
use crate::model::database::ElementDatabase;
use std::fmt;
use std::str::FromStr;

/// Reserved pseudo-symbol under which the charge is exposed.
pub const CHARGE_SYMBOL: &str = "Z";

/// A parsed chemical formula.
///
/// # Examples
///
/// ```
/// use formula_forge::Formula;
///
/// let calcite = Formula::parse("Ca(CO3)")?;
/// assert_eq!(calcite.coefficient("Ca"), 1.0);
/// assert_eq!(calcite.coefficient("O"), 3.0);
/// assert!(calcite.is_neutral());
///
/// let carbonate = Formula::parse("CO3--")?;
/// assert_eq!(carbonate.charge(), -2.0);
/// assert_eq!(carbonate.coefficient("Z"), -2.0);
/// assert_eq!(carbonate, "CO3-2");
/// # Ok::<(), formula_forge::ParseError>(())
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Formula {
    text: String,
    elements: Vec<(String, f64)>,
    charge: f64,
}

impl Formula {
    /// Parses a formula string.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] locating the first malformed construct.
    pub fn parse(formula: &str) -> Result<Self, ParseError> {
        let parsed = parser::Parser::new(formula).parse()?;
        Ok(Self {
            text: format!("{}{}", parsed.elemental, parsed.charge.text),
            elements: parsed.composition,
            charge: parsed.charge.value,
        })
    }

    /// Returns the canonical formula text.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Returns the `(symbol, coefficient)` pairs in order of first occurrence.
    ///
    /// The charge pseudo-symbol is never part of this list.
    #[inline]
    pub fn elements(&self) -> &[(String, f64)] {
        &self.elements
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().map(|(symbol, _)| symbol.as_str())
    }

    pub fn coefficients(&self) -> impl Iterator<Item = f64> {
        self.elements.iter().map(|(_, coefficient)| *coefficient)
    }

    /// Returns the coefficient of `symbol`.
    ///
    /// Querying [`CHARGE_SYMBOL`] returns the charge. Symbols that do not
    /// appear in the formula have a coefficient of zero.
    pub fn coefficient(&self, symbol: &str) -> f64 {
        if symbol == CHARGE_SYMBOL {
            return self.charge;
        }
        self.elements
            .iter()
            .find(|(s, _)| s == symbol)
            .map_or(0.0, |(_, coefficient)| *coefficient)
    }

    /// Returns the net electric charge.
    #[inline]
    pub fn charge(&self) -> f64 {
        self.charge
    }

    #[inline]
    pub fn is_neutral(&self) -> bool {
        self.charge == 0.0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the element list with the charge appended as a [`CHARGE_SYMBOL`]
    /// entry when the formula is charged.
    pub fn elements_with_charge(&self) -> Vec<(String, f64)> {
        let mut elements = self.elements.clone();
        if !self.is_neutral() {
            elements.push((CHARGE_SYMBOL.to_string(), self.charge));
        }
        elements
    }

    /// Checks whether `other` describes the same composition and charge,
    /// ignoring element order and charge notation.
    ///
    /// ```
    /// use formula_forge::Formula;
    ///
    /// let a = Formula::parse("Ca(CO3)2")?;
    /// let b = Formula::parse("CaO6C2")?;
    /// assert!(a.is_equivalent(&b));
    /// assert_ne!(a, b);
    /// # Ok::<(), formula_forge::ParseError>(())
    /// ```
    pub fn is_equivalent(&self, other: &Formula) -> bool {
        self.charge == other.charge
            && self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .all(|(symbol, coefficient)| other.coefficient(symbol) == *coefficient)
    }

    /// Computes the molar mass in kg/mol against `database`.
    ///
    /// Symbols missing from the database contribute nothing.
    pub fn molar_mass(&self, database: &ElementDatabase) -> f64 {
        mass::molar_mass(&mass::resolve_elements(self, database))
    }
}

/// Checks whether `symbol` can appear as an element in a formula: an ASCII
/// uppercase letter followed by lowercase letters, other than
/// [`CHARGE_SYMBOL`].
pub(crate) fn is_element_symbol(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    matches!(chars.next(), Some(c) if c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_lowercase())
        && symbol != CHARGE_SYMBOL
}

/// Parses a formula string into a [`Formula`].
pub fn parse(formula: &str) -> Result<Formula, ParseError> {
    Formula::parse(formula)
}

impl FromStr for Formula {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl AsRef<str> for Formula {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl PartialEq<str> for Formula {
    fn eq(&self, other: &str) -> bool {
        self.text == other
    }
}

impl PartialEq<&str> for Formula {
    fn eq(&self, other: &&str) -> bool {
        self.text == *other
    }
}
