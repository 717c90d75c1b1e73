//! Chemical substances.
//!
//! A [`Substance`] wraps a parsed [`Formula`] with identity fields (`uid`,
//! `name`), a free-form type label and a tag set, and caches the elements
//! resolved against an [`ElementDatabase`] together with the resulting molar
//! mass. Values are immutable once built; every `with_*` method consumes the
//! substance and returns an updated one.

use crate::error::Error;
use crate::formula::Formula;
use crate::mass;
use crate::model::database::ElementDatabase;
use crate::model::element::ElementRecord;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeSet;
use std::fmt;

/// Identifier field rejected by [`ValidationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierField {
    Uid,
    Name,
}

impl fmt::Display for IdentifierField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentifierField::Uid => write!(f, "uid"),
            IdentifierField::Name => write!(f, "name"),
        }
    }
}

/// A substance `uid` or `name` contains whitespace.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("substance {field} '{value}' must not contain whitespace")]
pub struct ValidationError {
    field: IdentifierField,
    value: String,
}

impl ValidationError {
    pub fn field(&self) -> IdentifierField {
        self.field
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

fn validate_identifier(field: IdentifierField, value: String) -> Result<String, ValidationError> {
    if value.chars().any(char::is_whitespace) {
        return Err(ValidationError { field, value });
    }
    Ok(value)
}

/// Construction parameters for [`Substance::from_attributes`].
///
/// Deserializable from TOML or any other serde format using the keys
/// `formula`, `name`, `type` and `tags`.
///
/// # Examples
///
/// ```
/// use formula_forge::SubstanceAttributes;
///
/// let attributes = SubstanceAttributes {
///     formula: "Na+".to_string(),
///     name: Some("Na+(aq)".to_string()),
///     kind: "aqueous".to_string(),
///     ..Default::default()
/// };
/// assert!(attributes.tags.is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SubstanceAttributes {
    /// Chemical formula text.
    pub formula: String,
    /// Display name; defaults to the formula text.
    #[serde(default)]
    pub name: Option<String>,
    /// Free-form type label, e.g. `"aqueous"`.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Classification tags.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl SubstanceAttributes {
    pub fn new(formula: impl Into<String>) -> Self {
        Self {
            formula: formula.into(),
            ..Self::default()
        }
    }
}

/// A chemical substance with cached composition and molar mass.
///
/// Equality compares `uid`, `name`, formula, resolved elements and charge;
/// the type label and tags are ignored.
///
/// # Examples
///
/// ```
/// use formula_forge::{ElementDatabase, Substance};
///
/// let elements = ElementDatabase::periodic_table();
///
/// let water = Substance::new("H2O", &elements)?;
/// assert!((water.molar_mass() - 0.01801528).abs() < 1e-12);
/// assert_eq!(water.symbols().collect::<Vec<_>>(), vec!["H", "O"]);
///
/// let iron = Substance::new("Fe+++", &elements)?
///     .with_type("aqueous")
///     .with_tags(["cation", "charged"]);
/// assert_eq!(iron.formula(), "Fe+3");
/// assert_eq!(iron.name(), "Fe+++");
/// assert_eq!(iron.charge(), 3.0);
/// # Ok::<(), formula_forge::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Substance {
    uid: String,
    name: String,
    formula: Formula,
    kind: String,
    tags: BTreeSet<String>,
    elements: Vec<(ElementRecord, f64)>,
    molar_mass: f64,
}

impl Substance {
    /// Builds a substance from formula text, resolving elements in `database`.
    ///
    /// Both `uid` and `name` are set to `formula` as written.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed formulas.
    pub fn new(formula: &str, database: &ElementDatabase) -> Result<Self, Error> {
        Self::from_attributes(SubstanceAttributes::new(formula), database)
    }

    /// Builds a substance from explicit attributes.
    ///
    /// The `uid` is the formula text as written; the name defaults to it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Parse`] for malformed formulas and
    /// [`Error::Validation`] if the name contains whitespace.
    pub fn from_attributes(
        attributes: SubstanceAttributes,
        database: &ElementDatabase,
    ) -> Result<Self, Error> {
        let SubstanceAttributes {
            formula: text,
            name,
            kind,
            tags,
        } = attributes;

        let formula = Formula::parse(&text)?;
        let name = validate_identifier(IdentifierField::Name, name.unwrap_or_else(|| text.clone()))?;
        let uid = validate_identifier(IdentifierField::Uid, text)?;

        let mut substance = Self {
            uid,
            name,
            formula: Formula::default(),
            kind,
            tags,
            elements: Vec::new(),
            molar_mass: 0.0,
        };
        substance.assign_formula(formula, database);
        Ok(substance)
    }

    fn assign_formula(&mut self, formula: Formula, database: &ElementDatabase) {
        self.elements = mass::resolve_elements(&formula, database);
        self.molar_mass = mass::molar_mass(&self.elements);
        self.formula = formula;
        debug!(
            "substance '{}' resolved to {} with molar mass {} kg/mol",
            self.uid, self.formula, self.molar_mass
        );
    }

    /// Returns a copy with a new formula, re-resolved against `database`.
    ///
    /// `uid`, name, type and tags are kept.
    pub fn with_formula(mut self, formula: &str, database: &ElementDatabase) -> Result<Self, Error> {
        let formula = Formula::parse(formula)?;
        self.assign_formula(formula, database);
        Ok(self)
    }

    pub fn with_uid(mut self, uid: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_uid(uid)?;
        Ok(self)
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Result<Self, ValidationError> {
        self.set_name(name)?;
        Ok(self)
    }

    pub fn with_type(mut self, kind: impl Into<String>) -> Self {
        self.kind = kind.into();
        self
    }

    /// Returns a copy whose tag set is replaced by `tags`.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the `uid`, leaving the substance untouched if it is invalid.
    pub fn set_uid(&mut self, uid: impl Into<String>) -> Result<(), ValidationError> {
        self.uid = validate_identifier(IdentifierField::Uid, uid.into())?;
        Ok(())
    }

    /// Replaces the name, leaving the substance untouched if it is invalid.
    pub fn set_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        self.name = validate_identifier(IdentifierField::Name, name.into())?;
        Ok(())
    }

    #[inline]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type label.
    #[inline]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    #[inline]
    pub fn tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    #[inline]
    pub fn formula(&self) -> &Formula {
        &self.formula
    }

    /// Returns the resolved `(element, coefficient)` pairs in formula order.
    #[inline]
    pub fn elements(&self) -> &[(ElementRecord, f64)] {
        &self.elements
    }

    /// Returns the element symbols in formula order, without the charge.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.elements
            .iter()
            .map(|(element, _)| element.symbol.as_str())
    }

    #[inline]
    pub fn charge(&self) -> f64 {
        self.formula.charge()
    }

    /// Returns the molar mass in kg/mol.
    #[inline]
    pub fn molar_mass(&self) -> f64 {
        self.molar_mass
    }

    /// See [`Formula::coefficient`].
    #[inline]
    pub fn coefficient(&self, symbol: &str) -> f64 {
        self.formula.coefficient(symbol)
    }
}

impl PartialEq for Substance {
    fn eq(&self, other: &Self) -> bool {
        self.uid == other.uid
            && self.name == other.name
            && self.formula == other.formula
            && self.elements == other.elements
            && self.charge() == other.charge()
    }
}
