use super::element::ElementRecord;
use crate::formula::is_element_symbol;
use log::{debug, warn};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::OnceLock;
use thiserror::Error;

const PERIODIC_TABLE_TOML: &str = include_str!("../../resources/periodic-table.toml");

static PERIODIC_TABLE: OnceLock<Vec<ElementRecord>> = OnceLock::new();

/// Errors raised while building an [`ElementDatabase`] from TOML.
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The document is not a valid element table.
    #[error("failed to parse element table: {0}")]
    Parse(#[from] toml::de::Error),

    /// An `[[element]]` entry has an empty symbol.
    #[error("element entry {index} has an empty symbol")]
    EmptySymbol { index: usize },

    /// An `[[element]]` symbol cannot appear in a formula, either because it
    /// is not an uppercase letter followed by lowercase letters or because it
    /// is the reserved charge symbol.
    #[error("element entry {index} has invalid symbol '{symbol}'")]
    InvalidSymbol { index: usize, symbol: String },
}

#[derive(Debug, Deserialize)]
struct ElementTable {
    #[serde(default, rename = "element")]
    elements: Vec<ElementRecord>,
}

/// A keyed, insertion-ordered collection of [`ElementRecord`]s.
///
/// The database is a plain owned value: [`ElementDatabase::periodic_table`]
/// hands out a fresh instance on every call, and callers extend their own
/// copy with [`append`](Self::append) before passing it by reference to
/// parsing and substance construction.
///
/// A database is not internally synchronized. Share it across threads only
/// once it is fully populated.
///
/// # Examples
///
/// ```
/// use formula_forge::{ElementDatabase, ElementRecord};
///
/// let mut elements = ElementDatabase::periodic_table();
/// assert_eq!(elements.len(), 118);
/// assert!(elements.lookup("Aa").is_none());
///
/// elements.append(ElementRecord::new("Aa"));
/// assert_eq!(elements.lookup("Aa").unwrap().atomic_weight, 0.0);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ElementDatabase {
    records: Vec<ElementRecord>,
    index: HashMap<String, usize>,
}

impl ElementDatabase {
    /// Creates an empty database.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a database pre-populated with the 118 elements of the periodic table.
    pub fn periodic_table() -> Self {
        periodic_table_records().iter().cloned().collect()
    }

    /// Builds a database containing only the entries of a TOML element table.
    ///
    /// The document is a list of `[[element]]` tables; see
    /// [`ElementRecord`] for the recognized keys.
    pub fn from_toml(toml: &str) -> Result<Self, DatabaseError> {
        let mut database = Self::new();
        database.extend_from_toml(toml)?;
        Ok(database)
    }

    /// Appends every entry of a TOML element table, overriding existing symbols.
    ///
    /// Nothing is appended if the document fails to parse or validate.
    pub fn extend_from_toml(&mut self, toml: &str) -> Result<(), DatabaseError> {
        let table: ElementTable = toml::from_str(toml)?;
        for (index, record) in table.elements.iter().enumerate() {
            if record.symbol.is_empty() {
                return Err(DatabaseError::EmptySymbol { index });
            }
            if !is_element_symbol(&record.symbol) {
                return Err(DatabaseError::InvalidSymbol {
                    index,
                    symbol: record.symbol.clone(),
                });
            }
        }
        self.extend(table.elements);
        Ok(())
    }

    /// Returns the periodic table, extended with an optional custom TOML table.
    pub fn load(custom_toml: Option<&str>) -> Result<Self, DatabaseError> {
        let mut database = Self::periodic_table();
        if let Some(toml) = custom_toml {
            database.extend_from_toml(toml)?;
        }
        Ok(database)
    }

    /// Adds `record`, replacing any record with the same symbol in place.
    pub fn append(&mut self, record: ElementRecord) {
        match self.index.get(&record.symbol) {
            Some(&slot) => {
                debug!("overriding element record '{}'", record.symbol);
                self.records[slot] = record;
            }
            None => {
                self.index.insert(record.symbol.clone(), self.records.len());
                self.records.push(record);
            }
        }
    }

    pub fn lookup(&self, symbol: &str) -> Option<&ElementRecord> {
        self.index.get(symbol).map(|&slot| &self.records[slot])
    }

    /// Returns the record for `symbol`, or a zero-weight placeholder if the
    /// symbol is unknown.
    ///
    /// An unknown symbol is not an error; it is reported as a warning.
    pub fn resolve(&self, symbol: &str) -> ElementRecord {
        match self.lookup(symbol) {
            Some(record) => record.clone(),
            None => {
                warn!("element '{symbol}' is not in the database; using zero atomic weight");
                ElementRecord::new(symbol)
            }
        }
    }

    #[inline]
    pub fn contains(&self, symbol: &str) -> bool {
        self.index.contains_key(symbol)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ElementRecord> {
        self.records.iter()
    }

    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.records.iter().map(|record| record.symbol.as_str())
    }
}

impl Extend<ElementRecord> for ElementDatabase {
    fn extend<T: IntoIterator<Item = ElementRecord>>(&mut self, iter: T) {
        for record in iter {
            self.append(record);
        }
    }
}

impl FromIterator<ElementRecord> for ElementDatabase {
    fn from_iter<T: IntoIterator<Item = ElementRecord>>(iter: T) -> Self {
        let mut database = Self::new();
        database.extend(iter);
        database
    }
}

impl<'a> IntoIterator for &'a ElementDatabase {
    type Item = &'a ElementRecord;
    type IntoIter = std::slice::Iter<'a, ElementRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn periodic_table_records() -> &'static [ElementRecord] {
    PERIODIC_TABLE.get_or_init(|| {
        toml::from_str::<ElementTable>(PERIODIC_TABLE_TOML)
            .expect("Failed to parse embedded periodic table. This is a library bug.")
            .elements
    })
}
