//! A pure Rust library for parsing chemical formulas and computing the molar
//! masses of chemical substances.
//!
//! It turns formula strings such as `"H2O"`, `"Ca(CO3)2"`, `"Fe+++"` or
//! `"HCO3-"` into an ordered element composition plus a net charge, resolves
//! the elements against a database of atomic weights, and wraps the result
//! into named, typed and tagged substances.
//!
//! # Features
//!
//! - **Formula parsing** — Nested parenthesized groups, integer and
//!   fractional coefficients, and three charge notations (`+`, `---`, `-2`)
//! - **Element database** — The 118 elements of the periodic table embedded
//!   as data, extensible with custom symbols in code or from TOML
//! - **Molar masses** — Coefficient-weighted sums in kg/mol; unknown symbols
//!   contribute nothing instead of failing
//! - **Substances** — Immutable records with validated identifiers and
//!   value-semantics updates
//!
//! # Quick Start
//!
//! ```
//! use formula_forge::{ElementDatabase, ElementRecord, Formula, Substance, SubstanceAttributes};
//!
//! // Formulas parse independently of any element data
//! let gypsum = Formula::parse("Ca(SO4)(H2O)2")?;
//! assert_eq!(gypsum.coefficient("O"), 6.0);
//! assert_eq!(gypsum.coefficient("H"), 4.0);
//!
//! // Repeated signs are rewritten as a signed integer
//! let carbonate = Formula::parse("CO3--")?;
//! assert_eq!(carbonate, "CO3-2");
//! assert_eq!(carbonate.charge(), -2.0);
//!
//! // Substances resolve their elements against an explicit database
//! let mut elements = ElementDatabase::periodic_table();
//! let sodium = Substance::from_attributes(
//!     SubstanceAttributes {
//!         formula: "Na+".to_string(),
//!         name: Some("Na+(aq)".to_string()),
//!         kind: "aqueous".to_string(),
//!         tags: ["cation".to_string()].into(),
//!     },
//!     &elements,
//! )?;
//! assert_eq!(sodium.charge(), 1.0);
//! assert!((sodium.molar_mass() - 0.022989769).abs() < 1e-12);
//!
//! // Custom symbols take part in formulas with zero weight
//! elements.append(ElementRecord::new("Aa"));
//! let custom = Substance::new("AaH2", &elements)?;
//! assert!((custom.molar_mass() - 2.0 * 0.00100794).abs() < 1e-12);
//! # Ok::<(), formula_forge::Error>(())
//! ```
//!
//! # Module Organization
//!
//! - [`formula`] — Formula grammar, charge notation and the [`Formula`] type
//! - [`mass`] — Element resolution and molar-mass aggregation
//!
//! # Data Types
//!
//! - [`Formula`] — Ordered element composition with net charge
//! - [`ElementRecord`] — Symbol, name, atomic number and atomic weight
//! - [`ElementDatabase`] — Keyed collection of element records
//! - [`Substance`] — Named, typed and tagged formula with cached molar mass
//! - [`SubstanceAttributes`] — Construction parameters for substances
//!
//! # Errors
//!
//! - [`ParseError`] — Malformed formula syntax, with position
//! - [`ValidationError`] — Whitespace in a substance `uid` or name
//! - [`DatabaseError`] — Malformed TOML element table
//! - [`Error`] — Any of the above
//!
//! # Logging
//!
//! Diagnostics go through the [`log`](https://docs.rs/log) facade. Resolving a
//! symbol that is absent from the database emits a warning; nothing else is
//! reported above the debug level.

mod error;
mod model;
mod substance;

pub mod formula;
pub mod mass;

pub use error::Error;

pub use formula::{CHARGE_SYMBOL, Formula, ParseError, parse};

pub use model::database::{DatabaseError, ElementDatabase};
pub use model::element::ElementRecord;

pub use substance::{IdentifierField, Substance, SubstanceAttributes, ValidationError};
