//! Crate-level error type.
//!
//! Each concern has its own error: [`ParseError`] for formula syntax,
//! [`ValidationError`] for substance identifiers and [`DatabaseError`] for
//! element tables. Operations that can fail for more than one reason return
//! this enum, which converts from all three with `?`.

use crate::formula::ParseError;
use crate::model::database::DatabaseError;
use crate::substance::ValidationError;
use thiserror::Error;

/// Errors returned by substance construction and database loading.
#[derive(Debug, Error)]
pub enum Error {
    /// The formula text is malformed.
    #[error("invalid chemical formula: {0}")]
    Parse(#[from] ParseError),

    /// A substance identifier violates the naming rule.
    #[error("invalid substance identifier: {0}")]
    Validation(#[from] ValidationError),

    /// An element table could not be loaded.
    #[error("invalid element database: {0}")]
    Database(#[from] DatabaseError),
}
