//! Element resolution and molar-mass aggregation.
//!
//! Resolution turns the symbols of a [`Formula`] into [`ElementRecord`]s,
//! preserving the formula's element order. Aggregation folds
//! `coefficient × atomic weight` over that list, left to right, starting from
//! `0.0`. The charge is never part of either step.

use crate::formula::Formula;
use crate::model::database::ElementDatabase;
use crate::model::element::ElementRecord;

/// Resolves every element of `formula` against `database`.
///
/// Symbols missing from the database resolve to zero-weight placeholders.
pub fn resolve_elements(formula: &Formula, database: &ElementDatabase) -> Vec<(ElementRecord, f64)> {
    formula
        .elements()
        .iter()
        .map(|(symbol, coefficient)| (database.resolve(symbol), *coefficient))
        .collect()
}

/// Sums `coefficient × atomic weight` over `elements`, in kg/mol.
pub fn molar_mass(elements: &[(ElementRecord, f64)]) -> f64 {
    elements
        .iter()
        .fold(0.0, |total, (element, coefficient)| {
            total + coefficient * element.atomic_weight
        })
}
