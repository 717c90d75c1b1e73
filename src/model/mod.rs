//! Reference data consumed by molar-mass computation.
//!
//! - [`element`] – A single element record: symbol, name, atomic number, weight and tags.
//! - [`database`] – Keyed element collection with the embedded periodic table and
//!   TOML loading for custom symbols.
//!
//! Parsing never consults this data; only the resolution of parsed symbols into
//! [`ElementRecord`](element::ElementRecord)s and the aggregation of molar masses do.

pub mod database;
pub mod element;
