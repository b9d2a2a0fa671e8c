//! Fretecomp - carrier freight cost comparator
//!
//! Fretecomp reads several carriers' freight-rate spreadsheets, looks up the
//! rate row for a chosen destination (UF + city), applies the carrier's
//! pricing formula to a shipment weight, and ranks the carriers by total cost.
//!
//! # Architecture
//!
//! - **Pluggable ingestors**: Excel/ODS via calamine, delimited text via csv
//! - **Locality index**: sorted state/city selector sets derived from the data
//! - **Cost calculator**: pure tiered-rate formula with surcharges and floors
//! - **Ranking**: per-carrier notices for misses/failures, ascending sort

pub mod config;
pub mod ingest;
pub mod locality;
pub mod output;
pub mod pricing;
pub mod rank;
pub mod rate;
pub mod table;

// Re-export commonly used types
pub use config::Config;
pub use rank::Ranking;

/// Result type used throughout fretecomp
pub type Result<T> = anyhow::Result<T>;
