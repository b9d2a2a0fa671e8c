//! Runtime configuration assembled from the command line

pub mod cli;
pub mod validator;

use std::path::PathBuf;

/// Smallest weight a quote can be computed for, in kg
pub const MIN_WEIGHT_KG: f64 = 0.1;
/// Default shipment weight in kg
pub const DEFAULT_WEIGHT_KG: f64 = 50.0;
/// Default 1-based header row in the carriers' template
pub const DEFAULT_HEADER_ROW: usize = 11;

/// Fully resolved run configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Rate files to ingest
    pub inputs: Vec<PathBuf>,
    /// 1-based row holding the column names
    pub header_row: usize,
    /// Shipment weight in kg
    pub weight_kg: f64,
    pub action: Action,
    pub output: OutputConfig,
}

/// What the run should do once the files are ingested
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Print the distinct states found across all tables
    ListStates,
    /// Print the distinct cities of one state
    ListCities { state: String },
    /// Rank carriers for one destination
    Rank { state: String, city: String },
}

/// Optional report destinations alongside the console output
#[derive(Debug, Clone, Default)]
pub struct OutputConfig {
    pub json_output: Option<PathBuf>,
    pub csv_output: Option<PathBuf>,
}
