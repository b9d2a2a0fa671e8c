//! JSON report formatting
//!
//! One self-contained document per run: the query, the ranked results, the
//! cheapest carrier, and the per-carrier notices that kept a carrier out of
//! the ranking.

use std::fs::File;
use std::path::Path;

use serde::Serialize;

use crate::rank::{CostResult, Ranking};
use crate::Result;

/// Serializable view of one ranking run
#[derive(Debug, Serialize)]
pub struct JsonReport<'a> {
    pub state: &'a str,
    pub city: &'a str,
    pub weight_kg: f64,
    pub results: &'a [CostResult],
    pub best: Option<&'a CostResult>,
    pub notices: Vec<String>,
}

impl<'a> JsonReport<'a> {
    pub fn new(ranking: &'a Ranking, state: &'a str, city: &'a str, weight_kg: f64) -> Self {
        Self {
            state,
            city,
            weight_kg,
            results: &ranking.results,
            best: ranking.best(),
            notices: ranking.notices.iter().map(|n| n.to_string()).collect(),
        }
    }
}

/// Write the report as pretty-printed JSON
pub fn write_report(path: &Path, report: &JsonReport<'_>) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, report)?;
    Ok(())
}
