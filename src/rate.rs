//! Rate-table schema and the validated rate row
//!
//! Column names are fixed by the carriers' template and must match exactly.
//! `RateRow` is the typed form of one destination's pricing parameters;
//! building it validates every numeric field up front, so a malformed cell
//! surfaces as a construction error naming the offending column instead of a
//! failure in the middle of the cost formula.

use thiserror::Error;

use crate::table::{CellValue, RawTable};

/// State code column (two-letter UF)
pub const COL_STATE: &str = "UF";
/// City name column
pub const COL_CITY: &str = "CIDADE";

/// Tier price columns, ascending; paired with `pricing::TIER_BOUNDS_KG`
pub const TIER_COLUMNS: [&str; 6] = [
    "Até 10 Kg (R$/CTe)",
    "Até 20 Kg (R$/CTe)",
    "Até 30 Kg (R$/CTe)",
    "Até 50 Kg (R$/CTe)",
    "Até 70 Kg (R$/CTe)",
    "Até 100 Kg (R$/CTe)",
];

pub const COL_EXCESS_PER_KG: &str = "Excedente por KG (R$)";
pub const COL_AD_VALOREM: &str = "Frete Valor (%) - ADValorem";
pub const COL_GRIS_PCT: &str = "GRIS (%)";
pub const COL_GRIS_MIN: &str = "Mínimo de GRIS (R$)";
pub const COL_TOLL_FRACTION: &str = "Fração do pedágio";

/// A pricing field that could not be read from the table
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RowError {
    #[error("required column '{0}' is missing")]
    MissingColumn(String),
    #[error("column '{0}' is empty or not numeric")]
    NotNumeric(String),
}

/// One destination's validated pricing parameters for one carrier
#[derive(Debug, Clone, PartialEq)]
pub struct RateRow {
    /// Base prices per tier, same order as `TIER_COLUMNS`
    pub tier_prices: [f64; 6],
    /// Per-kg rate applied to weight beyond the last tier
    pub excess_per_kg: f64,
    /// AD Valorem freight surcharge, percent of base price
    pub ad_valorem_pct: f64,
    /// GRIS risk surcharge, percent of base price
    pub gris_pct: f64,
    /// Floor for the GRIS surcharge in R$
    pub gris_minimum: f64,
    /// Toll charged per 100 kg of shipment weight
    pub toll_fraction: f64,
}

impl RateRow {
    /// Validating mapper from one raw table row
    pub fn from_table_row(table: &RawTable, row: usize) -> Result<Self, RowError> {
        let mut tier_prices = [0.0; 6];
        for (slot, column) in tier_prices.iter_mut().zip(TIER_COLUMNS) {
            *slot = numeric_field(table, row, column)?;
        }
        Ok(Self {
            tier_prices,
            excess_per_kg: numeric_field(table, row, COL_EXCESS_PER_KG)?,
            ad_valorem_pct: numeric_field(table, row, COL_AD_VALOREM)?,
            gris_pct: numeric_field(table, row, COL_GRIS_PCT)?,
            gris_minimum: numeric_field(table, row, COL_GRIS_MIN)?,
            toll_fraction: numeric_field(table, row, COL_TOLL_FRACTION)?,
        })
    }
}

fn numeric_field(table: &RawTable, row: usize, column: &str) -> Result<f64, RowError> {
    if !table.has_column(column) {
        return Err(RowError::MissingColumn(column.to_string()));
    }
    table
        .cell(row, column)
        .and_then(CellValue::as_number)
        .ok_or_else(|| RowError::NotNumeric(column.to_string()))
}
