//! Carrier ranking for a chosen destination and weight
//!
//! One bad carrier never aborts the run: a carrier without a matching row, or
//! with a malformed rate row, turns into a notice and the ranking continues
//! with the rest.

use std::fmt;

use serde::Serialize;

use crate::pricing::compute_cost;
use crate::rate::{RateRow, RowError, COL_CITY, COL_STATE};
use crate::table::{CarrierTable, CellValue, RawTable};

/// One carrier's computed total cost
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostResult {
    pub carrier: String,
    pub total_cost: f64,
}

/// Per-carrier outcome that did not produce a cost
#[derive(Debug, Clone, PartialEq)]
pub enum CarrierNotice {
    /// No row matched the chosen (UF, CIDADE)
    DestinationNotFound { carrier: String },
    /// The matching row failed numeric validation
    Computation { carrier: String, error: RowError },
}

impl CarrierNotice {
    /// Computation failures are errors; a missing destination is a warning
    pub fn is_error(&self) -> bool {
        matches!(self, CarrierNotice::Computation { .. })
    }
}

impl fmt::Display for CarrierNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarrierNotice::DestinationNotFound { carrier } => {
                write!(f, "destination not found in {carrier}")
            }
            CarrierNotice::Computation { carrier, error } => {
                write!(f, "cannot compute cost for {carrier}: {error}")
            }
        }
    }
}

/// Result of ranking all carriers for one destination and weight
#[derive(Debug, Clone, Default)]
pub struct Ranking {
    /// Successful results, ascending by total cost
    pub results: Vec<CostResult>,
    pub notices: Vec<CarrierNotice>,
}

impl Ranking {
    /// The cheapest carrier, if any result exists
    pub fn best(&self) -> Option<&CostResult> {
        self.results.first()
    }

    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

/// Rank every carrier for the chosen destination, ascending by total cost.
/// Equal costs are ordered by carrier name so the output does not depend on
/// the order the files were passed in.
pub fn rank(tables: &[CarrierTable], state: &str, city: &str, weight_kg: f64) -> Ranking {
    let mut ranking = Ranking::default();

    for carrier in tables {
        let Some(row) = find_destination_row(&carrier.table, state, city) else {
            ranking.notices.push(CarrierNotice::DestinationNotFound {
                carrier: carrier.carrier.clone(),
            });
            continue;
        };
        match RateRow::from_table_row(&carrier.table, row) {
            Ok(rate) => ranking.results.push(CostResult {
                carrier: carrier.carrier.clone(),
                total_cost: compute_cost(&rate, weight_kg),
            }),
            Err(error) => ranking.notices.push(CarrierNotice::Computation {
                carrier: carrier.carrier.clone(),
                error,
            }),
        }
    }

    ranking.results.sort_by(|a, b| {
        a.total_cost
            .total_cmp(&b.total_cost)
            .then_with(|| a.carrier.cmp(&b.carrier))
    });
    ranking
}

/// First row matching both columns; duplicates beyond the first are ignored
fn find_destination_row(table: &RawTable, state: &str, city: &str) -> Option<usize> {
    let state_col = table.column_index(COL_STATE)?;
    let city_col = table.column_index(COL_CITY)?;
    (0..table.row_count()).find(|&row| {
        table.cell_at(row, state_col).and_then(CellValue::text) == Some(state)
            && table.cell_at(row, city_col).and_then(CellValue::text) == Some(city)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rate::{
        COL_AD_VALOREM, COL_EXCESS_PER_KG, COL_GRIS_MIN, COL_GRIS_PCT, COL_TOLL_FRACTION,
        TIER_COLUMNS,
    };

    fn headers() -> Vec<String> {
        let mut headers = vec![COL_STATE.to_string(), COL_CITY.to_string()];
        headers.extend(TIER_COLUMNS.iter().map(|c| c.to_string()));
        headers.extend(
            [
                COL_EXCESS_PER_KG,
                COL_AD_VALOREM,
                COL_GRIS_PCT,
                COL_GRIS_MIN,
                COL_TOLL_FRACTION,
            ]
            .iter()
            .map(|c| c.to_string()),
        );
        headers
    }

    /// A destination row where every tier price is `base`, with no surcharges
    /// except a 5.00 GRIS floor, so the total is base + 5.00.
    fn row(state: &str, city: &str, base: f64) -> Vec<CellValue> {
        let mut row = vec![
            CellValue::Text(state.to_string()),
            CellValue::Text(city.to_string()),
        ];
        row.extend(std::iter::repeat(CellValue::Number(base)).take(TIER_COLUMNS.len()));
        // excess, ad valorem, gris %, gris minimum, toll fraction
        row.extend([
            CellValue::Number(0.0),
            CellValue::Number(0.0),
            CellValue::Number(0.0),
            CellValue::Number(5.0),
            CellValue::Number(0.0),
        ]);
        row
    }

    fn carrier(name: &str, rows: Vec<Vec<CellValue>>) -> CarrierTable {
        let mut table = RawTable::new(headers());
        for row in rows {
            table.push_row(row);
        }
        CarrierTable {
            carrier: name.to_string(),
            table,
        }
    }

    #[test]
    fn test_results_sorted_ascending() {
        let tables = vec![
            carrier("expensive.csv", vec![row("SP", "SANTOS", 30.0)]),
            carrier("cheap.csv", vec![row("SP", "SANTOS", 10.0)]),
            carrier("mid.csv", vec![row("SP", "SANTOS", 20.0)]),
        ];
        let ranking = rank(&tables, "SP", "SANTOS", 50.0);

        let costs: Vec<_> = ranking.results.iter().map(|r| r.total_cost).collect();
        assert_eq!(costs, vec![15.0, 25.0, 35.0]);
        assert_eq!(ranking.best().unwrap().carrier, "cheap.csv");
        for pair in ranking.results.windows(2) {
            assert!(pair[0].total_cost <= pair[1].total_cost);
        }
    }

    #[test]
    fn test_missing_destination_becomes_warning() {
        let tables = vec![
            carrier("a.csv", vec![row("RJ", "NITEROI", 10.0)]),
            carrier("b.csv", vec![row("SP", "SANTOS", 10.0)]),
        ];
        let ranking = rank(&tables, "SP", "SANTOS", 50.0);

        assert_eq!(ranking.results.len(), 1);
        assert_eq!(ranking.results[0].carrier, "b.csv");
        assert_eq!(
            ranking.notices,
            vec![CarrierNotice::DestinationNotFound {
                carrier: "a.csv".to_string()
            }]
        );
        assert!(!ranking.notices[0].is_error());
    }

    #[test]
    fn test_malformed_row_becomes_error_notice() {
        let mut bad = row("SP", "SANTOS", 10.0);
        bad[2] = CellValue::Text("??".to_string()); // first tier price
        let tables = vec![
            carrier("bad.csv", vec![bad]),
            carrier("good.csv", vec![row("SP", "SANTOS", 10.0)]),
        ];
        let ranking = rank(&tables, "SP", "SANTOS", 50.0);

        assert_eq!(ranking.results.len(), 1);
        assert_eq!(ranking.results[0].carrier, "good.csv");
        assert_eq!(ranking.notices.len(), 1);
        assert!(ranking.notices[0].is_error());
        assert!(ranking.notices[0].to_string().contains("bad.csv"));
        assert!(ranking.notices[0].to_string().contains(TIER_COLUMNS[0]));
    }

    #[test]
    fn test_duplicate_destination_rows_first_wins() {
        let tables = vec![carrier(
            "dup.csv",
            vec![row("SP", "SANTOS", 10.0), row("SP", "SANTOS", 99.0)],
        )];
        let ranking = rank(&tables, "SP", "SANTOS", 50.0);
        assert_eq!(ranking.results[0].total_cost, 15.0);
    }

    #[test]
    fn test_equal_costs_ordered_by_carrier_name() {
        let tables = vec![
            carrier("zeta.csv", vec![row("SP", "SANTOS", 10.0)]),
            carrier("alfa.csv", vec![row("SP", "SANTOS", 10.0)]),
        ];
        let ranking = rank(&tables, "SP", "SANTOS", 50.0);
        let names: Vec<_> = ranking.results.iter().map(|r| r.carrier.as_str()).collect();
        assert_eq!(names, vec!["alfa.csv", "zeta.csv"]);
    }

    #[test]
    fn test_rank_is_deterministic() {
        let tables = vec![
            carrier("a.csv", vec![row("SP", "SANTOS", 12.0)]),
            carrier("b.csv", vec![row("SP", "SANTOS", 11.0)]),
        ];
        let first = rank(&tables, "SP", "SANTOS", 50.0);
        let second = rank(&tables, "SP", "SANTOS", 50.0);
        assert_eq!(first.results, second.results);
        assert_eq!(first.notices, second.notices);
    }

    #[test]
    fn test_no_carriers_yields_empty_ranking() {
        let ranking = rank(&[], "SP", "SANTOS", 50.0);
        assert!(ranking.is_empty());
        assert!(ranking.best().is_none());
    }
}
