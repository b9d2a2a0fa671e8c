//! Destination selectors derived from the ingested tables
//!
//! Pure folds over the table list: no accumulator escapes, the returned sets
//! are already deduplicated and lexicographically sorted. A table missing the
//! required column is skipped for that derivation rather than failing it.

use std::collections::BTreeSet;

use crate::rate::{COL_CITY, COL_STATE};
use crate::table::{CarrierTable, CellValue};

/// Sorted set of distinct non-empty UF codes across all tables
pub fn distinct_states(tables: &[CarrierTable]) -> BTreeSet<String> {
    tables.iter().fold(BTreeSet::new(), |mut states, carrier| {
        let table = &carrier.table;
        if let Some(column) = table.column_index(COL_STATE) {
            for row in 0..table.row_count() {
                if let Some(state) = table.cell_at(row, column).and_then(CellValue::text) {
                    states.insert(state.to_string());
                }
            }
        }
        states
    })
}

/// Sorted set of distinct non-empty city names for one state
pub fn distinct_cities(tables: &[CarrierTable], state: &str) -> BTreeSet<String> {
    tables.iter().fold(BTreeSet::new(), |mut cities, carrier| {
        let table = &carrier.table;
        let (Some(state_col), Some(city_col)) =
            (table.column_index(COL_STATE), table.column_index(COL_CITY))
        else {
            return cities;
        };
        for row in 0..table.row_count() {
            if table.cell_at(row, state_col).and_then(CellValue::text) != Some(state) {
                continue;
            }
            if let Some(city) = table.cell_at(row, city_col).and_then(CellValue::text) {
                cities.insert(city.to_string());
            }
        }
        cities
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::RawTable;

    fn carrier(name: &str, headers: &[&str], rows: &[&[&str]]) -> CarrierTable {
        let mut table = RawTable::new(headers.iter().map(|h| h.to_string()).collect());
        for row in rows {
            table.push_row(row.iter().map(|v| CellValue::parse(v)).collect());
        }
        CarrierTable {
            carrier: name.to_string(),
            table,
        }
    }

    #[test]
    fn test_states_are_unioned_and_sorted() {
        let tables = vec![
            carrier(
                "a.csv",
                &["UF", "CIDADE"],
                &[&["SP", "CAMPINAS"], &["RJ", "NITEROI"]],
            ),
            carrier(
                "b.csv",
                &["UF", "CIDADE"],
                &[&["MG", "UBERABA"], &["SP", "SANTOS"]],
            ),
        ];
        let states: Vec<_> = distinct_states(&tables).into_iter().collect();
        assert_eq!(states, vec!["MG", "RJ", "SP"]);
    }

    #[test]
    fn test_blank_states_are_skipped() {
        let tables = vec![carrier(
            "a.csv",
            &["UF", "CIDADE"],
            &[&["SP", "CAMPINAS"], &["", "SANTOS"], &["  ", "OSASCO"]],
        )];
        let states: Vec<_> = distinct_states(&tables).into_iter().collect();
        assert_eq!(states, vec!["SP"]);
    }

    #[test]
    fn test_table_without_uf_column_is_skipped() {
        let tables = vec![
            carrier("a.csv", &["CIDADE"], &[&["CAMPINAS"]]),
            carrier("b.csv", &["UF", "CIDADE"], &[&["RJ", "NITEROI"]]),
        ];
        let states: Vec<_> = distinct_states(&tables).into_iter().collect();
        assert_eq!(states, vec!["RJ"]);
    }

    #[test]
    fn test_cities_filtered_by_state() {
        let tables = vec![
            carrier(
                "a.csv",
                &["UF", "CIDADE"],
                &[&["SP", "SANTOS"], &["RJ", "NITEROI"], &["SP", "CAMPINAS"]],
            ),
            carrier("b.csv", &["UF", "CIDADE"], &[&["SP", "SANTOS"]]),
        ];
        let cities: Vec<_> = distinct_cities(&tables, "SP").into_iter().collect();
        assert_eq!(cities, vec!["CAMPINAS", "SANTOS"]);
    }

    #[test]
    fn test_cities_skip_table_missing_city_column() {
        let tables = vec![
            carrier("a.csv", &["UF"], &[&["SP"]]),
            carrier("b.csv", &["UF", "CIDADE"], &[&["SP", "SOROCABA"]]),
        ];
        let cities: Vec<_> = distinct_cities(&tables, "SP").into_iter().collect();
        assert_eq!(cities, vec!["SOROCABA"]);
    }

    #[test]
    fn test_unknown_state_yields_no_cities() {
        let tables = vec![carrier("a.csv", &["UF", "CIDADE"], &[&["SP", "SANTOS"]])];
        assert!(distinct_cities(&tables, "AM").is_empty());
    }
}
