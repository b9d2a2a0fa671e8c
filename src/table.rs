//! Tabular data model shared by all ingestors
//!
//! Every input file, whatever its on-disk format, is reduced to a `RawTable`:
//! ordered column names plus rows of loosely-typed cells. Name-based lookup is
//! what the locality index and the rate-row mapper build on.

use std::collections::HashMap;

/// A single cell as ingested from a spreadsheet or delimited file
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

impl CellValue {
    /// Parse a raw text field: blank becomes `Empty`, numeric text becomes
    /// `Number` (including pt-BR comma-decimal forms like "12,34"), anything
    /// else is kept as trimmed `Text`.
    pub fn parse(field: &str) -> Self {
        let trimmed = field.trim();
        if trimmed.is_empty() {
            return CellValue::Empty;
        }
        match parse_number(trimmed) {
            Some(n) => CellValue::Number(n),
            None => CellValue::Text(trimmed.to_string()),
        }
    }

    /// Numeric view of the cell, re-parsing text if needed
    pub fn as_number(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Text(s) => parse_number(s.trim()),
            CellValue::Empty => None,
        }
    }

    /// Non-blank textual content, trimmed; numbers and empties yield `None`
    pub fn text(&self) -> Option<&str> {
        match self {
            CellValue::Text(s) => {
                let trimmed = s.trim();
                (!trimmed.is_empty()).then_some(trimmed)
            }
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }
}

/// Parse a number, accepting a single decimal comma when no dot is present
/// (common in Brazilian spreadsheet exports).
fn parse_number(s: &str) -> Option<f64> {
    if let Ok(n) = s.parse::<f64>() {
        return Some(n);
    }
    if s.matches(',').count() == 1 && !s.contains('.') {
        return s.replace(',', ".").parse().ok();
    }
    None
}

/// An ordered table of named columns
///
/// Columns with blank header names keep their position but cannot be looked
/// up by name. When two columns share a name, the leftmost wins.
#[derive(Debug, Clone, Default)]
pub struct RawTable {
    headers: Vec<String>,
    index: HashMap<String, usize>,
    rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    pub fn new(headers: Vec<String>) -> Self {
        let mut index = HashMap::with_capacity(headers.len());
        for (i, name) in headers.iter().enumerate() {
            if !name.is_empty() {
                index.entry(name.clone()).or_insert(i);
            }
        }
        Self {
            headers,
            index,
            rows: Vec::new(),
        }
    }

    /// Append a data row, padding or truncating to the header width
    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.headers.len(), CellValue::Empty);
        self.rows.push(row);
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.index.get(name).copied()
    }

    /// Cell by row index and column name
    pub fn cell(&self, row: usize, column: &str) -> Option<&CellValue> {
        self.cell_at(row, self.column_index(column)?)
    }

    /// Cell by row and column index
    pub fn cell_at(&self, row: usize, column: usize) -> Option<&CellValue> {
        self.rows.get(row)?.get(column)
    }
}

/// One carrier's rate table, named after its source file
#[derive(Debug, Clone)]
pub struct CarrierTable {
    pub carrier: String,
    pub table: RawTable,
}
