//! Spreadsheet ingestion via calamine
//!
//! Reads the first worksheet of an Excel-family or ODS workbook. Cell types
//! are collapsed into `CellValue`: numbers stay numeric, strings go through
//! the same text parser as delimited files so "12,5" still reads as a number.

use std::path::Path;

use calamine::{open_workbook_auto, Data, Reader};

use super::{table_from_rows, IngestError, Ingestor};
use crate::table::{CellValue, RawTable};

pub struct SpreadsheetIngestor;

impl Ingestor for SpreadsheetIngestor {
    fn ingest(&self, path: &Path, header_row: usize) -> Result<RawTable, IngestError> {
        let mut workbook = open_workbook_auto(path)?;
        let range = workbook
            .worksheet_range_at(0)
            .ok_or(IngestError::NoSheet)??;

        let rows = range
            .rows()
            .map(|row| row.iter().map(cell_value).collect())
            .collect();
        table_from_rows(rows, header_row)
    }
}

fn cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(n) => CellValue::Number(*n as f64),
        Data::Float(n) => CellValue::Number(*n),
        Data::String(s) => CellValue::parse(s),
        Data::Bool(b) => CellValue::Number(if *b { 1.0 } else { 0.0 }),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::Text(s.clone()),
        Data::Error(_) | Data::Empty => CellValue::Empty,
    }
}
