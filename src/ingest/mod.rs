//! File ingestion: turn rate files of several formats into `RawTable`s
//!
//! Format selection is extension-based and each format has its own `Ingestor`
//! implementation. Ingestion of a batch is best-effort: a file that fails
//! produces a notice and the remaining files are still loaded.

mod delimited;
mod spreadsheet;

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::table::{CarrierTable, CellValue, RawTable};

pub use delimited::DelimitedTextIngestor;
pub use spreadsheet::SpreadsheetIngestor;

#[derive(Debug, Error)]
pub enum IngestError {
    #[error("unsupported file format")]
    UnsupportedFormat,
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
    #[error("delimited text error: {0}")]
    Delimited(#[from] csv::Error),
    #[error("workbook has no sheets")]
    NoSheet,
    #[error("header row {header_row} is beyond the file's {rows} row(s)")]
    HeaderRowOutOfRange { header_row: usize, rows: usize },
}

/// Supported input file families
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileFormat {
    /// Excel-family workbooks and ODS
    Spreadsheet,
    /// CSV/TSV and plain text with a sniffable delimiter
    DelimitedText,
}

/// Classify a path by its extension, case-insensitively
pub fn detect_format(path: &Path) -> Option<FileFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "xlsx" | "xls" | "xlsm" | "xlsb" | "ods" => Some(FileFormat::Spreadsheet),
        "csv" | "tsv" | "txt" => Some(FileFormat::DelimitedText),
        _ => None,
    }
}

/// A format-specific table reader
///
/// `header_row` is 1-based: rows above it are discarded as preamble, the row
/// itself names the columns, everything below is data.
pub trait Ingestor {
    fn ingest(&self, path: &Path, header_row: usize) -> Result<RawTable, IngestError>;
}

/// The ingestor matching a detected format
pub fn ingestor_for(format: FileFormat) -> Box<dyn Ingestor> {
    match format {
        FileFormat::Spreadsheet => Box::new(SpreadsheetIngestor),
        FileFormat::DelimitedText => Box::new(DelimitedTextIngestor),
    }
}

/// A file that could not be ingested
#[derive(Debug)]
pub struct IngestNotice {
    pub file: String,
    pub error: IngestError,
}

impl fmt::Display for IngestNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "skipping {}: {}", self.file, self.error)
    }
}

/// Ingest every file, collecting one `CarrierTable` per success and one
/// notice per failure. The carrier name is the file name.
pub fn ingest_files(paths: &[PathBuf], header_row: usize) -> (Vec<CarrierTable>, Vec<IngestNotice>) {
    let mut tables = Vec::with_capacity(paths.len());
    let mut notices = Vec::new();

    for path in paths {
        match ingest_file(path, header_row) {
            Ok(table) => {
                log::debug!(
                    "ingested {} ({} columns, {} rows)",
                    path.display(),
                    table.table.headers().len(),
                    table.table.row_count()
                );
                tables.push(table);
            }
            Err(error) => notices.push(IngestNotice {
                file: file_label(path),
                error,
            }),
        }
    }

    (tables, notices)
}

/// Ingest a single file through the ingestor for its format
pub fn ingest_file(path: &Path, header_row: usize) -> Result<CarrierTable, IngestError> {
    let format = detect_format(path).ok_or(IngestError::UnsupportedFormat)?;
    let table = ingestor_for(format).ingest(path, header_row)?;
    Ok(CarrierTable {
        carrier: file_label(path),
        table,
    })
}

/// Display name for a file, used as the carrier name
pub fn file_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Split raw rows at the 1-based header row: the header row names the
/// columns, rows below it become data, rows above are dropped.
pub(crate) fn table_from_rows(
    mut rows: Vec<Vec<CellValue>>,
    header_row: usize,
) -> Result<RawTable, IngestError> {
    if header_row == 0 || rows.len() < header_row {
        return Err(IngestError::HeaderRowOutOfRange {
            header_row,
            rows: rows.len(),
        });
    }
    let data = rows.split_off(header_row);
    let headers = rows.pop().unwrap_or_default();

    let mut table = RawTable::new(headers.iter().map(header_name).collect());
    for row in data {
        table.push_row(row);
    }
    Ok(table)
}

fn header_name(cell: &CellValue) -> String {
    match cell {
        CellValue::Text(s) => s.trim().to_string(),
        CellValue::Number(n) => n.to_string(),
        CellValue::Empty => String::new(),
    }
}
