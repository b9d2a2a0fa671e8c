//! Delimited-text ingestion with delimiter sniffing and legacy encodings
//!
//! Carrier exports arrive as semicolon CSVs, tab-separated dumps, or plain
//! `.txt` files, often encoded in Windows-1252 rather than UTF-8. The
//! delimiter is sniffed from the first lines instead of assumed.

use std::fs;
use std::path::Path;

use encoding_rs::WINDOWS_1252;

use super::{table_from_rows, IngestError, Ingestor};
use crate::table::{CellValue, RawTable};

const DELIMITER_CANDIDATES: [u8; 4] = [b'\t', b';', b',', b'|'];
const SNIFF_LINES: usize = 10;

pub struct DelimitedTextIngestor;

impl Ingestor for DelimitedTextIngestor {
    fn ingest(&self, path: &Path, header_row: usize) -> Result<RawTable, IngestError> {
        let content = read_file_as_utf8(path)?;
        let delimiter = sniff_delimiter(&content);
        log::debug!(
            "{}: using delimiter {:?}",
            path.display(),
            delimiter as char
        );

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(false)
            .flexible(true)
            .from_reader(content.as_bytes());

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(CellValue::parse).collect());
        }
        table_from_rows(rows, header_row)
    }
}

/// Read a file as UTF-8, falling back to Windows-1252 for legacy exports
fn read_file_as_utf8(path: &Path) -> Result<String, IngestError> {
    let bytes = fs::read(path)?;
    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(err) => {
            let (decoded, _, _) = WINDOWS_1252.decode(err.as_bytes());
            Ok(decoded.into_owned())
        }
    }
}

/// Pick the candidate delimiter with the most consistent field count across
/// the first lines. Ties go to the earlier candidate; a delimiter must
/// produce more than one field on the first line to qualify. Falls back to
/// comma when nothing splits.
fn sniff_delimiter(content: &str) -> u8 {
    let lines: Vec<&str> = content.lines().take(SNIFF_LINES).collect();
    if lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0usize;
    for &candidate in &DELIMITER_CANDIDATES {
        let sep = candidate as char;
        let first_count = lines[0].matches(sep).count() + 1;
        if first_count < 2 {
            continue;
        }
        let consistent = lines
            .iter()
            .filter(|line| line.matches(sep).count() + 1 == first_count)
            .count();
        let score = consistent * first_count;
        if score > best_score {
            best = candidate;
            best_score = score;
        }
    }
    best
}
