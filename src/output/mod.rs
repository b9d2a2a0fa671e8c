//! Output formatting: console text plus optional JSON and CSV reports

pub mod csv;
pub mod json;
pub mod text;
