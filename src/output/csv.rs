//! CSV report formatting
//!
//! One row per ranked carrier, cheapest first. The format is deliberately
//! small so the file opens cleanly in Excel or pandas.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::rank::Ranking;
use crate::Result;

/// Write the ranking as `rank,carrier,total_cost`
pub fn write_report(path: &Path, ranking: &Ranking) -> Result<()> {
    let mut file = File::create(path)?;
    writeln!(file, "rank,carrier,total_cost")?;
    for (position, result) in ranking.results.iter().enumerate() {
        writeln!(
            file,
            "{},{},{:.2}",
            position + 1,
            escape_field(&result.carrier),
            result.total_cost
        )?;
    }
    file.flush()?;
    Ok(())
}

/// Quote a field containing commas, quotes, or newlines
fn escape_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
