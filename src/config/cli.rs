//! CLI argument parsing using clap

use clap::Parser;
use std::path::PathBuf;

/// Fretecomp - compare freight costs across carrier rate tables
#[derive(Parser, Debug)]
#[command(name = "fretecomp")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Carrier rate files (.xlsx, .xls, .xlsm, .xlsb, .ods, .csv, .tsv, .txt)
    #[arg(value_name = "FILES")]
    pub files: Vec<PathBuf>,

    // === Ingestion Options ===
    /// 1-based row holding the column names; rows above it are preamble
    #[arg(long, default_value_t = crate::config::DEFAULT_HEADER_ROW)]
    pub header_row: usize,

    // === Quote Options ===
    /// Shipment weight in kg
    #[arg(short = 'w', long, default_value_t = crate::config::DEFAULT_WEIGHT_KG)]
    pub weight: f64,

    /// Destination state (UF), e.g. SP
    #[arg(long)]
    pub uf: Option<String>,

    /// Destination city, exactly as written in the rate tables
    #[arg(long)]
    pub cidade: Option<String>,

    // === Listing Options ===
    /// List the distinct states found across all files and exit
    #[arg(long)]
    pub list_states: bool,

    /// List the distinct cities of the state given with --uf and exit
    #[arg(long)]
    pub list_cities: bool,

    // === Output Options ===
    /// Write the ranking as a JSON report to this path
    #[arg(long)]
    pub json_output: Option<PathBuf>,

    /// Write the ranking as a CSV report to this path
    #[arg(long)]
    pub csv_output: Option<PathBuf>,

    /// Validate the configuration and exit without ingesting anything
    #[arg(long)]
    pub dry_run: bool,
}

impl Cli {
    /// Parse CLI arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate CLI arguments
    pub fn validate(&self) -> anyhow::Result<()> {
        // With no files there is nothing to do; main prints a usage hint
        if self.files.is_empty() {
            return Ok(());
        }

        if self.list_states && self.list_cities {
            anyhow::bail!("--list-states and --list-cities cannot be combined");
        }

        if self.list_cities && self.uf.is_none() {
            anyhow::bail!("--list-cities requires --uf");
        }

        if !self.list_states && !self.list_cities {
            if self.uf.is_none() {
                anyhow::bail!("ranking requires --uf (or use --list-states to discover states)");
            }
            if self.cidade.is_none() {
                anyhow::bail!("ranking requires --cidade (or use --list-cities to discover cities)");
            }
        }

        Ok(())
    }
}
