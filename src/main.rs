//! Fretecomp CLI entry point

use anyhow::{Context, Result};
use fretecomp::config::{cli::Cli, Action, Config, OutputConfig};
use fretecomp::ingest::ingest_files;
use fretecomp::locality::{distinct_cities, distinct_states};
use fretecomp::output::{csv, json, text};
use fretecomp::rank::rank;
use fretecomp::table::CarrierTable;

fn main() -> Result<()> {
    env_logger::init();

    // Parse CLI arguments
    let cli = Cli::parse_args();
    cli.validate()?;

    // Build and validate configuration
    let config = build_config_from_cli(&cli);
    fretecomp::config::validator::validate_config(&config)
        .context("Configuration validation failed")?;

    if cli.dry_run {
        print_configuration(&config);
        println!("Dry run mode - configuration validated successfully");
        return Ok(());
    }

    if config.inputs.is_empty() {
        println!("No rate files given.");
        println!("Pass one or more carrier rate files (.xlsx, .csv, ...) to compare them.");
        return Ok(());
    }

    // Ingest all files; failures become warnings, not aborts
    let (tables, notices) = ingest_files(&config.inputs, config.header_row);
    for notice in &notices {
        eprintln!("Warning: {notice}");
    }
    if tables.is_empty() {
        anyhow::bail!("none of the {} input file(s) could be ingested", config.inputs.len());
    }

    match &config.action {
        Action::ListStates => {
            text::print_states(&distinct_states(&tables));
            Ok(())
        }
        Action::ListCities { state } => {
            text::print_cities(state, &distinct_cities(&tables, state));
            Ok(())
        }
        Action::Rank { state, city } => {
            run_ranking(&config, &tables, state, city)
        }
    }
}

/// Build runtime configuration from CLI arguments
fn build_config_from_cli(cli: &Cli) -> Config {
    let action = if cli.list_states {
        Action::ListStates
    } else if cli.list_cities {
        Action::ListCities {
            state: cli.uf.clone().unwrap_or_default(),
        }
    } else {
        Action::Rank {
            state: cli.uf.clone().unwrap_or_default(),
            city: cli.cidade.clone().unwrap_or_default(),
        }
    };

    Config {
        inputs: cli.files.clone(),
        header_row: cli.header_row,
        weight_kg: cli.weight,
        action,
        output: OutputConfig {
            json_output: cli.json_output.clone(),
            csv_output: cli.csv_output.clone(),
        },
    }
}

/// Display the resolved configuration
fn print_configuration(config: &Config) {
    println!("Configuration:");
    println!("  Files:      {}", config.inputs.len());
    for path in &config.inputs {
        println!("    {}", path.display());
    }
    println!("  Header row: {}", config.header_row);
    println!("  Weight:     {} kg", config.weight_kg);
    match &config.action {
        Action::ListStates => println!("  Action:     list states"),
        Action::ListCities { state } => println!("  Action:     list cities of {state}"),
        Action::Rank { state, city } => println!("  Action:     rank carriers for {city}/{state}"),
    }
    println!();
}

/// Rank the carriers and write the requested reports
fn run_ranking(config: &Config, tables: &[CarrierTable], state: &str, city: &str) -> Result<()> {
    let ranking = rank(tables, state, city, config.weight_kg);

    for notice in &ranking.notices {
        if notice.is_error() {
            eprintln!("Error: {notice}");
        } else {
            eprintln!("Warning: {notice}");
        }
    }

    if ranking.is_empty() {
        anyhow::bail!("no carrier produced a usable cost for {city}/{state}");
    }

    text::print_ranking(&ranking, state, city, config.weight_kg);

    if let Some(path) = &config.output.json_output {
        let report = json::JsonReport::new(&ranking, state, city, config.weight_kg);
        json::write_report(path, &report)
            .with_context(|| format!("failed to write JSON report to {}", path.display()))?;
        println!("JSON report written to {}", path.display());
    }

    if let Some(path) = &config.output.csv_output {
        csv::write_report(path, &ranking)
            .with_context(|| format!("failed to write CSV report to {}", path.display()))?;
        println!("CSV report written to {}", path.display());
    }

    Ok(())
}
