//! Configuration validation

use super::*;
use anyhow::Result;

/// Validate complete configuration
pub fn validate_config(config: &Config) -> Result<()> {
    validate_ingestion(config)?;
    validate_quote(config)?;
    validate_action(config)?;
    Ok(())
}

fn validate_ingestion(config: &Config) -> Result<()> {
    if config.header_row == 0 {
        anyhow::bail!("header_row is 1-based and must be at least 1");
    }
    Ok(())
}

fn validate_quote(config: &Config) -> Result<()> {
    if !config.weight_kg.is_finite() {
        anyhow::bail!("weight must be a finite number, got {}", config.weight_kg);
    }
    if config.weight_kg < MIN_WEIGHT_KG {
        anyhow::bail!(
            "weight must be at least {} kg, got {}",
            MIN_WEIGHT_KG,
            config.weight_kg
        );
    }
    Ok(())
}

fn validate_action(config: &Config) -> Result<()> {
    // With no inputs there is nothing to run against; main handles that case
    if config.inputs.is_empty() {
        return Ok(());
    }
    match &config.action {
        Action::ListStates => {}
        Action::ListCities { state } => {
            if state.trim().is_empty() {
                anyhow::bail!("state (--uf) must not be blank");
            }
        }
        Action::Rank { state, city } => {
            if state.trim().is_empty() {
                anyhow::bail!("state (--uf) must not be blank");
            }
            if city.trim().is_empty() {
                anyhow::bail!("city (--cidade) must not be blank");
            }
        }
    }
    Ok(())
}
