//! Human-readable text output

use std::collections::BTreeSet;

use crate::rank::Ranking;

/// Print the distinct states found across all rate tables
pub fn print_states(states: &BTreeSet<String>) {
    if states.is_empty() {
        println!("No states found in the ingested files.");
        return;
    }
    println!("States ({}):", states.len());
    for state in states {
        println!("  {state}");
    }
}

/// Print the distinct cities of one state
pub fn print_cities(state: &str, cities: &BTreeSet<String>) {
    if cities.is_empty() {
        println!("No cities found for {state}.");
        return;
    }
    println!("Cities in {state} ({}):", cities.len());
    for city in cities {
        println!("  {city}");
    }
}

/// Print the ranking table to console, cheapest carrier first
pub fn print_ranking(ranking: &Ranking, state: &str, city: &str, weight_kg: f64) {
    println!("═══════════════════════════════════════════════════════════");
    println!("                   FREIGHT COST RANKING");
    println!("═══════════════════════════════════════════════════════════");
    println!();
    println!("Destination: {city} / {state}");
    println!("Weight:      {weight_kg} kg");
    println!();

    println!("{:<4} {:<40} {:>14}", "#", "Carrier", "Total (R$)");
    for (position, result) in ranking.results.iter().enumerate() {
        println!(
            "{:<4} {:<40} {:>14.2}",
            position + 1,
            result.carrier,
            result.total_cost
        );
    }
    println!();

    if let Some(best) = ranking.best() {
        println!("Best option: {} at R$ {:.2}", best.carrier, best.total_cost);
    }
}
