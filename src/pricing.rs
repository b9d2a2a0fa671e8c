//! Freight cost formula
//!
//! Total cost = tiered base price + AD Valorem surcharge + GRIS risk fee
//! (floored at the carrier's minimum) + weight-proportional toll, rounded to
//! two decimals. Pure computation: no I/O, no mutation.

use crate::rate::RateRow;

/// Tier upper bounds in kg, inclusive; weights above the last bound use
/// linear excess pricing. Same order as `rate::TIER_COLUMNS`.
pub const TIER_BOUNDS_KG: [f64; 6] = [10.0, 20.0, 30.0, 50.0, 70.0, 100.0];

/// Compute the total freight cost for one carrier's rate row
pub fn compute_cost(row: &RateRow, weight_kg: f64) -> f64 {
    let base = base_price(row, weight_kg);
    let ad_valorem = base * (row.ad_valorem_pct / 100.0);
    let gris = (base * (row.gris_pct / 100.0)).max(row.gris_minimum);
    let toll = (weight_kg / 100.0) * row.toll_fraction;
    round_currency(base + ad_valorem + gris + toll)
}

/// The first tier bound >= weight selects its price; a boundary weight stays
/// in the lower tier. Past the last bound the price grows linearly with the
/// excess weight, with no upper limit.
fn base_price(row: &RateRow, weight_kg: f64) -> f64 {
    for (bound, price) in TIER_BOUNDS_KG.iter().zip(row.tier_prices.iter()) {
        if weight_kg <= *bound {
            return *price;
        }
    }
    let last_bound = TIER_BOUNDS_KG[TIER_BOUNDS_KG.len() - 1];
    let last_price = row.tier_prices[row.tier_prices.len() - 1];
    last_price + (weight_kg - last_bound) * row.excess_per_kg
}

/// Round to 2 decimals, half away from zero (standard currency rounding)
fn round_currency(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
