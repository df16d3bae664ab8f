//! BAC estimation
//!
//! Widmark-style estimate with linear elimination:
//!
//! ```text
//! grams    = Σ volume_ml × quantity × (abv / 100) × 0.789
//! raw_bac  = grams / (weight_kg × 1000 × r) × 100
//! bac      = max(0, raw_bac − hours × 0.015)
//! ```
//!
//! All functions here are pure and safe to call concurrently.

use super::error::{EstimateResult, ValidationError};
use super::tier::RiskTier;
use super::units::{ELIMINATION_RATE_PER_HOUR, ETHANOL_DENSITY_G_PER_ML, G_PER_KG};
use crate::models::{
    DrinkCatalog, DrinkContribution, DrinkSelection, DrinkType, Estimation, EstimationInput,
    EstimationResult,
};

/// Estimate BAC against the standard drink catalog
pub fn estimate(input: &EstimationInput) -> EstimateResult<EstimationResult> {
    estimate_with(input, &DrinkCatalog::standard())
}

/// Estimate BAC against a given catalog
pub fn estimate_with(
    input: &EstimationInput,
    catalog: &DrinkCatalog<'_>,
) -> EstimateResult<EstimationResult> {
    estimate_detailed(input, catalog).map(|e| e.result)
}

/// Estimate BAC and keep the per-drink breakdown and intermediate values
pub fn estimate_detailed(
    input: &EstimationInput,
    catalog: &DrinkCatalog<'_>,
) -> EstimateResult<Estimation> {
    validate(input)?;

    let contributions: Vec<DrinkContribution> = input
        .selections
        .iter()
        .map(|selection| contribution(selection, catalog))
        .collect();

    let total_alcohol_grams = contributions
        .iter()
        .fold(0.0, |acc, c| acc + c.alcohol_grams);

    let body_weight_grams = input.body_weight_kg * G_PER_KG;
    let raw_bac_percent =
        (total_alcohol_grams / (body_weight_grams * input.gender.distribution_ratio())) * 100.0;
    let decayed = raw_bac_percent - (input.elapsed_hours * ELIMINATION_RATE_PER_HOUR);
    let bac_percent = decayed.max(0.0);
    let tier = RiskTier::from_bac(bac_percent);

    tracing::debug!(
        total_alcohol_grams,
        raw_bac_percent,
        bac_percent,
        tier = tier.as_str(),
        "BAC estimated"
    );

    Ok(Estimation {
        total_alcohol_grams,
        raw_bac_percent,
        contributions,
        result: EstimationResult { bac_percent, tier },
    })
}

/// Hours of elimination until BAC falls to `threshold_percent`
///
/// Returns 0 when the BAC is already below the threshold. At the returned
/// hour the BAC equals the threshold; it is strictly below after that.
pub fn hours_until_below(bac_percent: f64, threshold_percent: f64) -> f64 {
    if bac_percent < threshold_percent {
        return 0.0;
    }
    ((bac_percent - threshold_percent) / ELIMINATION_RATE_PER_HOUR).max(0.0)
}

fn validate(input: &EstimationInput) -> EstimateResult<()> {
    // NaN fails this comparison too
    if !(input.body_weight_kg > 0.0) {
        return Err(ValidationError::InvalidWeight(input.body_weight_kg));
    }
    if !input.has_drinks() {
        return Err(ValidationError::NoDrinksProvided);
    }
    if !input.elapsed_hours.is_finite() || input.elapsed_hours < 0.0 {
        return Err(ValidationError::InvalidElapsedHours(input.elapsed_hours));
    }
    Ok(())
}

fn contribution(selection: &DrinkSelection, catalog: &DrinkCatalog<'_>) -> DrinkContribution {
    match catalog.lookup(&selection.drink_id) {
        Some(drink) => DrinkContribution {
            drink_id: drink.id.to_string(),
            quantity: selection.quantity,
            alcohol_grams: alcohol_grams(drink, selection.quantity),
            resolved: true,
        },
        None => {
            tracing::warn!(
                "Unknown drink '{}' (x{}) contributes no alcohol",
                selection.drink_id,
                selection.quantity
            );
            DrinkContribution {
                drink_id: selection.drink_id.clone(),
                quantity: selection.quantity,
                alcohol_grams: 0.0,
                resolved: false,
            }
        }
    }
}

fn alcohol_grams(drink: &DrinkType, quantity: u32) -> f64 {
    drink.volume_ml * f64::from(quantity) * (drink.abv_percent / 100.0) * ETHANOL_DENSITY_G_PER_ML
}
