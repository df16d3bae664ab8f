//! Physical constants and unit conversion factors
//!
//! Every constant used by the BAC formula lives here. None of them are
//! configurable at runtime.

// ============================================================================
// Formula Constants
// ============================================================================

/// Density of ethanol in grams per milliliter
pub const ETHANOL_DENSITY_G_PER_ML: f64 = 0.789;
/// Widmark distribution ratio for men
pub const MALE_DISTRIBUTION_RATIO: f64 = 0.68;
/// Widmark distribution ratio for women
pub const FEMALE_DISTRIBUTION_RATIO: f64 = 0.55;
/// Linear alcohol elimination rate in BAC percentage points per hour
pub const ELIMINATION_RATE_PER_HOUR: f64 = 0.015;

// ============================================================================
// Tier Thresholds (BAC %)
// ============================================================================

/// Lowest BAC classified as caution (license suspension level)
pub const CAUTION_THRESHOLD: f64 = 0.03;
/// Lowest BAC classified as danger (license revocation level)
pub const DANGER_THRESHOLD: f64 = 0.08;

// ============================================================================
// Weight Conversion Constants (to grams)
// ============================================================================

/// Grams per kilogram
pub const G_PER_KG: f64 = 1000.0;
/// Grams per pound
pub const G_PER_LB: f64 = 453.592;

/// Get the conversion factor to grams for a body weight unit
pub fn grams_per_unit(unit: &str) -> Option<f64> {
    let lower = unit.to_lowercase();

    match lower.trim() {
        "g" | "gram" | "grams" => Some(1.0),
        "kg" | "kgs" | "kilogram" | "kilograms" => Some(G_PER_KG),
        "lb" | "lbs" | "pound" | "pounds" => Some(G_PER_LB),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grams_per_unit() {
        assert_eq!(grams_per_unit("g"), Some(1.0));
        assert_eq!(grams_per_unit("kg"), Some(G_PER_KG));
        assert_eq!(grams_per_unit("LBS"), Some(G_PER_LB));
        assert_eq!(grams_per_unit(" Kilograms "), Some(G_PER_KG));
        assert_eq!(grams_per_unit("stone"), None);
        assert_eq!(grams_per_unit("ml"), None);
    }

    #[test]
    fn test_thresholds_ordered() {
        assert!(CAUTION_THRESHOLD < DANGER_THRESHOLD);
        assert!(FEMALE_DISTRIBUTION_RATIO < MALE_DISTRIBUTION_RATIO);
    }
}
