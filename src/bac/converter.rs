//! Body weight conversion

use super::units::{grams_per_unit, G_PER_KG};

/// Convert a weight in the given unit to grams
///
/// Returns None for units that are not weight units
pub fn to_grams(quantity: f64, unit: &str) -> Option<f64> {
    grams_per_unit(unit).map(|factor| quantity * factor)
}

/// Convert a weight in the given unit to kilograms
pub fn to_kg(quantity: f64, unit: &str) -> Option<f64> {
    to_grams(quantity, unit).map(|grams| grams / G_PER_KG)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kg_identity() {
        assert_eq!(to_kg(70.0, "kg"), Some(70.0));
    }

    #[test]
    fn test_pounds_to_kg() {
        // 154 lb is about 69.85 kg
        let kg = to_kg(154.0, "lb").unwrap();
        assert!((kg - 69.853168).abs() < 0.0001);
    }

    #[test]
    fn test_grams_to_kg() {
        let kg = to_kg(55_000.0, "g").unwrap();
        assert!((kg - 55.0).abs() < 1e-9);
    }

    #[test]
    fn test_unknown_unit() {
        assert_eq!(to_kg(10.0, "cup"), None);
        assert_eq!(to_grams(10.0, "stone"), None);
    }
}
