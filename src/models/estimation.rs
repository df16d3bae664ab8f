//! Estimation input and result models
//!
//! Inputs are built fresh for each computation and never mutated by the estimator.

use serde::{Deserialize, Serialize};

use super::drink::DrinkSelection;
use crate::bac::units::{FEMALE_DISTRIBUTION_RATIO, MALE_DISTRIBUTION_RATIO};
use crate::bac::RiskTier;

/// Biological sex used to pick the Widmark distribution ratio
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "male" | "m" => Some(Gender::Male),
            "female" | "f" => Some(Gender::Female),
            _ => None,
        }
    }

    /// Widmark distribution ratio (r)
    pub fn distribution_ratio(&self) -> f64 {
        match self {
            Gender::Male => MALE_DISTRIBUTION_RATIO,
            Gender::Female => FEMALE_DISTRIBUTION_RATIO,
        }
    }
}

/// Everything needed for one BAC estimate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimationInput {
    pub gender: Gender,
    pub body_weight_kg: f64,
    pub selections: Vec<DrinkSelection>,
    pub elapsed_hours: f64,
}

impl EstimationInput {
    pub fn new(
        gender: Gender,
        body_weight_kg: f64,
        selections: Vec<DrinkSelection>,
        elapsed_hours: f64,
    ) -> Self {
        Self {
            gender,
            body_weight_kg,
            selections,
            elapsed_hours,
        }
    }

    /// Whether at least one selection has a non-zero quantity
    pub fn has_drinks(&self) -> bool {
        self.selections.iter().any(|s| s.quantity > 0)
    }
}

/// Estimated BAC and its tier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub bac_percent: f64,
    pub tier: RiskTier,
}

/// Alcohol contributed by a single selection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DrinkContribution {
    pub drink_id: String,
    pub quantity: u32,
    pub alcohol_grams: f64,
    /// False when the drink id was not found in the catalog
    pub resolved: bool,
}

/// Full estimate with intermediate values
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Estimation {
    pub total_alcohol_grams: f64,
    /// BAC before elimination over elapsed time
    pub raw_bac_percent: f64,
    pub contributions: Vec<DrinkContribution>,
    pub result: EstimationResult,
}

impl Estimation {
    /// Drink ids that did not resolve against the catalog
    pub fn unresolved_drinks(&self) -> Vec<&str> {
        self.contributions
            .iter()
            .filter(|c| !c.resolved)
            .map(|c| c.drink_id.as_str())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_parsing() {
        assert_eq!(Gender::from_str("Male"), Some(Gender::Male));
        assert_eq!(Gender::from_str("f"), Some(Gender::Female));
        assert_eq!(Gender::from_str(" FEMALE "), Some(Gender::Female));
        assert_eq!(Gender::from_str("other"), None);
    }

    #[test]
    fn test_distribution_ratio() {
        assert_eq!(Gender::Male.distribution_ratio(), 0.68);
        assert_eq!(Gender::Female.distribution_ratio(), 0.55);
    }

    #[test]
    fn test_has_drinks() {
        let mut input = EstimationInput::new(Gender::Male, 70.0, vec![], 0.0);
        assert!(!input.has_drinks());

        input.selections.push(DrinkSelection::new("Beer", 0));
        assert!(!input.has_drinks());

        input.selections.push(DrinkSelection::new("Soju", 1));
        assert!(input.has_drinks());
    }

    #[test]
    fn test_result_serializes_lowercase_tier() {
        let result = EstimationResult {
            bac_percent: 0.05,
            tier: RiskTier::Caution,
        };
        let json = serde_json::to_value(result).unwrap();
        assert_eq!(json["tier"], "caution");
    }
}
