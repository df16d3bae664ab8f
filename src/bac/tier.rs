//! Risk tier classification
//!
//! Maps an estimated BAC to one of three tiers. Bands are closed-open:
//! a BAC exactly on a threshold belongs to the higher tier.

use serde::{Deserialize, Serialize};

use super::units::{CAUTION_THRESHOLD, DANGER_THRESHOLD};

/// Risk tier for an estimated BAC
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    /// BAC below 0.03%
    Safe,
    /// BAC from 0.03% up to (not including) 0.08%
    Caution,
    /// BAC of 0.08% or more
    Danger,
}

impl RiskTier {
    /// Classify a BAC percentage
    pub fn from_bac(bac_percent: f64) -> Self {
        if bac_percent >= DANGER_THRESHOLD {
            RiskTier::Danger
        } else if bac_percent >= CAUTION_THRESHOLD {
            RiskTier::Caution
        } else {
            RiskTier::Safe
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Safe => "safe",
            RiskTier::Caution => "caution",
            RiskTier::Danger => "danger",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().trim() {
            "safe" => Some(RiskTier::Safe),
            "caution" => Some(RiskTier::Caution),
            "danger" => Some(RiskTier::Danger),
            _ => None,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            RiskTier::Safe => "Safe",
            RiskTier::Caution => "Caution",
            RiskTier::Danger => "Danger",
        }
    }

    /// Lowest BAC that falls in this tier
    pub fn lower_bound(&self) -> f64 {
        match self {
            RiskTier::Safe => 0.0,
            RiskTier::Caution => CAUTION_THRESHOLD,
            RiskTier::Danger => DANGER_THRESHOLD,
        }
    }

    /// Fixed advisory message shown with this tier
    pub fn advisory(&self) -> &'static str {
        match self {
            RiskTier::Safe => {
                "Estimated BAC is below 0.03%. This is only an estimate and alcohol can \
                 impair you at any level. If you feel any effect, do not drive."
            }
            RiskTier::Caution => {
                "Estimated BAC is at or above 0.03%, the license suspension level. \
                 Do not drive. Call a designated driver or a taxi."
            }
            RiskTier::Danger => {
                "Estimated BAC is at or above 0.08%, the license revocation level. \
                 Driving now is a serious offense and extremely dangerous. \
                 Call a designated driver or a taxi."
            }
        }
    }
}

impl std::fmt::Display for RiskTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_bands() {
        assert_eq!(RiskTier::from_bac(0.0), RiskTier::Safe);
        assert_eq!(RiskTier::from_bac(0.029), RiskTier::Safe);
        assert_eq!(RiskTier::from_bac(0.05), RiskTier::Caution);
        assert_eq!(RiskTier::from_bac(0.079), RiskTier::Caution);
        assert_eq!(RiskTier::from_bac(0.2), RiskTier::Danger);
    }

    #[test]
    fn test_boundaries_are_closed_open() {
        assert_eq!(RiskTier::from_bac(0.03), RiskTier::Caution);
        assert_eq!(RiskTier::from_bac(0.08), RiskTier::Danger);
        assert_eq!(RiskTier::from_bac(0.03 - 1e-12), RiskTier::Safe);
        assert_eq!(RiskTier::from_bac(0.08 - 1e-12), RiskTier::Caution);
    }

    #[test]
    fn test_lower_bound_classifies_into_own_tier() {
        for tier in [RiskTier::Safe, RiskTier::Caution, RiskTier::Danger] {
            assert_eq!(RiskTier::from_bac(tier.lower_bound()), tier);
        }
    }

    #[test]
    fn test_string_round_trip() {
        assert_eq!(RiskTier::from_str("CAUTION"), Some(RiskTier::Caution));
        assert_eq!(RiskTier::from_str("unknown"), None);
        assert_eq!(RiskTier::Danger.to_string(), "danger");
    }

    #[test]
    fn test_advisory_mentions_alternatives_when_unsafe() {
        assert!(RiskTier::Caution.advisory().contains("taxi"));
        assert!(RiskTier::Danger.advisory().contains("designated driver"));
    }
}
