//! BAC estimation module
//!
//! Widmark estimate, linear elimination and risk tier classification.

pub mod converter;
pub mod error;
pub mod estimator;
pub mod tier;
pub mod units;

pub use converter::{to_grams, to_kg};
pub use error::{EstimateResult, ValidationError};
pub use estimator::{estimate, estimate_detailed, estimate_with, hours_until_below};
pub use tier::RiskTier;
pub use units::{
    grams_per_unit, CAUTION_THRESHOLD, DANGER_THRESHOLD, ELIMINATION_RATE_PER_HOUR,
    ETHANOL_DENSITY_G_PER_ML,
};
