//! Data models
//!
//! Drink catalog entries, session selections, and estimation inputs and results.

mod drink;
mod estimation;

pub use drink::{DrinkCatalog, DrinkSelection, DrinkType};
pub use estimation::{
    DrinkContribution, Estimation, EstimationInput, EstimationResult, Gender,
};
