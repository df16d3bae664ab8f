//! Estimation validation errors

use thiserror::Error;

/// Input problems that stop an estimate before any computation
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ValidationError {
    #[error("Body weight must be greater than 0 (got {0})")]
    InvalidWeight(f64),

    #[error("At least one drink with a quantity above 0 is required")]
    NoDrinksProvided,

    #[error("Elapsed hours must be a finite number of 0 or more (got {0})")]
    InvalidElapsedHours(f64),
}

/// Result type for estimation
pub type EstimateResult<T> = Result<T, ValidationError>;
