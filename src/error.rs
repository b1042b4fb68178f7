//! Error types for the sizing engine and its front ends.
//!
//! The engine itself only ever fails with [`InvalidInputError`]. Front ends
//! that read configuration files wrap it in [`ParachuteError`].

use thiserror::Error;

/// Rejected sizing input. Nothing is computed when this is returned.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum InvalidInputError {
    /// A physical input was zero, negative, NaN or infinite
    #[error("{field} must be a positive finite number (got {value})")]
    NonPositive { field: &'static str, value: f64 },

    /// Drogue share of the total area outside the accepted band
    #[error("drogue fraction must be in [0.01, 0.90] (got {value})")]
    DrogueFractionOutOfRange { value: f64 },

    /// Finite inputs whose combination sizes a canopy of zero or infinite area
    #[error("computed canopy area must be a positive finite number (got {value} m²)")]
    DegenerateArea { value: f64 },

    /// Safety factor that would shrink the canopy
    #[error("safety factor must be at least 1.0 (got {value})")]
    SafetyFactorTooSmall { value: f64 },
}

/// Crate-level error used by the CLI and configuration loading
#[derive(Error, Debug)]
pub enum ParachuteError {
    /// Sizing inputs failed validation
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// IO errors while reading a request file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON request
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for front-end operations
pub type Result<T> = std::result::Result<T, ParachuteError>;

/// Check that a named input is strictly positive and finite.
pub(crate) fn ensure_positive(field: &'static str, value: f64) -> std::result::Result<f64, InvalidInputError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(InvalidInputError::NonPositive { field, value })
    }
}
