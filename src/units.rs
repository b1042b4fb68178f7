//! SI to imperial conversions for canopy areas and diameters.
//!
//! Conversions are plain multiplications by fixed factors. Rounding is left
//! to the presentation layer and the purchase-size policy.

use serde::{Deserialize, Serialize};
use crate::constants::{M2_TO_FT2, M_TO_FT, M_TO_IN};

/// Direction and dimension of a unit conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionKind {
    SquareMetersToSquareFeet,
    SquareFeetToSquareMeters,
    MetersToInches,
    InchesToMeters,
    MetersToFeet,
    FeetToMeters,
}

impl ConversionKind {
    /// Multiplicative factor applied by this conversion
    pub fn factor(self) -> f64 {
        match self {
            ConversionKind::SquareMetersToSquareFeet => M2_TO_FT2,
            ConversionKind::SquareFeetToSquareMeters => 1.0 / M2_TO_FT2,
            ConversionKind::MetersToInches => M_TO_IN,
            ConversionKind::InchesToMeters => 1.0 / M_TO_IN,
            ConversionKind::MetersToFeet => M_TO_FT,
            ConversionKind::FeetToMeters => 1.0 / M_TO_FT,
        }
    }

    /// The conversion that undoes this one
    pub fn inverse(self) -> Self {
        match self {
            ConversionKind::SquareMetersToSquareFeet => ConversionKind::SquareFeetToSquareMeters,
            ConversionKind::SquareFeetToSquareMeters => ConversionKind::SquareMetersToSquareFeet,
            ConversionKind::MetersToInches => ConversionKind::InchesToMeters,
            ConversionKind::InchesToMeters => ConversionKind::MetersToInches,
            ConversionKind::MetersToFeet => ConversionKind::FeetToMeters,
            ConversionKind::FeetToMeters => ConversionKind::MetersToFeet,
        }
    }
}

/// Convert a value between metric and imperial units
pub fn convert_units(value: f64, kind: ConversionKind) -> f64 {
    match kind {
        // Inverse kinds divide rather than multiply by a reciprocal to keep round trips tight
        ConversionKind::SquareFeetToSquareMeters => value / M2_TO_FT2,
        ConversionKind::InchesToMeters => value / M_TO_IN,
        ConversionKind::FeetToMeters => value / M_TO_FT,
        _ => value * kind.factor(),
    }
}
