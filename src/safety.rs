//! Safety margin propagation.
//!
//! A safety factor multiplies canopy *area*. Because diameter goes with the
//! square root of area, a diameter receives `sqrt(factor)`, never `factor`.

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_SAFETY_FACTOR, RECOMMENDED_SAFETY_FACTOR};
use crate::error::InvalidInputError;

/// Which dimension a safety factor is being applied to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScaledQuantity {
    Area,
    Diameter,
}

/// Validated area safety factor (`>= 1.0`)
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
pub struct SafetyFactor(f64);

impl SafetyFactor {
    /// No margin at all
    pub const NONE: SafetyFactor = SafetyFactor(1.0);

    pub fn new(factor: f64) -> Result<Self, InvalidInputError> {
        if factor.is_finite() && factor >= MIN_SAFETY_FACTOR {
            Ok(Self(factor))
        } else {
            Err(InvalidInputError::SafetyFactorTooSmall { value: factor })
        }
    }

    pub fn value(self) -> f64 {
        self.0
    }

    pub fn scale_area(self, area: f64) -> f64 {
        area * self.0
    }

    pub fn scale_diameter(self, diameter: f64) -> f64 {
        diameter * self.0.sqrt()
    }

    pub fn scale(self, value: f64, quantity: ScaledQuantity) -> f64 {
        match quantity {
            ScaledQuantity::Area => self.scale_area(value),
            ScaledQuantity::Diameter => self.scale_diameter(value),
        }
    }
}

impl Default for SafetyFactor {
    fn default() -> Self {
        Self(RECOMMENDED_SAFETY_FACTOR)
    }
}

impl<'de> Deserialize<'de> for SafetyFactor {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = f64::deserialize(deserializer)?;
        SafetyFactor::new(raw).map_err(serde::de::Error::custom)
    }
}

/// Apply a safety factor to an area or a diameter.
///
/// # Errors
/// Returns [`InvalidInputError::SafetyFactorTooSmall`] when `factor < 1.0`
/// or is not finite.
pub fn apply_safety_factor(value: f64, factor: f64, quantity: ScaledQuantity) -> Result<f64, InvalidInputError> {
    Ok(SafetyFactor::new(factor)?.scale(value, quantity))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_area_scales_linearly() {
        let scaled = apply_safety_factor(2.0, 1.1, ScaledQuantity::Area).unwrap();
        assert!((scaled - 2.2).abs() < 1e-12);
    }

    #[test]
    fn test_diameter_scales_by_square_root() {
        let scaled = apply_safety_factor(1.0, 1.21, ScaledQuantity::Diameter).unwrap();
        assert!((scaled - 1.1).abs() < 1e-12);
        assert!((scaled - 1.21).abs() > 0.1);
    }

    #[test]
    fn test_area_and_diameter_stay_consistent() {
        let factor = SafetyFactor::new(1.3).unwrap();
        let area: f64 = 2.5;
        let diameter = crate::sizing::circle_diameter(area);

        let from_scaled_area = crate::sizing::circle_diameter(factor.scale_area(area));
        assert!((from_scaled_area - factor.scale_diameter(diameter)).abs() < 1e-12);
    }

    #[test]
    fn test_unit_factor_is_identity() {
        assert_eq!(SafetyFactor::NONE.scale_area(3.0), 3.0);
        assert_eq!(SafetyFactor::NONE.scale_diameter(3.0), 3.0);
    }

    #[test]
    fn test_rejects_shrinking_factor() {
        assert!(matches!(
            apply_safety_factor(1.0, 0.9, ScaledQuantity::Area),
            Err(InvalidInputError::SafetyFactorTooSmall { .. })
        ));
        assert!(SafetyFactor::new(f64::NAN).is_err());
        assert!(SafetyFactor::new(1.0).is_ok());
    }

    #[test]
    fn test_default_is_recommended() {
        assert_eq!(SafetyFactor::default().value(), 1.1);
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: SafetyFactor = serde_json::from_str("1.25").unwrap();
        assert_eq!(ok.value(), 1.25);
        assert!(serde_json::from_str::<SafetyFactor>("0.5").is_err());
    }
}
