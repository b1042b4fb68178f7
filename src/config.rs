//! JSON sizing configuration.
//!
//! A configuration file describes one sizing job: the physical inputs, the
//! deployment topology and the purchase options. Every field is optional and
//! falls back to the same defaults the CLI uses.

use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DESCENT_RATE_MPS, DEFAULT_DRAG_COEFFICIENT, DEFAULT_DRY_MASS_KG, DEFAULT_GRAVITY_MPS2,
    RECOMMENDED_SAFETY_FACTOR, STANDARD_AIR_DENSITY,
};
use crate::error::Result;
use crate::report::SizingReport;
use crate::rounding::RoundingPolicy;
use crate::safety::SafetyFactor;
use crate::sizing::{Deployment, SizingRequest};

/// Saved sizing job
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingConfig {
    pub gravity: f64,
    pub mass: f64,
    pub air_density: f64,
    pub descent_rate: f64,
    pub deployment: Deployment,
    pub safety_factor: f64,
    pub rounding: RoundingPolicy,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY_MPS2,
            mass: DEFAULT_DRY_MASS_KG,
            air_density: STANDARD_AIR_DENSITY,
            descent_rate: DEFAULT_DESCENT_RATE_MPS,
            deployment: Deployment::Single {
                cd: DEFAULT_DRAG_COEFFICIENT,
            },
            safety_factor: RECOMMENDED_SAFETY_FACTOR,
            rounding: RoundingPolicy::None,
        }
    }
}

impl SizingConfig {
    /// Parse a configuration from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        info!("Loading sizing configuration from {:?}", path.as_ref());
        let content = fs::read_to_string(&path)?;
        Self::from_json_str(&content)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json)?;
        Ok(())
    }

    pub fn request(&self) -> SizingRequest {
        SizingRequest {
            gravity: self.gravity,
            mass: self.mass,
            air_density: self.air_density,
            descent_rate: self.descent_rate,
            deployment: self.deployment,
        }
    }

    pub fn safety(&self) -> Result<SafetyFactor> {
        Ok(SafetyFactor::new(self.safety_factor)?)
    }

    /// Size the configured job
    pub fn run(&self) -> Result<SizingReport> {
        let safety = self.safety()?;
        Ok(SizingReport::generate(&self.request(), safety, self.rounding)?)
    }

    /// Check the configuration without producing a report
    pub fn validate(&self) -> Result<()> {
        self.run().map(|_| ())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{InvalidInputError, ParachuteError};
    use crate::sizing::Stage;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = SizingConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SizingConfig::default());
        assert_eq!(config.request(), SizingRequest::default());
    }

    #[test]
    fn test_partial_dual_config() {
        let config = SizingConfig::from_json_str(
            r#"{
                "mass": 4.5,
                "deployment": { "mode": "dual", "cd_drogue": 0.8, "cd_main": 1.5, "drogue_fraction": 0.15 },
                "rounding": "ceiling"
            }"#,
        )
        .unwrap();

        assert_eq!(config.mass, 4.5);
        assert_eq!(config.rounding, RoundingPolicy::Ceiling);
        let report = config.run().unwrap();
        assert_eq!(report.rows.len(), 3);
        assert!(report.row(Stage::Main).is_some());
    }

    #[test]
    fn test_invalid_values_surface_as_invalid_input() {
        let config = SizingConfig {
            mass: -5.0,
            ..SizingConfig::default()
        };
        assert!(matches!(
            config.run(),
            Err(ParachuteError::InvalidInput(InvalidInputError::NonPositive { field: "mass", .. }))
        ));

        let config = SizingConfig {
            safety_factor: 0.8,
            ..SizingConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ParachuteError::InvalidInput(InvalidInputError::SafetyFactorTooSmall { .. }))
        ));
    }

    #[test]
    fn test_malformed_json() {
        assert!(matches!(
            SizingConfig::from_json_str("{ mass: "),
            Err(ParachuteError::Json(_))
        ));
        assert!(matches!(
            SizingConfig::from_json_str(r#"{ "rounding": "sideways" }"#),
            Err(ParachuteError::Json(_))
        ));
    }

    #[test]
    fn test_roundtrip_save_load() {
        let original = SizingConfig {
            descent_rate: 7.5,
            deployment: Deployment::Dual {
                cd_drogue: 1.2,
                cd_main: 1.4,
                drogue_fraction: 0.25,
            },
            rounding: RoundingPolicy::Floor,
            ..SizingConfig::default()
        };
        let temp_file = NamedTempFile::new().unwrap();

        original.save_to_file(temp_file.path()).unwrap();
        let loaded = SizingConfig::load_from_file(temp_file.path()).unwrap();
        assert_eq!(loaded, original);
    }

    #[test]
    fn test_missing_file() {
        assert!(matches!(
            SizingConfig::load_from_file("/nonexistent/parachute.json"),
            Err(ParachuteError::Io(_))
        ));
    }
}
