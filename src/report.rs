//! Per-stage sizing report.
//!
//! Flattens a sizing result into one row per canopy, in every unit a front
//! end might show, with the safety-factored purchase size alongside.

use serde::Serialize;

use crate::rounding::{purchase_size, PurchaseSize, RoundingPolicy};
use crate::safety::SafetyFactor;
use crate::sizing::{descent_rate_advisory, DescentAdvisory, SizingRequest, SizingResult, Stage};
use crate::error::InvalidInputError;

/// One row per canopy, in every unit a buyer might look for
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StageRow {
    pub stage: Stage,
    pub area_m2: f64,
    pub area_ft2: f64,
    pub diameter_m: f64,
    pub diameter_in: f64,
    pub diameter_ft: f64,
    pub area_ft2_with_safety: f64,
    pub diameter_ft_with_safety: f64,
    pub purchase: PurchaseSize,
}

/// Full sizing report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SizingReport {
    pub safety_factor: f64,
    pub rounding: RoundingPolicy,
    pub rows: Vec<StageRow>,
    pub advisory: Option<DescentAdvisory>,
}

impl SizingReport {
    /// Build rows for every stage of an already computed result
    pub fn from_result(
        result: &SizingResult,
        descent_rate: f64,
        safety: SafetyFactor,
        rounding: RoundingPolicy,
    ) -> Self {
        let rows = result
            .stages()
            .into_iter()
            .map(|(stage, canopy)| StageRow {
                stage,
                area_m2: canopy.area_m2,
                area_ft2: canopy.area_ft2(),
                diameter_m: canopy.diameter_m,
                diameter_in: canopy.diameter_in(),
                diameter_ft: canopy.diameter_ft(),
                area_ft2_with_safety: safety.scale_area(canopy.area_ft2()),
                diameter_ft_with_safety: safety.scale_diameter(canopy.diameter_ft()),
                purchase: purchase_size(&canopy, safety, rounding),
            })
            .collect();

        Self {
            safety_factor: safety.value(),
            rounding,
            rows,
            advisory: descent_rate_advisory(descent_rate),
        }
    }

    /// Size a request and report it in one step
    pub fn generate(
        request: &SizingRequest,
        safety: SafetyFactor,
        rounding: RoundingPolicy,
    ) -> Result<Self, InvalidInputError> {
        let result = request.compute()?;
        Ok(Self::from_result(&result, request.descent_rate, safety, rounding))
    }

    pub fn row(&self, stage: Stage) -> Option<&StageRow> {
        self.rows.iter().find(|r| r.stage == stage)
    }
}
