//! Closed-form canopy sizing.
//!
//! At terminal velocity drag balances weight, so for a flat round canopy
//!
//! ```text
//! S = (2 g m) / (rho Cd V²)
//! D = sqrt(4 S / π)
//! ```
//!
//! Dual deployment sizes the total area with the average of the drogue and
//! main drag coefficients, then splits that area proportionally. Each
//! stage's diameter is derived from its own area, so the stage diameters do
//! not add up to the total diameter.

use std::f64::consts::PI;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DESCENT_RATE_MPS, DEFAULT_DRAG_COEFFICIENT, DEFAULT_DROGUE_FRACTION,
    DEFAULT_DRY_MASS_KG, DEFAULT_GRAVITY_MPS2, HIGH_DESCENT_RATE_MPS, MAX_DROGUE_FRACTION,
    MIN_DROGUE_FRACTION, STANDARD_AIR_DENSITY,
};
use crate::error::{ensure_positive, InvalidInputError};
use crate::units::{convert_units, ConversionKind};

/// Area and diameter of one canopy (or of the combined total)
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanopySize {
    pub area_m2: f64,
    pub diameter_m: f64,
}

impl CanopySize {
    /// Build a canopy from its area; the diameter always follows from the area
    pub fn from_area(area_m2: f64) -> Self {
        Self {
            area_m2,
            diameter_m: circle_diameter(area_m2),
        }
    }

    pub fn area_ft2(&self) -> f64 {
        convert_units(self.area_m2, ConversionKind::SquareMetersToSquareFeet)
    }

    pub fn diameter_in(&self) -> f64 {
        convert_units(self.diameter_m, ConversionKind::MetersToInches)
    }

    pub fn diameter_ft(&self) -> f64 {
        convert_units(self.diameter_m, ConversionKind::MetersToFeet)
    }
}

/// Result of sizing a single canopy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SingleResult {
    pub total: CanopySize,
}

/// Result of sizing a drogue + main pair
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DualResult {
    pub total: CanopySize,
    pub drogue: CanopySize,
    pub main: CanopySize,
    pub drogue_fraction: f64,
}

/// Either topology's result
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SizingResult {
    Single(SingleResult),
    Dual(DualResult),
}

impl SizingResult {
    /// Combined canopy size regardless of topology
    pub fn total(&self) -> CanopySize {
        match self {
            SizingResult::Single(r) => r.total,
            SizingResult::Dual(r) => r.total,
        }
    }

    /// Every stage in presentation order with its label
    pub fn stages(&self) -> Vec<(Stage, CanopySize)> {
        match self {
            SizingResult::Single(r) => vec![(Stage::Total, r.total)],
            SizingResult::Dual(r) => vec![
                (Stage::Total, r.total),
                (Stage::Drogue, r.drogue),
                (Stage::Main, r.main),
            ],
        }
    }
}

/// Which canopy a size belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Stage {
    Total,
    Drogue,
    Main,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Deployment topology with the drag coefficients it needs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Deployment {
    Single {
        cd: f64,
    },
    Dual {
        cd_drogue: f64,
        cd_main: f64,
        #[serde(default = "default_drogue_fraction")]
        drogue_fraction: f64,
    },
}

fn default_drogue_fraction() -> f64 {
    DEFAULT_DROGUE_FRACTION
}

/// Everything needed to size a recovery system
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SizingRequest {
    pub gravity: f64,        // m/s²
    pub mass: f64,           // kg, dry mass after burnout
    pub air_density: f64,    // kg/m³
    pub descent_rate: f64,   // m/s, target terminal velocity
    pub deployment: Deployment,
}

impl Default for SizingRequest {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY_MPS2,
            mass: DEFAULT_DRY_MASS_KG,
            air_density: STANDARD_AIR_DENSITY,
            descent_rate: DEFAULT_DESCENT_RATE_MPS,
            deployment: Deployment::Single {
                cd: DEFAULT_DRAG_COEFFICIENT,
            },
        }
    }
}

impl SizingRequest {
    /// Size the canopies for this request
    pub fn compute(&self) -> Result<SizingResult, InvalidInputError> {
        compute(self)
    }
}

/// Invert the circle area relation
pub fn circle_diameter(area_m2: f64) -> f64 {
    (4.0 * area_m2 / PI).sqrt()
}

/// Total canopy area at which drag equals weight at `v`; inputs must already be validated
fn equilibrium_area(g: f64, m: f64, rho: f64, cd: f64, v: f64) -> f64 {
    (2.0 * g * m) / (rho * cd * v * v)
}

/// Areas must come out strictly positive and finite; extreme inputs can underflow or overflow
fn check_area(area_m2: f64) -> Result<f64, InvalidInputError> {
    if area_m2.is_finite() && area_m2 > 0.0 {
        Ok(area_m2)
    } else {
        Err(InvalidInputError::DegenerateArea { value: area_m2 })
    }
}

fn check_drogue_fraction(fraction: f64) -> Result<f64, InvalidInputError> {
    if (MIN_DROGUE_FRACTION..=MAX_DROGUE_FRACTION).contains(&fraction) {
        Ok(fraction)
    } else {
        Err(InvalidInputError::DrogueFractionOutOfRange { value: fraction })
    }
}

/// Size a single round canopy.
///
/// # Arguments
/// * `g` - Gravitational acceleration (m/s²)
/// * `m` - Dry mass (kg)
/// * `rho` - Air density (kg/m³)
/// * `cd` - Drag coefficient (dimensionless)
/// * `v` - Target descent rate (m/s)
///
/// # Errors
/// Returns [`InvalidInputError::NonPositive`] naming the first input that is
/// not a strictly positive finite number, or
/// [`InvalidInputError::DegenerateArea`] when valid but extreme inputs
/// underflow to zero area or overflow to infinity.
pub fn compute_single(g: f64, m: f64, rho: f64, cd: f64, v: f64) -> Result<SingleResult, InvalidInputError> {
    let g = ensure_positive("g", g)?;
    let m = ensure_positive("mass", m)?;
    let rho = ensure_positive("rho", rho)?;
    let cd = ensure_positive("cd", cd)?;
    let v = ensure_positive("descent rate", v)?;

    let total = CanopySize::from_area(check_area(equilibrium_area(g, m, rho, cd, v))?);
    debug!(
        "single canopy: area {:.4} m², diameter {:.4} m (cd {}, v {} m/s)",
        total.area_m2, total.diameter_m, cd, v
    );

    Ok(SingleResult { total })
}

/// Size a drogue + main pair.
///
/// The total area is sized with `cd_avg = (cd_drogue + cd_main) / 2`, then
/// split: the drogue gets `drogue_fraction` of it and the main the rest.
///
/// # Errors
/// Returns [`InvalidInputError`] if any physical input is not strictly
/// positive, `drogue_fraction` lies outside `[0.01, 0.90]`, or the total
/// or either stage area underflows to zero or overflows to infinity.
pub fn compute_dual(
    g: f64,
    m: f64,
    rho: f64,
    cd_drogue: f64,
    cd_main: f64,
    v: f64,
    drogue_fraction: f64,
) -> Result<DualResult, InvalidInputError> {
    let g = ensure_positive("g", g)?;
    let m = ensure_positive("mass", m)?;
    let rho = ensure_positive("rho", rho)?;
    let cd_drogue = ensure_positive("cd_drogue", cd_drogue)?;
    let cd_main = ensure_positive("cd_main", cd_main)?;
    let v = ensure_positive("descent rate", v)?;
    let drogue_fraction = check_drogue_fraction(drogue_fraction)?;

    let cd_avg = 0.5 * (cd_drogue + cd_main);
    let total_area = check_area(equilibrium_area(g, m, rho, cd_avg, v))?;

    let total = CanopySize::from_area(total_area);
    let drogue = CanopySize::from_area(check_area(total_area * drogue_fraction)?);
    let main = CanopySize::from_area(check_area(total_area * (1.0 - drogue_fraction))?);

    debug!(
        "dual deployment: total {:.4} m², drogue {:.4} m², main {:.4} m² (cd_avg {}, fraction {})",
        total.area_m2, drogue.area_m2, main.area_m2, cd_avg, drogue_fraction
    );

    Ok(DualResult {
        total,
        drogue,
        main,
        drogue_fraction,
    })
}

/// Size whichever topology the request describes
pub fn compute(request: &SizingRequest) -> Result<SizingResult, InvalidInputError> {
    let result = match request.deployment {
        Deployment::Single { cd } => SizingResult::Single(compute_single(
            request.gravity,
            request.mass,
            request.air_density,
            cd,
            request.descent_rate,
        )?),
        Deployment::Dual {
            cd_drogue,
            cd_main,
            drogue_fraction,
        } => SizingResult::Dual(compute_dual(
            request.gravity,
            request.mass,
            request.air_density,
            cd_drogue,
            cd_main,
            request.descent_rate,
            drogue_fraction,
        )?),
    };

    if let Some(advisory) = descent_rate_advisory(request.descent_rate) {
        warn!("{}", advisory);
    }

    Ok(result)
}

/// Non-fatal warning about the requested descent rate
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DescentAdvisory {
    pub descent_rate: f64,
    pub threshold: f64,
}

impl std::fmt::Display for DescentAdvisory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Advisory: V = {} m/s is at or above {} m/s, on the high side for safe recovery. \
             Consider a lower target if structurally permissible.",
            self.descent_rate, self.threshold
        )
    }
}

/// Flag descent rates at or above 15 m/s. High rates are allowed, only advised against.
pub fn descent_rate_advisory(descent_rate: f64) -> Option<DescentAdvisory> {
    if descent_rate >= HIGH_DESCENT_RATE_MPS {
        Some(DescentAdvisory {
            descent_rate,
            threshold: HIGH_DESCENT_RATE_MPS,
        })
    } else {
        None
    }
}
