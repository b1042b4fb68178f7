/// Physical constants and unit conversions used in canopy sizing

/// Default gravitational acceleration in m/s²
pub const DEFAULT_GRAVITY_MPS2: f64 = 9.81;

/// Standard air density at sea level (kg/m³)
pub const STANDARD_AIR_DENSITY: f64 = 1.225;

/// Default drag coefficient for a flat round canopy
pub const DEFAULT_DRAG_COEFFICIENT: f64 = 1.2;

/// Default dry mass of the vehicle after burnout (kg)
pub const DEFAULT_DRY_MASS_KG: f64 = 10.0;

/// Default target descent rate (m/s)
pub const DEFAULT_DESCENT_RATE_MPS: f64 = 10.0;

/// Conversion factor: square meters to square feet
pub const M2_TO_FT2: f64 = 10.7639;

/// Conversion factor: meters to inches
pub const M_TO_IN: f64 = 39.3701;

/// Conversion factor: meters to feet
pub const M_TO_FT: f64 = 3.28084;

/// Inches per foot, used for the sub-foot purchase fallback
pub const INCHES_PER_FOOT: f64 = 12.0;

// Dual deployment split

/// Share of the total canopy area given to the drogue when none is specified
pub const DEFAULT_DROGUE_FRACTION: f64 = 0.20;

/// Smallest accepted drogue fraction (inclusive)
pub const MIN_DROGUE_FRACTION: f64 = 0.01;

/// Largest accepted drogue fraction (inclusive)
pub const MAX_DROGUE_FRACTION: f64 = 0.90;

// Safety margin

/// Recommended safety factor applied to canopy area
pub const RECOMMENDED_SAFETY_FACTOR: f64 = 1.1;

/// Smallest accepted safety factor; below this a canopy would be undersized on purpose
pub const MIN_SAFETY_FACTOR: f64 = 1.0;

/// Descent rate (m/s) at or above which recovery is considered on the high side.
///
/// Crossing it produces an advisory, never an error.
pub const HIGH_DESCENT_RATE_MPS: f64 = 15.0;

/// Diameters below this many feet are sold in inches rather than whole feet
pub const PURCHASE_FOOT_THRESHOLD: f64 = 1.0;
