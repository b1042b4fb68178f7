//! Purchase-size rounding.
//!
//! Canopies are sold in whole feet, except below one foot where they are
//! sold in whole inches. A sub-foot diameter is therefore never rounded to
//! feet: it falls back to the nearest inch instead of becoming "0 ft".
//!
//! "Nearest" breaks exact halves toward the even whole number, so 2.5 ft
//! becomes 2 ft and 4.5 in becomes 4 in.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{INCHES_PER_FOOT, PURCHASE_FOOT_THRESHOLD};
use crate::safety::SafetyFactor;
use crate::sizing::CanopySize;

/// How a diameter in feet is rounded for purchase
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundingPolicy {
    /// Report the diameter unrounded
    #[default]
    None,
    /// Nearest whole foot
    Nearest,
    /// Next whole foot up; never undersizes
    Ceiling,
    /// Whole foot down; trades margin for weight and cost
    Floor,
}

impl RoundingPolicy {
    pub const ALL: [RoundingPolicy; 4] = [
        RoundingPolicy::None,
        RoundingPolicy::Nearest,
        RoundingPolicy::Ceiling,
        RoundingPolicy::Floor,
    ];

    /// Round a value in feet under this policy, with no threshold handling
    pub fn round_feet(self, value_ft: f64) -> f64 {
        match self {
            RoundingPolicy::None => value_ft,
            RoundingPolicy::Nearest => value_ft.round_ties_even(),
            RoundingPolicy::Ceiling => value_ft.ceil(),
            RoundingPolicy::Floor => value_ft.floor(),
        }
    }
}

impl fmt::Display for RoundingPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RoundingPolicy::None => "none",
            RoundingPolicy::Nearest => "nearest",
            RoundingPolicy::Ceiling => "ceiling",
            RoundingPolicy::Floor => "floor",
        };
        f.write_str(name)
    }
}

impl FromStr for RoundingPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(RoundingPolicy::None),
            "nearest" => Ok(RoundingPolicy::Nearest),
            "ceiling" | "ceil" | "up" => Ok(RoundingPolicy::Ceiling),
            "floor" | "down" => Ok(RoundingPolicy::Floor),
            other => Err(format!(
                "unknown rounding policy '{}' (expected none, nearest, ceiling or floor)",
                other
            )),
        }
    }
}

/// Diameter to buy, in the unit the canopy is sold in
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "unit", content = "value", rename_all = "lowercase")]
pub enum PurchaseSize {
    Feet(f64),
    Inches(f64),
}

impl PurchaseSize {
    pub fn is_sub_foot(&self) -> bool {
        matches!(self, PurchaseSize::Inches(_))
    }
}

impl fmt::Display for PurchaseSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            PurchaseSize::Feet(ft) if ft.fract() == 0.0 => write!(f, "{:.0} ft", ft),
            PurchaseSize::Feet(ft) => write!(f, "{:.2} ft", ft),
            PurchaseSize::Inches(inches) => write!(f, "< 1 ft (≈ {:.0} in)", inches),
        }
    }
}

/// Round a (safety-factored) diameter in feet for purchase.
///
/// Diameters of one foot or more are rounded under `policy`. Anything below
/// one foot skips foot rounding entirely and is reported as the nearest
/// whole inch, whatever the policy.
pub fn round_for_purchase(diameter_ft: f64, policy: RoundingPolicy) -> PurchaseSize {
    round_with_inches(diameter_ft, diameter_ft * INCHES_PER_FOOT, policy)
}

/// Threshold on feet, fall back to the caller's own inch figure below it
fn round_with_inches(diameter_ft: f64, diameter_in: f64, policy: RoundingPolicy) -> PurchaseSize {
    if diameter_ft < PURCHASE_FOOT_THRESHOLD {
        PurchaseSize::Inches(diameter_in.round_ties_even())
    } else {
        PurchaseSize::Feet(policy.round_feet(diameter_ft))
    }
}

/// Purchase size for a canopy once the safety margin is added.
///
/// The margin is applied to the diameter as `sqrt(factor)` before the
/// threshold check, so the inch fallback and the foot path see the same
/// safety-factored diameter. The inch figure is converted from meters
/// directly rather than from feet.
pub fn purchase_size(canopy: &CanopySize, safety: SafetyFactor, policy: RoundingPolicy) -> PurchaseSize {
    round_with_inches(
        safety.scale_diameter(canopy.diameter_ft()),
        safety.scale_diameter(canopy.diameter_in()),
        policy,
    )
}
