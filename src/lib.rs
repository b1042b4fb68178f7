//! # Parachute Engine
//!
//! Sizing engine for round parachute canopies used in model and amateur
//! rocket recovery, covering single canopies and drogue + main dual
//! deployment. Every operation is a pure function of its inputs.

// Re-export the main types and functions
pub use error::{InvalidInputError, ParachuteError, Result};
pub use sizing::{
    circle_diameter, compute, compute_dual, compute_single, descent_rate_advisory, CanopySize,
    Deployment, DescentAdvisory, DualResult, SingleResult, SizingRequest, SizingResult, Stage,
};
pub use safety::{apply_safety_factor, SafetyFactor, ScaledQuantity};
pub use rounding::{purchase_size, round_for_purchase, PurchaseSize, RoundingPolicy};
pub use units::{convert_units, ConversionKind};
pub use report::{SizingReport, StageRow};
pub use config::SizingConfig;

// Module declarations
pub mod constants;
pub mod config;
pub mod error;
pub mod ffi;
mod report;
mod rounding;
mod safety;
mod sizing;
mod units;
