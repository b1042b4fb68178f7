//! FFI bindings for embedding the sizing engine in C, Swift or other native hosts

use crate::rounding::{round_for_purchase, PurchaseSize, RoundingPolicy};
use crate::sizing::{compute_dual, compute_single, CanopySize};
use std::os::raw::{c_char, c_double, c_int};

/// Success
pub const PARACHUTE_OK: c_int = 0;
/// An output pointer was null
pub const PARACHUTE_ERR_NULL_POINTER: c_int = -1;
/// Inputs failed validation; the output was left untouched
pub const PARACHUTE_ERR_INVALID_INPUT: c_int = -2;

// FFI-safe structures with C-compatible layouts

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FFICanopySize {
    pub area_m2: c_double,
    pub area_ft2: c_double,
    pub diameter_m: c_double,
    pub diameter_in: c_double,
    pub diameter_ft: c_double,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FFIDualResult {
    pub total: FFICanopySize,
    pub drogue: FFICanopySize,
    pub main: FFICanopySize,
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Default)]
pub struct FFIPurchaseSize {
    pub value: c_double,
    pub is_inches: c_int,             // 0=feet, 1=inches (sub-foot fallback)
}

impl From<CanopySize> for FFICanopySize {
    fn from(canopy: CanopySize) -> Self {
        Self {
            area_m2: canopy.area_m2,
            area_ft2: canopy.area_ft2(),
            diameter_m: canopy.diameter_m,
            diameter_in: canopy.diameter_in(),
            diameter_ft: canopy.diameter_ft(),
        }
    }
}

fn policy_from_code(code: c_int) -> RoundingPolicy {
    match code {
        1 => RoundingPolicy::Nearest,
        2 => RoundingPolicy::Ceiling,
        3 => RoundingPolicy::Floor,
        _ => RoundingPolicy::None,
    }
}

/// Size a single canopy into `out`
#[no_mangle]
pub extern "C" fn parachute_compute_single(
    g: c_double,
    mass: c_double,
    rho: c_double,
    cd: c_double,
    descent_rate: c_double,
    out: *mut FFICanopySize,
) -> c_int {
    if out.is_null() {
        return PARACHUTE_ERR_NULL_POINTER;
    }

    match compute_single(g, mass, rho, cd, descent_rate) {
        Ok(result) => {
            unsafe { *out = result.total.into() };
            PARACHUTE_OK
        }
        Err(_) => PARACHUTE_ERR_INVALID_INPUT,
    }
}

/// Size a drogue + main pair into `out`
#[no_mangle]
pub extern "C" fn parachute_compute_dual(
    g: c_double,
    mass: c_double,
    rho: c_double,
    cd_drogue: c_double,
    cd_main: c_double,
    descent_rate: c_double,
    drogue_fraction: c_double,
    out: *mut FFIDualResult,
) -> c_int {
    if out.is_null() {
        return PARACHUTE_ERR_NULL_POINTER;
    }

    match compute_dual(g, mass, rho, cd_drogue, cd_main, descent_rate, drogue_fraction) {
        Ok(result) => {
            unsafe {
                *out = FFIDualResult {
                    total: result.total.into(),
                    drogue: result.drogue.into(),
                    main: result.main.into(),
                };
            }
            PARACHUTE_OK
        }
        Err(_) => PARACHUTE_ERR_INVALID_INPUT,
    }
}

/// Round a diameter in feet for purchase. The diameter must be positive and finite.
/// Policy codes: 0=none, 1=nearest, 2=ceiling, 3=floor (unknown codes mean none).
#[no_mangle]
pub extern "C" fn parachute_round_for_purchase(
    diameter_ft: c_double,
    policy: c_int,
    out: *mut FFIPurchaseSize,
) -> c_int {
    if out.is_null() {
        return PARACHUTE_ERR_NULL_POINTER;
    }
    if !(diameter_ft.is_finite() && diameter_ft > 0.0) {
        return PARACHUTE_ERR_INVALID_INPUT;
    }

    let (value, is_inches) = match round_for_purchase(diameter_ft, policy_from_code(policy)) {
        PurchaseSize::Feet(ft) => (ft, 0),
        PurchaseSize::Inches(inches) => (inches, 1),
    };
    unsafe { *out = FFIPurchaseSize { value, is_inches } };
    PARACHUTE_OK
}

// Get library version
#[no_mangle]
pub extern "C" fn parachute_get_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}
