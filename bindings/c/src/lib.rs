//! C bindings for primath.
//!
//! Provides a flat C function table over the primath Rust library. Every
//! function takes and returns primitive values only. The header
//! `include/primath.h` is generated by `build.rs`.
//!
//! Two families are exported:
//!
//! * `primath_<op>`: sentinel convention (`divide` by zero gives `0.0`,
//!   `sqrt`/`log` outside their domain give `-1.0`).
//! * `primath_<op>_checked`: a [`PrimathResult`] carrying a status code, for
//!   callers that need to tell an error from a legitimate result.

use std::os::raw::{c_char, c_double, c_int};

use primath::prelude::{
    MathError, bitwise_and, bitwise_or, bitwise_xor, checked_divide, checked_log, checked_sqrt,
    count_set_bits, reverse_bits, sentinel, shift_left, shift_right,
};

// ============================================================================
// Status and Result Types
// ============================================================================

/// Outcome of a checked call.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimathStatus {
    Ok = 0,
    DivisionByZero = 1,
    NegativeSqrt = 2,
    NonPositiveLog = 3,
    InvalidOperation = 4,
}

/// Result struct that can be passed across FFI boundary by value.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct PrimathResult {
    /// Computed value (NaN if status is not OK)
    pub value: c_double,
    /// Outcome of the call
    pub status: PrimathStatus,
}

/// Convert a checked result to its C representation.
fn to_c_result(result: Result<f64, MathError>) -> PrimathResult {
    match result {
        Ok(value) => PrimathResult {
            value,
            status: PrimathStatus::Ok,
        },
        Err(err) => {
            log::debug!("checked call failed: {err}");
            let status = match err {
                MathError::DivisionByZero { .. } => PrimathStatus::DivisionByZero,
                MathError::NegativeSqrt(_) => PrimathStatus::NegativeSqrt,
                MathError::NonPositiveLog(_) => PrimathStatus::NonPositiveLog,
                MathError::ArityMismatch { .. } | MathError::UnknownOperation(_) => {
                    PrimathStatus::InvalidOperation
                }
            };
            PrimathResult {
                value: f64::NAN,
                status,
            }
        }
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Install a logger writing to stderr, filtered by `RUST_LOG`.
///
/// Sentinel substitutions are reported at `warn` level. Calling this more
/// than once, or after the host installed its own logger, has no effect.
#[unsafe(no_mangle)]
pub extern "C" fn primath_init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("primath logging initialized");
    }
}

// ============================================================================
// Sentinel Functions
// ============================================================================

/// `a + b`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_add(a: c_double, b: c_double) -> c_double {
    sentinel::add(a, b)
}

/// `a - b`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_subtract(a: c_double, b: c_double) -> c_double {
    sentinel::subtract(a, b)
}

/// `a * b`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_multiply(a: c_double, b: c_double) -> c_double {
    sentinel::multiply(a, b)
}

/// `a / b`; returns 0.0 when `b` is zero.
#[unsafe(no_mangle)]
pub extern "C" fn primath_divide(a: c_double, b: c_double) -> c_double {
    sentinel::divide(a, b)
}

/// `base` raised to `exponent`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_power(base: c_double, exponent: c_double) -> c_double {
    sentinel::power(base, exponent)
}

/// Square root; returns -1.0 when `x < 0`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_sqrt(x: c_double) -> c_double {
    sentinel::sqrt(x)
}

/// Sine of `x` in radians.
#[unsafe(no_mangle)]
pub extern "C" fn primath_sin(x: c_double) -> c_double {
    sentinel::sin(x)
}

/// Cosine of `x` in radians.
#[unsafe(no_mangle)]
pub extern "C" fn primath_cos(x: c_double) -> c_double {
    sentinel::cos(x)
}

/// Tangent of `x` in radians.
#[unsafe(no_mangle)]
pub extern "C" fn primath_tan(x: c_double) -> c_double {
    sentinel::tan(x)
}

/// Natural logarithm; returns -1.0 when `x <= 0`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_log(x: c_double) -> c_double {
    sentinel::log(x)
}

// ============================================================================
// Checked Functions
// ============================================================================

/// `a / b`, with `PRIMATH_STATUS_DIVISION_BY_ZERO` when `b` is zero.
#[unsafe(no_mangle)]
pub extern "C" fn primath_divide_checked(a: c_double, b: c_double) -> PrimathResult {
    to_c_result(checked_divide(a, b))
}

/// Square root, with `PRIMATH_STATUS_NEGATIVE_SQRT` when `x < 0`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_sqrt_checked(x: c_double) -> PrimathResult {
    to_c_result(checked_sqrt(x))
}

/// Natural logarithm, with `PRIMATH_STATUS_NON_POSITIVE_LOG` when `x <= 0`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_log_checked(x: c_double) -> PrimathResult {
    to_c_result(checked_log(x))
}

/// Static, NUL-terminated description of a status code.
///
/// Takes the raw integer so that out-of-range codes from C are handled
/// instead of being undefined behavior. The returned pointer must not be freed.
#[unsafe(no_mangle)]
pub extern "C" fn primath_status_message(status: c_int) -> *const c_char {
    let message = match status {
        0 => c"ok",
        1 => c"division by zero",
        2 => c"square root of negative number",
        3 => c"logarithm of non-positive number",
        4 => c"invalid operation",
        _ => c"unknown status",
    };
    message.as_ptr()
}

// ============================================================================
// Bitwise Functions
// ============================================================================

/// `a & b`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_bitwise_and(a: u64, b: u64) -> u64 {
    bitwise_and(a, b)
}

/// `a | b`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_bitwise_or(a: u64, b: u64) -> u64 {
    bitwise_or(a, b)
}

/// `a ^ b`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_bitwise_xor(a: u64, b: u64) -> u64 {
    bitwise_xor(a, b)
}

/// `value << (shift % 64)`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_shift_left(value: u64, shift: u64) -> u64 {
    shift_left(value, shift)
}

/// `value >> (shift % 64)`, logical.
#[unsafe(no_mangle)]
pub extern "C" fn primath_shift_right(value: u64, shift: u64) -> u64 {
    shift_right(value, shift)
}

/// Number of set bits in `value`.
#[unsafe(no_mangle)]
pub extern "C" fn primath_count_set_bits(value: u64) -> u64 {
    count_set_bits(value)
}

/// `value` with its bit order reversed.
#[unsafe(no_mangle)]
pub extern "C" fn primath_reverse_bits(value: u64) -> u64 {
    reverse_bits(value)
}

// ============================================================================
// Legacy Symbol Names
// ============================================================================

#[cfg(feature = "legacy-symbols")]
#[unsafe(no_mangle)]
pub extern "C" fn c_add(a: c_double, b: c_double) -> c_double {
    primath_add(a, b)
}

#[cfg(feature = "legacy-symbols")]
#[unsafe(no_mangle)]
pub extern "C" fn c_subtract(a: c_double, b: c_double) -> c_double {
    primath_subtract(a, b)
}

#[cfg(feature = "legacy-symbols")]
#[unsafe(no_mangle)]
pub extern "C" fn c_multiply(a: c_double, b: c_double) -> c_double {
    primath_multiply(a, b)
}

#[cfg(feature = "legacy-symbols")]
#[unsafe(no_mangle)]
pub extern "C" fn c_divide(a: c_double, b: c_double) -> c_double {
    primath_divide(a, b)
}

#[cfg(feature = "legacy-symbols")]
#[unsafe(no_mangle)]
pub extern "C" fn cpp_power(base: c_double, exponent: c_double) -> c_double {
    primath_power(base, exponent)
}

#[cfg(feature = "legacy-symbols")]
#[unsafe(no_mangle)]
pub extern "C" fn cpp_sqrt(x: c_double) -> c_double {
    primath_sqrt(x)
}

#[cfg(feature = "legacy-symbols")]
#[unsafe(no_mangle)]
pub extern "C" fn cpp_sin(x: c_double) -> c_double {
    primath_sin(x)
}

#[cfg(feature = "legacy-symbols")]
#[unsafe(no_mangle)]
pub extern "C" fn cpp_cos(x: c_double) -> c_double {
    primath_cos(x)
}

#[cfg(feature = "legacy-symbols")]
#[unsafe(no_mangle)]
pub extern "C" fn cpp_tan(x: c_double) -> c_double {
    primath_tan(x)
}

#[cfg(feature = "legacy-symbols")]
#[unsafe(no_mangle)]
pub extern "C" fn cpp_log(x: c_double) -> c_double {
    primath_log(x)
}
