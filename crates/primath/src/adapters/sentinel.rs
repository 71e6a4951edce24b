//! Sentinel-compatible flat functions.
//!
//! ## Purpose
//!
//! This module exposes the ten operations as plain `f64 -> f64` functions
//! for callers that cannot receive a structured error, such as a C ABI.
//! Domain errors are replaced by their reserved sentinel values.
//!
//! ## Key concepts
//!
//! * `divide(a, 0.0)` returns `0.0`.
//! * `sqrt(x)` returns `-1.0` for `x < 0`.
//! * `log(x)` returns `-1.0` for `x <= 0`.
//!
//! ## Invariants
//!
//! * Every non-error result is bit-identical to the checked function's result.
//! * Each degraded error emits one `warn` record through the `log` facade.
//!
//! ## Non-goals
//!
//! * Sentinels are ambiguous with real results (`sqrt` can never return
//!   `-1.0` legitimately, but `log(e^-1)` is `-1.0`). Callers that need to
//!   tell them apart should use the checked functions instead.

// External dependencies
use log::warn;

// Internal dependencies
use crate::math::{arithmetic, transcendental};
use crate::primitives::errors::MathError;

/// Replace an error by its sentinel, recording what happened.
#[inline]
fn degrade(operation: &str, result: Result<f64, MathError>) -> f64 {
    match result {
        Ok(value) => value,
        Err(err) => {
            let sentinel = err.sentinel();
            warn!("{operation}: {err}; returning sentinel {sentinel}");
            sentinel
        }
    }
}

/// `a + b`.
#[inline]
pub fn add(a: f64, b: f64) -> f64 {
    arithmetic::add(a, b)
}

/// `a - b`.
#[inline]
pub fn subtract(a: f64, b: f64) -> f64 {
    arithmetic::subtract(a, b)
}

/// `a * b`.
#[inline]
pub fn multiply(a: f64, b: f64) -> f64 {
    arithmetic::multiply(a, b)
}

/// `a / b`, or `0.0` when `b` is zero.
#[inline]
pub fn divide(a: f64, b: f64) -> f64 {
    degrade("divide", arithmetic::checked_divide(a, b))
}

/// `base` raised to `exponent`.
#[inline]
pub fn power(base: f64, exponent: f64) -> f64 {
    transcendental::power(base, exponent)
}

/// Square root, or `-1.0` when `x < 0`.
#[inline]
pub fn sqrt(x: f64) -> f64 {
    degrade("sqrt", transcendental::checked_sqrt(x))
}

/// Sine (radians).
#[inline]
pub fn sin(x: f64) -> f64 {
    transcendental::sin(x)
}

/// Cosine (radians).
#[inline]
pub fn cos(x: f64) -> f64 {
    transcendental::cos(x)
}

/// Tangent (radians).
#[inline]
pub fn tan(x: f64) -> f64 {
    transcendental::tan(x)
}

/// Natural logarithm, or `-1.0` when `x <= 0`.
#[inline]
pub fn log(x: f64) -> f64 {
    degrade("log", transcendental::checked_log(x))
}
