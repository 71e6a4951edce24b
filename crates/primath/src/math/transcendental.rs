//! Powers, roots, trigonometry and logarithms.
//!
//! ## Purpose
//!
//! This module wraps the standard floating-point functions. `power` and the
//! trigonometric functions follow IEEE 754 semantics without extra checks;
//! `checked_sqrt` and `checked_log` reject inputs outside their real domain.
//!
//! ## Design notes
//!
//! * **Strict comparisons**: `sqrt` rejects `x < 0`, so `-0.0` is accepted
//!   and yields `-0.0`. `log` rejects `x <= 0`, so both zeros are errors.
//! * **NaN passes through**: a NaN input fails neither comparison and comes
//!   back as NaN rather than as a domain error.
//!
//! ## Non-goals
//!
//! * This module does not reduce large trigonometric arguments itself.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MathError;

/// `base` raised to `exponent`.
///
/// Invalid combinations (e.g. a negative base with a fractional exponent)
/// produce NaN, and overflow produces an infinity, as `pow` does.
#[inline]
pub fn power<T: Float>(base: T, exponent: T) -> T {
    base.powf(exponent)
}

/// Square root of `x`, or [`MathError::NegativeSqrt`] when `x < 0`.
#[inline]
pub fn checked_sqrt<T: Float>(x: T) -> Result<T, MathError> {
    if x < T::zero() {
        return Err(MathError::NegativeSqrt(x.to_f64().unwrap_or(f64::NAN)));
    }
    Ok(x.sqrt())
}

/// Sine of `x` (radians).
#[inline]
pub fn sin<T: Float>(x: T) -> T {
    x.sin()
}

/// Cosine of `x` (radians).
#[inline]
pub fn cos<T: Float>(x: T) -> T {
    x.cos()
}

/// Tangent of `x` (radians).
#[inline]
pub fn tan<T: Float>(x: T) -> T {
    x.tan()
}

/// Natural logarithm of `x`, or [`MathError::NonPositiveLog`] when `x <= 0`.
#[inline]
pub fn checked_log<T: Float>(x: T) -> Result<T, MathError> {
    if x <= T::zero() {
        return Err(MathError::NonPositiveLog(x.to_f64().unwrap_or(f64::NAN)));
    }
    Ok(x.ln())
}
