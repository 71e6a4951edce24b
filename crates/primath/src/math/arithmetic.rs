//! Basic arithmetic on floating-point values.
//!
//! ## Purpose
//!
//! This module provides the four arithmetic operations. Addition,
//! subtraction and multiplication are infallible and exact per IEEE 754;
//! division reports a zero divisor as an error instead of producing an
//! infinity or NaN.
//!
//! ## Invariants
//!
//! * `checked_divide(a, b)` fails exactly when `b == 0` (both `+0.0` and `-0.0`).
//! * A NaN divisor is not a zero divisor; it propagates through the division.
//!
//! ## Non-goals
//!
//! * This module does not choose what a boundary returns on error.

// External dependencies
use num_traits::Float;

// Internal dependencies
use crate::primitives::errors::MathError;

/// Sum of `a` and `b`.
#[inline]
pub fn add<T: Float>(a: T, b: T) -> T {
    a + b
}

/// Difference `a - b`.
#[inline]
pub fn subtract<T: Float>(a: T, b: T) -> T {
    a - b
}

/// Product of `a` and `b`.
#[inline]
pub fn multiply<T: Float>(a: T, b: T) -> T {
    a * b
}

/// Quotient `a / b`, or [`MathError::DivisionByZero`] when `b` is zero.
#[inline]
pub fn checked_divide<T: Float>(a: T, b: T) -> Result<T, MathError> {
    if b == T::zero() {
        return Err(MathError::DivisionByZero {
            dividend: a.to_f64().unwrap_or(f64::NAN),
        });
    }
    Ok(a / b)
}
