//! Error types for math primitive operations.
//!
//! ## Purpose
//!
//! This module defines the domain errors the checked primitives can report,
//! plus the errors of the operation table (unknown names, wrong argument
//! counts).
//!
//! ## Design notes
//!
//! * **Contextual**: Errors carry the offending input so callers can report it.
//! * **Sentinel mapping**: Every domain error knows the legacy sentinel value
//!   that flat boundaries return in its place.
//! * **No-std**: Supports `no_std` environments by using `alloc` for dynamic messages.
//! * **Trait Implementation**: Implements `Display` and `std::error::Error` (when `std` is enabled).
//!
//! ## Key concepts
//!
//! 1. **Domain errors**: Division by zero, square root of a negative, log of a non-positive.
//! 2. **Table errors**: Unknown operation names and arity mismatches.
//! 3. **Sentinels**: `0.0` for division by zero, `-1.0` for sqrt and log.
//!
//! ## Invariants
//!
//! * `sentinel()` is total and never panics.
//! * Table errors map to NaN; they never reach the flat functions.
//!
//! ## Non-goals
//!
//! * This module does not perform the domain checks itself.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::error::Error;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{Display, Formatter, Result};

// ============================================================================
// Sentinel Values
// ============================================================================

/// Value returned by the flat `divide` when the divisor is zero.
pub const DIVIDE_BY_ZERO_SENTINEL: f64 = 0.0;

/// Value returned by the flat `sqrt` and `log` on a domain error.
pub const DOMAIN_SENTINEL: f64 = -1.0;

// ============================================================================
// Error Type
// ============================================================================

/// Error type for math primitive operations.
#[derive(Debug, Clone, PartialEq)]
pub enum MathError {
    /// The divisor was zero (either sign).
    DivisionByZero {
        /// The dividend that was being divided.
        dividend: f64,
    },

    /// Square root of a value strictly below zero.
    NegativeSqrt(f64),

    /// Natural logarithm of a value less than or equal to zero.
    NonPositiveLog(f64),

    /// An operation was evaluated with the wrong number of arguments.
    ArityMismatch {
        /// Name of the operation.
        operation: &'static str,
        /// Number of arguments the operation takes.
        expected: usize,
        /// Number of arguments supplied.
        got: usize,
    },

    /// No operation is registered under the given name.
    UnknownOperation(String),
}

impl MathError {
    /// The legacy sentinel a flat boundary returns in place of this error.
    pub fn sentinel(&self) -> f64 {
        match self {
            Self::DivisionByZero { .. } => DIVIDE_BY_ZERO_SENTINEL,
            Self::NegativeSqrt(_) | Self::NonPositiveLog(_) => DOMAIN_SENTINEL,
            Self::ArityMismatch { .. } | Self::UnknownOperation(_) => f64::NAN,
        }
    }

    /// Whether this error comes from the numeric domain of an operation
    /// rather than from the operation table.
    pub fn is_domain_error(&self) -> bool {
        matches!(
            self,
            Self::DivisionByZero { .. } | Self::NegativeSqrt(_) | Self::NonPositiveLog(_)
        )
    }
}

// ============================================================================
// Display Implementation
// ============================================================================

impl Display for MathError {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        match self {
            Self::DivisionByZero { dividend } => {
                write!(f, "Division by zero: {dividend} / 0")
            }
            Self::NegativeSqrt(x) => {
                write!(f, "Cannot take square root of negative number: {x}")
            }
            Self::NonPositiveLog(x) => {
                write!(f, "Cannot take logarithm of non-positive number: {x}")
            }
            Self::ArityMismatch {
                operation,
                expected,
                got,
            } => {
                write!(
                    f,
                    "Operation '{operation}' takes {expected} argument(s), got {got}"
                )
            }
            Self::UnknownOperation(name) => write!(
                f,
                "Unknown operation: {name}. Valid: add, subtract, multiply, divide, power, sqrt, sin, cos, tan, log"
            ),
        }
    }
}

// ============================================================================
// Standard Error Trait
// ============================================================================

#[cfg(feature = "std")]
impl Error for MathError {}
