//! High-level API over the math primitives.
//!
//! ## Purpose
//!
//! This module provides [`Operation`], a table of the ten floating-point
//! operations that can be looked up by name and evaluated over an argument
//! slice, either with a tagged result or with the sentinel convention.
//!
//! ## Design notes
//!
//! * **Name lookup**: Case-insensitive, with the usual short aliases
//!   (`sub`, `mul`, `div`, `pow`, `ln`).
//! * **Arity checked**: Evaluating with the wrong number of arguments is an
//!   error, never a panic.
//! * **Type-Safe**: Generic over `Float` types for flexible precision.
//!
//! ## Key concepts
//!
//! * [`Operation::evaluate`] returns `Result<T, MathError>`.
//! * [`Operation::evaluate_or_sentinel`] returns the same `f64` the flat
//!   functions in [`crate::adapters::sentinel`] return.

// Feature-gated imports
#[cfg(not(feature = "std"))]
use alloc::string::String;
#[cfg(feature = "std")]
use std::string::String;

// External dependencies
use core::fmt::{self, Display, Formatter};
use core::str::FromStr;
use log::warn;
use num_traits::Float;

// Internal dependencies
use crate::adapters::sentinel;
use crate::math::{arithmetic, transcendental};

// Publicly re-exported types
pub use crate::primitives::errors::{DIVIDE_BY_ZERO_SENTINEL, DOMAIN_SENTINEL, MathError};

// ============================================================================
// Arity
// ============================================================================

/// Number of operands an operation takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Arity {
    /// One operand.
    Unary,

    /// Two operands.
    Binary,
}

impl Arity {
    /// Operand count as a number.
    pub fn count(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

// ============================================================================
// Operation Table
// ============================================================================

/// One of the floating-point operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `a + b`.
    Add,

    /// `a - b`.
    Subtract,

    /// `a * b`.
    Multiply,

    /// `a / b`; fails on a zero divisor.
    Divide,

    /// `base ^ exponent`.
    Power,

    /// Square root; fails below zero.
    Sqrt,

    /// Sine (radians).
    Sin,

    /// Cosine (radians).
    Cos,

    /// Tangent (radians).
    Tan,

    /// Natural logarithm; fails at or below zero.
    Log,
}

impl Operation {
    /// Every operation, in table order.
    pub const ALL: [Operation; 10] = [
        Self::Add,
        Self::Subtract,
        Self::Multiply,
        Self::Divide,
        Self::Power,
        Self::Sqrt,
        Self::Sin,
        Self::Cos,
        Self::Tan,
        Self::Log,
    ];

    /// Canonical lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
            Self::Power => "power",
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
        }
    }

    /// Number of operands.
    pub fn arity(self) -> Arity {
        match self {
            Self::Add | Self::Subtract | Self::Multiply | Self::Divide | Self::Power => {
                Arity::Binary
            }
            Self::Sqrt | Self::Sin | Self::Cos | Self::Tan | Self::Log => Arity::Unary,
        }
    }

    /// Whether the operation can report a domain error.
    pub fn is_fallible(self) -> bool {
        matches!(self, Self::Divide | Self::Sqrt | Self::Log)
    }

    fn check_arity(self, got: usize) -> Result<(), MathError> {
        let expected = self.arity().count();
        if got != expected {
            return Err(MathError::ArityMismatch {
                operation: self.name(),
                expected,
                got,
            });
        }
        Ok(())
    }

    /// Evaluate over `args`, returning a tagged result.
    pub fn evaluate<T: Float>(self, args: &[T]) -> Result<T, MathError> {
        self.check_arity(args.len())?;

        match self {
            Self::Add => Ok(arithmetic::add(args[0], args[1])),
            Self::Subtract => Ok(arithmetic::subtract(args[0], args[1])),
            Self::Multiply => Ok(arithmetic::multiply(args[0], args[1])),
            Self::Divide => arithmetic::checked_divide(args[0], args[1]),
            Self::Power => Ok(transcendental::power(args[0], args[1])),
            Self::Sqrt => transcendental::checked_sqrt(args[0]),
            Self::Sin => Ok(transcendental::sin(args[0])),
            Self::Cos => Ok(transcendental::cos(args[0])),
            Self::Tan => Ok(transcendental::tan(args[0])),
            Self::Log => transcendental::checked_log(args[0]),
        }
    }

    /// Evaluate over `args` with the sentinel convention.
    ///
    /// Domain errors give the operation's sentinel; a wrong argument count
    /// gives NaN.
    pub fn evaluate_or_sentinel(self, args: &[f64]) -> f64 {
        if let Err(err) = self.check_arity(args.len()) {
            warn!("{err}; returning NaN");
            return err.sentinel();
        }

        match self {
            Self::Add => sentinel::add(args[0], args[1]),
            Self::Subtract => sentinel::subtract(args[0], args[1]),
            Self::Multiply => sentinel::multiply(args[0], args[1]),
            Self::Divide => sentinel::divide(args[0], args[1]),
            Self::Power => sentinel::power(args[0], args[1]),
            Self::Sqrt => sentinel::sqrt(args[0]),
            Self::Sin => sentinel::sin(args[0]),
            Self::Cos => sentinel::cos(args[0]),
            Self::Tan => sentinel::tan(args[0]),
            Self::Log => sentinel::log(args[0]),
        }
    }
}

impl Display for Operation {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = MathError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let trimmed = name.trim();
        let found = Self::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(trimmed));
        if let Some(op) = found {
            return Ok(op);
        }

        const ALIASES: [(&str, Operation); 5] = [
            ("sub", Operation::Subtract),
            ("mul", Operation::Multiply),
            ("div", Operation::Divide),
            ("pow", Operation::Power),
            ("ln", Operation::Log),
        ];
        ALIASES
            .into_iter()
            .find(|(alias, _)| alias.eq_ignore_ascii_case(trimmed))
            .map(|(_, op)| op)
            .ok_or_else(|| MathError::UnknownOperation(String::from(name)))
    }
}
