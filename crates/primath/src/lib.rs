//! # primath — pure math primitives for native boundaries
//!
//! A small set of stateless floating-point functions (`add`, `subtract`,
//! `multiply`, `divide`, `power`, `sqrt`, `sin`, `cos`, `tan`, `log`) meant
//! to be exported through a C ABI and called from a host language.
//!
//! ## Two calling conventions
//!
//! Inside Rust, fallible operations return a tagged result:
//!
//! ```rust
//! use primath::prelude::*;
//!
//! assert_eq!(checked_sqrt(4.0_f64)?, 2.0);
//! assert_eq!(checked_divide(1.0_f64, 0.0), Err(MathError::DivisionByZero { dividend: 1.0 }));
//! # Result::<(), MathError>::Ok(())
//! ```
//!
//! At a boundary that can only carry a `double`, the sentinel adapter keeps
//! the historical convention:
//!
//! ```rust
//! use primath::prelude::sentinel;
//!
//! assert_eq!(sentinel::divide(5.0, 0.0), 0.0);
//! assert_eq!(sentinel::sqrt(-4.0), -1.0);
//! assert_eq!(sentinel::log(0.0), -1.0);
//! ```
//!
//! | Operation | Error condition | Sentinel |
//! |-----------|-----------------|----------|
//! | divide    | `b == 0`        | `0.0`    |
//! | sqrt      | `x < 0`         | `-1.0`   |
//! | log       | `x <= 0`        | `-1.0`   |
//!
//! Sentinels are indistinguishable from legitimate results (`log(1/e)` is
//! also `-1.0`); prefer the checked functions whenever the caller can
//! receive a `Result`.
//!
//! ## Operation table
//!
//! ```rust
//! use primath::prelude::*;
//!
//! let op: Operation = "pow".parse()?;
//! assert_eq!(op.evaluate(&[2.0_f64, 10.0])?, 1024.0);
//! assert_eq!(Operation::Log.evaluate_or_sentinel(&[-5.0]), -1.0);
//! # Result::<(), MathError>::Ok(())
//! ```
//!
//! ## Logging
//!
//! Every degradation of an error into a sentinel is reported at `warn`
//! level through the [`log`](https://docs.rs/log) facade. Install any
//! logger to see them.
//!
//! ## Minimal Usage (no_std / Embedded)
//!
//! ```toml
//! [dependencies]
//! primath = { version = "0.1", default-features = false }
//! ```
//!
//! Without `std`, transcendental functions are provided by `libm` through
//! `num-traits`.

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Layer 1: Primitives - shared error type.
mod primitives;

// Layer 2: Math - pure numeric functions.
mod math;

// Layer 3: Adapters - boundary calling conventions.
mod adapters;

// Operation table.
mod api;

// Standard primath prelude.
pub mod prelude {
    pub use crate::adapters::sentinel;
    pub use crate::api::{Arity, DIVIDE_BY_ZERO_SENTINEL, DOMAIN_SENTINEL, MathError, Operation};
    pub use crate::math::arithmetic::{add, checked_divide, multiply, subtract};
    pub use crate::math::bitwise::{
        bitwise_and, bitwise_or, bitwise_xor, count_set_bits, reverse_bits, shift_left,
        shift_right,
    };
    pub use crate::math::transcendental::{checked_log, checked_sqrt, cos, power, sin, tan};
}

// Internal modules for development and testing.
//
// This module re-exports internal modules for development and testing purposes.
// It is only available with the `dev` feature enabled.
#[cfg(feature = "dev")]
pub mod internals {
    pub mod primitives {
        pub use crate::primitives::*;
    }
    pub mod math {
        pub use crate::math::*;
    }
    pub mod adapters {
        pub use crate::adapters::*;
    }
    pub mod api {
        pub use crate::api::*;
    }
}
