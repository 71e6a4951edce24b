//! Layer 2: Math
//!
//! # Purpose
//!
//! This layer provides the pure numeric functions. Fallible operations
//! return `Result<T, MathError>`; nothing here decides how an error is
//! presented to a caller across a language boundary.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Adapters
//!   ↓
//! Layer 2: Math ← You are here
//!   ↓
//! Layer 1: Primitives
//! ```

/// Addition, subtraction, multiplication and checked division.
pub mod arithmetic;

/// Power, checked square root, trigonometry and checked logarithm.
pub mod transcendental;

/// 64-bit integer bit manipulation.
pub mod bitwise;
