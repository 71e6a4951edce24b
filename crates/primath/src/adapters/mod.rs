//! Layer 3: Adapters
//!
//! # Purpose
//!
//! This layer adapts the checked math functions to the calling conventions
//! of outer boundaries.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Adapters ← You are here
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Flat functions returning sentinel values on error.
pub mod sentinel;
