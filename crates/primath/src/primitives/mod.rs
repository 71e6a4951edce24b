//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the error type shared by every other layer. It has
//! zero internal dependencies within the crate.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: API
//!   ↓
//! Layer 3: Adapters
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Shared error types and sentinel values.
pub mod errors;
