#![cfg(feature = "dev")]
//! Tests for the error type and its sentinel mapping.
//!
//! ## Test Organization
//!
//! 1. **Sentinels** - Each error kind's reserved value
//! 2. **Classification** - Domain vs. table errors
//! 3. **Error Messages** - Display output

use primath::internals::primitives::errors::{
    DIVIDE_BY_ZERO_SENTINEL, DOMAIN_SENTINEL, MathError,
};

// ============================================================================
// Sentinel Tests
// ============================================================================

/// Test domain errors map to their legacy sentinels.
#[test]
fn test_domain_sentinels() {
    assert_eq!(DIVIDE_BY_ZERO_SENTINEL, 0.0);
    assert_eq!(DOMAIN_SENTINEL, -1.0);
    assert_eq!(MathError::DivisionByZero { dividend: 3.0 }.sentinel(), 0.0);
    assert_eq!(MathError::NegativeSqrt(-2.0).sentinel(), -1.0);
    assert_eq!(MathError::NonPositiveLog(0.0).sentinel(), -1.0);
}

/// Test table errors map to NaN.
#[test]
fn test_table_error_sentinels() {
    let arity = MathError::ArityMismatch {
        operation: "add",
        expected: 2,
        got: 3,
    };
    assert!(arity.sentinel().is_nan());
    assert!(MathError::UnknownOperation("mod".into()).sentinel().is_nan());
}

// ============================================================================
// Classification Tests
// ============================================================================

/// Test domain error classification.
#[test]
fn test_is_domain_error() {
    assert!(MathError::DivisionByZero { dividend: 1.0 }.is_domain_error());
    assert!(MathError::NegativeSqrt(-1.0).is_domain_error());
    assert!(MathError::NonPositiveLog(-1.0).is_domain_error());
    assert!(!MathError::UnknownOperation("x".into()).is_domain_error());
}

// ============================================================================
// Error Message Tests
// ============================================================================

/// Test Display output includes the offending values.
#[test]
fn test_error_messages() {
    assert_eq!(
        MathError::DivisionByZero { dividend: 5.0 }.to_string(),
        "Division by zero: 5 / 0"
    );
    assert_eq!(
        MathError::NegativeSqrt(-4.0).to_string(),
        "Cannot take square root of negative number: -4"
    );
    assert_eq!(
        MathError::NonPositiveLog(-0.5).to_string(),
        "Cannot take logarithm of non-positive number: -0.5"
    );
    assert_eq!(
        MathError::ArityMismatch {
            operation: "sqrt",
            expected: 1,
            got: 2
        }
        .to_string(),
        "Operation 'sqrt' takes 1 argument(s), got 2"
    );
    assert!(
        MathError::UnknownOperation("mod".into())
            .to_string()
            .starts_with("Unknown operation: mod.")
    );
}

/// Test the error works as a boxed `std::error::Error`.
#[test]
fn test_std_error() {
    let err: Box<dyn std::error::Error> = Box::new(MathError::NegativeSqrt(-1.0));
    assert!(err.to_string().contains("negative"));
}
