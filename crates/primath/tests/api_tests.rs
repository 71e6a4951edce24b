//! Tests for the operation table.
//!
//! ## Test Organization
//!
//! 1. **Lookup** - Parsing names and aliases
//! 2. **Metadata** - Arity and fallibility
//! 3. **Evaluation** - Tagged and sentinel dispatch

use approx::assert_relative_eq;

use primath::prelude::*;

// ============================================================================
// Lookup Tests
// ============================================================================

/// Test every canonical name parses back to its operation.
#[test]
fn test_parse_canonical_names() {
    for op in Operation::ALL {
        let parsed: Operation = op.name().parse().unwrap();
        assert_eq!(parsed, op);
        assert_eq!(op.to_string(), op.name());
    }
}

/// Test parsing ignores case and surrounding whitespace.
#[test]
fn test_parse_case_insensitive() {
    assert_eq!("SQRT".parse::<Operation>(), Ok(Operation::Sqrt));
    assert_eq!("  Divide ".parse::<Operation>(), Ok(Operation::Divide));
    assert_eq!(" POW ".parse::<Operation>(), Ok(Operation::Power));
}

/// Test short aliases.
#[test]
fn test_parse_aliases() {
    assert_eq!("sub".parse::<Operation>(), Ok(Operation::Subtract));
    assert_eq!("mul".parse::<Operation>(), Ok(Operation::Multiply));
    assert_eq!("div".parse::<Operation>(), Ok(Operation::Divide));
    assert_eq!("pow".parse::<Operation>(), Ok(Operation::Power));
    assert_eq!("LN".parse::<Operation>(), Ok(Operation::Log));
}

/// Test unknown names are rejected with the original text.
#[test]
fn test_parse_unknown() {
    assert_eq!(
        "modulo".parse::<Operation>(),
        Err(MathError::UnknownOperation("modulo".to_string()))
    );
    assert!("".parse::<Operation>().is_err());
}

// ============================================================================
// Metadata Tests
// ============================================================================

/// Test arity of each operation.
#[test]
fn test_arity() {
    let binary = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
    ];
    for op in Operation::ALL {
        let expected = if binary.contains(&op) {
            Arity::Binary
        } else {
            Arity::Unary
        };
        assert_eq!(op.arity(), expected, "{op}");
    }
    assert_eq!(Arity::Unary.count(), 1);
    assert_eq!(Arity::Binary.count(), 2);
}

/// Test only divide, sqrt and log are fallible.
#[test]
fn test_fallible_operations() {
    let fallible: Vec<_> = Operation::ALL
        .into_iter()
        .filter(|op| op.is_fallible())
        .collect();
    assert_eq!(
        fallible,
        vec![Operation::Divide, Operation::Sqrt, Operation::Log]
    );
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test tagged evaluation agrees with the free functions.
#[test]
fn test_evaluate_matches_functions() {
    assert_eq!(Operation::Add.evaluate(&[2.0, 3.0]), Ok(5.0));
    assert_eq!(Operation::Subtract.evaluate(&[2.0, 3.0]), Ok(-1.0));
    assert_eq!(Operation::Multiply.evaluate(&[2.0, 3.0]), Ok(6.0));
    assert_eq!(Operation::Divide.evaluate(&[3.0, 2.0]), Ok(1.5));
    assert_eq!(Operation::Power.evaluate(&[2.0, 10.0]), Ok(1024.0));
    assert_eq!(Operation::Sqrt.evaluate(&[4.0]), Ok(2.0));
    assert_eq!(Operation::Log.evaluate(&[1.0]), Ok(0.0));
    assert_relative_eq!(Operation::Sin.evaluate(&[0.0_f64]).unwrap(), 0.0);
    assert_relative_eq!(Operation::Cos.evaluate(&[0.0_f64]).unwrap(), 1.0);
    assert_relative_eq!(Operation::Tan.evaluate(&[0.0_f64]).unwrap(), 0.0);
}

/// Test tagged evaluation surfaces domain errors.
#[test]
fn test_evaluate_domain_errors() {
    assert_eq!(
        Operation::Divide.evaluate(&[4.0, 0.0]),
        Err(MathError::DivisionByZero { dividend: 4.0 })
    );
    assert_eq!(
        Operation::Sqrt.evaluate(&[-1.0]),
        Err(MathError::NegativeSqrt(-1.0))
    );
    assert_eq!(
        Operation::Log.evaluate(&[0.0]),
        Err(MathError::NonPositiveLog(0.0))
    );
}

/// Test wrong argument counts are errors, not panics.
#[test]
fn test_evaluate_arity_mismatch() {
    assert_eq!(
        Operation::Add.evaluate::<f64>(&[1.0]),
        Err(MathError::ArityMismatch {
            operation: "add",
            expected: 2,
            got: 1
        })
    );
    assert_eq!(
        Operation::Sqrt.evaluate::<f64>(&[]),
        Err(MathError::ArityMismatch {
            operation: "sqrt",
            expected: 1,
            got: 0
        })
    );
}

/// Test sentinel evaluation agrees with the sentinel functions.
#[test]
fn test_evaluate_or_sentinel() {
    assert_eq!(Operation::Divide.evaluate_or_sentinel(&[4.0, 0.0]), 0.0);
    assert_eq!(Operation::Sqrt.evaluate_or_sentinel(&[-1.0]), -1.0);
    assert_eq!(Operation::Log.evaluate_or_sentinel(&[-5.0]), -1.0);
    assert_eq!(Operation::Power.evaluate_or_sentinel(&[2.0, 10.0]), 1024.0);
    assert!(Operation::Add.evaluate_or_sentinel(&[1.0, 2.0, 3.0]).is_nan());
    assert!(Operation::Sqrt.evaluate_or_sentinel(&[]).is_nan());
}

/// Test both conventions agree wherever the tagged result is `Ok`.
#[test]
fn test_conventions_agree_on_success() {
    let inputs = [-2.0, -0.5, 0.0, 0.5, 1.0, 3.0];
    for op in Operation::ALL {
        for &a in &inputs {
            for &b in &inputs {
                let args = [a, b];
                let args = &args[..op.arity().count()];
                match op.evaluate(args) {
                    Ok(v) => {
                        let s = op.evaluate_or_sentinel(args);
                        assert!(
                            v.to_bits() == s.to_bits() || (v.is_nan() && s.is_nan()),
                            "{op}{args:?}: {v} vs {s}"
                        );
                    }
                    Err(e) => assert_eq!(op.evaluate_or_sentinel(args), e.sentinel()),
                }
            }
        }
    }
}
