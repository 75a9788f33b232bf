#![cfg(feature = "dev")]
//! Tests for the fitted polynomial output type.
//!
//! These tests verify the Polynomial structure and its methods:
//! - Accessors (terms, degree)
//! - Evaluation at one or many points
//! - Borrowing and owning evaluator closures
//! - Display formatting of the expression
//!
//! ## Test Organization
//!
//! 1. **Accessors** - Coefficients and degree
//! 2. **Evaluation** - Point and batch evaluation
//! 3. **Closures** - as_fn and into_fn
//! 4. **Display** - Expression rendering

use polyfit::internals::engine::output::Polynomial;

// ============================================================================
// Accessor Tests
// ============================================================================

/// Test coefficients and degree are reported as stored.
#[test]
fn test_terms_and_degree() {
    let poly = Polynomial::from_terms(vec![1.0, -2.0, 3.0]);

    assert_eq!(poly.terms(), &[1.0, -2.0, 3.0]);
    assert_eq!(poly.degree(), 2);
    assert_eq!(poly.into_terms(), vec![1.0, -2.0, 3.0]);
}

/// Test the degree of an empty polynomial saturates at zero.
#[test]
fn test_empty_degree() {
    let poly: Polynomial<f64> = Polynomial::from_terms(vec![]);

    assert_eq!(poly.degree(), 0);
    assert_eq!(poly.evaluate(5.0), 0.0);
}

// ============================================================================
// Evaluation Tests
// ============================================================================

/// Test point evaluation.
#[test]
fn test_evaluate() {
    // 1 - 2x + 3x^2
    let poly = Polynomial::from_terms(vec![1.0, -2.0, 3.0]);

    assert_eq!(poly.evaluate(0.0), 1.0);
    assert_eq!(poly.evaluate(1.0), 2.0);
    assert_eq!(poly.evaluate(-1.0), 6.0);
    assert_eq!(poly.evaluate(2.0), 9.0);
}

/// Test batch evaluation preserves order.
#[test]
fn test_evaluate_all() {
    let poly = Polynomial::from_terms(vec![1.0, -2.0, 3.0]);

    assert_eq!(poly.evaluate_all(&[2.0, -1.0, 0.0]), vec![9.0, 6.0, 1.0]);
    assert!(poly.evaluate_all(&[]).is_empty());
}

// ============================================================================
// Closure Tests
// ============================================================================

/// Test the borrowing closure agrees with evaluate.
#[test]
fn test_as_fn() {
    let poly = Polynomial::from_terms(vec![0.5, 0.25]);
    let f = poly.as_fn();

    for x in [-3.0, 0.0, 1.5, 10.0] {
        assert_eq!(f(x), poly.evaluate(x));
    }
}

/// Test the owning closure outlives the polynomial.
#[test]
fn test_into_fn() {
    let f = {
        let poly = Polynomial::from_terms(vec![2.0, 0.0, 1.0]);
        poly.into_fn()
    };

    assert_eq!(f(0.0), 2.0);
    assert_eq!(f(3.0), 11.0);
}

/// Test closures can be boxed and collected.
#[test]
fn test_boxed_closures() {
    let fns: Vec<Box<dyn Fn(f64) -> f64>> = vec![
        Box::new(Polynomial::from_terms(vec![1.0]).into_fn()),
        Box::new(Polynomial::from_terms(vec![0.0, 1.0]).into_fn()),
    ];

    let values: Vec<f64> = fns.iter().map(|f| f(4.0)).collect();
    assert_eq!(values, vec![1.0, 4.0]);
}

// ============================================================================
// Display Tests
// ============================================================================

/// Test the expression layout.
#[test]
fn test_display_layout() {
    let poly = Polynomial::from_terms(vec![1.0, 2.5, -0.5]);

    assert_eq!(poly.to_string(), "1 + 2.5x^1 + -0.5x^2");
}

/// Test a constant renders without any power suffix.
#[test]
fn test_display_constant() {
    let poly = Polynomial::from_terms(vec![3.25]);

    assert_eq!(poly.to_string(), "3.25");
}

/// Test coefficients render in shortest round-trip form.
#[test]
fn test_display_round_trip() {
    let c = 0.1 + 0.2;
    let poly = Polynomial::from_terms(vec![c, 1e-7]);

    let text = poly.to_string();
    assert_eq!(text, "0.30000000000000004 + 0.0000001x^1");

    let first: f64 = text.split(" + ").next().unwrap().parse().unwrap();
    assert_eq!(first, c);
}

/// Test an empty polynomial renders as an empty string.
#[test]
fn test_display_empty() {
    let poly: Polynomial<f64> = Polynomial::from_terms(vec![]);

    assert_eq!(poly.to_string(), "");
}
