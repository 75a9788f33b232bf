//! Polyfit Examples
//!
//! This example demonstrates:
//! - Fitting coefficients for one degree
//! - Evaluator closures and rendered expressions
//! - Scoring a fit with its statistics
//! - Choosing a degree by comparing several fits

use polyfit::prelude::*;

fn main() -> Result<(), PolyfitError> {
    println!("{}", "=".repeat(80));
    println!("Polyfit Examples");
    println!("{}", "=".repeat(80));
    println!();

    example_1_basic_fit()?;
    example_2_degree_selection()?;

    Ok(())
}

/// Example 1: Basic Fit
/// Fits a degree-6 polynomial to eight irregular samples
fn example_1_basic_fit() -> Result<(), PolyfitError> {
    println!("Example 1: Basic Fit");
    println!("{}", "-".repeat(80));

    let x = [-1.0, 0.0, 1.0, 2.0, 3.0, 5.0, 7.0, 9.0];
    let y = [-1.0, 3.0, 2.5, 5.0, 4.0, 2.0, 5.0, 4.0];

    let fit = Polyfit::new(&x, &y)?;
    let terms = fit.compute_coefficients(6)?;

    println!("p(x) = {}", fit.to_expression(6)?);

    let p = fit.evaluator(6)?;
    for xi in [2.0, 3.0, 4.0] {
        println!("p({xi}) = {}", p(xi));
    }

    println!();
    println!("{}", fit.statistics(&terms));

    Ok(())
}

/// Example 2: Degree Selection
/// Compares the standard error of several degrees on the same samples
fn example_2_degree_selection() -> Result<(), PolyfitError> {
    println!("Example 2: Degree Selection");
    println!("{}", "-".repeat(80));

    let x: Vec<f64> = (0..40).map(|i| i as f64 * 0.25).collect();
    let y: Vec<f64> = x
        .iter()
        .map(|&xi| 3.0 - 1.2 * xi + 0.15 * xi * xi + 0.3 * (xi * 3.0).sin())
        .collect();

    let fit = Polyfit::new(&x, &y)?;
    let degrees = [1usize, 2, 3, 5];

    println!("{:>8} {:>14} {:>14}", "Degree", "R²", "Std. error");
    for (degree, terms) in degrees.iter().zip(fit.compute_coefficients_for(&degrees)?) {
        println!(
            "{:>8} {:>14.6} {:>14.6}",
            degree,
            fit.correlation_coefficient(&terms),
            fit.standard_error(&terms)
        );
    }
    println!();

    Ok(())
}
