//! Validate fitted polynomials against recorded reference results.
//!
//! Every `cases/*.json` file holds an input sample set, a degree, and the
//! expected expression, evaluations, and statistics. Each case is refitted,
//! compared, and written with its computed result to `output/`.
//!
//! Set `RUST_LOG=debug` to see solver diagnostics while validating.

use log::{error, info, warn};
use polyfit::prelude::*;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

/// Relative tolerance for floating-point comparisons.
const TOLERANCE: f64 = 1e-12;

#[derive(Debug, Deserialize, Serialize)]
struct ValidationData {
    name: String,
    notes: String,
    input: InputData,
    params: Params,
    expected: ExpectedData,
    #[serde(skip_deserializing)]
    result: ResultData,
}

#[derive(Debug, Deserialize, Serialize)]
struct InputData {
    x: Vec<f64>,
    y: Vec<f64>,
}

#[derive(Debug, Deserialize, Serialize)]
struct Params {
    degree: usize,
}

#[derive(Debug, Deserialize, Serialize)]
struct Evaluation {
    x: f64,
    y: f64,
}

#[derive(Debug, Deserialize, Serialize)]
struct ExpectedData {
    expression: Option<String>,
    #[serde(default)]
    evaluations: Vec<Evaluation>,
    correlation_coefficient: f64,
    standard_error: f64,
}

#[derive(Debug, Deserialize, Serialize, Default)]
struct ResultData {
    coefficients: Vec<f64>,
    expression: String,
    evaluations: Vec<Evaluation>,
    correlation_coefficient: f64,
    standard_error: f64,
    mismatches: Vec<String>,
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    let input_dir = root.join("cases");
    let output_dir = root.join("output");

    if !input_dir.exists() {
        warn!("Input directory {:?} does not exist, nothing to validate", input_dir);
        return Ok(());
    }

    fs::create_dir_all(&output_dir)?;

    let mut paths: Vec<_> = fs::read_dir(&input_dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    paths.retain(|p| p.extension().and_then(|s| s.to_str()) == Some("json"));
    paths.sort();

    let mut failed = 0;
    for path in &paths {
        if !process_file(path, &output_dir)? {
            failed += 1;
        }
    }

    info!("{} of {} cases passed", paths.len() - failed, paths.len());
    if failed > 0 {
        return Err(format!("{failed} validation case(s) failed").into());
    }
    Ok(())
}

fn process_file(input_path: &Path, output_dir: &Path) -> Result<bool, Box<dyn Error>> {
    let file = fs::File::open(input_path)?;
    let mut data: ValidationData = serde_json::from_reader(file)?;
    info!("Processing {}", data.name);

    let fit = Polyfit::new(&data.input.x, &data.input.y)?;
    let degree = data.params.degree;
    let poly = fit.polynomial(degree)?;
    let terms = poly.terms();

    let mut result = ResultData {
        coefficients: terms.to_vec(),
        expression: poly.to_string(),
        evaluations: data
            .expected
            .evaluations
            .iter()
            .map(|e| Evaluation {
                x: e.x,
                y: poly.evaluate(e.x),
            })
            .collect(),
        correlation_coefficient: fit.correlation_coefficient(terms),
        standard_error: fit.standard_error(terms),
        mismatches: Vec::new(),
    };

    if let Some(expression) = &data.expected.expression {
        if *expression != result.expression {
            result.mismatches.push(format!(
                "expression: expected {expression:?}, got {:?}",
                result.expression
            ));
        }
    }
    for (want, got) in data.expected.evaluations.iter().zip(&result.evaluations) {
        if !close(want.y, got.y) {
            result
                .mismatches
                .push(format!("p({}): expected {}, got {}", want.x, want.y, got.y));
        }
    }
    if !close(
        data.expected.correlation_coefficient,
        result.correlation_coefficient,
    ) {
        result.mismatches.push(format!(
            "correlation coefficient: expected {}, got {}",
            data.expected.correlation_coefficient, result.correlation_coefficient
        ));
    }
    if !close(data.expected.standard_error, result.standard_error) {
        result.mismatches.push(format!(
            "standard error: expected {}, got {}",
            data.expected.standard_error, result.standard_error
        ));
    }

    for m in &result.mismatches {
        error!("{}: {}", data.name, m);
    }
    let passed = result.mismatches.is_empty();
    data.result = result;

    let file_name = input_path.file_name().ok_or("case path has no file name")?;
    let output_json = serde_json::to_string_pretty(&data)?;
    fs::write(output_dir.join(file_name), output_json)?;

    Ok(passed)
}

fn close(expected: f64, actual: f64) -> bool {
    if expected == actual {
        return true;
    }
    let scale = expected.abs().max(actual.abs()).max(f64::MIN_POSITIVE);
    (expected - actual).abs() / scale <= TOLERANCE
}
