//! medref-scores
//!
//! Clinical decision-score calculators. Pure computation, no I/O.
//! Each calculator validates its raw JSON inputs, applies the published
//! rule and attaches risk-band guidance to the numeric result.

pub mod calculator;
pub mod calculators;
pub mod error;
pub mod guidance;
pub mod schema;
pub mod scoring;
pub mod units;

pub use calculator::{CalculatorId, CalculatorInput};
pub use error::ScoreError;
pub use schema::{FieldIssue, ValidationError};
pub use scoring::ScoreResult;

/// Run the calculator named by its wire identifier (e.g., "curb65").
pub fn calculate_clinical_score(
    calculator: &str,
    inputs: &serde_json::Value,
) -> Result<ScoreResult, ScoreError> {
    let id: CalculatorId = calculator.parse().inspect_err(|_| {
        tracing::warn!(calculator, "unknown calculator");
    })?;
    calculate(id, inputs)
}

/// Validate `inputs` for `id` and score them.
pub fn calculate(id: CalculatorId, inputs: &serde_json::Value) -> Result<ScoreResult, ScoreError> {
    let input = CalculatorInput::parse(id, inputs).inspect_err(|e| {
        tracing::warn!(calculator = %id, issues = e.issues.len(), "rejected inputs: {e}");
    })?;

    let result = input.score();
    tracing::debug!(
        calculator = %id,
        score = result.score,
        risk_category = %result.risk_category,
        "calculated score"
    );
    Ok(result)
}
