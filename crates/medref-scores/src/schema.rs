//! Input validation shared by every calculator.
//!
//! Deserialization (via serde) enforces field presence, types and enum
//! tokens. Numeric bounds are checked afterwards by each input type's
//! [`Validate`] impl so that every offending field is reported at once.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::scoring::{BloodPressure, ValueRange};

pub const AGE_YEARS: ValueRange = ValueRange::inclusive(0.0, 130.0);
/// Breaths/min, beats/min and mmHg.
pub const VITAL_RATE: ValueRange = ValueRange::inclusive(0.0, 300.0);
pub const OXYGEN_SATURATION: ValueRange = ValueRange::inclusive(0.0, 100.0);
pub const GLASGOW_COMA_SCALE: ValueRange = ValueRange::whole(3.0, 15.0);
pub const KILLIP_CLASS: ValueRange = ValueRange::whole(1.0, 4.0);
pub const HEART_RISK_FACTORS: ValueRange = ValueRange::whole(0.0, 20.0);
pub const TIMI_RISK_FACTORS: ValueRange = ValueRange::whole(0.0, 5.0);
/// Urea in mmol/L or BUN in mg/dL.
pub const UREA: ValueRange = ValueRange::inclusive(0.0, 500.0);
pub const HEMOGLOBIN: ValueRange = ValueRange::inclusive(0.0, 25.0);
pub const PLATELETS: ValueRange = ValueRange::inclusive(0.0, 2000.0);
pub const BILIRUBIN: ValueRange = ValueRange::inclusive(0.0, 100.0);
pub const CREATININE: ValueRange = ValueRange::inclusive(0.0, 100.0);
/// Labs that feed a logarithm or a positive-only lookup.
pub const POSITIVE_LAB: ValueRange = ValueRange::positive(100.0);
/// Fraction (0–1] or percentage (1–100].
pub const FIO2: ValueRange = ValueRange::positive(100.0);
pub const PAO2: ValueRange = ValueRange::inclusive(0.0, 800.0);
pub const MEAN_ARTERIAL_PRESSURE: ValueRange = ValueRange::inclusive(0.0, 250.0);
/// mL/day
pub const URINE_OUTPUT: ValueRange = ValueRange::inclusive(0.0, 20_000.0);

/// One rejected input field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct FieldIssue {
    pub field: String,
    pub value: Option<f64>,
    pub expected_range: Option<ValueRange>,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS, Error)]
#[ts(export)]
#[error("invalid inputs for {calculator}: {}", summarize(.issues))]
pub struct ValidationError {
    pub calculator: CalculatorId,
    pub issues: Vec<FieldIssue>,
}

fn summarize(issues: &[FieldIssue]) -> String {
    issues
        .iter()
        .map(|issue| issue.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Range checks an input type runs after it has deserialized.
pub trait Validate {
    fn validate(&self, checks: &mut Checks);
}

/// Collects range violations for one calculator input.
#[derive(Debug)]
pub struct Checks {
    calculator: CalculatorId,
    issues: Vec<FieldIssue>,
}

impl Checks {
    pub fn new(calculator: CalculatorId) -> Self {
        Self {
            calculator,
            issues: Vec::new(),
        }
    }

    pub fn require(&mut self, field: &str, value: f64, range: ValueRange) {
        if range.contains(value) {
            return;
        }
        let message = format!(
            "{}: {field} {value} {}",
            self.calculator.name(),
            describe_violation(&range),
        );
        self.issues.push(FieldIssue {
            field: field.to_string(),
            value: Some(value),
            expected_range: Some(range),
            message,
        });
    }

    /// Absent optional fields are always accepted.
    pub fn optional(&mut self, field: &str, value: Option<f64>, range: ValueRange) {
        if let Some(value) = value {
            self.require(field, value, range);
        }
    }

    pub fn blood_pressure(&mut self, field: &str, pressure: &BloodPressure) {
        self.require(&format!("{field}.systolic"), pressure.systolic, VITAL_RATE);
        self.require(&format!("{field}.diastolic"), pressure.diastolic, VITAL_RATE);
    }

    pub fn finish(self) -> Result<(), ValidationError> {
        if self.issues.is_empty() {
            Ok(())
        } else {
            Err(ValidationError {
                calculator: self.calculator,
                issues: self.issues,
            })
        }
    }
}

fn describe_violation(range: &ValueRange) -> String {
    let open = if range.exclusive_min { '(' } else { '[' };
    match range.step {
        Some(step) if step == 1.0 => format!(
            "is not a whole number in range {open}{}, {}]",
            range.min, range.max
        ),
        _ => format!("is outside range {open}{}, {}]", range.min, range.max),
    }
}

/// Deserialize and range-check the raw inputs for `calculator`.
pub fn parse<T>(calculator: CalculatorId, raw: &serde_json::Value) -> Result<T, ValidationError>
where
    T: DeserializeOwned + Validate,
{
    let input = T::deserialize(raw).map_err(|e| ValidationError {
        calculator,
        issues: vec![FieldIssue {
            field: "inputs".to_string(),
            value: None,
            expected_range: None,
            message: format!("{}: {e}", calculator.name()),
        }],
    })?;

    let mut checks = Checks::new(calculator);
    input.validate(&mut checks);
    checks.finish()?;
    Ok(input)
}
