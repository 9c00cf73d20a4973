//! Quick SOFA bedside sepsis screen.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Tally};

pub const RESPIRATORY_RATE_THRESHOLD: f64 = 22.0;
pub const SYSTOLIC_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct QsofaInput {
    pub respiratory_rate: f64,
    pub altered_mental_status: bool,
    pub systolic_blood_pressure: f64,
}

impl Validate for QsofaInput {
    fn validate(&self, checks: &mut Checks) {
        checks.require("respiratoryRate", self.respiratory_rate, schema::VITAL_RATE);
        checks.require(
            "systolicBloodPressure",
            self.systolic_blood_pressure,
            schema::VITAL_RATE,
        );
    }
}

pub fn calculate(input: &QsofaInput) -> ScoreResult {
    let mut tally = Tally::new();

    tally.flag(
        input.respiratory_rate >= RESPIRATORY_RATE_THRESHOLD,
        &format!("Respiratory rate ≥{RESPIRATORY_RATE_THRESHOLD}"),
        1.0,
    );
    tally.flag(input.altered_mental_status, "Altered mental status", 1.0);
    tally.flag(
        input.systolic_blood_pressure <= SYSTOLIC_THRESHOLD,
        &format!("Systolic BP ≤{SYSTOLIC_THRESHOLD} mmHg"),
        1.0,
    );

    tally.finish(CalculatorId::Qsofa, &GuidanceContext::default())
}
