//! CURB-65: community-acquired pneumonia severity.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{BloodPressure, ScoreResult, Tally};
use crate::units::{CURB65_UREA_CROSSOVER, convert_urea_to_bun};

/// mg/dL; the criterion is met strictly above this.
pub const BUN_THRESHOLD: f64 = 19.0;
pub const RESPIRATORY_RATE_THRESHOLD: f64 = 30.0;
pub const SYSTOLIC_THRESHOLD: f64 = 90.0;
pub const DIASTOLIC_THRESHOLD: f64 = 60.0;
pub const AGE_THRESHOLD: f64 = 65.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Curb65Input {
    pub confusion: bool,
    /// BUN in mg/dL, or urea in mmol/L.
    pub urea: Option<f64>,
    pub respiratory_rate: f64,
    pub blood_pressure: BloodPressure,
    pub age: f64,
}

impl Validate for Curb65Input {
    fn validate(&self, checks: &mut Checks) {
        checks.optional("urea", self.urea, schema::UREA);
        checks.require("respiratoryRate", self.respiratory_rate, schema::VITAL_RATE);
        checks.blood_pressure("bloodPressure", &self.blood_pressure);
        checks.require("age", self.age, schema::AGE_YEARS);
    }
}

pub fn calculate(input: &Curb65Input) -> ScoreResult {
    let mut tally = Tally::new();

    tally.flag(input.confusion, "Confusion", 1.0);

    match input.urea {
        Some(urea) => {
            let bun = convert_urea_to_bun(urea, CURB65_UREA_CROSSOVER);
            tally.flag(
                bun > BUN_THRESHOLD,
                &format!("Elevated BUN/Urea (BUN {bun:.1} mg/dL, >{BUN_THRESHOLD})"),
                1.0,
            );
        }
        None => tally.note("Elevated BUN/Urea: not provided, +0"),
    }

    tally.flag(
        input.respiratory_rate >= RESPIRATORY_RATE_THRESHOLD,
        &format!("Respiratory rate ≥{RESPIRATORY_RATE_THRESHOLD}"),
        1.0,
    );

    let BloodPressure {
        systolic,
        diastolic,
    } = input.blood_pressure;
    tally.flag(
        systolic < SYSTOLIC_THRESHOLD || diastolic <= DIASTOLIC_THRESHOLD,
        &format!("Low blood pressure (SBP <{SYSTOLIC_THRESHOLD} or DBP ≤{DIASTOLIC_THRESHOLD})"),
        1.0,
    );

    tally.flag(
        input.age >= AGE_THRESHOLD,
        &format!("Age ≥{AGE_THRESHOLD}"),
        1.0,
    );

    tally.finish(CalculatorId::Curb65, &GuidanceContext::default())
}
