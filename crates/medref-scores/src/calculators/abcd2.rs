//! ABCD2: short-term stroke risk after a transient ischaemic attack.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{BloodPressure, ScoreResult, Tally, label, ordinal, signed};

pub const AGE_THRESHOLD: f64 = 60.0;
pub const SYSTOLIC_THRESHOLD: f64 = 140.0;
pub const DIASTOLIC_THRESHOLD: f64 = 90.0;

ordinal! {
    ClinicalFeatures {
        UnilateralWeakness = "unilateral_weakness" => 2.0,
        SpeechImpairment = "speech_impairment" => 1.0,
        Neither = "neither" => 0.0,
    }
}

ordinal! {
    /// Minutes.
    SymptomDuration {
        LessThan10 = "less_than_10" => 0.0,
        From10To59 = "10_to_59" => 1.0,
        SixtyOrMore = "60_or_more" => 2.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Abcd2Input {
    pub age: f64,
    pub blood_pressure: BloodPressure,
    pub clinical_features: ClinicalFeatures,
    pub duration: SymptomDuration,
    pub diabetes: bool,
}

impl Validate for Abcd2Input {
    fn validate(&self, checks: &mut Checks) {
        checks.require("age", self.age, schema::AGE_YEARS);
        checks.blood_pressure("bloodPressure", &self.blood_pressure);
    }
}

pub fn calculate(input: &Abcd2Input) -> ScoreResult {
    let mut tally = Tally::new();

    let elderly = input.age >= AGE_THRESHOLD;
    tally.flag(
        elderly,
        &format!(
            "Age {} years ({}{AGE_THRESHOLD})",
            input.age,
            if elderly { "≥" } else { "<" }
        ),
        1.0,
    );

    let BloodPressure {
        systolic,
        diastolic,
    } = input.blood_pressure;
    let hypertensive = systolic >= SYSTOLIC_THRESHOLD || diastolic >= DIASTOLIC_THRESHOLD;
    tally.flag(
        hypertensive,
        &format!(
            "Blood pressure {systolic}/{diastolic} mmHg ({}{SYSTOLIC_THRESHOLD}/{DIASTOLIC_THRESHOLD})",
            if hypertensive { "≥" } else { "<" }
        ),
        1.0,
    );

    let points = input.clinical_features.points();
    tally.add(
        points,
        format!(
            "Clinical features ({}): {}",
            label(input.clinical_features.as_str()),
            signed(points)
        ),
    );

    let points = input.duration.points();
    tally.add(
        points,
        format!(
            "Duration ({} minutes): {}",
            label(input.duration.as_str()),
            signed(points)
        ),
    );

    tally.flag(input.diabetes, "Diabetes", 1.0);

    tally.finish(CalculatorId::Abcd2, &GuidanceContext::default())
}
