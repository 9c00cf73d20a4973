//! CHA2DS2-VASc: stroke risk in atrial fibrillation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Sex, Tally, signed};

pub const AGE_HIGH: f64 = 75.0;
pub const AGE_MODERATE: f64 = 65.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Cha2ds2VascInput {
    pub congestive_heart_failure: bool,
    pub hypertension: bool,
    pub age: f64,
    pub diabetes: bool,
    #[serde(rename = "strokeTIAThrombus")]
    pub stroke_tia_thrombus: bool,
    pub vascular_disease: bool,
    pub sex: Sex,
}

impl Validate for Cha2ds2VascInput {
    fn validate(&self, checks: &mut Checks) {
        checks.require("age", self.age, schema::AGE_YEARS);
    }
}

pub fn calculate(input: &Cha2ds2VascInput) -> ScoreResult {
    let mut tally = Tally::new();

    tally.flag(input.congestive_heart_failure, "Congestive heart failure", 1.0);
    tally.flag(input.hypertension, "Hypertension", 1.0);

    let (points, band) = if input.age >= AGE_HIGH {
        (2.0, "≥75")
    } else if input.age >= AGE_MODERATE {
        (1.0, "65-74")
    } else {
        (0.0, "<65")
    };
    tally.add(points, format!("Age {band}: {}", signed(points)));

    tally.flag(input.diabetes, "Diabetes", 1.0);
    tally.flag(
        input.stroke_tia_thrombus,
        "Prior stroke/TIA/thromboembolism",
        2.0,
    );
    tally.flag(input.vascular_disease, "Vascular disease", 1.0);
    tally.flag(input.sex == Sex::Female, "Female sex", 1.0);

    tally.finish(
        CalculatorId::Cha2ds2Vasc,
        &GuidanceContext::with_sex(input.sex),
    )
}
