//! HAS-BLED: major bleeding risk on anticoagulation.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Tally};

pub const AGE_THRESHOLD: f64 = 65.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HasBledInput {
    /// Uncontrolled, systolic >160 mmHg.
    pub hypertension: bool,
    pub abnormal_renal_function: bool,
    pub abnormal_liver_function: bool,
    pub stroke: bool,
    pub bleeding_history: bool,
    #[serde(rename = "labileINR")]
    pub labile_inr: bool,
    pub age: f64,
    pub medications: bool,
    pub alcohol_use: bool,
}

impl Validate for HasBledInput {
    fn validate(&self, checks: &mut Checks) {
        checks.require("age", self.age, schema::AGE_YEARS);
    }
}

pub fn calculate(input: &HasBledInput) -> ScoreResult {
    let mut tally = Tally::new();

    tally.flag(
        input.hypertension,
        "Hypertension (uncontrolled SBP >160 mmHg)",
        1.0,
    );
    tally.flag(
        input.abnormal_renal_function,
        "Abnormal renal function (dialysis, transplant, Cr >2.26 mg/dL or >200 μmol/L)",
        1.0,
    );
    tally.flag(
        input.abnormal_liver_function,
        "Abnormal liver function (cirrhosis, bilirubin >2x normal, AST/ALT/ALP >3x normal)",
        1.0,
    );
    tally.flag(input.stroke, "Stroke history", 1.0);
    tally.flag(
        input.bleeding_history,
        "Bleeding history or predisposition (anemia, etc.)",
        1.0,
    );
    tally.flag(
        input.labile_inr,
        "Labile INR (unstable/high INRs, time in therapeutic range <60%)",
        1.0,
    );
    tally.flag(
        input.age >= AGE_THRESHOLD,
        &format!("Age ≥{AGE_THRESHOLD} years"),
        1.0,
    );
    tally.flag(
        input.medications,
        "Medications predisposing to bleeding (antiplatelet agents, NSAIDs)",
        1.0,
    );
    tally.flag(input.alcohol_use, "Alcohol use (≥8 drinks/week)", 1.0);

    tally.finish(CalculatorId::HasBled, &GuidanceContext::default())
}
