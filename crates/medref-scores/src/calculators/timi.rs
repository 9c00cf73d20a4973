//! TIMI risk score for unstable angina / NSTEMI.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Tally};

pub const AGE_THRESHOLD: f64 = 65.0;
pub const RISK_FACTORS_THRESHOLD: f64 = 3.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct TimiInput {
    pub age: f64,
    /// Count of hypertension, hyperlipidemia, diabetes, family history,
    /// current smoking.
    pub risk_factors: f64,
    #[serde(rename = "knownCAD")]
    pub known_cad: bool,
    pub aspirin_use: bool,
    pub severe_angina: bool,
    pub st_changes: bool,
    pub elevated_cardiac_markers: bool,
}

impl Validate for TimiInput {
    fn validate(&self, checks: &mut Checks) {
        checks.require("age", self.age, schema::AGE_YEARS);
        checks.require("riskFactors", self.risk_factors, schema::TIMI_RISK_FACTORS);
    }
}

pub fn calculate(input: &TimiInput) -> ScoreResult {
    let mut tally = Tally::new();

    tally.flag(
        input.age >= AGE_THRESHOLD,
        &format!("Age ≥{AGE_THRESHOLD} years"),
        1.0,
    );
    tally.flag(
        input.risk_factors >= RISK_FACTORS_THRESHOLD,
        &format!("≥{RISK_FACTORS_THRESHOLD} CAD risk factors"),
        1.0,
    );
    tally.flag(input.known_cad, "Known CAD (stenosis ≥50%)", 1.0);
    tally.flag(input.aspirin_use, "Aspirin use in past 7 days", 1.0);
    tally.flag(
        input.severe_angina,
        "Severe angina (≥2 episodes in 24h)",
        1.0,
    );
    tally.flag(input.st_changes, "ST changes ≥0.5mm", 1.0);
    tally.flag(
        input.elevated_cardiac_markers,
        "Elevated cardiac markers",
        1.0,
    );

    tally.finish(CalculatorId::Timi, &GuidanceContext::default())
}
