//! MELD (UNOS formula, without sodium).

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Tally};

pub const BILIRUBIN_COEFFICIENT: f64 = 3.78;
pub const INR_COEFFICIENT: f64 = 11.2;
pub const CREATININE_COEFFICIENT: f64 = 9.57;
pub const CONSTANT: f64 = 6.43;

/// Lab values below this are raised to it so no logarithm goes negative.
pub const MIN_LAB_VALUE: f64 = 1.0;
/// Creatinine cap, also used for patients on dialysis.
pub const MAX_CREATININE: f64 = 4.0;
pub const MIN_SCORE: f64 = 6.0;
pub const MAX_SCORE: f64 = 40.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct MeldInput {
    /// mg/dL
    pub bilirubin: f64,
    pub inr: f64,
    /// mg/dL
    pub creatinine: f64,
    /// Dialysis twice in the past week, or 24h of CVVHD.
    pub dialysis: bool,
}

impl Validate for MeldInput {
    fn validate(&self, checks: &mut Checks) {
        checks.require("bilirubin", self.bilirubin, schema::POSITIVE_LAB);
        checks.require("inr", self.inr, schema::POSITIVE_LAB);
        checks.require("creatinine", self.creatinine, schema::POSITIVE_LAB);
    }
}

pub fn calculate(input: &MeldInput) -> ScoreResult {
    let bilirubin = input.bilirubin.max(MIN_LAB_VALUE);
    let inr = input.inr.max(MIN_LAB_VALUE);
    let creatinine = if input.dialysis || input.creatinine > MAX_CREATININE {
        MAX_CREATININE
    } else {
        input.creatinine.max(MIN_LAB_VALUE)
    };

    let raw = BILIRUBIN_COEFFICIENT * bilirubin.ln()
        + INR_COEFFICIENT * inr.ln()
        + CREATININE_COEFFICIENT * creatinine.ln()
        + CONSTANT;
    let score = round_score(raw);

    let mut tally = Tally::new();
    tally.note(format!(
        "Bilirubin: {:.1} mg/dL (used: {bilirubin:.1})",
        input.bilirubin
    ));
    tally.note(format!("INR: {:.2} (used: {inr:.2})", input.inr));
    tally.note(format!(
        "Creatinine: {:.1} mg/dL (used: {creatinine:.1})",
        input.creatinine
    ));
    tally.note(if input.dialysis {
        format!("Patient on dialysis: creatinine set to {MAX_CREATININE:.1}")
    } else {
        "Dialysis: no".to_string()
    });
    tally.note(format!(
        "Formula: 3.78×ln[bilirubin] + 11.2×ln[INR] + 9.57×ln[creatinine] + 6.43 = {raw:.2}"
    ));

    tally.finish_at(CalculatorId::Meld, score, &GuidanceContext::default())
}

/// Round to one decimal, then to an integer, then clamp to [6, 40].
pub fn round_score(raw: f64) -> f64 {
    let one_decimal = (raw * 10.0).round() / 10.0;
    one_decimal.round().clamp(MIN_SCORE, MAX_SCORE)
}
