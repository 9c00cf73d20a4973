//! PERC rule-out criteria for pulmonary embolism.
//!
//! A score of 0 means every criterion is absent. Only meaningful when the
//! clinical pretest probability is already low.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Tally};

pub const AGE_THRESHOLD: f64 = 50.0;
pub const HEART_RATE_THRESHOLD: f64 = 100.0;
pub const OXYGEN_SATURATION_THRESHOLD: f64 = 95.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct PercInput {
    pub age: f64,
    pub heart_rate: f64,
    /// SpO2 on room air, percent.
    pub oxygen_saturation: f64,
    pub unilateral_leg_swelling: bool,
    pub hemoptysis: bool,
    pub recent_surgery_or_trauma: bool,
    #[serde(rename = "priorPEorDVT")]
    pub prior_pe_or_dvt: bool,
    pub hormone_use: bool,
}

impl Validate for PercInput {
    fn validate(&self, checks: &mut Checks) {
        checks.require("age", self.age, schema::AGE_YEARS);
        checks.require("heartRate", self.heart_rate, schema::VITAL_RATE);
        checks.require(
            "oxygenSaturation",
            self.oxygen_saturation,
            schema::OXYGEN_SATURATION,
        );
    }
}

pub fn calculate(input: &PercInput) -> ScoreResult {
    let mut tally = Tally::new();

    tally.flag(
        input.age >= AGE_THRESHOLD,
        &format!("Age ≥{AGE_THRESHOLD} years"),
        1.0,
    );
    tally.flag(
        input.heart_rate >= HEART_RATE_THRESHOLD,
        &format!("Heart rate ≥{HEART_RATE_THRESHOLD} bpm"),
        1.0,
    );
    tally.flag(
        input.oxygen_saturation < OXYGEN_SATURATION_THRESHOLD,
        &format!("O2 saturation <{OXYGEN_SATURATION_THRESHOLD}% on room air"),
        1.0,
    );
    tally.flag(input.unilateral_leg_swelling, "Unilateral leg swelling", 1.0);
    tally.flag(input.hemoptysis, "Hemoptysis", 1.0);
    tally.flag(
        input.recent_surgery_or_trauma,
        "Recent surgery or trauma (within 4 weeks)",
        1.0,
    );
    tally.flag(input.prior_pe_or_dvt, "Prior PE or DVT", 1.0);
    tally.flag(input.hormone_use, "Hormone use", 1.0);

    tally.finish(CalculatorId::Perc, &GuidanceContext::default())
}
