//! Wells criteria for pulmonary embolism.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{Checks, Validate};
use crate::scoring::{ScoreResult, Tally};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WellsPeInput {
    #[serde(rename = "clinicalDVTSigns")]
    pub clinical_dvt_signs: bool,
    #[serde(rename = "peIsLikelyDiagnosis")]
    pub pe_is_likely_diagnosis: bool,
    #[serde(rename = "heartRateOver100")]
    pub heart_rate_over_100: bool,
    pub immobilization_or_surgery: bool,
    #[serde(rename = "previousPEorDVT")]
    pub previous_pe_or_dvt: bool,
    pub hemoptysis: bool,
    pub malignancy: bool,
}

impl Validate for WellsPeInput {
    fn validate(&self, _checks: &mut Checks) {}
}

pub fn calculate(input: &WellsPeInput) -> ScoreResult {
    let mut tally = Tally::new();

    tally.flag(input.clinical_dvt_signs, "Clinical signs of DVT", 3.0);
    tally.flag(
        input.pe_is_likely_diagnosis,
        "PE is most likely diagnosis",
        3.0,
    );
    tally.flag(input.heart_rate_over_100, "Heart rate >100", 1.5);
    tally.flag(
        input.immobilization_or_surgery,
        "Immobilization ≥3 days or recent surgery",
        1.5,
    );
    tally.flag(input.previous_pe_or_dvt, "Previous PE or DVT", 1.5);
    tally.flag(input.hemoptysis, "Hemoptysis", 1.0);
    tally.flag(input.malignancy, "Malignancy", 1.0);

    tally.finish(CalculatorId::WellsPe, &GuidanceContext::default())
}
