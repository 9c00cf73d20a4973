//! Wells criteria for deep vein thrombosis.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{Checks, Validate};
use crate::scoring::{ScoreResult, Tally};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct WellsDvtInput {
    pub active_cancer: bool,
    pub paralysis_or_immobilization: bool,
    pub recently_bedridden: bool,
    pub localized_tenderness: bool,
    pub entire_leg_swollen: bool,
    pub calf_swelling: bool,
    pub pitting_edema: bool,
    pub collateral_veins: bool,
    #[serde(rename = "previousDVT")]
    pub previous_dvt: bool,
    pub alternative_diagnosis: bool,
}

impl Validate for WellsDvtInput {
    fn validate(&self, _checks: &mut Checks) {}
}

pub fn calculate(input: &WellsDvtInput) -> ScoreResult {
    let mut tally = Tally::new();

    tally.flag(input.active_cancer, "Active cancer", 1.0);
    tally.flag(
        input.paralysis_or_immobilization,
        "Paralysis/immobilization",
        1.0,
    );
    tally.flag(
        input.recently_bedridden,
        "Recently bedridden >3 days or major surgery",
        1.0,
    );
    tally.flag(
        input.localized_tenderness,
        "Localized tenderness along deep venous system",
        1.0,
    );
    tally.flag(input.entire_leg_swollen, "Entire leg swollen", 1.0);
    tally.flag(input.calf_swelling, "Calf swelling >3cm", 1.0);
    tally.flag(
        input.pitting_edema,
        "Pitting edema confined to symptomatic leg",
        1.0,
    );
    tally.flag(input.collateral_veins, "Collateral superficial veins", 1.0);
    tally.flag(input.previous_dvt, "Previously documented DVT", 1.0);
    tally.flag(
        input.alternative_diagnosis,
        "Alternative diagnosis as likely",
        -2.0,
    );

    tally.finish(CalculatorId::WellsDvt, &GuidanceContext::default())
}
