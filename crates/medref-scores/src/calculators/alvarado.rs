//! Alvarado (MANTRELS) score for acute appendicitis.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{Checks, Validate};
use crate::scoring::{ScoreResult, Tally};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct AlvaradoInput {
    /// Accepted for compatibility; not one of the eight scored criteria.
    pub rlq_pain: bool,
    pub anorexia: bool,
    pub nausea_vomiting: bool,
    pub rlq_tenderness: bool,
    pub rebound_tenderness: bool,
    pub elevated_temperature: bool,
    pub leukocytosis: bool,
    pub left_shift: bool,
    pub migration_pain: bool,
}

impl Validate for AlvaradoInput {
    fn validate(&self, _checks: &mut Checks) {}
}

pub fn calculate(input: &AlvaradoInput) -> ScoreResult {
    let mut tally = Tally::new();

    tally.flag(input.migration_pain, "Migration of pain to RLQ", 1.0);
    tally.flag(input.anorexia, "Anorexia", 1.0);
    tally.flag(input.nausea_vomiting, "Nausea/vomiting", 1.0);
    tally.flag(input.rlq_tenderness, "RLQ tenderness", 2.0);
    tally.flag(input.rebound_tenderness, "Rebound tenderness", 1.0);
    tally.flag(
        input.elevated_temperature,
        "Elevated temperature ≥37.3°C",
        1.0,
    );
    tally.flag(input.leukocytosis, "Leukocytosis (WBC >10,000)", 2.0);
    tally.flag(input.left_shift, "Left shift (neutrophils >75%)", 1.0);

    tally.finish(CalculatorId::Alvarado, &GuidanceContext::default())
}
