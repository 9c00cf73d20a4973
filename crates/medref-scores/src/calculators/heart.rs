//! HEART score for major adverse cardiac events in chest pain.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Tally, ordinal, signed};

pub const AGE_HIGH: f64 = 65.0;
pub const AGE_MODERATE: f64 = 45.0;
pub const RISK_FACTORS_HIGH: f64 = 3.0;
pub const RISK_FACTORS_LOW: f64 = 1.0;

ordinal! {
    HeartHistory {
        HighlySuspicious = "highly_suspicious" => 2.0,
        ModeratelySuspicious = "moderately_suspicious" => 1.0,
        SlightlySuspicious = "slightly_suspicious" => 0.0,
    }
}

ordinal! {
    HeartEcg {
        SignificantStDepression = "significant_st_depression" => 2.0,
        NonspecificChanges = "nonspecific_changes" => 1.0,
        Normal = "normal" => 0.0,
    }
}

ordinal! {
    /// Relative to the assay's upper limit of normal.
    Troponin {
        High = "high" => 2.0,
        Moderate = "moderate" => 1.0,
        Normal = "normal" => 0.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct HeartInput {
    pub history: HeartHistory,
    pub ecg: HeartEcg,
    pub age: f64,
    /// Count of hypertension, hyperlipidemia, diabetes, obesity, smoking,
    /// family history.
    pub risk_factors: f64,
    pub troponin: Troponin,
}

impl HeartHistory {
    fn describe(self) -> &'static str {
        match self {
            Self::HighlySuspicious => "Highly suspicious",
            Self::ModeratelySuspicious => "Moderately suspicious",
            Self::SlightlySuspicious => "Slightly suspicious",
        }
    }
}

impl HeartEcg {
    fn describe(self) -> &'static str {
        match self {
            Self::SignificantStDepression => "Significant ST depression",
            Self::NonspecificChanges => "Non-specific changes",
            Self::Normal => "Normal",
        }
    }
}

impl Troponin {
    fn describe(self) -> &'static str {
        match self {
            Self::High => "≥3x normal",
            Self::Moderate => "1-3x normal",
            Self::Normal => "normal",
        }
    }
}

impl Validate for HeartInput {
    fn validate(&self, checks: &mut Checks) {
        checks.require("age", self.age, schema::AGE_YEARS);
        checks.require("riskFactors", self.risk_factors, schema::HEART_RISK_FACTORS);
    }
}

pub fn calculate(input: &HeartInput) -> ScoreResult {
    let mut tally = Tally::new();

    let points = input.history.points();
    tally.add(
        points,
        format!("History: {} = {}", input.history.describe(), signed(points)),
    );

    let points = input.ecg.points();
    tally.add(
        points,
        format!("ECG: {} = {}", input.ecg.describe(), signed(points)),
    );

    let (points, band) = if input.age >= AGE_HIGH {
        (2.0, "≥65")
    } else if input.age >= AGE_MODERATE {
        (1.0, "45-64")
    } else {
        (0.0, "<45")
    };
    tally.add(points, format!("Age {band} = {}", signed(points)));

    let (points, line) = if input.risk_factors >= RISK_FACTORS_HIGH {
        (2.0, "Risk factors ≥3")
    } else if input.risk_factors >= RISK_FACTORS_LOW {
        (1.0, "Risk factors 1-2")
    } else {
        (0.0, "Risk factors: None")
    };
    tally.add(points, format!("{line} = {}", signed(points)));

    let points = input.troponin.points();
    tally.add(
        points,
        format!("Troponin {} = {}", input.troponin.describe(), signed(points)),
    );

    tally.finish(CalculatorId::Heart, &GuidanceContext::default())
}
