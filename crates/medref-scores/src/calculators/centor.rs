//! Centor (McIsaac-modified): streptococcal pharyngitis.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Tally, signed};

pub const CHILD_AGE_MIN: f64 = 3.0;
pub const CHILD_AGE_MAX: f64 = 14.0;
pub const ADULT_AGE_MIN: f64 = 15.0;
pub const ADULT_AGE_MAX: f64 = 44.0;
pub const OLDER_AGE_MIN: f64 = 45.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CentorInput {
    pub fever: bool,
    pub tonsillar_exudate: bool,
    pub tender_anterior_nodes: bool,
    pub no_cough: bool,
    pub age: f64,
}

impl Validate for CentorInput {
    fn validate(&self, checks: &mut Checks) {
        checks.require("age", self.age, schema::AGE_YEARS);
    }
}

pub fn calculate(input: &CentorInput) -> ScoreResult {
    let mut tally = Tally::new();

    tally.flag(input.fever, "Fever >38°C", 1.0);
    tally.flag(input.tonsillar_exudate, "Tonsillar exudate", 1.0);
    tally.flag(
        input.tender_anterior_nodes,
        "Tender anterior cervical nodes",
        1.0,
    );
    tally.flag(input.no_cough, "Absence of cough", 1.0);

    let (age_points, age_band) = age_modifier(input.age);
    tally.add(age_points, format!("Age {age_band}: {}", signed(age_points)));

    // The age modifier can take the raw total to -1.
    let score = tally.score().max(0.0);
    tally.finish_at(CalculatorId::Centor, score, &GuidanceContext::default())
}

/// Bands are inclusive whole-year ranges; fractional ages in the gaps
/// between them earn nothing.
fn age_modifier(age: f64) -> (f64, String) {
    if (CHILD_AGE_MIN..=CHILD_AGE_MAX).contains(&age) {
        (1.0, "3-14".to_string())
    } else if (ADULT_AGE_MIN..=ADULT_AGE_MAX).contains(&age) {
        (0.0, "15-44".to_string())
    } else if age >= OLDER_AGE_MIN {
        (-1.0, "≥45".to_string())
    } else if age < CHILD_AGE_MIN {
        (0.0, "<3".to_string())
    } else {
        (0.0, age.to_string())
    }
}
