//! Glasgow-Blatchford bleeding score for upper GI haemorrhage.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Sex, Tally, signed};
use crate::units::{BLATCHFORD_UREA_CROSSOVER, convert_urea_to_bun};

/// (lower bound in mg/dL, points), highest first.
const BUN_BANDS: [(f64, f64); 4] = [(70.0, 6.0), (28.0, 4.0), (22.4, 3.0), (18.2, 2.0)];
/// (exclusive upper bound in g/dL, points), lowest first.
const HEMOGLOBIN_MALE: [(f64, f64); 3] = [(10.0, 6.0), (12.0, 3.0), (13.0, 1.0)];
const HEMOGLOBIN_FEMALE: [(f64, f64); 2] = [(10.0, 6.0), (12.0, 1.0)];
/// (exclusive upper bound in mmHg, points), lowest first.
const SYSTOLIC_BANDS: [(f64, f64); 3] = [(90.0, 3.0), (100.0, 2.0), (110.0, 1.0)];

pub const PULSE_THRESHOLD: f64 = 100.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GlasgowBlatchfordInput {
    /// BUN in mg/dL, or urea in mmol/L.
    pub bun: Option<f64>,
    /// g/dL
    pub hemoglobin: f64,
    pub systolic_blood_pressure: f64,
    pub pulse: f64,
    pub melena: bool,
    pub syncope: bool,
    pub hepatic_disease: bool,
    pub cardiac_failure: bool,
    pub sex: Sex,
}

impl Validate for GlasgowBlatchfordInput {
    fn validate(&self, checks: &mut Checks) {
        checks.optional("bun", self.bun, schema::UREA);
        checks.require("hemoglobin", self.hemoglobin, schema::HEMOGLOBIN);
        checks.require(
            "systolicBloodPressure",
            self.systolic_blood_pressure,
            schema::VITAL_RATE,
        );
        checks.require("pulse", self.pulse, schema::VITAL_RATE);
    }
}

pub fn calculate(input: &GlasgowBlatchfordInput) -> ScoreResult {
    let mut tally = Tally::new();

    match input.bun {
        Some(raw) => {
            let bun = convert_urea_to_bun(raw, BLATCHFORD_UREA_CROSSOVER);
            let points = BUN_BANDS
                .iter()
                .find(|(min, _)| bun >= *min)
                .map_or(0.0, |(_, points)| *points);
            tally.add(points, format!("BUN {bun:.1} mg/dL: {}", signed(points)));
        }
        None => tally.note("BUN: not provided, +0"),
    }

    let hemoglobin_bands: &[(f64, f64)] = match input.sex {
        Sex::Male => &HEMOGLOBIN_MALE,
        Sex::Female => &HEMOGLOBIN_FEMALE,
    };
    let points = below_band(input.hemoglobin, hemoglobin_bands);
    tally.add(
        points,
        format!(
            "Hemoglobin {} g/dL ({}): {}",
            input.hemoglobin,
            input.sex.as_str(),
            signed(points)
        ),
    );

    let points = below_band(input.systolic_blood_pressure, &SYSTOLIC_BANDS);
    tally.add(
        points,
        format!(
            "Systolic BP {} mmHg: {}",
            input.systolic_blood_pressure,
            signed(points)
        ),
    );

    tally.flag(
        input.pulse >= PULSE_THRESHOLD,
        &format!("Pulse ≥{PULSE_THRESHOLD} bpm"),
        1.0,
    );
    tally.flag(input.melena, "Melena", 1.0);
    tally.flag(input.syncope, "Syncope", 2.0);
    tally.flag(input.hepatic_disease, "Hepatic disease", 2.0);
    tally.flag(input.cardiac_failure, "Cardiac failure", 2.0);

    tally.finish(CalculatorId::GlasgowBlatchford, &GuidanceContext::default())
}

fn below_band(value: f64, bands: &[(f64, f64)]) -> f64 {
    bands
        .iter()
        .find(|(below, _)| value < *below)
        .map_or(0.0, |(_, points)| *points)
}
