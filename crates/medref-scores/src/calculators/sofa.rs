//! Sequential Organ Failure Assessment.
//!
//! Six organ systems, each scored 0–4. Respiration needs both PaO2 and
//! FiO2; without them it contributes 0 and says so in the breakdown.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Tally, ordinal};
use crate::units::normalize_fio2;

pub const MAP_THRESHOLD: f64 = 70.0;
/// mL/day
pub const URINE_OUTPUT_CRITICAL: f64 = 200.0;
pub const URINE_OUTPUT_SEVERE: f64 = 500.0;

/// (exclusive upper bound, points), lowest first.
const PLATELET_BANDS: [(f64, f64); 4] = [(20.0, 4.0), (50.0, 3.0), (100.0, 2.0), (150.0, 1.0)];
/// (inclusive lower bound in mg/dL, points), highest first.
const BILIRUBIN_BANDS: [(f64, f64); 4] = [(12.0, 4.0), (6.0, 3.0), (2.0, 2.0), (1.2, 1.0)];
/// (exclusive upper bound, points), lowest first.
const GCS_BANDS: [(f64, f64); 4] = [(6.0, 4.0), (10.0, 3.0), (13.0, 2.0), (15.0, 1.0)];

ordinal! {
    /// Doses in μg/kg/min.
    Vasopressors {
        NoVasopressors = "none" => 0.0,
        DopamineLow = "dopamine_low" => 2.0,
        DopamineMedium = "dopamine_medium" => 3.0,
        DopamineHighEpiNorepi = "dopamine_high_epi_norepi" => 4.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SofaInput {
    /// mmHg
    pub pao2: Option<f64>,
    /// Fraction (0.21–1.0) or percentage (21–100).
    pub fio2: Option<f64>,
    pub mechanical_ventilation: bool,
    /// ×10³/μL
    pub platelets: f64,
    /// mg/dL
    pub bilirubin: f64,
    pub mean_arterial_pressure: Option<f64>,
    pub vasopressors: Vasopressors,
    pub glasgow_coma_scale: f64,
    /// mg/dL
    pub creatinine: f64,
    /// mL/day
    pub urine_output: Option<f64>,
}

impl Validate for SofaInput {
    fn validate(&self, checks: &mut Checks) {
        checks.optional("pao2", self.pao2, schema::PAO2);
        checks.optional("fio2", self.fio2, schema::FIO2);
        checks.require("platelets", self.platelets, schema::PLATELETS);
        checks.require("bilirubin", self.bilirubin, schema::BILIRUBIN);
        checks.optional(
            "meanArterialPressure",
            self.mean_arterial_pressure,
            schema::MEAN_ARTERIAL_PRESSURE,
        );
        checks.require(
            "glasgowComaScale",
            self.glasgow_coma_scale,
            schema::GLASGOW_COMA_SCALE,
        );
        checks.require("creatinine", self.creatinine, schema::CREATININE);
        checks.optional("urineOutput", self.urine_output, schema::URINE_OUTPUT);
    }
}

/// One organ system's contribution.
#[derive(Debug, Clone, PartialEq)]
pub struct SubScore {
    pub points: f64,
    pub detail: String,
}

impl SubScore {
    fn new(points: f64, detail: String) -> Self {
        Self { points, detail }
    }
}

pub fn calculate(input: &SofaInput) -> ScoreResult {
    let mut tally = Tally::new();

    for sub in [
        respiration_sub_score(input.pao2, input.fio2, input.mechanical_ventilation),
        coagulation_sub_score(input.platelets),
        liver_sub_score(input.bilirubin),
        cardiovascular_sub_score(input.vasopressors, input.mean_arterial_pressure),
        cns_sub_score(input.glasgow_coma_scale),
        renal_sub_score(input.creatinine, input.urine_output),
    ] {
        tally.add(sub.points, sub.detail);
    }

    tally.finish(CalculatorId::Sofa, &GuidanceContext::default())
}

pub fn respiration_sub_score(
    pao2: Option<f64>,
    fio2: Option<f64>,
    mechanical_ventilation: bool,
) -> SubScore {
    let (Some(pao2), Some(fio2)) = (pao2, fio2) else {
        return SubScore::new(
            0.0,
            "Respiration: Unable to calculate (PaO2 or FiO2 not provided) = 0".to_string(),
        );
    };

    let ratio = pao2 / normalize_fio2(fio2);
    let support = if mechanical_ventilation {
        "with"
    } else {
        "without"
    };

    // Only ventilated patients reach 3 or 4.
    let (points, band) = if ratio < 100.0 {
        (if mechanical_ventilation { 4.0 } else { 2.0 }, "<100")
    } else if ratio < 200.0 {
        (if mechanical_ventilation { 3.0 } else { 2.0 }, "<200")
    } else if ratio < 300.0 {
        (2.0, "<300")
    } else if ratio < 400.0 {
        (1.0, "<400")
    } else {
        (0.0, "≥400")
    };

    let detail = if ratio < 200.0 {
        format!("Respiration: PaO2/FiO2 {ratio:.0} ({band}) {support} mechanical ventilation = {points}")
    } else {
        format!("Respiration: PaO2/FiO2 {ratio:.0} ({band}) = {points}")
    };
    SubScore::new(points, detail)
}

pub fn coagulation_sub_score(platelets: f64) -> SubScore {
    match PLATELET_BANDS.iter().find(|(below, _)| platelets < *below) {
        Some((below, points)) => {
            SubScore::new(*points, format!("Coagulation: Platelets <{below} = {points}"))
        }
        None => SubScore::new(0.0, "Coagulation: Platelets ≥150 = 0".to_string()),
    }
}

pub fn liver_sub_score(bilirubin: f64) -> SubScore {
    match BILIRUBIN_BANDS.iter().find(|(min, _)| bilirubin >= *min) {
        Some((min, points)) => {
            SubScore::new(*points, format!("Liver: Bilirubin ≥{min} mg/dL = {points}"))
        }
        None => SubScore::new(0.0, "Liver: Bilirubin <1.2 mg/dL = 0".to_string()),
    }
}

/// Any vasopressor outranks the MAP criterion.
pub fn cardiovascular_sub_score(
    vasopressors: Vasopressors,
    mean_arterial_pressure: Option<f64>,
) -> SubScore {
    let detail = match vasopressors {
        Vasopressors::DopamineHighEpiNorepi => {
            "Cardiovascular: Dopamine >15 or epinephrine/norepinephrine any dose = 4"
        }
        Vasopressors::DopamineMedium => "Cardiovascular: Dopamine >5-15 μg/kg/min = 3",
        Vasopressors::DopamineLow => "Cardiovascular: Dopamine ≤5 or dobutamine any dose = 2",
        Vasopressors::NoVasopressors => {
            return match mean_arterial_pressure {
                Some(map) if map < MAP_THRESHOLD => SubScore::new(
                    1.0,
                    format!("Cardiovascular: MAP {map} mmHg (<{MAP_THRESHOLD}) = 1"),
                ),
                Some(map) => SubScore::new(
                    0.0,
                    format!("Cardiovascular: MAP {map} mmHg (≥{MAP_THRESHOLD}), no vasopressors = 0"),
                ),
                None => SubScore::new(0.0, "Cardiovascular: No vasopressors = 0".to_string()),
            };
        }
    };
    SubScore::new(vasopressors.points(), detail.to_string())
}

pub fn cns_sub_score(glasgow_coma_scale: f64) -> SubScore {
    let points = GCS_BANDS
        .iter()
        .find(|(below, _)| glasgow_coma_scale < *below)
        .map_or(0.0, |(_, points)| *points);
    SubScore::new(
        points,
        format!("CNS: Glasgow Coma Scale {glasgow_coma_scale} = {points}"),
    )
}

/// Worse of the creatinine and urine-output criteria.
///
/// The checks run in a fixed interleaved order, so a low urine output wins
/// over a merely elevated creatinine at the same or lower level.
pub fn renal_sub_score(creatinine: f64, urine_output: Option<f64>) -> SubScore {
    if let Some(urine) = urine_output
        && urine < URINE_OUTPUT_CRITICAL
    {
        return SubScore::new(
            4.0,
            format!(
                "Renal: Creatinine {creatinine:.1} mg/dL and urine output <{URINE_OUTPUT_CRITICAL} mL/day = 4"
            ),
        );
    }
    if creatinine >= 5.0 {
        return SubScore::new(4.0, "Renal: Creatinine ≥5 mg/dL = 4".to_string());
    }
    if let Some(urine) = urine_output
        && urine < URINE_OUTPUT_SEVERE
    {
        return SubScore::new(
            3.0,
            format!(
                "Renal: Creatinine {creatinine:.1} mg/dL and urine output <{URINE_OUTPUT_SEVERE} mL/day = 3"
            ),
        );
    }
    if creatinine >= 3.5 {
        return SubScore::new(3.0, "Renal: Creatinine ≥3.5 mg/dL = 3".to_string());
    }
    if creatinine >= 2.0 {
        return SubScore::new(2.0, "Renal: Creatinine ≥2 mg/dL = 2".to_string());
    }
    if creatinine >= 1.2 {
        return SubScore::new(1.0, "Renal: Creatinine ≥1.2 mg/dL = 1".to_string());
    }
    SubScore::new(0.0, "Renal: Creatinine <1.2 mg/dL = 0".to_string())
}
