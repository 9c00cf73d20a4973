//! GRACE score for in-hospital mortality in acute coronary syndrome.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{self, Checks, Validate};
use crate::scoring::{ScoreResult, Tally};

/// One row of a range lookup: values up to and including `max` earn
/// `points`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangePoints {
    pub max: f64,
    pub points: f64,
}

const fn row(max: f64, points: f64) -> RangePoints {
    RangePoints { max, points }
}

pub const AGE_POINTS: [RangePoints; 6] = [
    row(39.0, 0.0),
    row(49.0, 18.0),
    row(59.0, 36.0),
    row(69.0, 55.0),
    row(79.0, 73.0),
    row(200.0, 91.0),
];

pub const HEART_RATE_POINTS: [RangePoints; 6] = [
    row(69.0, 0.0),
    row(89.0, 7.0),
    row(109.0, 13.0),
    row(149.0, 23.0),
    row(199.0, 36.0),
    row(500.0, 46.0),
];

/// Lower pressure scores higher.
pub const SYSTOLIC_POINTS: [RangePoints; 6] = [
    row(99.0, 43.0),
    row(119.0, 34.0),
    row(139.0, 24.0),
    row(159.0, 15.0),
    row(199.0, 7.0),
    row(500.0, 0.0),
];

pub const CREATININE_POINTS: [RangePoints; 7] = [
    row(0.39, 2.0),
    row(0.79, 5.0),
    row(1.19, 8.0),
    row(1.59, 11.0),
    row(1.99, 14.0),
    row(3.99, 23.0),
    row(100.0, 31.0),
];

/// Indexed by Killip class minus one.
pub const KILLIP_POINTS: [f64; 4] = [0.0, 21.0, 43.0, 64.0];

pub const CARDIAC_ARREST_POINTS: f64 = 43.0;
pub const ST_DEVIATION_POINTS: f64 = 30.0;
pub const ELEVATED_MARKERS_POINTS: f64 = 15.0;

/// Points for the first row whose `max` is at least `value`; values past
/// the last row take the last row's points.
pub fn points_for(value: f64, table: &[RangePoints]) -> f64 {
    table
        .iter()
        .find(|row| value <= row.max)
        .or(table.last())
        .map_or(0.0, |row| row.points)
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GraceInput {
    pub age: f64,
    pub heart_rate: f64,
    pub systolic_blood_pressure: f64,
    /// mg/dL
    pub creatinine: f64,
    /// 1 = no heart failure, 4 = cardiogenic shock.
    pub killip_class: f64,
    pub cardiac_arrest: bool,
    pub st_deviation: bool,
    pub elevated_cardiac_markers: bool,
}

impl Validate for GraceInput {
    fn validate(&self, checks: &mut Checks) {
        checks.require("age", self.age, schema::AGE_YEARS);
        checks.require("heartRate", self.heart_rate, schema::VITAL_RATE);
        checks.require(
            "systolicBloodPressure",
            self.systolic_blood_pressure,
            schema::VITAL_RATE,
        );
        checks.require("creatinine", self.creatinine, schema::POSITIVE_LAB);
        checks.require("killipClass", self.killip_class, schema::KILLIP_CLASS);
    }
}

pub fn calculate(input: &GraceInput) -> ScoreResult {
    let mut tally = Tally::new();

    let points = points_for(input.age, &AGE_POINTS);
    tally.add(points, format!("Age {} years: +{points}", input.age));

    let points = points_for(input.heart_rate, &HEART_RATE_POINTS);
    tally.add(points, format!("Heart rate {} bpm: +{points}", input.heart_rate));

    let points = points_for(input.systolic_blood_pressure, &SYSTOLIC_POINTS);
    tally.add(
        points,
        format!("Systolic BP {} mmHg: +{points}", input.systolic_blood_pressure),
    );

    let points = points_for(input.creatinine, &CREATININE_POINTS);
    tally.add(
        points,
        format!("Creatinine {:.2} mg/dL: +{points}", input.creatinine),
    );

    let points = killip_points(input.killip_class);
    tally.add(
        points,
        format!("Killip class {}: +{points}", input.killip_class),
    );

    tally.flag(
        input.cardiac_arrest,
        "Cardiac arrest at admission",
        CARDIAC_ARREST_POINTS,
    );
    tally.flag(input.st_deviation, "ST-segment deviation", ST_DEVIATION_POINTS);
    tally.flag(
        input.elevated_cardiac_markers,
        "Elevated cardiac biomarkers",
        ELEVATED_MARKERS_POINTS,
    );

    tally.finish(CalculatorId::Grace, &GuidanceContext::default())
}

fn killip_points(class: f64) -> f64 {
    let index = (class as usize).clamp(1, KILLIP_POINTS.len()) - 1;
    KILLIP_POINTS[index]
}
