use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::{GuidanceContext, resolve_guidance};

/// The outcome of one calculator run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ScoreResult {
    pub score: f64,
    pub max_score: f64,
    pub risk_category: String,
    pub interpretation: String,
    pub recommendation: String,
    /// One line per criterion, in the order the published rule lists them.
    /// Criteria that contributed nothing are still present.
    pub details: Vec<String>,
}

/// Defines the valid range for a numeric input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct ValueRange {
    pub min: f64,
    pub max: f64,
    pub step: Option<f64>,
    /// When set, `min` itself is outside the range.
    pub exclusive_min: bool,
}

impl ValueRange {
    pub const fn inclusive(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: None,
            exclusive_min: false,
        }
    }

    /// Whole numbers between `min` and `max`.
    pub const fn whole(min: f64, max: f64) -> Self {
        Self {
            min,
            max,
            step: Some(1.0),
            exclusive_min: false,
        }
    }

    /// Strictly greater than zero, up to `max`.
    pub const fn positive(max: f64) -> Self {
        Self {
            min: 0.0,
            max,
            step: None,
            exclusive_min: true,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        if !value.is_finite() || value > self.max {
            return false;
        }
        if value < self.min || (self.exclusive_min && value == self.min) {
            return false;
        }
        if let Some(step) = self.step {
            let offset = value - self.min;
            let remainder = offset % step;
            // Allow floating point tolerance
            remainder < 1e-9 || (step - remainder) < 1e-9
        } else {
            true
        }
    }
}

/// Biological sex, as used by the rules that score it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sex {
    Male,
    Female,
}

impl Sex {
    pub const fn as_str(self) -> &'static str {
        match self {
            Sex::Male => "male",
            Sex::Female => "female",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct BloodPressure {
    /// mmHg
    pub systolic: f64,
    /// mmHg
    pub diastolic: f64,
}

/// Declares an ordinal clinical category: a closed set of wire tokens,
/// each worth a fixed number of points.
macro_rules! ordinal {
    (
        $(#[$meta:meta])*
        $name:ident {
            $($variant:ident = $token:literal => $points:expr),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq,
            ::serde::Serialize, ::serde::Deserialize, ::ts_rs::TS,
        )]
        #[ts(export)]
        pub enum $name {
            $(
                #[serde(rename = $token)]
                $variant,
            )+
        }

        impl $name {
            pub const fn points(self) -> f64 {
                match self {
                    $(Self::$variant => $points,)+
                }
            }

            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $token,)+
                }
            }
        }
    };
}

pub(crate) use ordinal;

/// Running total and per-criterion breakdown for one calculation.
#[derive(Debug, Default)]
pub(crate) struct Tally {
    score: f64,
    details: Vec<String>,
}

impl Tally {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Binary criterion worth `points` when present, nothing otherwise.
    pub(crate) fn flag(&mut self, present: bool, label: &str, points: f64) {
        let awarded = if present { points } else { 0.0 };
        self.add(awarded, format!("{label}: {}", signed(awarded)));
    }

    pub(crate) fn add(&mut self, points: f64, detail: impl Into<String>) {
        self.score += points;
        self.details.push(detail.into());
    }

    /// Record a line that does not change the total.
    pub(crate) fn note(&mut self, detail: impl Into<String>) {
        self.details.push(detail.into());
    }

    pub(crate) fn score(&self) -> f64 {
        self.score
    }

    pub(crate) fn finish(self, calculator: CalculatorId, context: &GuidanceContext) -> ScoreResult {
        let score = self.score;
        self.finish_at(calculator, score, context)
    }

    /// Finish with a final score that differs from the running total
    /// (floors, clamps, closed-form formulas).
    pub(crate) fn finish_at(
        self,
        calculator: CalculatorId,
        score: f64,
        context: &GuidanceContext,
    ) -> ScoreResult {
        let guidance = resolve_guidance(calculator, score, context);
        ScoreResult {
            score,
            max_score: calculator.max_score(),
            risk_category: guidance.risk_category,
            interpretation: guidance.interpretation,
            recommendation: guidance.recommendation,
            details: self.details,
        }
    }
}

/// `+1`, `+1.5`, `-2`, `+0`.
pub(crate) fn signed(points: f64) -> String {
    format!("{points:+}")
}

/// `to_pain` → `to pain`.
pub(crate) fn label(token: &str) -> String {
    token.replace('_', " ")
}
