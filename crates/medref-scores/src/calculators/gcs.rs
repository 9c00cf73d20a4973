//! Glasgow Coma Scale. Unlike the other rules, lower is worse.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{Checks, Validate};
use crate::scoring::{ScoreResult, Tally, label, ordinal};

ordinal! {
    EyeOpening {
        Spontaneous = "spontaneous" => 4.0,
        ToSpeech = "to_speech" => 3.0,
        ToPain = "to_pain" => 2.0,
        NoResponse = "none" => 1.0,
    }
}

ordinal! {
    VerbalResponse {
        Oriented = "oriented" => 5.0,
        Confused = "confused" => 4.0,
        InappropriateWords = "inappropriate_words" => 3.0,
        Incomprehensible = "incomprehensible" => 2.0,
        NoResponse = "none" => 1.0,
    }
}

ordinal! {
    MotorResponse {
        ObeysCommands = "obeys_commands" => 6.0,
        LocalizesPain = "localizes_pain" => 5.0,
        WithdrawsFromPain = "withdraws_from_pain" => 4.0,
        AbnormalFlexion = "abnormal_flexion" => 3.0,
        AbnormalExtension = "abnormal_extension" => 2.0,
        NoResponse = "none" => 1.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct GcsInput {
    pub eye_opening: EyeOpening,
    pub verbal_response: VerbalResponse,
    pub motor_response: MotorResponse,
}

impl Validate for GcsInput {
    fn validate(&self, _checks: &mut Checks) {}
}

pub fn calculate(input: &GcsInput) -> ScoreResult {
    let mut tally = Tally::new();

    let eye = input.eye_opening;
    tally.add(
        eye.points(),
        format!("Eye opening ({}): {}", label(eye.as_str()), eye.points()),
    );

    let verbal = input.verbal_response;
    tally.add(
        verbal.points(),
        format!(
            "Verbal response ({}): {}",
            label(verbal.as_str()),
            verbal.points()
        ),
    );

    let motor = input.motor_response;
    tally.add(
        motor.points(),
        format!("Motor response ({}): {}", label(motor.as_str()), motor.points()),
    );

    tally.finish(CalculatorId::Gcs, &GuidanceContext::default())
}
