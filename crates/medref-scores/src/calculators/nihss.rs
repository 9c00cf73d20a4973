//! NIH Stroke Scale, 15 items.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{Checks, Validate};
use crate::scoring::{ScoreResult, Tally, label, ordinal};

ordinal! {
    Consciousness {
        Alert = "alert" => 0.0,
        ArousesMinor = "arouses_minor" => 1.0,
        ArousesRepeated = "arouses_repeated" => 2.0,
        Coma = "coma" => 3.0,
    }
}

ordinal! {
    /// Shared by the LOC questions and LOC commands items.
    LocResponse {
        BothCorrect = "both_correct" => 0.0,
        OneCorrect = "one_correct" => 1.0,
        NeitherCorrect = "neither_correct" => 2.0,
    }
}

ordinal! {
    Gaze {
        Normal = "normal" => 0.0,
        PartialPalsy = "partial_palsy" => 1.0,
        ForcedDeviation = "forced_deviation" => 2.0,
    }
}

ordinal! {
    VisualField {
        NoLoss = "no_loss" => 0.0,
        PartialHemianopia = "partial_hemianopia" => 1.0,
        CompleteHemianopia = "complete_hemianopia" => 3.0,
    }
}

ordinal! {
    FacialPalsy {
        Normal = "normal" => 0.0,
        Minor = "minor" => 1.0,
        Partial = "partial" => 2.0,
        Complete = "complete" => 3.0,
    }
}

ordinal! {
    /// Untestable limbs (amputation, joint fusion) score zero.
    LimbMotor {
        NoDrift = "no_drift" => 0.0,
        Drift = "drift" => 1.0,
        SomeEffort = "some_effort" => 2.0,
        NoEffort = "no_effort" => 3.0,
        NoMovement = "no_movement" => 4.0,
        Amputation = "amputation" => 0.0,
    }
}

ordinal! {
    LimbAtaxia {
        Absent = "absent" => 0.0,
        PresentOne = "present_one" => 1.0,
        PresentTwo = "present_two" => 2.0,
    }
}

ordinal! {
    Sensory {
        Normal = "normal" => 0.0,
        MildLoss = "mild_loss" => 1.0,
        SevereLoss = "severe_loss" => 2.0,
    }
}

ordinal! {
    Language {
        NoAphasia = "no_aphasia" => 0.0,
        MildAphasia = "mild_aphasia" => 1.0,
        SevereAphasia = "severe_aphasia" => 2.0,
        Mute = "mute" => 3.0,
    }
}

ordinal! {
    Dysarthria {
        Normal = "normal" => 0.0,
        Mild = "mild" => 1.0,
        Severe = "severe" => 2.0,
        Intubated = "intubated" => 0.0,
    }
}

ordinal! {
    Extinction {
        NoAbnormality = "no_abnormality" => 0.0,
        VisualTactileSpatial = "visual_tactile_spatial" => 1.0,
        ProfoundHemiInattention = "profound_hemi_inattention" => 2.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct NihssInput {
    pub level_of_consciousness: Consciousness,
    pub loc_questions: LocResponse,
    pub loc_commands: LocResponse,
    pub best_gaze: Gaze,
    pub visual: VisualField,
    pub facial_palsy: FacialPalsy,
    pub motor_arm_left: LimbMotor,
    pub motor_arm_right: LimbMotor,
    pub motor_leg_left: LimbMotor,
    pub motor_leg_right: LimbMotor,
    pub limb_ataxia: LimbAtaxia,
    pub sensory: Sensory,
    pub best_language: Language,
    pub dysarthria: Dysarthria,
    pub extinction_inattention: Extinction,
}

impl Validate for NihssInput {
    fn validate(&self, _checks: &mut Checks) {}
}

pub fn calculate(input: &NihssInput) -> ScoreResult {
    let items: [(&str, &str, f64); 15] = [
        ("LOC", input.level_of_consciousness.as_str(), input.level_of_consciousness.points()),
        ("LOC Questions", input.loc_questions.as_str(), input.loc_questions.points()),
        ("LOC Commands", input.loc_commands.as_str(), input.loc_commands.points()),
        ("Best Gaze", input.best_gaze.as_str(), input.best_gaze.points()),
        ("Visual Fields", input.visual.as_str(), input.visual.points()),
        ("Facial Palsy", input.facial_palsy.as_str(), input.facial_palsy.points()),
        ("Motor Left Arm", input.motor_arm_left.as_str(), input.motor_arm_left.points()),
        ("Motor Right Arm", input.motor_arm_right.as_str(), input.motor_arm_right.points()),
        ("Motor Left Leg", input.motor_leg_left.as_str(), input.motor_leg_left.points()),
        ("Motor Right Leg", input.motor_leg_right.as_str(), input.motor_leg_right.points()),
        ("Limb Ataxia", input.limb_ataxia.as_str(), input.limb_ataxia.points()),
        ("Sensory", input.sensory.as_str(), input.sensory.points()),
        ("Best Language", input.best_language.as_str(), input.best_language.points()),
        ("Dysarthria", input.dysarthria.as_str(), input.dysarthria.points()),
        (
            "Extinction/Inattention",
            input.extinction_inattention.as_str(),
            input.extinction_inattention.points(),
        ),
    ];

    let mut tally = Tally::new();
    for (name, token, points) in items {
        tally.add(points, format!("{name}: {} = {points}", label(token)));
    }

    tally.finish(CalculatorId::Nihss, &GuidanceContext::default())
}
