use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculators::{
    abcd2, alvarado, centor, cha2ds2_vasc, curb65, gad7, gcs, glasgow_blatchford, grace,
    has_bled, heart, meld, nihss, perc, qsofa, sofa, timi, wells_dvt, wells_pe,
};
use crate::error::ScoreError;
use crate::schema::{ValidationError, parse};
use crate::scoring::ScoreResult;

/// Every supported scoring rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum CalculatorId {
    Curb65,
    Centor,
    WellsDvt,
    WellsPe,
    Heart,
    Cha2ds2Vasc,
    Gcs,
    Qsofa,
    Alvarado,
    GlasgowBlatchford,
    Nihss,
    Sofa,
    Perc,
    Timi,
    Meld,
    Gad7,
    Grace,
    HasBled,
    Abcd2,
}

impl CalculatorId {
    pub const ALL: [CalculatorId; 19] = [
        CalculatorId::Curb65,
        CalculatorId::Centor,
        CalculatorId::WellsDvt,
        CalculatorId::WellsPe,
        CalculatorId::Heart,
        CalculatorId::Cha2ds2Vasc,
        CalculatorId::Gcs,
        CalculatorId::Qsofa,
        CalculatorId::Alvarado,
        CalculatorId::GlasgowBlatchford,
        CalculatorId::Nihss,
        CalculatorId::Sofa,
        CalculatorId::Perc,
        CalculatorId::Timi,
        CalculatorId::Meld,
        CalculatorId::Gad7,
        CalculatorId::Grace,
        CalculatorId::HasBled,
        CalculatorId::Abcd2,
    ];

    /// Wire identifier (e.g., "wells_dvt").
    pub const fn as_str(self) -> &'static str {
        match self {
            CalculatorId::Curb65 => "curb65",
            CalculatorId::Centor => "centor",
            CalculatorId::WellsDvt => "wells_dvt",
            CalculatorId::WellsPe => "wells_pe",
            CalculatorId::Heart => "heart",
            CalculatorId::Cha2ds2Vasc => "cha2ds2_vasc",
            CalculatorId::Gcs => "gcs",
            CalculatorId::Qsofa => "qsofa",
            CalculatorId::Alvarado => "alvarado",
            CalculatorId::GlasgowBlatchford => "glasgow_blatchford",
            CalculatorId::Nihss => "nihss",
            CalculatorId::Sofa => "sofa",
            CalculatorId::Perc => "perc",
            CalculatorId::Timi => "timi",
            CalculatorId::Meld => "meld",
            CalculatorId::Gad7 => "gad7",
            CalculatorId::Grace => "grace",
            CalculatorId::HasBled => "has_bled",
            CalculatorId::Abcd2 => "abcd2",
        }
    }

    /// Human-readable name (e.g., "CURB-65").
    pub const fn name(self) -> &'static str {
        match self {
            CalculatorId::Curb65 => "CURB-65",
            CalculatorId::Centor => "Centor",
            CalculatorId::WellsDvt => "Wells DVT",
            CalculatorId::WellsPe => "Wells PE",
            CalculatorId::Heart => "HEART",
            CalculatorId::Cha2ds2Vasc => "CHA2DS2-VASc",
            CalculatorId::Gcs => "Glasgow Coma Scale",
            CalculatorId::Qsofa => "qSOFA",
            CalculatorId::Alvarado => "Alvarado",
            CalculatorId::GlasgowBlatchford => "Glasgow-Blatchford",
            CalculatorId::Nihss => "NIH Stroke Scale",
            CalculatorId::Sofa => "SOFA",
            CalculatorId::Perc => "PERC",
            CalculatorId::Timi => "TIMI (UA/NSTEMI)",
            CalculatorId::Meld => "MELD",
            CalculatorId::Gad7 => "GAD-7",
            CalculatorId::Grace => "GRACE",
            CalculatorId::HasBled => "HAS-BLED",
            CalculatorId::Abcd2 => "ABCD2",
        }
    }

    /// What the rule estimates.
    pub const fn summary(self) -> &'static str {
        match self {
            CalculatorId::Curb65 => "pneumonia severity/mortality risk",
            CalculatorId::Centor => "streptococcal pharyngitis probability",
            CalculatorId::WellsDvt => "DVT probability",
            CalculatorId::WellsPe => "PE probability",
            CalculatorId::Heart => "chest pain cardiac event risk",
            CalculatorId::Cha2ds2Vasc => "stroke risk in atrial fibrillation",
            CalculatorId::Gcs => "level of consciousness",
            CalculatorId::Qsofa => "sepsis screening",
            CalculatorId::Alvarado => "appendicitis risk",
            CalculatorId::GlasgowBlatchford => "upper GI bleeding risk",
            CalculatorId::Nihss => "stroke severity",
            CalculatorId::Sofa => "organ failure and ICU mortality",
            CalculatorId::Perc => "pulmonary embolism rule-out",
            CalculatorId::Timi => "NSTEMI/UA risk stratification",
            CalculatorId::Meld => "end-stage liver disease mortality",
            CalculatorId::Gad7 => "anxiety screening",
            CalculatorId::Grace => "ACS in-hospital mortality",
            CalculatorId::HasBled => "bleeding risk on anticoagulation",
            CalculatorId::Abcd2 => "stroke risk after TIA",
        }
    }

    pub const fn max_score(self) -> f64 {
        match self {
            CalculatorId::Curb65 => 5.0,
            CalculatorId::Centor => 4.0,
            CalculatorId::WellsDvt => 9.0,
            CalculatorId::WellsPe => 12.5,
            CalculatorId::Heart => 10.0,
            CalculatorId::Cha2ds2Vasc => 9.0,
            CalculatorId::Gcs => 15.0,
            CalculatorId::Qsofa => 3.0,
            CalculatorId::Alvarado => 10.0,
            CalculatorId::GlasgowBlatchford => 23.0,
            CalculatorId::Nihss => 42.0,
            CalculatorId::Sofa => 24.0,
            CalculatorId::Perc => 8.0,
            CalculatorId::Timi => 7.0,
            CalculatorId::Meld => 40.0,
            CalculatorId::Gad7 => 21.0,
            CalculatorId::Grace => 372.0,
            CalculatorId::HasBled => 9.0,
            CalculatorId::Abcd2 => 7.0,
        }
    }

    /// Number of lines every result's `details` carries.
    pub const fn criteria_count(self) -> usize {
        match self {
            CalculatorId::Curb65 => 5,
            CalculatorId::Centor => 5,
            CalculatorId::WellsDvt => 10,
            CalculatorId::WellsPe => 7,
            CalculatorId::Heart => 5,
            CalculatorId::Cha2ds2Vasc => 7,
            CalculatorId::Gcs => 3,
            CalculatorId::Qsofa => 3,
            CalculatorId::Alvarado => 8,
            CalculatorId::GlasgowBlatchford => 9,
            CalculatorId::Nihss => 15,
            CalculatorId::Sofa => 6,
            CalculatorId::Perc => 8,
            CalculatorId::Timi => 7,
            CalculatorId::Meld => 5,
            CalculatorId::Gad7 => 7,
            CalculatorId::Grace => 8,
            CalculatorId::HasBled => 9,
            CalculatorId::Abcd2 => 5,
        }
    }

    /// Rules whose raw score may fall at or below zero.
    pub const fn allows_non_positive(self) -> bool {
        matches!(self, CalculatorId::WellsDvt | CalculatorId::WellsPe)
    }
}

impl fmt::Display for CalculatorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CalculatorId {
    type Err = ScoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CalculatorId::ALL
            .into_iter()
            .find(|id| id.as_str() == s)
            .ok_or_else(|| ScoreError::UnknownCalculator(s.to_string()))
    }
}

/// Validated inputs for exactly one calculator.
#[derive(Debug, Clone, PartialEq)]
pub enum CalculatorInput {
    Curb65(curb65::Curb65Input),
    Centor(centor::CentorInput),
    WellsDvt(wells_dvt::WellsDvtInput),
    WellsPe(wells_pe::WellsPeInput),
    Heart(heart::HeartInput),
    Cha2ds2Vasc(cha2ds2_vasc::Cha2ds2VascInput),
    Gcs(gcs::GcsInput),
    Qsofa(qsofa::QsofaInput),
    Alvarado(alvarado::AlvaradoInput),
    GlasgowBlatchford(glasgow_blatchford::GlasgowBlatchfordInput),
    Nihss(nihss::NihssInput),
    Sofa(sofa::SofaInput),
    Perc(perc::PercInput),
    Timi(timi::TimiInput),
    Meld(meld::MeldInput),
    Gad7(gad7::Gad7Input),
    Grace(grace::GraceInput),
    HasBled(has_bled::HasBledInput),
    Abcd2(abcd2::Abcd2Input),
}

impl CalculatorInput {
    pub fn parse(id: CalculatorId, raw: &serde_json::Value) -> Result<Self, ValidationError> {
        Ok(match id {
            CalculatorId::Curb65 => Self::Curb65(parse(id, raw)?),
            CalculatorId::Centor => Self::Centor(parse(id, raw)?),
            CalculatorId::WellsDvt => Self::WellsDvt(parse(id, raw)?),
            CalculatorId::WellsPe => Self::WellsPe(parse(id, raw)?),
            CalculatorId::Heart => Self::Heart(parse(id, raw)?),
            CalculatorId::Cha2ds2Vasc => Self::Cha2ds2Vasc(parse(id, raw)?),
            CalculatorId::Gcs => Self::Gcs(parse(id, raw)?),
            CalculatorId::Qsofa => Self::Qsofa(parse(id, raw)?),
            CalculatorId::Alvarado => Self::Alvarado(parse(id, raw)?),
            CalculatorId::GlasgowBlatchford => Self::GlasgowBlatchford(parse(id, raw)?),
            CalculatorId::Nihss => Self::Nihss(parse(id, raw)?),
            CalculatorId::Sofa => Self::Sofa(parse(id, raw)?),
            CalculatorId::Perc => Self::Perc(parse(id, raw)?),
            CalculatorId::Timi => Self::Timi(parse(id, raw)?),
            CalculatorId::Meld => Self::Meld(parse(id, raw)?),
            CalculatorId::Gad7 => Self::Gad7(parse(id, raw)?),
            CalculatorId::Grace => Self::Grace(parse(id, raw)?),
            CalculatorId::HasBled => Self::HasBled(parse(id, raw)?),
            CalculatorId::Abcd2 => Self::Abcd2(parse(id, raw)?),
        })
    }

    pub fn id(&self) -> CalculatorId {
        match self {
            Self::Curb65(_) => CalculatorId::Curb65,
            Self::Centor(_) => CalculatorId::Centor,
            Self::WellsDvt(_) => CalculatorId::WellsDvt,
            Self::WellsPe(_) => CalculatorId::WellsPe,
            Self::Heart(_) => CalculatorId::Heart,
            Self::Cha2ds2Vasc(_) => CalculatorId::Cha2ds2Vasc,
            Self::Gcs(_) => CalculatorId::Gcs,
            Self::Qsofa(_) => CalculatorId::Qsofa,
            Self::Alvarado(_) => CalculatorId::Alvarado,
            Self::GlasgowBlatchford(_) => CalculatorId::GlasgowBlatchford,
            Self::Nihss(_) => CalculatorId::Nihss,
            Self::Sofa(_) => CalculatorId::Sofa,
            Self::Perc(_) => CalculatorId::Perc,
            Self::Timi(_) => CalculatorId::Timi,
            Self::Meld(_) => CalculatorId::Meld,
            Self::Gad7(_) => CalculatorId::Gad7,
            Self::Grace(_) => CalculatorId::Grace,
            Self::HasBled(_) => CalculatorId::HasBled,
            Self::Abcd2(_) => CalculatorId::Abcd2,
        }
    }

    pub fn score(&self) -> ScoreResult {
        match self {
            Self::Curb65(input) => curb65::calculate(input),
            Self::Centor(input) => centor::calculate(input),
            Self::WellsDvt(input) => wells_dvt::calculate(input),
            Self::WellsPe(input) => wells_pe::calculate(input),
            Self::Heart(input) => heart::calculate(input),
            Self::Cha2ds2Vasc(input) => cha2ds2_vasc::calculate(input),
            Self::Gcs(input) => gcs::calculate(input),
            Self::Qsofa(input) => qsofa::calculate(input),
            Self::Alvarado(input) => alvarado::calculate(input),
            Self::GlasgowBlatchford(input) => glasgow_blatchford::calculate(input),
            Self::Nihss(input) => nihss::calculate(input),
            Self::Sofa(input) => sofa::calculate(input),
            Self::Perc(input) => perc::calculate(input),
            Self::Timi(input) => timi::calculate(input),
            Self::Meld(input) => meld::calculate(input),
            Self::Gad7(input) => gad7::calculate(input),
            Self::Grace(input) => grace::calculate(input),
            Self::HasBled(input) => has_bled::calculate(input),
            Self::Abcd2(input) => abcd2::calculate(input),
        }
    }
}
