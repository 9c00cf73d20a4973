//! GAD-7 anxiety questionnaire. Each item covers the last two weeks.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::calculator::CalculatorId;
use crate::guidance::GuidanceContext;
use crate::schema::{Checks, Validate};
use crate::scoring::{ScoreResult, Tally, label, ordinal};

ordinal! {
    Frequency {
        NotAtAll = "not_at_all" => 0.0,
        SeveralDays = "several_days" => 1.0,
        MoreThanHalf = "more_than_half" => 2.0,
        NearlyEveryDay = "nearly_every_day" => 3.0,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Gad7Input {
    pub nervous: Frequency,
    pub stop_worrying: Frequency,
    pub worrying_too_much: Frequency,
    pub trouble_relaxing: Frequency,
    pub restless: Frequency,
    pub easily_annoyed: Frequency,
    pub feeling_afraid: Frequency,
}

impl Validate for Gad7Input {
    fn validate(&self, _checks: &mut Checks) {}
}

impl Gad7Input {
    /// Questionnaire wording paired with the answer, in form order.
    pub fn answers(&self) -> [(&'static str, Frequency); 7] {
        [
            ("Feeling nervous, anxious, or on edge", self.nervous),
            ("Not being able to stop or control worrying", self.stop_worrying),
            ("Worrying too much about different things", self.worrying_too_much),
            ("Trouble relaxing", self.trouble_relaxing),
            ("Being so restless that it is hard to sit still", self.restless),
            ("Becoming easily annoyed or irritable", self.easily_annoyed),
            (
                "Feeling afraid, as if something awful might happen",
                self.feeling_afraid,
            ),
        ]
    }
}

pub fn calculate(input: &Gad7Input) -> ScoreResult {
    let mut tally = Tally::new();
    for (question, answer) in input.answers() {
        let points = answer.points();
        tally.add(
            points,
            format!("{question}: {} (+{points})", label(answer.as_str())),
        );
    }
    tally.finish(CalculatorId::Gad7, &GuidanceContext::default())
}
