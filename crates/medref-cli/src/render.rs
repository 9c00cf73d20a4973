//! Text output for the `calc`, `describe` and `list` commands.

use serde::Serialize;
use tera::{Context, Tera};

use medref_scores::guidance::guidance_table;
use medref_scores::{CalculatorId, ScoreResult};

use crate::error::RenderError;

const SCORE_TEMPLATE: &str = include_str!("../templates/score.txt");
const DESCRIBE_TEMPLATE: &str = include_str!("../templates/describe.txt");

#[derive(Debug, Serialize)]
struct ScoreView<'a> {
    heading: String,
    score: String,
    max_score: String,
    risk_category: &'a str,
    interpretation: &'a str,
    recommendation: &'a str,
    details: &'a [String],
    show_disclaimer: bool,
}

#[derive(Debug, Serialize)]
struct BandView {
    range: String,
    risk_category: &'static str,
    /// Absent when the text depends on the exact score.
    interpretation: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct DescribeView {
    id: &'static str,
    name: &'static str,
    summary: &'static str,
    max_score: String,
    bands: Vec<BandView>,
}

/// Render a Tera template with any serializable view.
fn render_template<T: Serialize>(
    template_name: &str,
    template_content: &str,
    view: &T,
) -> Result<String, RenderError> {
    let mut tera = Tera::default();
    tera.add_raw_template(template_name, template_content)
        .map_err(|e| RenderError::TemplateParse(e.to_string()))?;

    let value = serde_json::to_value(view)?;
    let context =
        Context::from_value(value).map_err(|e| RenderError::TemplateRender(e.to_string()))?;

    let rendered = tera.render(template_name, &context)?;
    Ok(rendered)
}

/// The report block for one result, headed by the upper-cased identifier.
pub fn render_score(
    calculator: CalculatorId,
    result: &ScoreResult,
    show_disclaimer: bool,
) -> Result<String, RenderError> {
    let view = ScoreView {
        heading: calculator.as_str().to_uppercase(),
        score: number(result.score),
        max_score: number(result.max_score),
        risk_category: &result.risk_category,
        interpretation: &result.interpretation,
        recommendation: &result.recommendation,
        details: &result.details,
        show_disclaimer,
    };
    render_template("score.txt", SCORE_TEMPLATE, &view)
}

pub fn render_description(calculator: CalculatorId) -> Result<String, RenderError> {
    let table = guidance_table(calculator);

    let mut bands = Vec::with_capacity(table.bands.len() + 1);
    let mut lower: Option<f64> = None;
    for band in table.bands {
        let range = match lower {
            None => format!("score < {}", number(band.below)),
            Some(from) => format!("{} to < {}", number(from), number(band.below)),
        };
        bands.push(BandView {
            range,
            risk_category: band.entry.risk_category,
            interpretation: band.entry.interpretation.as_fixed(),
        });
        lower = Some(band.below);
    }
    let top = lower.map_or_else(|| "any score".to_string(), |from| format!("score ≥ {}", number(from)));
    bands.push(BandView {
        range: top,
        risk_category: table.catch_all.risk_category,
        interpretation: table.catch_all.interpretation.as_fixed(),
    });

    let view = DescribeView {
        id: calculator.as_str(),
        name: calculator.name(),
        summary: calculator.summary(),
        max_score: number(calculator.max_score()),
        bands,
    };
    render_template("describe.txt", DESCRIBE_TEMPLATE, &view)
}

/// One line per calculator: identifier, name, purpose.
pub fn render_catalogue() -> String {
    let width = CalculatorId::ALL
        .iter()
        .map(|id| id.as_str().len())
        .max()
        .unwrap_or(0);

    CalculatorId::ALL
        .iter()
        .map(|id| format!("{:<width$}  {}: {}\n", id.as_str(), id.name(), id.summary()))
        .collect()
}

/// Scores print without a trailing `.0`.
fn number(value: f64) -> String {
    format!("{value}")
}
