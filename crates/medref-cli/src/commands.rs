use std::io::Read;
use std::path::{Path, PathBuf};

use medref_scores::{CalculatorId, calculate};

use crate::cli::{Command, ConfigAction};
use crate::config::{self, MedrefConfig, OutputFormat};
use crate::render;

/// Run one command and return what it prints on stdout.
pub fn run(command: Command, config: &MedrefConfig) -> eyre::Result<String> {
    match command {
        Command::List => Ok(render::render_catalogue()),
        Command::Describe { calculator } => {
            let id: CalculatorId = calculator.parse()?;
            Ok(render::render_description(id)?)
        }
        Command::Calc {
            calculator,
            inputs,
            file,
            format,
        } => {
            let id: CalculatorId = calculator.parse()?;
            let raw = read_inputs(inputs, file)?;
            calc(id, &raw, format.unwrap_or(config.output_format), config)
        }
        Command::Config { action } => match action {
            ConfigAction::Init { force } => init_config(&config::config_path()?, force),
            ConfigAction::Show => show_config(&config::config_path()?, config),
        },
    }
}

/// Load the config a command runs with. `config init` falls back to the
/// defaults when the file is unreadable, since replacing it is the fix; the
/// load error is handed back so it can be logged once logging is up.
pub fn load_config_for(
    command: &Command,
    path: &Path,
) -> eyre::Result<(MedrefConfig, Option<eyre::Report>)> {
    match config::load_from(path) {
        Ok(config) => Ok((config, None)),
        Err(err)
            if matches!(
                command,
                Command::Config {
                    action: ConfigAction::Init { .. }
                }
            ) =>
        {
            Ok((MedrefConfig::default(), Some(err)))
        }
        Err(err) => Err(err),
    }
}

pub fn calc(
    id: CalculatorId,
    raw: &serde_json::Value,
    format: OutputFormat,
    config: &MedrefConfig,
) -> eyre::Result<String> {
    let result = calculate(id, raw)?;
    match format {
        OutputFormat::Text => Ok(render::render_score(id, &result, config.show_disclaimer)?),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(&result)?),
    }
}

/// `--inputs` wins, then `--file`, then stdin.
fn read_inputs(inputs: Option<String>, file: Option<PathBuf>) -> eyre::Result<serde_json::Value> {
    let text = match (inputs, file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .map_err(|e| eyre::eyre!("failed to read inputs from {}: {e}", path.display()))?,
        (None, None) => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            text
        }
    };
    serde_json::from_str(&text).map_err(|e| eyre::eyre!("inputs are not valid JSON: {e}"))
}

pub fn init_config(path: &Path, force: bool) -> eyre::Result<String> {
    if path.exists() && !force {
        return Err(eyre::eyre!(
            "config already exists at {} (use --force to overwrite)",
            path.display()
        ));
    }
    config::save_to(&MedrefConfig::default(), path)?;
    Ok(format!("wrote {}\n", path.display()))
}

pub fn show_config(path: &Path, config: &MedrefConfig) -> eyre::Result<String> {
    let origin = if path.exists() { "" } else { " (not created; defaults)" };
    let json = serde_json::to_string_pretty(config)?;
    Ok(format!("# {}{origin}\n{json}\n", path.display()))
}
