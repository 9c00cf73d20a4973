use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::OutputFormat;

#[derive(Debug, Parser)]
#[command(name = "medref")]
#[command(version, about = "Clinical decision scores for educational use")]
pub struct Cli {
    /// Write logs to stderr as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List every calculator
    List,
    /// Show a calculator's maximum score and risk bands
    Describe {
        /// Calculator identifier, e.g. curb65
        calculator: String,
    },
    /// Score one presentation
    Calc {
        /// Calculator identifier, e.g. curb65
        calculator: String,
        /// Inputs as a JSON object
        #[arg(long, conflicts_with = "file")]
        inputs: Option<String>,
        /// Read the JSON inputs from a file
        #[arg(long)]
        file: Option<PathBuf>,
        /// Output format (defaults to the config file's setting)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,
    },
    /// Manage the config file
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a config file with default settings
    Init {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// Print the config file location and effective settings
    Show,
}
