use clap::Parser;
use eyre::Result;
use tracing_subscriber::EnvFilter;

use medref_cli::cli::Cli;
use medref_cli::{commands, config};

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    let path = config::config_path()?;
    let (config, load_error) = commands::load_config_for(&cli.command, &path)?;
    init_logging(&config.log_filter, cli.json_logs);
    if let Some(err) = load_error {
        tracing::warn!(path = %path.display(), "ignoring unreadable config: {err}");
    }

    let output = commands::run(cli.command, &config)?;
    print!("{output}");
    if !output.ends_with('\n') {
        println!();
    }
    Ok(())
}

/// `RUST_LOG` wins over the config's filter. Logs go to stderr so stdout
/// stays clean for `--format json`.
fn init_logging(fallback: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
