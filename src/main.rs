//! Biblio CLI - library circulation engine
//!
//! Usage: biblio [OPTIONS] [SCRIPT]
//!
//! Reads one command per line from SCRIPT, or stdin, and prints one result
//! per command. Type `aide` for the command list.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::{Context, Result};
use clap::Parser;
use is_terminal::IsTerminal;
use tracing_subscriber::EnvFilter;

use biblio::config::{self, Config, LogLevel};
use biblio::presentation::{factory, Cli, Session};

const LOG_ENV: &str = "BIBLIO_LOG";

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (config, warnings) =
        config::resolve(cli.config.as_deref()).context("failed to load configuration")?;
    let config = cli.apply(config);

    init_tracing(&config, cli.verbose);
    for warning in &warnings {
        tracing::warn!("{warning}");
    }

    let store = factory::open_store(&config).context("failed to open store")?;
    tracing::info!(store = %store.describe(), "biblio ready");
    let mut dispatcher = factory::create_dispatcher(store);

    let stdout = io::stdout().lock();
    let summary = match cli.script_path() {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open script {}", path.display()))?;
            let echo = config.session.echo.unwrap_or(true);
            Session::new(echo).run(&mut dispatcher, BufReader::new(file), stdout)
        }
        None => {
            let stdin = io::stdin();
            let echo = config
                .session
                .echo
                .unwrap_or_else(|| !stdin.is_terminal());
            Session::new(echo).run(&mut dispatcher, stdin.lock(), stdout)
        }
    }
    .context("failed to run session")?;

    tracing::info!(
        executed = summary.executed,
        failed = summary.failed,
        "biblio done"
    );
    Ok(())
}

/// `BIBLIO_LOG` wins, then `-v`, then the configured level
fn init_tracing(config: &Config, verbose: u8) {
    let level = LogLevel::from_verbosity(verbose).unwrap_or(config.logging.level);
    let filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .init();
}
