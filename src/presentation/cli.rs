//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap. Flags given here
//! override every configuration file and environment variable.

use std::path::PathBuf;

use clap::Parser;

use crate::config::{BackendKind, Config};

/// Biblio - library circulation: members, books, loans and reservations
#[derive(Parser, Debug)]
#[command(name = "biblio")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Commands are read one per line. Type 'aide' for the command list.")]
pub struct Cli {
    /// Command script to run; reads stdin when absent or '-'
    pub script: Option<PathBuf>,

    /// Store file (TOML)
    #[arg(long, conflicts_with = "memory")]
    pub store: Option<PathBuf>,

    /// Keep everything in memory; nothing is saved
    #[arg(long)]
    pub memory: bool,

    /// Configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Echo each command before its result
    #[arg(long, overrides_with = "no_echo")]
    pub echo: bool,

    /// Never echo commands
    #[arg(long)]
    pub no_echo: bool,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// The script path, or `None` for stdin
    pub fn script_path(&self) -> Option<&PathBuf> {
        self.script.as_ref().filter(|p| p.as_os_str() != "-")
    }

    /// Apply flag overrides on top of a loaded configuration
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(path) = &self.store {
            config.store.backend = BackendKind::Toml;
            config.store.path = Some(path.clone());
        }
        if self.memory {
            config.store.backend = BackendKind::Memory;
        }
        if self.echo {
            config.session.echo = Some(true);
        } else if self.no_echo {
            config.session.echo = Some(false);
        }
        config
    }
}
