//! Configuration module for Biblio
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (BIBLIO_*)
//! 3. `--config <path>`, else `./biblio.toml`, else the user config file
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{resolve, ConfigError, ConfigWarning, LOCAL_CONFIG_FILE};
pub use types::{BackendKind, Config, LogLevel, LoggingConfig, SessionConfig, StoreConfig};
