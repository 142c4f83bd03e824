//! Configuration loading

use std::fs;
use std::path::{Path, PathBuf};

use super::types::{BackendKind, Config};

/// Project-local config file name
pub const LOCAL_CONFIG_FILE: &str = "biblio.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {message}")]
    Invalid { path: PathBuf, message: String },
}

/// Non-fatal configuration warning surfaced to CLI users.
///
/// Collected while resolving and logged once tracing is up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigWarning {
    UnknownKey {
        key: String,
        file: PathBuf,
        line: Option<usize>,
        suggestion: Option<String>,
    },
    InvalidEnv {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

impl std::fmt::Display for ConfigWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigWarning::UnknownKey {
                key,
                file,
                line,
                suggestion,
            } => {
                write!(f, "unknown config key '{}' in {}", key, file.display())?;
                if let Some(line) = line {
                    write!(f, ":{}", line)?;
                }
                if let Some(suggestion) = suggestion {
                    write!(f, " (did you mean '{}'?)", suggestion)?;
                }
                Ok(())
            }
            ConfigWarning::InvalidEnv {
                var,
                value,
                expected,
            } => write!(f, "ignoring {var}='{value}' (expected {expected})"),
        }
    }
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ConfigError::Invalid {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning::UnknownKey {
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
                file: path.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Resolve and load the configuration file
///
/// An explicit path must exist. Otherwise `./biblio.toml`, then the user
/// config file, then built-in defaults. Environment overrides apply last.
pub fn resolve(explicit: Option<&Path>) -> Result<(Config, Vec<ConfigWarning>), ConfigError> {
    let candidate = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => [Some(PathBuf::from(LOCAL_CONFIG_FILE)), user_config_path()]
            .into_iter()
            .flatten()
            .find(|p| p.exists()),
    };

    let (config, mut warnings) = match candidate {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            load_with_warnings(&path)?
        }
        None => (Config::default(), Vec::new()),
    };

    let (config, env_warnings) = config.with_env_overrides();
    warnings.extend(env_warnings);
    Ok((config, warnings))
}

/// Apply environment variable overrides (BIBLIO_* prefix)
///
/// Values that cannot be applied are skipped and returned as warnings.
pub fn with_env_overrides(
    mut config: Config,
    var: impl Fn(&str) -> Option<String>,
) -> (Config, Vec<ConfigWarning>) {
    let mut warnings = Vec::new();

    // BIBLIO_STORE_PATH
    if let Some(path) = var("BIBLIO_STORE_PATH").filter(|p| !p.is_empty()) {
        config.store.path = Some(PathBuf::from(path));
    }

    // BIBLIO_STORE_BACKEND
    if let Some(backend) = var("BIBLIO_STORE_BACKEND") {
        match backend.to_lowercase().as_str() {
            "memory" => config.store.backend = BackendKind::Memory,
            "toml" => config.store.backend = BackendKind::Toml,
            _ => warnings.push(ConfigWarning::InvalidEnv {
                var: "BIBLIO_STORE_BACKEND",
                value: backend,
                expected: "'toml' or 'memory'",
            }),
        }
    }

    // BIBLIO_ECHO
    if let Some(echo) = var("BIBLIO_ECHO") {
        config.session.echo = Some(echo.to_lowercase() != "false" && echo != "0");
    }

    (config, warnings)
}

pub(crate) fn default_store_path() -> PathBuf {
    dirs::data_dir()
        .map(|d| d.join("biblio/library.toml"))
        .unwrap_or_else(|| PathBuf::from("library.toml"))
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("biblio/config.toml"))
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &["store", "backend", "path", "session", "echo", "logging", "level"];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let b_chars: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b_chars.len()).collect();
    let mut curr = vec![0usize; b_chars.len() + 1];

    for (i, ac) in a.chars().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_chars.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b_chars.len()]
}
