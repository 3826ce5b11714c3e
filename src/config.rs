use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;
use thiserror::Error;
use tracing::Level;

pub const DEFAULT_START_DIR: &str = "data";
pub const DEFAULT_OUTPUT_FILE: &str = "files.json";
pub const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone)]
pub struct Config {
    pub start_dir: PathBuf,
    pub output_file: PathBuf,
    pub log_level: Level,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Environment variable {0} is missing or invalid.")]
    MissingOrInvalid(String),
    #[error("Parsing error: {0}")]
    ParsingError(String),
}

impl Default for Config {
    fn default() -> Self {
        Self {
            start_dir: PathBuf::from(DEFAULT_START_DIR),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
            log_level: Level::INFO,
        }
    }
}

impl Config {
    /// Loads `.env` if present, then resolves every setting from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Resolves settings through `lookup`, falling back to the defaults for unset keys.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            start_dir: non_empty_path(&lookup, "START_DIR", DEFAULT_START_DIR)?,
            output_file: non_empty_path(&lookup, "OUTPUT_FILE", DEFAULT_OUTPUT_FILE)?,
            log_level: lookup("LOG_LEVEL")
                .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
                .trim()
                .parse::<Level>()
                .map_err(|_| {
                    ConfigError::ParsingError(
                        "LOG_LEVEL must be one of trace, debug, info, warn, error".to_string(),
                    )
                })?,
        })
    }
}

fn non_empty_path<F>(lookup: &F, key: &str, default: &str) -> Result<PathBuf, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let value = lookup(key).unwrap_or_else(|| default.to_string());
    if value.trim().is_empty() {
        return Err(ConfigError::MissingOrInvalid(key.to_string()));
    }
    Ok(PathBuf::from(value))
}
