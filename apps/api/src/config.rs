use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};

const DEFAULT_MODEL: &str = "gpt-4";
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MAX_FILES: usize = 50;
const DEFAULT_MAX_FILE_SIZE: usize = 5 * 1024 * 1024;
const DEFAULT_MAX_CHARACTERS: usize = 5000;

/// Application configuration loaded from environment variables.
/// Built once at startup and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Config {
    pub openai_api_key: String,
    pub openai_model: String,
    pub openai_base_url: String,
    /// Unset means the outbound call has no timeout.
    pub openai_timeout: Option<Duration>,
    pub limits: UploadLimits,
    pub port: u16,
    pub rust_log: String,
}

/// Batch validation and inference limits for `/upload`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadLimits {
    pub max_files: usize,
    pub max_file_size: usize,
    pub max_characters: usize,
}

impl Default for UploadLimits {
    fn default() -> Self {
        Self {
            max_files: DEFAULT_MAX_FILES,
            max_file_size: DEFAULT_MAX_FILE_SIZE,
            max_characters: DEFAULT_MAX_CHARACTERS,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let openai_api_key = lookup("OPENAI_API_KEY")
            .filter(|v| !v.trim().is_empty())
            .context("Required environment variable 'OPENAI_API_KEY' is not set")?;

        let openai_timeout = parse_optional::<u64, _>(&lookup, "OPENAI_TIMEOUT_SECS")?
            .map(Duration::from_secs);

        Ok(Config {
            openai_api_key,
            openai_model: lookup("OPENAI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            openai_base_url: lookup("OPENAI_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            openai_timeout,
            limits: UploadLimits {
                max_files: parse_optional(&lookup, "MAX_FILES")?.unwrap_or(DEFAULT_MAX_FILES),
                max_file_size: parse_optional(&lookup, "MAX_FILE_SIZE")?
                    .unwrap_or(DEFAULT_MAX_FILE_SIZE),
                max_characters: parse_optional(&lookup, "MAX_CHARACTERS")?
                    .unwrap_or(DEFAULT_MAX_CHARACTERS),
            },
            port: parse_optional(&lookup, "PORT")?.unwrap_or(8080),
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}

fn parse_optional<T, F>(lookup: &F, key: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|raw| {
            raw.trim()
                .parse::<T>()
                .with_context(|| format!("Environment variable '{key}' has an invalid value: {raw}"))
        })
        .transpose()
}
