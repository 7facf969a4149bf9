use anyhow::{Context, Result};

/// Default ceiling for markup handed to the validator (2 MiB).
pub const DEFAULT_MAX_MARKUP_BYTES: usize = 2 * 1024 * 1024;

/// Engine configuration loaded from environment variables.
/// Every variable is optional; malformed values are rejected at load time.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Theme assumed when a caller scores résumé data without naming one.
    pub default_theme: Option<String>,
    pub max_markup_bytes: usize,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_theme: None,
            max_markup_bytes: DEFAULT_MAX_MARKUP_BYTES,
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary key lookup (the environment in production).
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let default_theme = lookup("ATS_DEFAULT_THEME")
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty());

        let max_markup_bytes = match lookup("ATS_MAX_MARKUP_BYTES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .with_context(|| format!("ATS_MAX_MARKUP_BYTES must be a byte count, got '{raw}'"))?,
            None => DEFAULT_MAX_MARKUP_BYTES,
        };

        Ok(Config {
            default_theme,
            max_markup_bytes,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
        })
    }
}
