mod env_file;

use std::path::Path;

pub use env_file::{get_env_value, parse_env_file};

/// Default Gemini model used when `GEMINI_MODEL` is not set
pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";

/// Default base URL for the Gemini generateContent API
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Main configuration struct for the application
///
/// Holds the Gemini credential and model selection. Constructed once at
/// startup and passed by reference to every component that performs a
/// remote call.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key, `None` when no credential is configured
    pub api_key: Option<String>,
    /// Model name used for all analysis requests
    pub model: String,
    /// Base URL of the generateContent endpoint
    pub endpoint: String,
}

impl Config {
    /// Loads configuration from the process environment, falling back to a
    /// local `.env` file for any value the environment does not provide
    pub fn load() -> Self {
        Self::load_from(Path::new(".env"))
    }

    /// Loads configuration, reading `env_path` as the `.env` fallback
    pub fn load_from(env_path: &Path) -> Self {
        let file_vars = parse_env_file(env_path);
        let lookup = |key: &str| {
            get_env_value(key).or_else(|| file_vars.get(key).cloned())
        };

        Self {
            api_key: lookup("GEMINI_API_KEY"),
            model: lookup("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
            endpoint: lookup("GEMINI_ENDPOINT").unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        }
    }

    /// Checks whether a usable credential is present
    pub fn is_configured(&self) -> bool {
        self.api_key
            .as_deref()
            .map(|key| !key.trim().is_empty())
            .unwrap_or(false)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
        }
    }
}
