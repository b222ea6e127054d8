//! Runtime configuration: API credential, model and endpoint.
//!
//! Values come from the process environment, with entries in a `.env` file in
//! the working directory taking precedence. A missing credential is fatal and
//! is reported before any request can be built.

use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the Groq API key
pub const API_KEY_VAR: &str = "GROQ_API_KEY";

/// Environment variable overriding the completion endpoint base URL
pub const API_BASE_VAR: &str = "GROQ_API_BASE";

/// Model used for every analysis step
pub const MODEL_NAME: &str = "llama-3.1-8b-instant";

/// Default OpenAI-compatible endpoint base
pub const DEFAULT_API_BASE: &str = "https://api.groq.com/openai/v1";

/// Name of the override file looked up in the working directory
pub const DOTENV_FILE: &str = ".env";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("GROQ_API_KEY environment variable not set. Please check your .env file.")]
    MissingApiKey,

    #[error("Failed to read {path}: {source}")]
    DotEnv {
        path: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Resolved configuration handed to the completion client and step runner
#[derive(Clone)]
pub struct Config {
    pub api_key: String,
    pub model: String,
    pub api_base: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("api_base", &self.api_base)
            .finish()
    }
}

impl Config {
    /// Load from `./.env` (if present) layered over the process environment
    pub fn load() -> Result<Self, ConfigError> {
        let dotenv = read_dotenv(Path::new(DOTENV_FILE))?;
        Self::from_sources(&dotenv, |key| std::env::var(key).ok())
    }

    /// Build from explicit `.env` entries and an environment lookup.
    ///
    /// `.env` entries win over the environment. An empty or whitespace-only key
    /// counts as missing.
    pub fn from_sources<F>(dotenv: &HashMap<String, String>, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| dotenv.get(key).cloned().or_else(|| env(key));

        let api_key = lookup(API_KEY_VAR)
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(ConfigError::MissingApiKey)?;

        let api_base = lookup(API_BASE_VAR)
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        Ok(Self {
            api_key,
            model: MODEL_NAME.to_string(),
            api_base,
        })
    }
}

/// Read `KEY=VALUE` pairs from a dotenv file; a missing file yields no entries
pub fn read_dotenv(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
    if !path.exists() {
        return Ok(HashMap::new());
    }

    let to_err = |source| ConfigError::DotEnv {
        path: path.display().to_string(),
        source,
    };

    let mut entries = HashMap::new();
    for item in dotenvy::from_path_iter(path).map_err(to_err)? {
        let (key, value) = item.map_err(to_err)?;
        entries.insert(key, value);
    }
    Ok(entries)
}
