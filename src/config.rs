//! Configuration file loading with environment variable overrides.

use std::path::{Path, PathBuf};

use serde::Deserialize;

/// Default base endpoint for the generation API.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Default model identifier.
pub const DEFAULT_MODEL: &str = "gpt-image-1";

/// Top-level configuration file contents.
#[derive(Debug, Default, Deserialize)]
pub struct ConfigFile {
    /// API key configuration.
    #[serde(default)]
    pub keys: KeysConfig,

    /// API endpoint and model selection.
    #[serde(default)]
    pub api: ApiConfig,
}

/// API key configuration.
#[derive(Debug, Default, Deserialize)]
pub struct KeysConfig {
    /// `OpenAI` API key.
    pub openai: Option<String>,
}

/// API endpoint and model configuration.
#[derive(Debug, Deserialize)]
pub struct ApiConfig {
    /// Base endpoint URL.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), model: DEFAULT_MODEL.to_string() }
    }
}

impl ConfigFile {
    /// Load configuration from the given path, or return defaults if the
    /// file does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load(path: &Path) -> Result<Self, String> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let contents = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read config {}: {e}", path.display()))?;
        toml::from_str(&contents)
            .map_err(|e| format!("Failed to parse config {}: {e}", path.display()))
    }
}

/// Resolved, immutable process configuration.
///
/// Built once at startup; the adapter never consults the environment after
/// construction, so tests can inject fixed values directly.
#[derive(Debug, Clone)]
pub struct Config {
    /// API key for the generation API, if configured.
    pub api_key: Option<String>,
    /// Base endpoint URL.
    pub base_url: String,
    /// Model identifier.
    pub model: String,
}

impl Config {
    /// Resolve configuration from a loaded file and the process environment.
    ///
    /// Each field prefers its environment variable over the file value:
    /// `OPENAI_API_KEY`, `OPENAI_API_BASE_URL`, `OPENAI_IMAGE_MODEL`.
    #[must_use]
    pub fn resolve(file: &ConfigFile) -> Self {
        let api_key = std::env::var("OPENAI_API_KEY").ok().or_else(|| file.keys.openai.clone());
        let base_url =
            std::env::var("OPENAI_API_BASE_URL").unwrap_or_else(|_| file.api.base_url.clone());
        let model =
            std::env::var("OPENAI_IMAGE_MODEL").unwrap_or_else(|_| file.api.model.clone());
        Self { api_key, base_url, model }
    }
}

/// Discover the config file path using the resolution order:
/// 1. Explicit path (from `--config` flag)
/// 2. `PIXGEN_CONFIG` environment variable
/// 3. `~/.config/pixgen/config.toml`
#[must_use]
pub fn discover_config_path(explicit: Option<&str>) -> PathBuf {
    if let Some(p) = explicit {
        return PathBuf::from(p);
    }

    if let Ok(p) = std::env::var("PIXGEN_CONFIG") {
        return PathBuf::from(p);
    }

    default_config_path()
}

/// Default config path: `~/.config/pixgen/config.toml`.
fn default_config_path() -> PathBuf {
    if let Ok(home) = std::env::var("HOME") {
        PathBuf::from(home).join(".config/pixgen/config.toml")
    } else {
        PathBuf::from("pixgen.toml")
    }
}
