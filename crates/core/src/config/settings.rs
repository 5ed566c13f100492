use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

fn default_true() -> bool {
    true
}

fn default_cache_capacity() -> usize {
    64
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Settings for the evaluation pipeline, discoverable from a JSON file and
/// overridable through the environment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    /// Remote analysis endpoint; absent means local-only operation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remote: Option<RemoteConfig>,

    #[serde(default = "default_true")]
    pub cache_enabled: bool,

    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            remote: None,
            cache_enabled: true,
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// Connection settings for the remote analysis endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct RemoteConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    /// Usually supplied via `EVALSCOPE_API_KEY` rather than the file
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))?;
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            let config_path = current.join(".evalscope.json");
            if config_path.exists() {
                return Some(config_path);
            }

            let config_path = current.join("evalscope.json");
            if config_path.exists() {
                return Some(config_path);
            }

            current = current.parent()?;
        }
    }

    /// Discover a config file from the working directory and overlay
    /// environment variables. Absent both, returns the defaults.
    pub fn load() -> Result<Self> {
        let mut config = if let Ok(cwd) = env::current_dir() {
            match Self::find_config_file(&cwd) {
                Some(path) => Self::load_from_file(&path)?,
                None => Self::default(),
            }
        } else {
            Self::default()
        };

        config.apply_env_overlay();
        Ok(config)
    }

    /// Environment variables win over file contents. An API key in the
    /// environment turns the remote path on even without a config file.
    pub fn apply_env_overlay(&mut self) {
        if let Ok(key) = env::var("EVALSCOPE_API_KEY") {
            if !key.is_empty() {
                self.remote
                    .get_or_insert_with(RemoteConfig::default)
                    .api_key = Some(key);
            }
        }
        if let Ok(url) = env::var("EVALSCOPE_BASE_URL") {
            if !url.is_empty() {
                self.remote
                    .get_or_insert_with(RemoteConfig::default)
                    .base_url = url;
            }
        }
        if let Ok(model) = env::var("EVALSCOPE_MODEL") {
            if !model.is_empty() {
                self.remote.get_or_insert_with(RemoteConfig::default).model = model;
            }
        }
    }
}
