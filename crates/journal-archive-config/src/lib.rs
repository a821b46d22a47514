use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {config_path}: {source}")]
    ConfigReadError {
        config_path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {config_path}: {source}")]
    ConfigParseError {
        config_path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Path or http(s) URL of the article data file
    pub data_source: String,
    #[serde(default = "default_papers_base")]
    pub papers_base: String,
    #[serde(default = "default_latest_count")]
    pub latest_count: usize,
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Field delimiter; detected from the header line when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delimiter: Option<char>,
    #[serde(default = "default_fetch_retries")]
    pub fetch_retries: u32,
    #[serde(default = "default_retry_delay_ms")]
    pub retry_delay_ms: u64,
}

fn default_papers_base() -> String {
    "/paper".to_string()
}

fn default_latest_count() -> usize {
    3
}

fn default_page_size() -> usize {
    9
}

fn default_fetch_retries() -> u32 {
    3
}

fn default_retry_delay_ms() -> u64 {
    1000
}

impl Config {
    /// Config with defaults for everything except the data source
    pub fn new(data_source: impl Into<String>) -> Self {
        Self {
            data_source: data_source.into(),
            papers_base: default_papers_base(),
            latest_count: default_latest_count(),
            page_size: default_page_size(),
            delimiter: None,
            fetch_retries: default_fetch_retries(),
            retry_delay_ms: default_retry_delay_ms(),
        }
    }

    pub fn load_from_path<P: AsRef<Path>>(config_path: P) -> Result<Option<Self>, ConfigError> {
        let config_path = config_path.as_ref();
        if !config_path.exists() {
            return Ok(None);
        }

        let content = std::fs::read_to_string(config_path).map_err(|source| {
            ConfigError::ConfigReadError {
                config_path: config_path.to_path_buf(),
                source,
            }
        })?;

        let mut config: Config =
            toml::from_str(&content).map_err(|source| ConfigError::ConfigParseError {
                config_path: config_path.to_path_buf(),
                source,
            })?;

        // Expand shell variables and tilde in a local data path
        config.data_source = Self::expand_source(&config.data_source);

        Ok(Some(config))
    }

    pub fn load() -> Result<Option<Self>, ConfigError> {
        let config_path = Self::config_path();
        Self::load_from_path(&config_path)
    }

    pub fn save_to_path<P: AsRef<Path>>(&self, config_path: P) -> anyhow::Result<()> {
        let config_path = config_path.as_ref();
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> PathBuf {
        let config_dir = shellexpand::tilde("~/.config/journal-archive");
        PathBuf::from(config_dir.as_ref()).join("config.toml")
    }

    pub fn is_remote(&self) -> bool {
        is_url(&self.data_source)
    }

    /// URLs are left alone; paths get `~` and `$VAR` expanded when possible
    pub fn expand_source(source: &str) -> String {
        if is_url(source) {
            return source.to_string();
        }
        match shellexpand::full(source) {
            Ok(expanded) => expanded.into_owned(),
            Err(_) => source.to_string(),
        }
    }
}

fn is_url(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
