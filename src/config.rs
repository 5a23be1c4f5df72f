//! Configuration management for cinetui
//!
//! Config is stored at ~/.config/cinetui/config.toml. The TMDB API key is
//! resolved from the TMDB_API_KEY environment variable first, then the file.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// TMDB API key (read bearer token)
    pub tmdb_api_key: Option<String>,
}

impl Config {
    /// Get config file path (~/.config/cinetui/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("cinetui").join("config.toml"))
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Self {
        Self::path()
            .and_then(|p| Self::load_from(&p).ok())
            .unwrap_or_default()
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let path = Self::path().ok_or_else(|| anyhow::anyhow!("Could not determine config path"))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(self)?;
        std::fs::write(path, toml)?;
        Ok(())
    }

    /// Resolve the TMDB API key: TMDB_API_KEY env var, then config file
    pub fn tmdb_api_key(&self) -> Result<String> {
        if let Ok(key) = std::env::var("TMDB_API_KEY") {
            if !key.is_empty() {
                return Ok(key);
            }
        }

        if let Some(key) = &self.tmdb_api_key {
            if !key.is_empty() {
                return Ok(key.clone());
            }
        }

        anyhow::bail!(
            "No TMDB API key configured. Set the TMDB_API_KEY environment variable \
             or add tmdb_api_key to {}",
            Self::path()
                .map(|p| p.display().to_string())
                .unwrap_or_else(|| "the config file".to_string())
        )
    }
}
