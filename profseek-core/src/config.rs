//! src/config.rs
//! ============================================================================
//! # Config: Application Configuration Loader and Saver
//!
//! Manages user-editable settings for the search client. Loads and saves
//! settings as TOML from the proper cross-platform config path using the
//! [`directories`](https://docs.rs/directories) crate.
//!
//! ## Features
//! - XDG-compliant config discovery and writing (Linux, macOS, Windows)
//! - Robust defaulting if no config file exists
//! - Async load/save for smooth integration with Tokio
//! - `PROFSEEK_SEARCH_URL` environment override for local service instances
//!
//! ## Example
//! ```rust,ignore
//! let config = Config::load().await?;
//! config.save().await?;
//! ```

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::info;

use tokio::fs as TokioFs;

use crate::error::AppError;

/// Environment variable overriding `search_url`.
pub const SEARCH_URL_ENV: &str = "PROFSEEK_SEARCH_URL";

/// App theme (color scheme) selector.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Default,

    Light,

    Dark,

    Custom(String),
}

/// Main configuration struct for the application.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Full URL of the ranking service's recommendation endpoint.
    pub search_url: String,

    /// Origin prepended to site-relative portrait paths.
    pub asset_origin: String,

    /// Portrait shown when a record carries no usable image URL.
    pub placeholder_image: String,

    pub theme: Theme,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search_url: "http://127.0.0.1:8000/recommend".to_string(),
            asset_origin: "https://faculty.example.edu".to_string(),
            placeholder_image: "https://faculty.example.edu/images/placeholder.png".to_string(),
            theme: Theme::Default,
        }
    }
}

impl Config {
    /// Loads config from TOML file at the XDG-compliant app config dir, or
    /// returns defaults (creating the file). The environment override is
    /// applied after loading.
    pub async fn load() -> Result<Self, AppError> {
        let path = Self::config_path()?;
        let mut cfg = if path.exists() {
            info!("Loading config from {}", path.display());
            let text = TokioFs::read_to_string(&path)
                .await
                .map_err(|e| config_io(&path, e))?;
            toml::from_str::<Self>(&text)?
        } else {
            info!(
                "No config file found at {}, using default configuration. Creating it now.",
                path.display()
            );

            let default_config = Self::default();
            default_config.save().await?;
            default_config
        };

        if let Ok(url) = std::env::var(SEARCH_URL_ENV)
            && !url.trim().is_empty()
        {
            info!("Search URL overridden from environment: {url}");
            cfg.search_url = url;
        }

        Ok(cfg)
    }

    /// Saves config to TOML file at the XDG-compliant app config dir.
    pub async fn save(&self) -> Result<(), AppError> {
        let path = Self::config_path()?;

        info!("Saving config to {}", path.display());

        if let Some(parent) = path.parent() {
            TokioFs::create_dir_all(parent)
                .await
                .map_err(|e| config_io(parent, e))?;
        }

        let toml_str = toml::to_string_pretty(self)
            .map_err(|e| AppError::Other(format!("Config serialize error: {e}")))?;
        TokioFs::write(&path, toml_str)
            .await
            .map_err(|e| config_io(&path, e))?;

        Ok(())
    }

    /// Returns the canonical config file path using `directories::ProjectDirs`.
    pub fn config_path() -> Result<PathBuf, AppError> {
        let proj_dirs = ProjectDirs::from("org", "profseek", "ProfSeek")
            .ok_or_else(|| AppError::Other("Could not determine config directory.".to_string()))?;
        Ok(proj_dirs.config_dir().join("config.toml"))
    }
}

fn config_io(path: &Path, source: std::io::Error) -> AppError {
    AppError::ConfigIo {
        path: path.to_path_buf(),
        source,
    }
}
