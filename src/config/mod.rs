//! Configuration management

use anyhow::Result;
use serde::Deserialize;

use crate::nav::{NavError, Page, PageCatalog};

#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Menu pages in display order. Empty means the built-in catalog.
    #[serde(default)]
    pub pages: Vec<Page>,

    /// `EnvFilter` directives used when `RUST_LOG` is unset.
    #[serde(default)]
    pub log_filter: Option<String>,
}

impl Config {
    /// Validated page catalog for the navigation menu.
    pub fn catalog(&self) -> Result<PageCatalog, NavError> {
        if self.pages.is_empty() {
            return Ok(PageCatalog::default());
        }
        PageCatalog::new(self.pages.clone())
    }
}

const APP_DIR_NAME: &str = "gemini-studio";

/// Get config directory (STUDIO_CONFIG_DIR or platform default)
pub fn get_config_dir() -> std::path::PathBuf {
    if let Ok(dir) = std::env::var("STUDIO_CONFIG_DIR") {
        return std::path::PathBuf::from(dir);
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join("Library/Application Support")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "linux")]
    {
        if let Ok(xdg) = std::env::var("XDG_CONFIG_HOME") {
            return std::path::PathBuf::from(xdg).join(APP_DIR_NAME);
        }
        if let Ok(home) = std::env::var("HOME") {
            return std::path::PathBuf::from(home)
                .join(".config")
                .join(APP_DIR_NAME);
        }
    }

    #[cfg(target_os = "windows")]
    {
        if let Ok(appdata) = std::env::var("APPDATA") {
            return std::path::PathBuf::from(appdata).join(APP_DIR_NAME);
        }
    }

    // Fallback to current directory
    std::path::PathBuf::from(".")
}

pub fn load_config() -> Result<Config> {
    let config_dir = get_config_dir();

    let config = ::config::Config::builder()
        // Load from config file (config.toml, config.json, ...) if it exists
        .add_source(
            ::config::File::with_name(&config_dir.join("config").to_string_lossy()).required(false),
        )
        // Override with environment variables (STUDIO_LOG_FILTER, ...);
        // `__` separates nested keys only
        .add_source(
            ::config::Environment::with_prefix("STUDIO")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    Ok(config.try_deserialize()?)
}

/// Resolve the menu catalog, falling back to the built-in pages when the
/// configured list is invalid.
pub fn resolve_catalog(config: &Config) -> PageCatalog {
    match config.catalog() {
        Ok(catalog) => catalog,
        Err(e) => {
            tracing::warn!("Invalid page list in config, using built-in pages: {}", e);
            PageCatalog::default()
        }
    }
}
