//! Application configuration.
//!
//! Loaded from a TOML file; every key is optional. The file is looked up in
//! this order:
//!
//! 1. the `--config` flag
//! 2. the `FORKIFY_CONFIG` environment variable
//! 3. `forkify/config.toml` under the platform config directory
//!
//! An explicitly named file must exist. The platform default is used only if
//! it exists; otherwise built-in defaults apply.
//!
//! ```toml
//! [api]
//! base_url = "https://forkify-api.herokuapp.com/api"
//! max_retries = 2
//!
//! [view]
//! results_per_page = 10
//!
//! [logging]
//! level = "info"
//! ```

use std::path::{Path, PathBuf};

use forkify_client::ClientConfig;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming a config file.
pub const CONFIG_ENV_VAR: &str = "FORKIFY_CONFIG";

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Recipe API settings
    #[serde(default)]
    pub api: ClientConfig,

    /// Rendering settings
    #[serde(default)]
    pub view: ViewConfig,

    /// Log settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Rendering settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Search results per page
    #[serde(default = "default_results_per_page")]
    pub results_per_page: usize,

    /// Titles longer than this many characters are shortened in result lists
    #[serde(default = "default_title_limit")]
    pub title_limit: usize,
}

fn default_results_per_page() -> usize {
    forkify_core::search::RESULTS_PER_PAGE
}

fn default_title_limit() -> usize {
    17
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            results_per_page: default_results_per_page(),
            title_limit: default_title_limit(),
        }
    }
}

/// Log settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String {
    "warn".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
        }
    }
}

impl AppConfig {
    /// Load configuration, resolving the file as described in the module
    /// docs.
    pub fn load(explicit: Option<&str>) -> Result<Self> {
        let from_env = std::env::var(CONFIG_ENV_VAR).ok();
        Self::load_from(explicit, from_env.as_deref(), default_config_path())
    }

    /// Load with every source passed in.
    pub fn load_from(
        explicit: Option<&str>,
        from_env: Option<&str>,
        platform_default: Option<PathBuf>,
    ) -> Result<Self> {
        let named = explicit
            .or(from_env)
            .map(str::trim)
            .filter(|p| !p.is_empty());

        match named {
            Some(path) => Self::from_file(Path::new(path)),
            None => match platform_default.filter(|p| p.is_file()) {
                Some(path) => Self::from_file(&path),
                None => {
                    tracing::debug!("No config file found, using defaults");
                    Ok(Self::default())
                }
            },
        }
    }

    /// Read and validate one TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read {}: {e}", path.display()))
        })?;
        let config: Self = toml::from_str(&content)?;
        config.validate()?;
        tracing::debug!(path = %path.display(), "Loaded config");
        Ok(config)
    }

    /// Replace the API base URL.
    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Reject values nothing downstream can work with.
    pub fn validate(&self) -> Result<()> {
        if self.view.results_per_page == 0 {
            return Err(Error::config("view.results_per_page must be at least 1"));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(Error::config("api.base_url must not be empty"));
        }
        Ok(())
    }
}

/// `forkify/config.toml` under the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("forkify").join("config.toml"))
}
