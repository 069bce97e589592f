//! core::config
//!
//! Configuration schema and loading.
//!
//! # Overview
//!
//! gitbind has two configuration scopes:
//! - **Global**: User-level settings (git binary, default timeout, env)
//! - **Repo**: Repository-level overrides (timeout, env)
//!
//! # Precedence
//!
//! Configuration values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Global config file
//! 3. Repo config file
//! 4. Execution-only values on a single call (not handled here)
//!
//! # Example
//!
//! ```no_run
//! use gitbind::core::config::Config;
//! use std::path::Path;
//!
//! let config = Config::load(Some(Path::new("/path/to/repo"))).unwrap();
//! println!("git: {}", config.binary());
//! if let Some(timeout) = config.timeout() {
//!     println!("timeout: {:?}", timeout);
//! }
//! ```

pub mod schema;

pub use schema::{GlobalConfig, RepoConfig};

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::de::DeserializeOwned;
use thiserror::Error;

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("invalid config value: {0}")]
    InvalidValue(String),
}

/// Merged configuration from all sources.
///
/// Accessors apply precedence; repo config overrides global config.
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Global configuration
    pub global: GlobalConfig,
    /// Repository configuration (if in a repo)
    pub repo: Option<RepoConfig>,
    global_path: Option<PathBuf>,
    repo_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from default locations.
    ///
    /// If `repo_path` is provided, also loads repo-specific config.
    ///
    /// # Errors
    ///
    /// Returns an error if config files exist but cannot be parsed or fail
    /// validation. Missing files are not an error.
    pub fn load(repo_path: Option<&Path>) -> Result<Config, ConfigError> {
        let (global, global_path) = match Self::global_candidates()
            .into_iter()
            .find(|p| p.exists())
        {
            Some(path) => (read_toml::<GlobalConfig>(&path)?, Some(path)),
            None => (GlobalConfig::default(), None),
        };

        let (repo, repo_path) = match repo_path.map(Self::repo_config_path) {
            Some(path) if path.exists() => (Some(read_toml::<RepoConfig>(&path)?), Some(path)),
            _ => (None, None),
        };

        global.validate()?;
        if let Some(r) = &repo {
            r.validate()?;
        }

        tracing::debug!(?global_path, ?repo_path, "loaded configuration");

        Ok(Config {
            global,
            repo,
            global_path,
            repo_path,
        })
    }

    fn global_candidates() -> Vec<PathBuf> {
        let mut candidates = Vec::new();
        if let Ok(path) = std::env::var("GITBIND_CONFIG") {
            candidates.push(PathBuf::from(path));
        }
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            candidates.push(PathBuf::from(xdg_home).join("gitbind/config.toml"));
        }
        if let Some(home) = dirs::home_dir() {
            candidates.push(home.join(".gitbind/config.toml"));
        }
        candidates
    }

    /// Path of the repo config for a working tree.
    pub fn repo_config_path(repo_path: &Path) -> PathBuf {
        repo_path.join(".git/gitbind/config.toml")
    }

    // =========================================================================
    // Accessor methods with precedence
    // =========================================================================

    /// The git executable. Defaults to `git`.
    pub fn binary(&self) -> &str {
        self.global.binary.as_deref().unwrap_or("git")
    }

    /// Default timeout; repo overrides global, none when unset.
    pub fn timeout(&self) -> Option<Duration> {
        self.repo
            .as_ref()
            .and_then(|r| r.timeout_secs)
            .or(self.global.timeout_secs)
            .map(Duration::from_secs)
    }

    /// Environment overrides; repo entries win per key.
    pub fn env(&self) -> BTreeMap<String, String> {
        let mut env = self.global.env.clone().unwrap_or_default();
        if let Some(repo_env) = self.repo.as_ref().and_then(|r| r.env.as_ref()) {
            env.extend(repo_env.iter().map(|(k, v)| (k.clone(), v.clone())));
        }
        env
    }

    pub fn global_config_loaded_from(&self) -> Option<&Path> {
        self.global_path.as_deref()
    }

    pub fn repo_config_loaded_from(&self) -> Option<&Path> {
        self.repo_path.as_deref()
    }
}

fn read_toml<T: DeserializeOwned>(path: &Path) -> Result<T, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
