//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Global Config
//!
//! Located at (in order of precedence):
//! 1. `$GITBIND_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/gitbind/config.toml`
//! 3. `~/.gitbind/config.toml`
//!
//! # Repo Config
//!
//! Located at `.git/gitbind/config.toml`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ConfigError;

/// Global configuration (user scope).
///
/// # Example
///
/// ```toml
/// binary = "/usr/local/bin/git"
/// timeout_secs = 120
///
/// [env]
/// GIT_TERMINAL_PROMPT = "0"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Git executable to run
    pub binary: Option<String>,

    /// Default timeout for every git invocation
    pub timeout_secs: Option<u64>,

    /// Environment overrides passed to git
    pub env: Option<BTreeMap<String, String>>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(binary) = &self.binary {
            if binary.trim().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "binary cannot be empty".to_string(),
                ));
            }
        }
        validate_timeout(self.timeout_secs)?;
        validate_env(self.env.as_ref())
    }
}

/// Repository configuration.
///
/// # Example
///
/// ```toml
/// timeout_secs = 600
///
/// [env]
/// GIT_SSH_COMMAND = "ssh -i ~/.ssh/deploy"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RepoConfig {
    /// Overrides the global timeout
    pub timeout_secs: Option<u64>,

    /// Merged over the global environment, repo winning per key
    pub env: Option<BTreeMap<String, String>>,
}

impl RepoConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_timeout(self.timeout_secs)?;
        validate_env(self.env.as_ref())
    }
}

fn validate_timeout(timeout: Option<u64>) -> Result<(), ConfigError> {
    if timeout == Some(0) {
        return Err(ConfigError::InvalidValue(
            "timeout_secs must be greater than zero".to_string(),
        ));
    }
    Ok(())
}

fn validate_env(env: Option<&BTreeMap<String, String>>) -> Result<(), ConfigError> {
    for key in env.into_iter().flat_map(|e| e.keys()) {
        if key.is_empty() || key.contains('=') {
            return Err(ConfigError::InvalidValue(format!(
                "invalid environment variable name '{}'",
                key
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    mod global_config {
        use super::*;

        #[test]
        fn defaults() {
            let config = GlobalConfig::default();
            assert!(config.binary.is_none());
            assert!(config.timeout_secs.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn empty_binary_rejected() {
            let config = GlobalConfig {
                binary: Some("  ".to_string()),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn zero_timeout_rejected() {
            let config = GlobalConfig {
                timeout_secs: Some(0),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn roundtrip() {
            let config = GlobalConfig {
                binary: Some("git".to_string()),
                timeout_secs: Some(30),
                env: Some(BTreeMap::from([(
                    "GIT_TERMINAL_PROMPT".to_string(),
                    "0".to_string(),
                )])),
            };

            let toml = toml::to_string_pretty(&config).unwrap();
            let parsed: GlobalConfig = toml::from_str(&toml).unwrap();
            assert_eq!(config, parsed);
        }
    }

    mod repo_config {
        use super::*;

        #[test]
        fn bad_env_key_rejected() {
            let config = RepoConfig {
                env: Some(BTreeMap::from([("A=B".to_string(), "x".to_string())])),
                ..Default::default()
            };
            assert!(config.validate().is_err());
        }

        #[test]
        fn reject_unknown_fields() {
            let toml = r#"
                timeout_secs = 5
                binary = "git"
            "#;

            let result: Result<RepoConfig, _> = toml::from_str(toml);
            assert!(result.is_err());
        }
    }
}
