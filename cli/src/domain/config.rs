//! Domain types for mvmctl client configuration.
//!
//! Pure functions only — no I/O, no async, no filesystem access.

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Address used when neither flag, environment nor config file sets one.
pub const DEFAULT_ADDRESS: &str = "127.0.0.1:9090";

/// Transport timeout applied to every service call.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// ── Config schema ────────────────────────────────────────────────────────────

/// Configuration stored in `~/.mvmctl/config.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct MvmctlConfig {
    /// Service address, `host:port` or a full URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    /// Basic auth token sent with every request.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// Transport timeout in seconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

/// Settings the real store is built from, after all sources are merged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSettings {
    pub address: String,
    pub token: Option<String>,
    pub timeout_secs: u64,
}

impl ClientSettings {
    /// Merge command-line values over the config file.
    ///
    /// `address` and `token` arrive from clap, which has already folded in the
    /// `MVMCTL_ADDRESS` / `MVMCTL_TOKEN` environment variables.
    #[must_use]
    pub fn resolve(address: Option<String>, token: Option<String>, file: MvmctlConfig) -> Self {
        Self {
            address: address
                .filter(|a| !a.is_empty())
                .or(file.address)
                .unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            token: token.filter(|t| !t.is_empty()).or(file.token),
            timeout_secs: file
                .timeout_secs
                .filter(|secs| *secs > 0)
                .unwrap_or(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Base URL of the service gateway. Plain `host:port` gets `http://`.
    #[must_use]
    pub fn base_url(&self) -> String {
        let address = self.address.trim_end_matches('/');
        if address.starts_with("http://") || address.starts_with("https://") {
            address.to_string()
        } else {
            format!("http://{address}")
        }
    }
}

// ── Validators ───────────────────────────────────────────────────────────────

/// Keys accepted by `mvmctl config set`.
pub const VALID_CONFIG_KEYS: &[&str] = &["address", "token", "timeout_secs"];

/// Validates a configuration key against the whitelist.
///
/// # Errors
///
/// Returns an error if the key is not in the allowed list.
pub fn validate_config_key(key: &str) -> Result<(), ConfigError> {
    if !VALID_CONFIG_KEYS.contains(&key) {
        return Err(unknown_key(key));
    }
    Ok(())
}

fn unknown_key(key: &str) -> ConfigError {
    ConfigError::UnknownKey {
        key: key.to_string(),
        valid: VALID_CONFIG_KEYS.join(", "),
    }
}

impl MvmctlConfig {
    /// Set one key from its string form.
    ///
    /// # Errors
    ///
    /// Returns an error for an unknown key, an empty value, or a timeout that
    /// is not a positive integer.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        validate_config_key(key)?;
        let invalid = |hint: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
            hint: hint.to_string(),
        };
        if value.is_empty() {
            return Err(invalid("Value must not be empty"));
        }
        match key {
            "address" => self.address = Some(value.to_string()),
            "token" => self.token = Some(value.to_string()),
            "timeout_secs" => {
                let secs = value
                    .parse::<u64>()
                    .ok()
                    .filter(|s| *s > 0)
                    .ok_or_else(|| invalid("Expected a positive number of seconds"))?;
                self.timeout_secs = Some(secs);
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }
}
