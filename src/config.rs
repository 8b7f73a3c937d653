//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/rain8net/rain8net.toml`
//! 3. Environment variables: `RAIN8NET_*` prefix
//! 4. Command line (`-d` replaces `device`)
//!
//! Configuration is only ever read; nothing is written back between invocations.

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::{ApplicationError, ApplicationResult};
use crate::domain::expand_env_vars;

pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";
pub const DEFAULT_RESPONSE_TIMEOUT_MS: u64 = 1000;

/// Settings for talking to the bus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Serial device the Rain8Net bus is attached to
    pub device: String,
    /// How long to wait for a unit to answer, in milliseconds
    pub response_timeout_ms: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            device: DEFAULT_DEVICE.to_string(),
            response_timeout_ms: DEFAULT_RESPONSE_TIMEOUT_MS,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub device: Option<String>,
    pub response_timeout_ms: Option<u64>,
}

/// Get the XDG config directory for rain8net.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rain8net").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("rain8net.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Read timeout for device replies.
    pub fn response_timeout(&self) -> Duration {
        Duration::from_millis(self.response_timeout_ms)
    }

    /// Load settings from defaults, the global config file and the environment.
    pub fn load() -> ApplicationResult<Self> {
        Self::load_from(global_config_path().as_deref())
    }

    /// Load settings with an explicit config file location.
    ///
    /// A missing file is not an error; a file that does not parse is.
    pub fn load_from(config_path: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        if let Some(path) = config_path {
            if path.exists() {
                let raw = load_raw_settings(path)?;
                current = current.merge_with(&raw);
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();
        current.check()?;

        Ok(current)
    }

    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            device: overlay
                .device
                .clone()
                .unwrap_or_else(|| self.device.clone()),
            response_timeout_ms: overlay
                .response_timeout_ms
                .unwrap_or(self.response_timeout_ms),
        }
    }

    /// Apply RAIN8NET_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(Environment::with_prefix("RAIN8NET"))
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("device") {
            settings.device = val;
        }
        match config.get::<u64>("response_timeout_ms") {
            Ok(val) => settings.response_timeout_ms = val,
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => return Err(config_err(e)),
        }

        Ok(settings)
    }

    /// Expand `~` and `$VAR` in the device path.
    fn expand_paths(&mut self) {
        self.device = expand_env_vars(&self.device);
    }

    fn check(&self) -> ApplicationResult<()> {
        if self.device.trim().is_empty() {
            return Err(ApplicationError::Config {
                message: "device must not be empty".into(),
            });
        }
        if self.response_timeout_ms == 0 {
            return Err(ApplicationError::Config {
                message: "response_timeout_ms must be greater than 0".into(),
            });
        }
        Ok(())
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> ApplicationResult<String> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_file_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None).expect("load defaults");
        assert!(!settings.device.is_empty());
        assert!(settings.response_timeout_ms > 0);
    }

    #[test]
    fn given_partial_overlay_when_merging_then_unspecified_fields_keep_base() {
        let base = Settings::default();
        let overlay = RawSettings {
            device: Some("/dev/ttyS1".into()),
            response_timeout_ms: None,
        };

        let merged = base.merge_with(&overlay);

        assert_eq!(merged.device, "/dev/ttyS1");
        assert_eq!(merged.response_timeout_ms, DEFAULT_RESPONSE_TIMEOUT_MS);
    }

    #[test]
    fn given_tilde_in_device_when_expand_paths_then_expands_to_home() {
        let mut settings = Settings {
            device: "~/dev/rain8".into(),
            ..Settings::default()
        };

        settings.expand_paths();

        let home = std::env::var("HOME").expect("HOME should be set");
        assert!(
            settings.device.starts_with(&home),
            "device should start with home dir: {}",
            settings.device
        );
    }

    #[test]
    fn given_zero_timeout_when_checking_then_config_error() {
        let settings = Settings {
            response_timeout_ms: 0,
            ..Settings::default()
        };
        assert!(matches!(
            settings.check(),
            Err(ApplicationError::Config { .. })
        ));
    }

    #[test]
    fn given_settings_when_serializing_then_round_trips_through_toml() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        assert!(text.contains("device"));
        let raw: RawSettings = toml::from_str(&text).unwrap();
        assert_eq!(Settings::default().merge_with(&raw), settings);
    }
}
