//! TOML-based configuration for the daemon.
//!
//! The file is optional.  Every field has a serde default, so a missing file
//! or a partial one yields a working configuration:
//!
//! ```toml
//! [gadget]
//! device_path = "/dev/hidg0"
//! dry_run = false
//!
//! [logging]
//! level = "info"
//! ```
//!
//! Command-line flags override the file; see `main.rs`.

use std::path::{Path, PathBuf};

use hidkvm_core::DEFAULT_DEVICE_PATH;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default location of the configuration file.
pub const DEFAULT_CONFIG_PATH: &str = "/etc/hidkvm/config.toml";

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level daemon configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct DaemonConfig {
    #[serde(default)]
    pub gadget: GadgetConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HID gadget device settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GadgetConfig {
    /// Character device of the bound HID keyboard function.
    #[serde(default = "default_device_path")]
    pub device_path: PathBuf,
    /// Log reports instead of writing them to the device.
    #[serde(default)]
    pub dry_run: bool,
}

/// Logging settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggingConfig {
    /// `tracing` filter directive, e.g. `"info"` or `"hidkvm_core=trace"`.
    /// `RUST_LOG` takes precedence when set.
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_device_path() -> PathBuf {
    PathBuf::from(DEFAULT_DEVICE_PATH)
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for GadgetConfig {
    fn default() -> Self {
        Self {
            device_path: default_device_path(),
            dry_run: false,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

/// Loads the configuration at `path`, returning the defaults if the file
/// does not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: &Path) -> Result<DaemonConfig, ConfigError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(DaemonConfig::default()),
        Err(e) => Err(ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        }),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_targets_hidg0() {
        // Arrange / Act
        let cfg = DaemonConfig::default();

        // Assert
        assert_eq!(cfg.gadget.device_path, PathBuf::from("/dev/hidg0"));
        assert!(!cfg.gadget.dry_run);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_empty_toml_yields_defaults() {
        let cfg: DaemonConfig = toml::from_str("").expect("parse");
        assert_eq!(cfg, DaemonConfig::default());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        // Arrange
        let text = r#"
            [gadget]
            dry_run = true
        "#;

        // Act
        let cfg: DaemonConfig = toml::from_str(text).expect("parse");

        // Assert
        assert!(cfg.gadget.dry_run);
        assert_eq!(cfg.gadget.device_path, PathBuf::from(DEFAULT_DEVICE_PATH));
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn test_full_toml_overrides_everything() {
        let text = r#"
            [gadget]
            device_path = "/dev/hidg1"
            dry_run = false

            [logging]
            level = "debug"
        "#;

        let cfg: DaemonConfig = toml::from_str(text).expect("parse");

        assert_eq!(cfg.gadget.device_path, PathBuf::from("/dev/hidg1"));
        assert_eq!(cfg.logging.level, "debug");
    }

    #[test]
    fn test_config_round_trips_through_toml() {
        let mut cfg = DaemonConfig::default();
        cfg.gadget.dry_run = true;
        cfg.logging.level = "trace".to_string();

        let text = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: DaemonConfig = toml::from_str(&text).expect("deserialize");

        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let path = std::env::temp_dir().join(format!("hidkvm-bad-{}.toml", std::process::id()));
        std::fs::write(&path, "[gadget\ndry_run = ").expect("write temp config");

        let result = load_config(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let path = std::env::temp_dir().join("hidkvm-no-such-dir").join("config.toml");
        let cfg = load_config(&path).expect("missing file is not an error");
        assert_eq!(cfg, DaemonConfig::default());
    }
}
