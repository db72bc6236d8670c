//! Demo configuration.
//!
//! Loaded from `<config dir>/dragnum/config.json`, from the path in
//! `DRAGNUM_CONFIG`, or from `--config`. A missing file means defaults.

use std::fs::{self, File};
use std::io::{BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ConfigError;
use crate::gesture::{Axis, DragControlConfig};

/// The config directory name under the platform config dir.
const CONFIG_DIR: &str = "dragnum";

/// The config file name.
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding the config path.
pub const CONFIG_ENV: &str = "DRAGNUM_CONFIG";

/// One demo control.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlConfig {
    pub label: String,
    #[serde(default)]
    pub axis: Axis,
    /// Starting value; deltas are added to it
    #[serde(default)]
    pub initial: f64,
}

impl ControlConfig {
    pub fn new(label: impl Into<String>, axis: Axis) -> Self {
        Self {
            label: label.into(),
            axis,
            initial: 0.0,
        }
    }

    pub fn drag_config(&self) -> DragControlConfig {
        DragControlConfig::with_axis(self.axis)
    }
}

/// Root configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub controls: Vec<ControlConfig>,
    /// Tracing filter used when `RUST_LOG` is unset
    pub log_level: String,
    /// How many recent deltas the action log keeps
    pub action_log_len: usize,
    /// Switch the terminal pointer shape while dragging (OSC 22)
    pub pointer_shapes: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            controls: vec![
                ControlConfig::new("horizontal", Axis::Horizontal),
                ControlConfig::new("vertical", Axis::Vertical),
            ],
            log_level: "info".to_string(),
            action_log_len: 12,
            pointer_shapes: true,
        }
    }
}

impl AppConfig {
    /// Default config location, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Pick the config path: explicit flag, then environment, then default.
    pub fn resolve_path(explicit: Option<&Path>) -> Option<PathBuf> {
        if let Some(path) = explicit {
            return Some(path.to_path_buf());
        }
        match std::env::var_os(CONFIG_ENV) {
            Some(path) if !path.is_empty() => Some(PathBuf::from(path)),
            _ => Self::default_path(),
        }
    }

    /// Load configuration from a file.
    ///
    /// Returns defaults if the file doesn't exist.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let file = File::open(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: AppConfig =
            serde_json::from_reader(BufReader::new(file)).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;

        config.validate()?;
        debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load from the resolved path, or defaults if there is none.
    pub fn load_or_default(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match Self::resolve_path(explicit) {
            Some(path) => Self::load(&path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let write_err = |source: std::io::Error| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        };

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(write_err)?;
            }
        }

        let file = File::create(path).map_err(write_err)?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self).map_err(|e| write_err(e.into()))?;
        writer.flush().map_err(write_err)?;
        Ok(())
    }

    /// Check values serde cannot check.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.controls.is_empty() {
            return Err(ConfigError::Invalid("at least one control is required".to_string()));
        }
        if let Some(control) = self.controls.iter().find(|c| !c.initial.is_finite()) {
            return Err(ConfigError::Invalid(format!(
                "control '{}' has a non-finite initial value",
                control.label
            )));
        }
        if self.action_log_len == 0 {
            return Err(ConfigError::Invalid("action_log_len must be at least 1".to_string()));
        }
        Ok(())
    }

    /// Put every control on the same axis.
    pub fn with_axis_override(mut self, axis: Option<Axis>) -> Self {
        if let Some(axis) = axis {
            for control in &mut self.controls {
                control.axis = axis;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.controls.len(), 2);
        assert_eq!(config.controls[0].axis, Axis::Horizontal);
        assert_eq!(config.controls[1].axis, Axis::Vertical);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig::load(&dir.path().join("nope.json")).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = AppConfig::default();
        config.controls.push(ControlConfig {
            label: "gain".to_string(),
            axis: Axis::Vertical,
            initial: 2.5,
        });
        config.save(&path).unwrap();

        assert_eq!(AppConfig::load(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"controls":[{"label":"zoom","axis":"y"}]}"#).unwrap();

        let config = AppConfig::load(&path).unwrap();
        assert_eq!(config.controls, vec![ControlConfig::new("zoom", Axis::Vertical)]);
        assert_eq!(config.action_log_len, 12);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_malformed_file_is_parse_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ not json").unwrap();

        let err = AppConfig::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_empty_controls_rejected() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"controls":[]}"#).unwrap();

        assert!(matches!(AppConfig::load(&path), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_axis_override() {
        let config = AppConfig::default().with_axis_override(Some(Axis::Vertical));
        assert!(config.controls.iter().all(|c| c.axis == Axis::Vertical));

        let config = AppConfig::default().with_axis_override(None);
        assert_eq!(config.controls[0].axis, Axis::Horizontal);
    }

    #[test]
    #[serial]
    fn test_resolve_path_precedence() {
        std::env::set_var(CONFIG_ENV, "/tmp/from-env.json");
        assert_eq!(
            AppConfig::resolve_path(Some(Path::new("/tmp/flag.json"))),
            Some(PathBuf::from("/tmp/flag.json"))
        );
        assert_eq!(
            AppConfig::resolve_path(None),
            Some(PathBuf::from("/tmp/from-env.json"))
        );

        std::env::remove_var(CONFIG_ENV);
        assert_eq!(AppConfig::resolve_path(None), AppConfig::default_path());
    }
}
