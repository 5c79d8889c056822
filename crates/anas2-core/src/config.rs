// Copyright 2025 eraflo
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Configuration for the performance monitor.
//!
//! The configuration is plain data: it can be built in code, loaded from a JSON
//! string or file, or persisted through a [`KeyValueStore`](crate::KeyValueStore)
//! under [`CONFIG_STORAGE_KEY`]. Missing fields take their default values.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::telemetry::{MetricKind, MIB};

/// The storage key the monitor configuration is persisted under.
pub const CONFIG_STORAGE_KEY: &str = "performance.config";

/// An error raised while loading or validating a [`MonitorConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration text is not valid JSON for this schema.
    #[error("invalid monitor configuration: {0}")]
    Parse(#[from] serde_json::Error),
    /// The configuration file could not be read.
    #[error("failed to access monitor configuration file: {0}")]
    Io(#[from] std::io::Error),
    /// A field holds a value the monitor cannot run with.
    #[error("invalid monitor configuration value: {0}")]
    Invalid(String),
}

/// Thresholds beyond which the monitor raises a warning.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WarningThresholds {
    /// Frame rate below which a warning is raised.
    pub fps: f64,
    /// Heap usage in bytes above which a warning is raised.
    pub memory: f64,
    /// Load time in milliseconds above which a warning is raised.
    pub load_time: f64,
}

impl Default for WarningThresholds {
    fn default() -> Self {
        Self {
            fps: 30.0,
            memory: 50.0 * MIB,
            load_time: 3000.0,
        }
    }
}

impl WarningThresholds {
    /// Returns `true` if `value` violates the threshold for `metric`.
    ///
    /// Frame rate warns strictly below its threshold, memory and load time
    /// strictly above. A value equal to the threshold never warns.
    pub fn is_exceeded(&self, metric: MetricKind, value: f64) -> bool {
        match metric {
            MetricKind::Fps => value < self.fps,
            MetricKind::Memory => value > self.memory,
            MetricKind::LoadTime => value > self.load_time,
        }
    }

    /// Returns the configured threshold for `metric`.
    pub fn threshold(&self, metric: MetricKind) -> f64 {
        match metric {
            MetricKind::Fps => self.fps,
            MetricKind::Memory => self.memory,
            MetricKind::LoadTime => self.load_time,
        }
    }
}

/// Configuration for the performance monitor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MonitorConfig {
    /// When `false`, the monitor never schedules any work.
    pub enabled: bool,
    /// Period of the console summary, in milliseconds.
    pub log_interval_ms: u64,
    /// Period of heap usage polling, in milliseconds.
    pub memory_interval_ms: u64,
    /// Length of the frame-counting window used to compute FPS, in milliseconds.
    pub fps_window_ms: u64,
    /// Warning thresholds.
    pub warning_thresholds: WarningThresholds,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            log_interval_ms: 5000,
            memory_interval_ms: 1000,
            fps_window_ms: 1000,
            warning_thresholds: WarningThresholds::default(),
        }
    }
}

impl MonitorConfig {
    /// Loads a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads a configuration from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Checks that every interval is non-zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let intervals = [
            ("log_interval_ms", self.log_interval_ms),
            ("memory_interval_ms", self.memory_interval_ms),
            ("fps_window_ms", self.fps_window_ms),
        ];
        for (name, value) in intervals {
            if value == 0 {
                return Err(ConfigError::Invalid(format!("{name} must be greater than zero")));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MonitorConfig::default();
        assert!(config.enabled);
        assert_eq!(config.log_interval_ms, 5000);
        assert_eq!(config.warning_thresholds.fps, 30.0);
        assert_eq!(config.warning_thresholds.memory, 52_428_800.0);
        assert_eq!(config.warning_thresholds.load_time, 3000.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_missing_fields() {
        let json = r#"
        {
            "log_interval_ms": 2000,
            "warning_thresholds": { "fps": 55 }
        }"#;

        let config = MonitorConfig::from_json(json).unwrap();
        assert!(config.enabled);
        assert_eq!(config.log_interval_ms, 2000);
        assert_eq!(config.memory_interval_ms, 1000);
        assert_eq!(config.warning_thresholds.fps, 55.0);
        assert_eq!(config.warning_thresholds.memory, 50.0 * MIB);
    }

    #[test]
    fn test_from_json_rejects_zero_interval() {
        let result = MonitorConfig::from_json(r#"{ "fps_window_ms": 0 }"#);
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        let result = MonitorConfig::from_json("not json");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_warning_rules_at_boundaries() {
        let thresholds = WarningThresholds::default();

        assert!(thresholds.is_exceeded(MetricKind::Fps, 29.0));
        assert!(!thresholds.is_exceeded(MetricKind::Fps, 30.0));
        assert!(!thresholds.is_exceeded(MetricKind::Fps, 60.0));

        assert!(thresholds.is_exceeded(MetricKind::Memory, 50.0 * MIB + 1.0));
        assert!(!thresholds.is_exceeded(MetricKind::Memory, 50.0 * MIB));
        assert!(!thresholds.is_exceeded(MetricKind::Memory, 10.0 * MIB));

        assert!(thresholds.is_exceeded(MetricKind::LoadTime, 3000.5));
        assert!(!thresholds.is_exceeded(MetricKind::LoadTime, 3000.0));
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("monitor.json");
        std::fs::write(&path, r#"{ "enabled": false, "log_interval_ms": 1234 }"#).unwrap();

        let loaded = MonitorConfig::from_file(&path).unwrap();
        assert_eq!(
            loaded,
            MonitorConfig {
                enabled: false,
                log_interval_ms: 1234,
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = MonitorConfig::from_file(dir.path().join("absent.json"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
