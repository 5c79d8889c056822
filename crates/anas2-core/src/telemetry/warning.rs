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

//! Threshold warnings raised by the performance monitor.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

use super::tier::MIB;

/// The metrics the monitor can raise warnings for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MetricKind {
    /// Frames per second. Warns when below the threshold.
    Fps,
    /// Used heap bytes. Warns when above the threshold.
    Memory,
    /// Page load time in milliseconds. Warns when above the threshold.
    LoadTime,
}

impl MetricKind {
    /// Returns the metric's identifier as used in reports and config.
    pub fn as_str(&self) -> &'static str {
        match self {
            MetricKind::Fps => "fps",
            MetricKind::Memory => "memory",
            MetricKind::LoadTime => "load_time",
        }
    }
}

impl Display for MetricKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single threshold violation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PerformanceWarning {
    /// The metric that crossed its threshold.
    pub metric: MetricKind,
    /// The sampled value.
    pub value: f64,
    /// The configured threshold it was compared against.
    pub threshold: f64,
}

impl Display for PerformanceWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.metric {
            MetricKind::Fps => write!(f, "Low frame rate: {} FPS", self.value),
            MetricKind::Memory => {
                write!(f, "High memory usage: {:.2} MB", self.value / MIB)
            }
            MetricKind::LoadTime => write!(f, "Slow page load: {}ms", self.value.round()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_warning_messages() {
        let fps = PerformanceWarning {
            metric: MetricKind::Fps,
            value: 24.0,
            threshold: 30.0,
        };
        assert_eq!(fps.to_string(), "Low frame rate: 24 FPS");

        let memory = PerformanceWarning {
            metric: MetricKind::Memory,
            value: 60.0 * MIB,
            threshold: 50.0 * MIB,
        };
        assert_eq!(memory.to_string(), "High memory usage: 60.00 MB");
    }

    #[test]
    fn test_metric_kind_names() {
        assert_eq!(MetricKind::Fps.to_string(), "fps");
        assert_eq!(MetricKind::LoadTime.as_str(), "load_time");
    }
}
