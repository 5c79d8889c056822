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

//! Structured performance reports and the periodic console summary.

use std::fmt::Write;

use anas2_core::host::Viewport;
use anas2_core::telemetry::{round_half_up, LoadTimings, MetricSeries};
use serde::{Deserialize, Serialize};

use crate::display::format_megabytes;

/// Everything the monitor has sampled so far.
///
/// Always an owned copy: mutating it never affects the monitor, and the
/// monitor's later samples never change it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerformanceData {
    /// Frame rate series.
    pub fps: MetricSeries,
    /// Heap usage series, in bytes.
    pub memory: MetricSeries,
    /// Load-event times in milliseconds since the clock origin.
    pub load_times: Vec<f64>,
    /// Phase timings of the page load, when navigation timing was available.
    pub timings: Option<LoadTimings>,
}

/// A point-in-time performance report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PerformanceReport {
    /// RFC 3339 timestamp of when the report was taken.
    pub timestamp: String,
    /// Identifier of the host.
    pub user_agent: String,
    /// Host viewport dimensions.
    pub viewport: Viewport,
    /// The sampled data.
    pub performance: PerformanceData,
}

impl PerformanceReport {
    /// Serializes the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Builds the human-readable summary logged on every reporting interval.
///
/// Memory lines are only included when the host exposes heap telemetry, and the
/// load time line only once a load has been recorded.
pub fn summary(data: &PerformanceData, memory_available: bool) -> String {
    let mut out = String::from("Anas2 Lab performance report");

    let _ = write!(
        out,
        "\n  Frame rate: current {} FPS, average {} FPS",
        data.fps.current, data.fps.average
    );

    if memory_available {
        let _ = write!(
            out,
            "\n  Memory: current {}, average {}",
            format_megabytes(data.memory.current, 2),
            format_megabytes(data.memory.average, 2)
        );
    }

    if let Some(last) = data.load_times.last() {
        let _ = write!(out, "\n  Load time: last {}ms", round_half_up(*last));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use anas2_core::telemetry::MIB;

    #[test]
    fn test_summary_without_memory_or_load() {
        let mut data = PerformanceData::default();
        data.fps.record(58.0);
        data.fps.record(62.0);

        let text = summary(&data, false);
        assert_eq!(
            text,
            "Anas2 Lab performance report\n  Frame rate: current 62 FPS, average 60 FPS"
        );
    }

    #[test]
    fn test_summary_with_memory_and_load() {
        let mut data = PerformanceData::default();
        data.fps.record(60.0);
        data.memory.record(20.0 * MIB);
        data.load_times.push(812.4);

        let text = summary(&data, true);
        assert!(text.contains("Memory: current 20.00 MB, average 20.00 MB"));
        assert!(text.ends_with("Load time: last 812ms"));
    }

    #[test]
    fn test_report_serializes_to_json() {
        let mut data = PerformanceData::default();
        data.fps.record(60.0);
        let report = PerformanceReport {
            timestamp: "2026-01-01T00:00:00+00:00".to_string(),
            user_agent: "test".to_string(),
            viewport: Viewport {
                width: 800,
                height: 600,
            },
            performance: data,
        };

        let json: serde_json::Value = serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(json["viewport"]["width"], 800);
        assert_eq!(json["performance"]["fps"]["samples"][0], 60.0);
        assert!(json["performance"]["timings"].is_null());
    }
}
