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

//! Bounded rolling window of metric samples.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// Maximum number of samples retained per metric.
pub const SAMPLE_CAPACITY: usize = 60;

/// Rounds half-way values up, matching the lab's display rounding.
///
/// `round_half_up(35.5) == 36.0` and `round_half_up(-0.5) == 0.0`.
#[inline]
pub fn round_half_up(value: f64) -> f64 {
    (value + 0.5).floor()
}

/// A rolling window of recent samples for one metric, plus its running average.
///
/// Once [`SAMPLE_CAPACITY`] samples are held, each new sample evicts the oldest.
/// The average is recomputed from the retained samples on every insertion, so it
/// never drifts from the window's contents.
///
/// Deserialization rejects windows longer than [`SAMPLE_CAPACITY`] and derives
/// the average from the samples rather than trusting the stored one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SeriesRecord")]
pub struct MetricSeries {
    /// The most recently recorded value.
    pub current: f64,
    /// The rounded arithmetic mean of `samples`.
    pub average: f64,
    /// Retained samples, oldest first.
    pub samples: VecDeque<f64>,
}

#[derive(Deserialize)]
struct SeriesRecord {
    current: f64,
    samples: VecDeque<f64>,
}

impl TryFrom<SeriesRecord> for MetricSeries {
    type Error = String;

    fn try_from(record: SeriesRecord) -> Result<Self, Self::Error> {
        if record.samples.len() > SAMPLE_CAPACITY {
            return Err(format!(
                "metric series holds {} samples, at most {} are allowed",
                record.samples.len(),
                SAMPLE_CAPACITY
            ));
        }
        let mut series = Self {
            current: record.current,
            average: 0.0,
            samples: record.samples,
        };
        series.average = series.mean().map(round_half_up).unwrap_or(0.0);
        Ok(series)
    }
}

impl MetricSeries {
    /// Creates an empty series.
    pub fn new() -> Self {
        Self {
            current: 0.0,
            average: 0.0,
            samples: VecDeque::with_capacity(SAMPLE_CAPACITY),
        }
    }

    /// Records a new sample, evicting the oldest one when the window is full.
    pub fn record(&mut self, value: f64) {
        self.current = value;
        self.samples.push_back(value);
        while self.samples.len() > SAMPLE_CAPACITY {
            self.samples.pop_front();
        }
        self.average = self.mean().map(round_half_up).unwrap_or(0.0);
    }

    /// Returns the unrounded mean of the retained samples, or `None` if empty.
    pub fn mean(&self) -> Option<f64> {
        if self.samples.is_empty() {
            return None;
        }
        Some(self.samples.iter().sum::<f64>() / self.samples.len() as f64)
    }

    /// Returns the number of retained samples.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Returns `true` if no sample has been recorded.
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

}
