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

//! Provides the data structures for lab performance telemetry.
//!
//! This module defines the "common language" for the performance monitor: the
//! rolling [`MetricSeries`], the display [`Tier`] policy, the warning types, and
//! the [`LoadTimings`] captured at page load. `anas2-telemetry` owns the sampler
//! that fills them, while `anas2-infra` provides the concrete host capabilities
//! they are measured from.

pub mod series;
pub mod tier;
pub mod timings;
pub mod warning;

pub use self::series::{round_half_up, MetricSeries, SAMPLE_CAPACITY};
pub use self::tier::{Tier, MIB};
pub use self::timings::{LoadTimings, NavigationEntry};
pub use self::warning::{MetricKind, PerformanceWarning};
