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

//! # Anas2 Telemetry
//!
//! The lab's performance monitor: frame-rate and heap sampling, threshold
//! warnings, display rendering, periodic summaries, and structured reports.

pub mod display;
pub mod monitor;
pub mod report;
pub mod storage;

pub use monitor::PerformanceMonitor;
pub use report::{PerformanceData, PerformanceReport};
pub use storage::{clear_storage, load_from_storage, remove_from_storage, save_to_storage};
