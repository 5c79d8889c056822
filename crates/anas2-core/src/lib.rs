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

//! # Anas2 Core
//!
//! Foundational crate containing the host capability contracts, telemetry data
//! types, and configuration shared by the Anas2 Lab crates.

#![warn(missing_docs)]

pub mod config;
pub mod host;
pub mod storage;
pub mod telemetry;
pub mod utils;

pub use config::{ConfigError, MonitorConfig, WarningThresholds};
pub use host::HostCapabilities;
pub use storage::{KeyValueStore, StorageError, StorageResult};
pub use utils::task::TaskHandle;
pub use utils::timer::Stopwatch;
