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

//! # Anas2 Infra
//!
//! Concrete implementations of the host capabilities defined in `anas2-core`,
//! for running the lab as a native process.

pub mod platform;
pub mod storage;
pub mod telemetry;

pub use platform::clock::SystemClock;
pub use platform::display::{DisplayBoard, SurfaceState};
pub use platform::environment::FixedEnvironment;
pub use platform::frames::FixedRateFrameScheduler;
pub use storage::file_store::JsonFileStore;
pub use storage::memory_store::InMemoryStore;
pub use telemetry::heap_probe::ProcessHeapProbe;
pub use telemetry::navigation::{NavigationPhase, RecordedNavigation};
