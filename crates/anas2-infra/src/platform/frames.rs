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

//! A frame driver for hosts without a compositor-driven frame callback.

use std::time::Duration;

use anas2_core::host::{FrameCallback, FrameScheduler};
use anas2_core::utils::task::TaskHandle;

/// Invokes frame callbacks at a fixed target rate on a worker thread.
#[derive(Debug, Clone, Copy)]
pub struct FixedRateFrameScheduler {
    target_fps: u32,
}

impl FixedRateFrameScheduler {
    /// Creates a scheduler ticking `target_fps` times per second (at least once).
    pub fn new(target_fps: u32) -> Self {
        Self {
            target_fps: target_fps.max(1),
        }
    }

    pub fn target_fps(&self) -> u32 {
        self.target_fps
    }

    pub fn frame_interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / f64::from(self.target_fps))
    }
}

impl Default for FixedRateFrameScheduler {
    fn default() -> Self {
        Self::new(60)
    }
}

impl FrameScheduler for FixedRateFrameScheduler {
    fn schedule_frames(&self, callback: FrameCallback) -> TaskHandle {
        TaskHandle::spawn_interval("anas2-frames", self.frame_interval(), callback)
    }
}
