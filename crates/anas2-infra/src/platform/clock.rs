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

use anas2_core::host::Clock;
use anas2_core::utils::timer::Stopwatch;

/// A monotonic clock whose origin is the moment it was created.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    origin: Stopwatch,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Stopwatch::new(),
        }
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> f64 {
        self.origin.elapsed_ms_f64()
    }
}
