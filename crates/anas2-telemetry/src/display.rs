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

//! Renders sampled values into the host's display surfaces.

use anas2_core::host::DisplaySurfaces;
use anas2_core::telemetry::{round_half_up, Tier, MIB};

/// Surface showing the current frame rate.
pub const FPS_SURFACE: &str = "fps-counter";
/// Surface showing the current heap usage.
pub const MEMORY_SURFACE: &str = "memory-usage";
/// Surface showing the last load time.
pub const LOAD_TIME_SURFACE: &str = "load-time";

/// Formats a byte count as mebibytes with the given number of decimals.
pub fn format_megabytes(bytes: f64, decimals: usize) -> String {
    format!("{:.*} MB", decimals, bytes / MIB)
}

pub(crate) fn render_fps(displays: Option<&dyn DisplaySurfaces>, fps: f64) {
    let Some(surface) = displays.and_then(|d| d.surface(FPS_SURFACE)) else {
        return;
    };
    surface.set_text(&fps.to_string());
    surface.set_tier(Tier::for_fps(fps));
}

pub(crate) fn render_memory(displays: Option<&dyn DisplaySurfaces>, bytes: f64) {
    let Some(surface) = displays.and_then(|d| d.surface(MEMORY_SURFACE)) else {
        return;
    };
    surface.set_text(&format_megabytes(bytes, 1));
    surface.set_tier(Tier::for_memory_bytes(bytes));
}

pub(crate) fn render_load_time(displays: Option<&dyn DisplaySurfaces>, total_ms: f64) {
    if let Some(surface) = displays.and_then(|d| d.surface(LOAD_TIME_SURFACE)) {
        surface.set_text(&round_half_up(total_ms).to_string());
    }
}
