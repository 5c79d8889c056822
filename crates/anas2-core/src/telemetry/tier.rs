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

//! Display tiers for the live performance overlay.
//!
//! Tiers are presentation hints only; no decision in the sampler depends on them.

use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};

/// Bytes in one mebibyte.
pub const MIB: f64 = 1024.0 * 1024.0;

const FPS_GOOD_MIN: f64 = 50.0;
const FPS_DEGRADED_MIN: f64 = 30.0;
const MEMORY_DEGRADED_ABOVE: f64 = 50.0 * MIB;
const MEMORY_POOR_ABOVE: f64 = 100.0 * MIB;

/// A coarse quality tier used to color displayed values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// The value is comfortably within budget.
    Good,
    /// The value is acceptable but worth watching.
    Degraded,
    /// The value is outside budget.
    Poor,
}

impl Tier {
    /// Selects the tier for a frame rate: `>= 50` good, `>= 30` degraded, otherwise poor.
    pub fn for_fps(fps: f64) -> Self {
        if fps < FPS_DEGRADED_MIN {
            Tier::Poor
        } else if fps < FPS_GOOD_MIN {
            Tier::Degraded
        } else {
            Tier::Good
        }
    }

    /// Selects the tier for heap usage: above 100 MiB poor, above 50 MiB degraded, otherwise good.
    pub fn for_memory_bytes(bytes: f64) -> Self {
        if bytes > MEMORY_POOR_ABOVE {
            Tier::Poor
        } else if bytes > MEMORY_DEGRADED_ABOVE {
            Tier::Degraded
        } else {
            Tier::Good
        }
    }

    /// Returns the CSS-style hex color associated with the tier.
    pub fn color(&self) -> &'static str {
        match self {
            Tier::Good => "#10b981",
            Tier::Degraded => "#f59e0b",
            Tier::Poor => "#ef4444",
        }
    }

    /// Returns the lowercase tier name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Tier::Good => "good",
            Tier::Degraded => "degraded",
            Tier::Poor => "poor",
        }
    }
}

impl Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fps_tier_boundaries() {
        assert_eq!(Tier::for_fps(29.0), Tier::Poor);
        assert_eq!(Tier::for_fps(30.0), Tier::Degraded);
        assert_eq!(Tier::for_fps(49.0), Tier::Degraded);
        assert_eq!(Tier::for_fps(50.0), Tier::Good);
        assert_eq!(Tier::for_fps(0.0), Tier::Poor);
        assert_eq!(Tier::for_fps(144.0), Tier::Good);
    }

    #[test]
    fn test_memory_tier_boundaries() {
        assert_eq!(Tier::for_memory_bytes(49.0 * MIB), Tier::Good);
        assert_eq!(Tier::for_memory_bytes(50.0 * MIB), Tier::Good);
        assert_eq!(Tier::for_memory_bytes(51.0 * MIB), Tier::Degraded);
        assert_eq!(Tier::for_memory_bytes(100.0 * MIB), Tier::Degraded);
        assert_eq!(Tier::for_memory_bytes(101.0 * MIB), Tier::Poor);
    }

    #[test]
    fn test_tier_colors() {
        assert_eq!(Tier::Good.color(), "#10b981");
        assert_eq!(Tier::Degraded.color(), "#f59e0b");
        assert_eq!(Tier::Poor.color(), "#ef4444");
        assert_eq!(Tier::Degraded.to_string(), "degraded");
    }
}
