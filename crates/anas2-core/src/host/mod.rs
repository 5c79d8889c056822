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

//! Contracts for the host capabilities the performance monitor polls.
//!
//! The monitor never reaches for ambient globals. Everything it reads (the
//! clock, frame callbacks, heap telemetry, navigation timing, display surfaces)
//! is injected through these traits and bundled in [`HostCapabilities`].
//! Optional capabilities are decided once, at construction, as `Option`s; the
//! monitor never probes for them again.

use std::borrow::Cow;
use std::fmt::Debug;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::telemetry::{NavigationEntry, Tier};
use crate::utils::task::TaskHandle;

/// A callback invoked once per rendered frame.
pub type FrameCallback = Box<dyn FnMut() + Send + 'static>;

/// A monotonic clock.
pub trait Clock: Send + Sync + Debug {
    /// Returns the elapsed milliseconds since a fixed origin.
    fn now_ms(&self) -> f64;
}

/// A per-frame scheduling primitive.
pub trait FrameScheduler: Send + Sync + Debug {
    /// Arranges for `callback` to run once per frame until the returned handle
    /// is cancelled.
    fn schedule_frames(&self, callback: FrameCallback) -> TaskHandle;
}

/// Reports the bytes currently allocated on the managed heap.
pub trait HeapProbe: Send + Sync + Debug {
    /// Returns the used heap size in bytes, or `None` if no reading is available
    /// right now.
    fn used_heap_bytes(&self) -> Option<u64>;
}

/// Exposes the phase timestamps of the current page load.
pub trait NavigationTimingSource: Send + Sync + Debug {
    /// Returns the recorded navigation entries, oldest first.
    fn navigation_entries(&self) -> Vec<NavigationEntry>;
}

/// A named surface the monitor renders a value into.
pub trait DisplaySurface: Send + Sync + Debug {
    /// Replaces the surface's text content.
    fn set_text(&self, text: &str);

    /// Sets the color tier the value should be shown with.
    fn set_tier(&self, tier: Tier);
}

/// Looks up display surfaces by logical identifier.
pub trait DisplaySurfaces: Send + Sync + Debug {
    /// Returns the surface registered under `id`, if any.
    fn surface(&self, id: &str) -> Option<Arc<dyn DisplaySurface>>;
}

/// The dimensions of the host's visible area, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

/// Static facts about the host, included in reports.
pub trait HostEnvironment: Send + Sync + Debug {
    /// Returns the current viewport dimensions.
    fn viewport(&self) -> Viewport;

    /// Returns a human-readable identifier of the host.
    fn user_agent(&self) -> Cow<'static, str>;
}

/// The full set of host capabilities handed to the monitor.
#[derive(Debug, Clone)]
pub struct HostCapabilities {
    /// The monotonic clock all timestamps are read from.
    pub clock: Arc<dyn Clock>,
    /// Drives the frame-rate sampler.
    pub frames: Arc<dyn FrameScheduler>,
    /// Static host facts for reports.
    pub environment: Arc<dyn HostEnvironment>,
    /// Heap telemetry; memory sampling is never scheduled without it.
    pub heap: Option<Arc<dyn HeapProbe>>,
    /// Navigation timing; load timings stay absent without it.
    pub navigation: Option<Arc<dyn NavigationTimingSource>>,
    /// Display surfaces; rendering is skipped without them.
    pub displays: Option<Arc<dyn DisplaySurfaces>>,
}

impl HostCapabilities {
    /// Creates a capability set with only the required capabilities.
    pub fn new(
        clock: Arc<dyn Clock>,
        frames: Arc<dyn FrameScheduler>,
        environment: Arc<dyn HostEnvironment>,
    ) -> Self {
        Self {
            clock,
            frames,
            environment,
            heap: None,
            navigation: None,
            displays: None,
        }
    }

    /// Adds heap telemetry.
    pub fn with_heap_probe(mut self, heap: Arc<dyn HeapProbe>) -> Self {
        self.heap = Some(heap);
        self
    }

    /// Adds navigation timing.
    pub fn with_navigation(mut self, navigation: Arc<dyn NavigationTimingSource>) -> Self {
        self.navigation = Some(navigation);
        self
    }

    /// Adds display surfaces.
    pub fn with_displays(mut self, displays: Arc<dyn DisplaySurfaces>) -> Self {
        self.displays = Some(displays);
        self
    }

    /// Returns `true` if the host exposes heap telemetry.
    pub fn has_heap_probe(&self) -> bool {
        self.heap.is_some()
    }
}
