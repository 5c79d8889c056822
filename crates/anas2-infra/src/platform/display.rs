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

//! In-memory display surfaces.
//!
//! The board keeps the last text and tier written to each registered surface.
//! Hosts render the board however they like (console, overlay); tests read it
//! back directly.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError, RwLock};

use anas2_core::host::{DisplaySurface, DisplaySurfaces};
use anas2_core::telemetry::Tier;

/// What a surface currently shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SurfaceState {
    pub text: String,
    pub tier: Option<Tier>,
}

#[derive(Debug)]
struct BoardSurface {
    id: String,
    state: Mutex<SurfaceState>,
}

impl DisplaySurface for BoardSurface {
    fn set_text(&self, text: &str) {
        log::trace!("[{}] {}", self.id, text);
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        state.text.clear();
        state.text.push_str(text);
    }

    fn set_tier(&self, tier: Tier) {
        self.state
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .tier = Some(tier);
    }
}

/// A set of named display surfaces. Lookups of unregistered ids return `None`.
#[derive(Debug, Default)]
pub struct DisplayBoard {
    surfaces: RwLock<HashMap<String, Arc<BoardSurface>>>,
}

impl DisplayBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board with the given surfaces registered.
    pub fn with_surfaces<'a>(ids: impl IntoIterator<Item = &'a str>) -> Self {
        let board = Self::new();
        for id in ids {
            board.register(id);
        }
        board
    }

    /// Registers a surface. Registering an existing id keeps its current state.
    pub fn register(&self, id: &str) {
        let mut surfaces = self.surfaces.write().unwrap_or_else(PoisonError::into_inner);
        surfaces.entry(id.to_string()).or_insert_with(|| {
            Arc::new(BoardSurface {
                id: id.to_string(),
                state: Mutex::new(SurfaceState::default()),
            })
        });
    }

    /// Returns what the surface currently shows.
    pub fn state(&self, id: &str) -> Option<SurfaceState> {
        let surfaces = self.surfaces.read().unwrap_or_else(PoisonError::into_inner);
        surfaces.get(id).map(|surface| {
            surface
                .state
                .lock()
                .unwrap_or_else(PoisonError::into_inner)
                .clone()
        })
    }

    /// Renders every surface as `id: text [tier]`, sorted by id.
    pub fn render_lines(&self) -> Vec<String> {
        let surfaces = self.surfaces.read().unwrap_or_else(PoisonError::into_inner);
        let mut ids: Vec<&String> = surfaces.keys().collect();
        ids.sort();
        ids.into_iter()
            .filter_map(|id| {
                let state = surfaces.get(id)?.state.lock().ok()?.clone();
                Some(match state.tier {
                    Some(tier) => format!("{id}: {} [{tier}]", state.text),
                    None => format!("{id}: {}", state.text),
                })
            })
            .collect()
    }
}

impl DisplaySurfaces for DisplayBoard {
    fn surface(&self, id: &str) -> Option<Arc<dyn DisplaySurface>> {
        let surfaces = self.surfaces.read().unwrap_or_else(PoisonError::into_inner);
        surfaces
            .get(id)
            .map(|surface| Arc::clone(surface) as Arc<dyn DisplaySurface>)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_land_on_registered_surfaces() {
        let board = DisplayBoard::with_surfaces(["fps-counter"]);
        let surface = board.surface("fps-counter").unwrap();
        surface.set_text("58");
        surface.set_tier(Tier::Good);

        assert_eq!(
            board.state("fps-counter"),
            Some(SurfaceState {
                text: "58".to_string(),
                tier: Some(Tier::Good),
            })
        );
        assert_eq!(board.render_lines(), vec!["fps-counter: 58 [good]"]);
    }

    #[test]
    fn unknown_surfaces_are_absent() {
        let board = DisplayBoard::new();
        assert!(board.surface("memory-usage").is_none());
        assert!(board.state("memory-usage").is_none());
    }

    #[test]
    fn re_registering_keeps_state() {
        let board = DisplayBoard::with_surfaces(["load-time"]);
        board.surface("load-time").unwrap().set_text("812");
        board.register("load-time");
        assert_eq!(board.state("load-time").unwrap().text, "812");
    }
}
