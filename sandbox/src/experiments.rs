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

//! The catalog of graphics experiments hosted by the lab.

/// A single experiment card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experiment {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: &'static str,
    pub description: &'static str,
}

/// Every experiment, in display order.
pub const EXPERIMENTS: &[Experiment] = &[
    Experiment {
        id: "canvas",
        name: "Canvas 2D",
        icon: "fas fa-paint-brush",
        description: "2D drawing with the Canvas API",
    },
    Experiment {
        id: "webgl",
        name: "WebGL",
        icon: "fas fa-cube",
        description: "Low-level 3D graphics",
    },
    Experiment {
        id: "threejs",
        name: "Three.js",
        icon: "fas fa-cubes",
        description: "High-level 3D graphics library",
    },
    Experiment {
        id: "pixijs",
        name: "PixiJS",
        icon: "fas fa-gamepad",
        description: "High-performance 2D rendering and games",
    },
    Experiment {
        id: "matterjs",
        name: "Matter.js",
        icon: "fas fa-atom",
        description: "2D physics engine for interactive simulations",
    },
    Experiment {
        id: "babylonjs",
        name: "Babylon.js",
        icon: "fas fa-vr-cardboard",
        description: "Advanced 3D library with integrated tooling",
    },
    Experiment {
        id: "d3js",
        name: "D3.js",
        icon: "fas fa-chart-bar",
        description: "Interactive data visualization and charts",
    },
];

/// Returns the experiment catalog.
pub fn load_experiments() -> &'static [Experiment] {
    log::info!("Loaded {} experiments", EXPERIMENTS.len());
    EXPERIMENTS
}

/// Looks up an experiment by id.
pub fn find(id: &str) -> Option<&'static Experiment> {
    EXPERIMENTS.iter().find(|e| e.id == id)
}
