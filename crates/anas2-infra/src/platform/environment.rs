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

use std::borrow::Cow;

use anas2_core::host::{HostEnvironment, Viewport};

/// A host environment with fixed, caller-supplied facts.
#[derive(Debug, Clone)]
pub struct FixedEnvironment {
    viewport: Viewport,
    user_agent: Cow<'static, str>,
}

impl FixedEnvironment {
    pub fn new(width: u32, height: u32, user_agent: impl Into<Cow<'static, str>>) -> Self {
        Self {
            viewport: Viewport { width, height },
            user_agent: user_agent.into(),
        }
    }
}

impl Default for FixedEnvironment {
    fn default() -> Self {
        let user_agent = format!(
            "anas2-lab/{} ({})",
            env!("CARGO_PKG_VERSION"),
            std::env::consts::OS
        );
        Self::new(1280, 720, user_agent)
    }
}

impl HostEnvironment for FixedEnvironment {
    fn viewport(&self) -> Viewport {
        self.viewport
    }

    fn user_agent(&self) -> Cow<'static, str> {
        self.user_agent.clone()
    }
}
