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

//! Light/dark theme preference.

use std::fmt::{self, Display};
use std::str::FromStr;

use anas2_core::storage::KeyValueStore;

/// Storage key the theme preference is kept under.
pub const THEME_STORAGE_KEY: &str = "theme";

/// The lab's color theme.
///
/// Stored as its bare name (`light` or `dark`), not JSON-encoded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Loads the saved theme, falling back to [`Theme::Light`].
    pub fn load(store: &dyn KeyValueStore) -> Self {
        match store.get(THEME_STORAGE_KEY) {
            Ok(Some(raw)) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Ignoring unknown theme '{}'", raw);
                Self::default()
            }),
            Ok(None) => Self::default(),
            Err(e) => {
                log::error!("Failed to read theme preference: {}", e);
                Self::default()
            }
        }
    }

    /// Persists the theme. Returns `false` if the store rejected it.
    pub fn save(self, store: &dyn KeyValueStore) -> bool {
        match store.set(THEME_STORAGE_KEY, self.as_str()) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to save theme preference: {}", e);
                false
            }
        }
    }

    /// Returns the opposite theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Icon of the toggle button, which shows the theme it switches to.
    pub fn toggle_icon(self) -> &'static str {
        match self {
            Theme::Light => "fas fa-moon",
            Theme::Dark => "fas fa-sun",
        }
    }

    /// Returns the theme name as stored.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(format!("unknown theme: {other}")),
        }
    }
}

/// Flips the saved theme and persists the result.
pub fn toggle_theme(store: &dyn KeyValueStore) -> Theme {
    let theme = Theme::load(store).toggled();
    if theme.save(store) {
        log::info!("Theme switched to {}", theme);
    }
    theme
}

#[cfg(test)]
mod tests {
    use super::*;
    use anas2_infra::InMemoryStore;

    #[test]
    fn test_defaults_to_light() {
        let store = InMemoryStore::new();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let store = InMemoryStore::new();
        assert_eq!(toggle_theme(&store), Theme::Dark);
        assert_eq!(Theme::load(&store), Theme::Dark);
        assert_eq!(store.get(THEME_STORAGE_KEY).unwrap().as_deref(), Some("dark"));

        assert_eq!(toggle_theme(&store), Theme::Light);
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_unknown_value_falls_back() {
        let store = InMemoryStore::new();
        store.set(THEME_STORAGE_KEY, "sepia").unwrap();
        assert_eq!(Theme::load(&store), Theme::Light);
    }

    #[test]
    fn test_icon_points_at_the_other_theme() {
        assert_eq!(Theme::Light.toggle_icon(), "fas fa-moon");
        assert_eq!(Theme::Dark.toggle_icon(), "fas fa-sun");
    }
}
