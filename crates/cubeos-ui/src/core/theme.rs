//! Theme catalog and the theme store.
//!
//! # Design
//! - The catalog is static: exactly one dark and one light theme.
//! - Persisted ids from older console releases are migrated forward on load.
//! - A dispatch subscription applies the theme whenever the selection changes, whatever changed it.

use crate::core::config::ConsoleConfig;
use crate::core::platform::{KeyValueStore, ThemeSurface};
use std::rc::Rc;
use tracing::debug;
use yewdux::prelude::Dispatch;
use yewdux::store::Store;

/// Attribute on the document root carrying the theme id.
pub const THEME_ATTRIBUTE: &str = "data-theme";
/// Class toggled on the document root for dark themes.
pub const DARK_CLASS: &str = "dark";
/// Id used when nothing is persisted.
pub const DEFAULT_THEME_ID: &str = "dark";

const LEGACY_DARK_IDS: [&str; 5] = ["obsidian", "midnight", "carbon", "cyber", "default-dark"];
const LEGACY_LIGHT_IDS: [&str; 5] = ["pearl", "ivory", "daylight", "paper", "default-light"];

/// Light or dark theme preference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    /// Light theme mode.
    Light,
    /// Dark theme mode.
    Dark,
}

/// Swatch colors shown in the theme picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemePreview {
    /// Page background.
    pub background: &'static str,
    /// Card and panel surface.
    pub surface: &'static str,
    /// Accent for interactive elements.
    pub accent: &'static str,
    /// Primary text.
    pub text: &'static str,
}

/// Catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Theme {
    /// Stable id, persisted in storage.
    pub id: &'static str,
    /// Display name.
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// Light or dark.
    pub mode: ThemeMode,
    /// Picker swatches.
    pub preview: ThemePreview,
}

/// Every theme the console ships, default first.
pub static THEMES: [Theme; 2] = [
    Theme {
        id: "dark",
        name: "Dark",
        description: "Low-glare palette for network operations rooms",
        mode: ThemeMode::Dark,
        preview: ThemePreview {
            background: "#0B0F14",
            surface: "#151B23",
            accent: "#2F9E7A",
            text: "#E6EDF3",
        },
    },
    Theme {
        id: "light",
        name: "Light",
        description: "High-contrast palette for bright environments",
        mode: ThemeMode::Light,
        preview: ThemePreview {
            background: "#F6F8FA",
            surface: "#FFFFFF",
            accent: "#1F7A5C",
            text: "#1F2328",
        },
    },
];

/// Catalog entry for `id`.
#[must_use]
pub fn find_theme(id: &str) -> Option<&'static Theme> {
    THEMES.iter().find(|theme| theme.id == id)
}

/// Map any persisted id onto the current catalog.
///
/// Current ids pass through, known legacy ids collapse onto their family and
/// anything else becomes `dark`.
#[must_use]
pub fn migrate_theme_id(id: &str) -> &'static str {
    let id = id.trim();
    if let Some(theme) = find_theme(id) {
        return theme.id;
    }
    if LEGACY_LIGHT_IDS.iter().any(|legacy| *legacy == id) {
        return "light";
    }
    if LEGACY_DARK_IDS.iter().any(|legacy| *legacy == id) {
        return "dark";
    }
    DEFAULT_THEME_ID
}

/// Push `id` onto `surface`; unknown ids render as the default theme.
pub fn apply_to_surface(surface: &dyn ThemeSurface, id: &str) {
    let theme = find_theme(id).unwrap_or(&THEMES[0]);
    surface.set_attribute(THEME_ATTRIBUTE, theme.id);
    surface.set_class(DARK_CLASS, theme.mode == ThemeMode::Dark);
}

/// Theme slice.
#[derive(Clone, Debug, PartialEq, Eq, Store)]
pub struct ThemeState {
    /// Selected catalog id.
    pub selected: String,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self {
            selected: DEFAULT_THEME_ID.to_string(),
        }
    }
}

/// Theme store: selection, persistence and presentation.
pub struct ThemeStore {
    state: Dispatch<ThemeState>,
    storage: Rc<dyn KeyValueStore>,
    surface: Rc<dyn ThemeSurface>,
    theme_key: String,
    _watch: Dispatch<ThemeState>,
}

impl ThemeStore {
    /// Build the store and start watching the selection.
    ///
    /// The initial selection is the migrated persisted id and is applied to
    /// `surface` right away; storage is not written until
    /// [`ThemeStore::init_theme`] runs.
    pub fn new(
        storage: Rc<dyn KeyValueStore>,
        surface: Rc<dyn ThemeSurface>,
        config: &ConsoleConfig,
    ) -> Self {
        let stored = storage.get(&config.theme_key);
        let state = Dispatch::<ThemeState>::new();
        state.set(ThemeState {
            selected: migrate_theme_id(stored.as_deref().unwrap_or(DEFAULT_THEME_ID))
                .to_string(),
        });
        let watch = {
            let surface = Rc::clone(&surface);
            Dispatch::<ThemeState>::subscribe(move |state: Rc<ThemeState>| {
                apply_to_surface(surface.as_ref(), &state.selected);
            })
        };
        Self {
            state,
            storage,
            surface,
            theme_key: config.theme_key.clone(),
            _watch: watch,
        }
    }

    /// Static catalog.
    #[must_use]
    pub fn themes(&self) -> &'static [Theme] {
        &THEMES
    }

    /// Selected id.
    #[must_use]
    pub fn selected_id(&self) -> String {
        self.state.get().selected.clone()
    }

    /// Selected catalog entry, falling back to the first.
    #[must_use]
    pub fn current_theme(&self) -> &'static Theme {
        find_theme(&self.state.get().selected).unwrap_or(&THEMES[0])
    }

    /// Whether the selected theme is dark.
    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.current_theme().mode == ThemeMode::Dark
    }

    /// Observe the selection: called with the current state, then on every
    /// change until the returned dispatch is dropped.
    #[must_use]
    #[allow(clippy::unused_self)]
    pub fn subscribe<F>(&self, on_change: F) -> Dispatch<ThemeState>
    where
        F: Fn(Rc<ThemeState>) + 'static,
    {
        Dispatch::subscribe(on_change)
    }

    /// Select and persist `id`; the watch applies it. Unknown ids are ignored.
    pub fn set_theme(&self, id: &str) {
        let Some(theme) = find_theme(id) else {
            debug!(id, "ignoring unknown theme id");
            return;
        };
        self.storage.set(&self.theme_key, theme.id);
        self.state
            .reduce_mut(|state| state.selected = theme.id.to_string());
    }

    /// Switch between the dark and light themes.
    pub fn toggle_theme(&self) {
        let next = match self.current_theme().mode {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        };
        if let Some(theme) = THEMES.iter().find(|theme| theme.mode == next) {
            self.set_theme(theme.id);
        }
    }

    /// Reflect `id` on the presentation surface without touching state.
    pub fn apply_theme(&self, id: &str) {
        apply_to_surface(self.surface.as_ref(), id);
    }

    /// Startup hook: migrate the persisted id, write it back and apply it.
    pub fn init_theme(&self) {
        let stored = self.storage.get(&self.theme_key);
        let migrated = migrate_theme_id(stored.as_deref().unwrap_or(DEFAULT_THEME_ID));
        if stored.as_deref() != Some(migrated) {
            debug!(from = stored.as_deref(), to = migrated, "migrated theme id");
        }
        self.storage.set(&self.theme_key, migrated);
        if self.state.get().selected == migrated {
            self.apply_theme(migrated);
        } else {
            self.state
                .reduce_mut(|state| state.selected = migrated.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_one_theme_per_mode() {
        assert_eq!(THEMES.len(), 2);
        assert_eq!(THEMES[0].id, "dark");
        assert_eq!(THEMES[0].mode, ThemeMode::Dark);
        assert_eq!(THEMES[1].id, "light");
        assert_eq!(THEMES[1].mode, ThemeMode::Light);
    }

    #[test]
    fn migrate_maps_legacy_families() {
        assert_eq!(migrate_theme_id("obsidian"), "dark");
        assert_eq!(migrate_theme_id("pearl"), "light");
        assert_eq!(migrate_theme_id("neon"), "dark");
        assert_eq!(migrate_theme_id("ivory"), "light");
        assert_eq!(migrate_theme_id("midnight"), "dark");
    }

    #[test]
    fn migrate_passes_current_ids_through() {
        assert_eq!(migrate_theme_id("dark"), "dark");
        assert_eq!(migrate_theme_id("light"), "light");
        assert_eq!(migrate_theme_id(" light "), "light");
        assert_eq!(migrate_theme_id(""), "dark");
    }

    #[test]
    fn every_unknown_id_lands_in_the_catalog() {
        for id in ["", "LIGHT", "solarized", "default", "pearl-2", "🌙"] {
            assert!(find_theme(migrate_theme_id(id)).is_some(), "{id}");
        }
    }
}
