//! # Theme
//!
//! Dark or light. The choice is the one preference the page remembers, under
//! the `theme` key of a [`PreferenceStore`].

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use clap::ValueEnum;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::core::host::PreferenceStore;

pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Saved `light` wins; with nothing saved, follow the host preference.
    pub fn resolve<P: PreferenceStore + ?Sized>(store: &P, prefers_dark: bool) -> Self {
        match store.get(THEME_KEY).as_deref() {
            Some("light") => Theme::Light,
            Some(_) => Theme::Dark,
            None if !prefers_dark => Theme::Light,
            None => Theme::Dark,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn persist<P: PreferenceStore + ?Sized>(self, store: &mut P) {
        store.set(THEME_KEY, self.label());
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

/// Preferences kept as a small JSON object on disk.
///
/// Reads never fail (a missing or unreadable file is an empty store); write
/// failures are logged and dropped.
pub struct FilePreferenceStore {
    path: Option<PathBuf>,
    values: BTreeMap<String, String>,
}

impl FilePreferenceStore {
    /// `~/.folio/preferences.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".folio").join("preferences.json"))
    }

    pub fn open_default() -> Self {
        match Self::default_path() {
            Some(path) => Self::open(path),
            None => {
                warn!("Could not determine home directory, preferences will not persist");
                Self {
                    path: None,
                    values: BTreeMap::new(),
                }
            }
        }
    }

    pub fn open(path: PathBuf) -> Self {
        let values = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str(&contents).unwrap_or_else(|e| {
                warn!("Ignoring malformed preferences at {}: {}", path.display(), e);
                BTreeMap::new()
            }),
            Err(_) => BTreeMap::new(),
        };
        debug!("Preferences loaded from {} ({} keys)", path.display(), values.len());
        Self {
            path: Some(path),
            values,
        }
    }

    fn save(&self) {
        let Some(path) = &self.path else {
            return;
        };
        if let Some(parent) = path.parent()
            && let Err(e) = fs::create_dir_all(parent)
        {
            warn!("Failed to create preferences directory: {}", e);
            return;
        }
        let json = match serde_json::to_string_pretty(&self.values) {
            Ok(json) => json,
            Err(e) => {
                warn!("Failed to serialize preferences: {}", e);
                return;
            }
        };
        // Write-then-rename so a crash never leaves a half-written file.
        let tmp = path.with_extension("json.tmp");
        if let Err(e) = fs::write(&tmp, json).and_then(|()| fs::rename(&tmp, path)) {
            warn!("Failed to write preferences to {}: {}", path.display(), e);
        }
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
        self.save();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MemoryPreferences;

    #[test]
    fn test_saved_light_wins_over_host_preference() {
        let mut store = MemoryPreferences::default();
        store.set(THEME_KEY, "light");
        assert_eq!(Theme::resolve(&store, true), Theme::Light);
    }

    #[test]
    fn test_saved_dark_wins_over_host_preference() {
        let mut store = MemoryPreferences::default();
        store.set(THEME_KEY, "dark");
        assert_eq!(Theme::resolve(&store, false), Theme::Dark);
    }

    #[test]
    fn test_nothing_saved_follows_host() {
        let store = MemoryPreferences::default();
        assert_eq!(Theme::resolve(&store, true), Theme::Dark);
        assert_eq!(Theme::resolve(&store, false), Theme::Light);
    }

    #[test]
    fn test_toggle_and_persist() {
        let mut store = MemoryPreferences::default();
        let theme = Theme::Dark.toggled();
        theme.persist(&mut store);
        assert_eq!(store.get(THEME_KEY).as_deref(), Some("light"));
        assert_eq!(theme.toggled(), Theme::Dark);
    }

    #[test]
    fn test_parse() {
        assert_eq!(Theme::parse(" Light "), Some(Theme::Light));
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("sepia"), None);
    }

    #[test]
    fn test_file_store_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("preferences.json");

        let mut store = FilePreferenceStore::open(path.clone());
        assert_eq!(store.get(THEME_KEY), None);
        store.set(THEME_KEY, "light");

        let reopened = FilePreferenceStore::open(path);
        assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
    }

    #[test]
    fn test_file_store_ignores_garbage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        fs::write(&path, "not json").unwrap();

        let store = FilePreferenceStore::open(path);
        assert_eq!(store.get(THEME_KEY), None);
    }
}
