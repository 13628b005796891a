//! Localization bundle.
//!
//! Flat key→string table with built-in English defaults for the loading
//! screen captions. A bundle file (INI, keys may contain dots) can overlay
//! or extend the defaults; a missing file leaves them untouched.

use bevy_ecs::prelude::Resource;
use configparser::ini::Ini;
use rustc_hash::FxHashMap;

/// String bundle keyed by dotted identifiers such as `load.map`.
#[derive(Resource, Default, Debug, Clone)]
pub struct Bundle {
    entries: FxHashMap<String, String>,
}

impl Bundle {
    /// Bundle containing only the built-in defaults.
    pub fn with_defaults() -> Self {
        let mut bundle = Bundle::default();
        for (key, value) in [
            ("load.map", "Loading Map..."),
            ("load.sound", "Loading Sounds..."),
            ("load.image", "Loading Images..."),
            ("load.content", "Loading Content..."),
        ] {
            bundle.entries.insert(key.into(), value.into());
        }
        bundle
    }

    /// Overlay entries from an INI bundle file.
    ///
    /// Keys are taken case-sensitively across all sections. On error the
    /// current entries are left untouched.
    pub fn overlay_from_file(&mut self, path: &str) -> Result<(), String> {
        let mut ini = Ini::new_cs();
        let sections = ini
            .load(path)
            .map_err(|e| format!("failed to load bundle '{}': {}", path, e))?;
        for (_section, entries) in sections {
            for (key, value) in entries {
                if let Some(value) = value {
                    self.entries.insert(key, value);
                }
            }
        }
        Ok(())
    }

    /// Look up `key`, falling back to `default` when absent.
    pub fn get_or<'a>(&'a self, key: &str, default: &'a str) -> &'a str {
        self.entries.get(key).map(String::as_str).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_loading_caption() {
        let bundle = Bundle::with_defaults();
        for key in ["load.map", "load.sound", "load.image", "load.content"] {
            assert_ne!(bundle.get_or(key, ""), "", "missing default for {key}");
        }
    }

    #[test]
    fn lookup_falls_back_on_unknown_keys() {
        let bundle = Bundle::with_defaults();
        assert_eq!(bundle.get_or("load.unknown", ""), "");
    }

    #[test]
    fn missing_file_keeps_existing_entries() {
        let mut bundle = Bundle::with_defaults();
        let before = bundle.len();
        assert!(bundle.overlay_from_file("./no-such-bundle.ini").is_err());
        assert_eq!(bundle.len(), before);
    }
}
