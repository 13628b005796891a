//! Font store resource.
//!
//! Non-send store of loaded fonts keyed by string IDs. The baseline UI
//! font loaded by the bootstrap sequencer lives under
//! [`FontStore::DEFAULT`]; the loading screen checks for it before drawing
//! any text, since it may not exist on the very first frames.
//!
//! Note: non-send because raylib fonts must stay on the main thread.

use raylib::prelude::Font;
use rustc_hash::FxHashMap;

/// Map of font keys to loaded fonts.
///
/// Insert with `insert_non_send_resource`, read via `NonSend<FontStore>`.
#[derive(Default)]
pub struct FontStore {
    fonts: FxHashMap<String, Font>,
}

impl FontStore {
    /// Key of the baseline UI font loaded during bootstrap.
    pub const DEFAULT: &'static str = "default";

    /// Create an empty font store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a font under the given key, replacing any previous one.
    pub fn add(&mut self, id: impl Into<String>, font: Font) {
        self.fonts.insert(id.into(), font);
    }

    /// Look up a font by key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Font> {
        self.fonts.get(id.as_ref())
    }

    /// Whether a font is stored under the given key.
    pub fn has(&self, id: impl AsRef<str>) -> bool {
        self.fonts.contains_key(id.as_ref())
    }

    /// Number of stored fonts.
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }
}
