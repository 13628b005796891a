//! Texture store resource.
//!
//! Non-send store of standalone textures keyed by string IDs, for assets
//! that live outside the sprite atlas (UI chrome, title art). Atlas-packed
//! sprites are looked up through
//! [`SpriteAtlas`](crate::resources::atlas::SpriteAtlas) instead.

use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Map of texture keys to loaded textures.
///
/// Non-send: raylib textures must stay on the main thread.
#[derive(Default)]
pub struct TextureStore {
    textures: FxHashMap<String, Texture2D>,
}

impl TextureStore {
    /// Create an empty texture store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a texture under the given key, replacing any previous one.
    pub fn insert(&mut self, id: impl Into<String>, texture: Texture2D) {
        self.textures.insert(id.into(), texture);
    }

    /// Look up a texture by key.
    pub fn get(&self, id: impl AsRef<str>) -> Option<&Texture2D> {
        self.textures.get(id.as_ref())
    }

    /// Number of stored textures.
    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
