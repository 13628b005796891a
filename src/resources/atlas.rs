//! Sprite atlas resource.
//!
//! Named regions over a single page texture. The bootstrap sequencer
//! installs a blank placeholder so modules can be registered before any
//! pixel data exists; the real atlas built by the load queue replaces the
//! whole resource in one step, so a frame sees either the placeholder or
//! the fully loaded atlas, never a half-loaded mix.
//!
//! The region index is a JSON sidecar next to the page image:
//!
//! ```json
//! { "regions": { "block-copper": { "x": 0, "y": 0, "width": 32, "height": 32 } } }
//! ```

use raylib::prelude::{Rectangle, Texture2D};
use rustc_hash::FxHashMap;
use serde::Deserialize;

/// One named region of the atlas page, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct AtlasRegion {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl AtlasRegion {
    /// Source rectangle for raylib draw calls.
    pub fn rect(&self) -> Rectangle {
        Rectangle {
            x: self.x,
            y: self.y,
            width: self.width,
            height: self.height,
        }
    }
}

/// Region index parsed from the atlas JSON sidecar.
#[derive(Debug, Clone, Deserialize)]
pub struct AtlasIndex {
    pub regions: FxHashMap<String, AtlasRegion>,
}

impl AtlasIndex {
    pub fn parse(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("bad atlas index: {}", e))
    }
}

/// Sprite atlas: an optional page texture plus its region index.
///
/// Non-send: the page texture is a raylib handle.
#[derive(Default)]
pub struct SpriteAtlas {
    page: Option<Texture2D>,
    regions: FxHashMap<String, AtlasRegion>,
}

impl SpriteAtlas {
    /// Placeholder atlas with no page and no regions.
    pub fn blank() -> Self {
        Self::default()
    }

    /// Atlas backed by a loaded page texture and its parsed index.
    pub fn from_parts(page: Texture2D, index: AtlasIndex) -> Self {
        Self {
            page: Some(page),
            regions: index.regions,
        }
    }

    /// Whether a region with this name exists.
    pub fn has(&self, name: impl AsRef<str>) -> bool {
        self.regions.contains_key(name.as_ref())
    }

    /// Look up a region by name.
    pub fn find(&self, name: impl AsRef<str>) -> Option<&AtlasRegion> {
        self.regions.get(name.as_ref())
    }

    /// The page texture, absent on the blank placeholder.
    pub fn page(&self) -> Option<&Texture2D> {
        self.page.as_ref()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_atlas_has_no_page_and_no_regions() {
        let atlas = SpriteAtlas::blank();
        assert!(atlas.page().is_none());
        assert_eq!(atlas.region_count(), 0);
        assert!(!atlas.has("anything"));
    }

    #[test]
    fn index_parses_regions() {
        let index = AtlasIndex::parse(
            r#"{ "regions": {
                "block-copper": { "x": 0, "y": 0, "width": 32, "height": 32 },
                "unit-dagger": { "x": 32, "y": 0, "width": 16, "height": 16 }
            }}"#,
        )
        .unwrap();
        assert_eq!(index.regions.len(), 2);
        let region = index.regions.get("unit-dagger").unwrap();
        assert_eq!(region.rect().width, 16.0);
    }

    #[test]
    fn index_rejects_malformed_json() {
        assert!(AtlasIndex::parse("{ nope").is_err());
    }
}
