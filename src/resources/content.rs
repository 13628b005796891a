//! Structured content database.
//!
//! Content definitions (blocks, units, items) are declared in a JSON file
//! and resolved against loaded assets. Parsing (`init`) and resource
//! resolution (`load`) are two sequential phases: `load` requires every
//! asset a definition references to already be available, which is why the
//! bootstrap sequencer defers both to the tail of the load queue.

use crate::resources::atlas::SpriteAtlas;
use bevy_ecs::prelude::Resource;
use log::{info, warn};
use serde::Deserialize;

/// A single content definition as declared in JSON.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ContentDef {
    pub name: String,
    pub kind: String,
    /// Atlas region backing this content's sprite, if it has one.
    #[serde(default)]
    pub region: Option<String>,
}

/// Parsed content definitions plus their load state.
#[derive(Resource, Default, Debug)]
pub struct ContentDb {
    defs: Vec<ContentDef>,
    initialized: bool,
    loaded: bool,
}

impl ContentDb {
    pub fn new() -> Self {
        Self::default()
    }

    /// Phase one: parse definitions from JSON text. Runs once.
    pub fn init(&mut self, json: &str) -> Result<(), String> {
        if self.initialized {
            return Err("content definitions already initialized".into());
        }
        self.defs =
            serde_json::from_str(json).map_err(|e| format!("bad content definitions: {}", e))?;
        self.initialized = true;
        info!("content: {} definitions", self.defs.len());
        Ok(())
    }

    /// Phase two: resolve definition resources against the atlas.
    ///
    /// Must run after [`ContentDb::init`]. A definition referencing a
    /// missing region is reported but does not abort the load; the sprite
    /// simply stays unresolved.
    pub fn load(&mut self, atlas: &SpriteAtlas) -> Result<(), String> {
        if !self.initialized {
            return Err("content loaded before definitions were initialized".into());
        }
        for def in &self.defs {
            if let Some(region) = &def.region {
                if !atlas.has(region) {
                    warn!("content '{}' references missing region '{}'", def.name, region);
                }
            }
        }
        self.loaded = true;
        Ok(())
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    pub fn is_loaded(&self) -> bool {
        self.loaded
    }

    pub fn defs(&self) -> &[ContentDef] {
        &self.defs
    }
}
