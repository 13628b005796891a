//! UI system module.
//!
//! Carries the `Loadable` capability: its chrome texture is decoded through
//! the load queue before `init` runs, so registration alone is enough to
//! guarantee the UI never initializes against missing assets.

use crate::resources::loadqueue::LoadTask;
use crate::resources::registry::{AppModule, Loadable};
use crate::resources::texturestore::TextureStore;
use crate::systems::bootstrap::with_raylib;
use bevy_ecs::prelude::World;
use log::info;

const UI_TEXTURE_KEY: &str = "ui-chrome";
const UI_TEXTURE_PATH: &str = "./assets/ui/chrome.png";

pub struct Ui {
    ready: bool,
}

impl Ui {
    pub fn new() -> Self {
        Self { ready: false }
    }

    pub fn is_ready(&self) -> bool {
        self.ready
    }
}

impl Default for Ui {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModule for Ui {
    fn name(&self) -> &'static str {
        "ui"
    }

    fn init(&mut self, world: &mut World) {
        let textures = world.non_send_resource::<TextureStore>();
        self.ready = textures.get(UI_TEXTURE_KEY).is_some();
        info!(
            "ui: initialized ({})",
            if self.ready { "chrome loaded" } else { "chrome missing" }
        );
    }

    fn resize(&mut self, _world: &mut World, width: i32, height: i32) {
        info!("ui: relayout for {}x{}", width, height);
    }

    fn as_loadable(&self) -> Option<&dyn Loadable> {
        Some(self)
    }
}

impl Loadable for Ui {
    fn load_tasks(&self) -> Vec<LoadTask> {
        vec![LoadTask::new("chrome.png", |world| {
            with_raylib(world, |world, rl, thread| {
                let texture = rl
                    .load_texture(thread, UI_TEXTURE_PATH)
                    .map_err(|e| format!("ui chrome: {}", e))?;
                world
                    .non_send_resource_mut::<TextureStore>()
                    .insert(UI_TEXTURE_KEY, texture);
                Ok(())
            })
        })]
    }
}
