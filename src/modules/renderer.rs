//! Game renderer module.
//!
//! Draws the running game each frame. Rendering proper is a collaborator
//! of the bootstrap core, so this stays a thin pass: clear, draw the atlas
//! page when it is loaded, and keep per-frame counters for diagnostics.

use crate::resources::atlas::SpriteAtlas;
use crate::resources::registry::AppModule;
use bevy_ecs::prelude::World;
use log::info;
use raylib::prelude::*;

pub struct GameRenderer {
    frames: u64,
}

impl GameRenderer {
    pub fn new() -> Self {
        Self { frames: 0 }
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Default for GameRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModule for GameRenderer {
    fn name(&self) -> &'static str {
        "renderer"
    }

    fn init(&mut self, world: &mut World) {
        let atlas = world.non_send_resource::<SpriteAtlas>();
        info!("renderer: {} atlas regions available", atlas.region_count());
    }

    fn update(&mut self, world: &mut World) {
        self.frames += 1;

        let Some(mut rl) = world.remove_non_send_resource::<RaylibHandle>() else {
            return;
        };
        let Some(thread) = world.remove_non_send_resource::<RaylibThread>() else {
            world.insert_non_send_resource(rl);
            return;
        };

        {
            let mut d = rl.begin_drawing(&thread);
            d.clear_background(Color::BLACK);
            let atlas = world.non_send_resource::<SpriteAtlas>();
            if let Some(page) = atlas.page() {
                d.draw_texture(page, 0, 0, Color::WHITE);
            }
        }

        world.insert_non_send_resource(thread);
        world.insert_non_send_resource(rl);
    }

    fn resize(&mut self, _world: &mut World, width: i32, height: i32) {
        info!("renderer: viewport {}x{}", width, height);
    }
}
