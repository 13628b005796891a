//! Input and control driver module.

use crate::events::audio::AudioCmd;
use crate::resources::registry::AppModule;
use bevy_ecs::prelude::{Messages, World};
use log::info;
use raylib::prelude::{KeyboardKey, RaylibHandle};

/// Polls hardware input once per running frame and keeps the pause state.
///
/// Headless worlds carry no raylib handle; polling is skipped there and
/// the module degrades to pure state tracking.
pub struct Control {
    paused: bool,
}

impl Control {
    pub fn new() -> Self {
        Self { paused: false }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}

impl Default for Control {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModule for Control {
    fn name(&self) -> &'static str {
        "control"
    }

    fn init(&mut self, _world: &mut World) {
        info!("control: input ready");
    }

    fn update(&mut self, world: &mut World) {
        let toggled = world
            .get_non_send_resource::<RaylibHandle>()
            .is_some_and(|rl| rl.is_key_pressed(KeyboardKey::KEY_ESCAPE));
        if toggled {
            self.paused = !self.paused;
            info!("control: {}", if self.paused { "paused" } else { "unpaused" });
            world
                .resource_mut::<Messages<AudioCmd>>()
                .write(AudioCmd::PlaySound { id: "click".into() });
        }
    }

    fn resume(&mut self, _world: &mut World) {
        // Coming back from the platform layer always resumes unpaused.
        self.paused = false;
    }
}
