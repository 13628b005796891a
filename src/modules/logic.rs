//! Game-logic driver module.
//!
//! Steps the simulation once per running frame using the clamped world
//! delta. The actual game rules live behind this seam; the module exists
//! so the lifecycle driver has a real simulation consumer to schedule.

use crate::events::audio::AudioCmd;
use crate::resources::registry::AppModule;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::{Messages, World};
use log::{debug, info};

pub struct GameLogic {
    /// Simulation ticks advanced since init.
    ticks: u64,
    /// Accumulated simulation time in frame units.
    accumulated: f32,
}

impl GameLogic {
    pub fn new() -> Self {
        Self {
            ticks: 0,
            accumulated: 0.0,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }
}

impl Default for GameLogic {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModule for GameLogic {
    fn name(&self) -> &'static str {
        "logic"
    }

    fn init(&mut self, world: &mut World) {
        info!("logic: simulation ready");
        if let Some(mut cmds) = world.get_resource_mut::<Messages<AudioCmd>>() {
            cmds.write(AudioCmd::PlayMusic {
                id: "menu".into(),
                looped: true,
            });
        }
    }

    fn update(&mut self, world: &mut World) {
        let delta = world.resource::<WorldTime>().delta;
        self.accumulated += delta;
        self.ticks += 1;
        if self.ticks % 3600 == 0 {
            debug!("logic: {} ticks, {:.0} frame units", self.ticks, self.accumulated);
        }
    }
}
