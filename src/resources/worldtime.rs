//! Simulation time resource.
//!
//! `delta` is expressed in 60-fps frame units: a value of `1.0` means the
//! frame took exactly 1/60th of a second. The value is produced by
//! [`crate::systems::time::update_world_time`], which is the only writer.

use bevy_ecs::prelude::Resource;

/// Per-frame simulation time.
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Accumulated frame units since startup. Drives animation phases.
    pub elapsed: f32,
    /// Clamped delta for the current frame, in frame units.
    pub delta: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
        }
    }
}
