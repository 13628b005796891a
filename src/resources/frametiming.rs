//! Frame pacing reference point.

use bevy_ecs::prelude::Resource;
use std::time::Instant;

/// Timestamp taken at the end of the previous frame.
///
/// Written exactly once per frame by
/// [`crate::systems::pacing::pace_frame`], after any pacing sleep, so the
/// next frame's elapsed measurement never double-counts the wait.
#[derive(Resource, Default, Clone, Copy)]
pub struct FrameTiming {
    pub last_frame: Option<Instant>,
}
