//! Loading screen animation state.

use bevy_ecs::prelude::Resource;

/// Smoothed progress-bar state, owned by the loading screen renderer.
///
/// `smooth_progress` trails the load queue's raw fraction so the bar
/// animates instead of jumping; `smooth_time` accumulates the phase that
/// pulses the accent color. Both only ever grow, so no reset is needed.
#[derive(Resource, Default, Clone, Copy)]
pub struct LoadingVisual {
    pub smooth_progress: f32,
    pub smooth_time: f32,
}
