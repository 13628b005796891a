//! Deterministic time source.
//!
//! Normalizes the raw graphics delta to a 60-fps reference timebase and
//! guards every downstream consumer against a malformed timer reading
//! propagating into animation or game-logic stepping.

use bevy_ecs::prelude::*;

use crate::resources::worldtime::WorldTime;

/// Lower clamp bound for the per-frame delta, in frame units.
pub const MIN_DELTA: f32 = 0.0001;
/// Upper clamp bound for the per-frame delta, in frame units.
pub const MAX_DELTA: f32 = 6.0;

/// Normalize a raw frame delta in seconds to 60-fps frame units.
///
/// NaN and infinite readings are replaced by `1.0` (one nominal frame);
/// everything else is clamped to `[MIN_DELTA, MAX_DELTA]`.
pub fn clamp_delta(raw_seconds: f32) -> f32 {
    let result = raw_seconds * 60.0;
    if result.is_nan() || result.is_infinite() {
        1.0
    } else {
        result.clamp(MIN_DELTA, MAX_DELTA)
    }
}

/// Write the clamped delta for this frame into [`WorldTime`].
///
/// The sole writer of `WorldTime`; every timing-sensitive computation in
/// the process reads the value stored here.
pub fn update_world_time(world: &mut World, raw_seconds: f32) {
    let mut wt = world.resource_mut::<WorldTime>();
    wt.delta = clamp_delta(raw_seconds);
    wt.elapsed += wt.delta;
}
