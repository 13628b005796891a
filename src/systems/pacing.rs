//! Frame-pacing controller.
//!
//! Caps the wall-clock frame rate by sleeping off the residual time budget
//! at the end of every frame, loading or running alike. The sleep is
//! intentional backpressure on CPU/GPU usage, not a correctness mechanism.

use crate::resources::frametiming::FrameTiming;
use crate::resources::gameconfig::GameConfig;
use bevy_ecs::prelude::World;
use std::time::{Duration, Instant};

/// Highest fps cap honored; values above it disable capping for safety.
pub const MAX_FPS_CAP: u32 = 240;

/// Enforce the configured frame-rate cap, then record the frame boundary.
///
/// With `fps_cap` in `1..=240`, sleeps for whatever remains of the
/// per-frame nanosecond budget since the last recorded boundary. The
/// boundary timestamp is updated exactly once per call, after any sleep,
/// whether or not capping is active — so the next frame's elapsed
/// measurement never double-counts the wait.
pub fn pace_frame(world: &mut World) {
    let cap = world.resource::<GameConfig>().fps_cap;
    let mut timing = world.resource_mut::<FrameTiming>();

    if (1..=MAX_FPS_CAP).contains(&cap) {
        let budget = Duration::from_nanos(1_000_000_000 / u64::from(cap));
        if let Some(last) = timing.last_frame {
            let elapsed = last.elapsed();
            if elapsed < budget {
                std::thread::sleep(budget - elapsed);
            }
        }
    }

    timing.last_frame = Some(Instant::now());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_world(fps_cap: u32) -> World {
        let mut world = World::new();
        let mut config = GameConfig::new();
        config.fps_cap = fps_cap;
        world.insert_resource(config);
        world.insert_resource(FrameTiming::default());
        world
    }

    #[test]
    fn uncapped_frames_never_sleep() {
        let mut world = make_world(0);
        let start = Instant::now();
        for _ in 0..50 {
            pace_frame(&mut world);
        }
        // 50 uncapped frames finish far inside one 120fps budget.
        assert!(start.elapsed() < Duration::from_millis(8));
        assert!(world.resource::<FrameTiming>().last_frame.is_some());
    }

    #[test]
    fn out_of_range_caps_disable_capping() {
        let mut world = make_world(100_000);
        let start = Instant::now();
        for _ in 0..50 {
            pace_frame(&mut world);
        }
        assert!(start.elapsed() < Duration::from_millis(8));
    }

    #[test]
    fn capped_frames_are_spaced_by_the_budget() {
        let mut world = make_world(30);
        pace_frame(&mut world); // establish the reference point
        let before = world.resource::<FrameTiming>().last_frame.unwrap();
        pace_frame(&mut world);
        let after = world.resource::<FrameTiming>().last_frame.unwrap();
        // ~33.3ms budget; allow scheduler slop downwards only slightly.
        assert!(
            after - before >= Duration::from_millis(30),
            "frames spaced {:?}",
            after - before
        );
    }

    #[test]
    fn reference_point_updates_even_without_capping() {
        let mut world = make_world(0);
        pace_frame(&mut world);
        let first = world.resource::<FrameTiming>().last_frame.unwrap();
        pace_frame(&mut world);
        let second = world.resource::<FrameTiming>().last_frame.unwrap();
        assert!(second >= first);
    }
}
