//! Per-frame lifecycle driver.
//!
//! One [`lifecycle_frame`] call per frame moves the client through the boot
//! state machine: bootstrap once, drain the load queue while the loading
//! screen draws, then a one-shot post-init pass over all modules followed
//! by steady-state module updates. Frame pacing runs unconditionally at the
//! end of every call, loading and running alike.

use crate::events::clientload::ClientLoadEvent;
use crate::resources::bootstate::{BootClock, BootState};
use crate::resources::loadqueue::LoadQueue;
use crate::resources::registry::ModuleRegistry;
use crate::resources::windowsize::WindowSize;
use crate::systems::audio::pump_audio;
use crate::systems::bootstrap;
use crate::systems::loadingscreen::draw_loading;
use crate::systems::pacing::pace_frame;
use crate::systems::time::update_world_time;
use bevy_ecs::prelude::World;
use log::info;

/// Fixed frame rate targeted while the loading screen is up; the queue's
/// per-call work budget is derived from it.
const LOADING_FPS: u64 = 20;

/// Take the module registry out of the world for the duration of `f`, so
/// module hooks get world access without aliasing the registry itself.
fn with_registry(world: &mut World, f: impl FnOnce(&mut ModuleRegistry, &mut World)) {
    let mut registry = world
        .remove_non_send_resource::<ModuleRegistry>()
        .expect("module registry missing from world");
    f(&mut registry, world);
    world.insert_non_send_resource(registry);
}

/// Per-frame entry point.
///
/// `raw_delta_seconds` is the unclamped frame delta reported by the
/// graphics layer; it is sanitized by the deterministic time source before
/// anything consumes it.
pub fn lifecycle_frame(world: &mut World, raw_delta_seconds: f32) {
    let state = *world.resource::<BootState>();
    match state {
        BootState::Uninitialized => {
            bootstrap::setup(world);
            *world.resource_mut::<BootState>() = BootState::Loading;
        }
        BootState::Loading => {
            update_world_time(world, raw_delta_seconds);

            let finished = {
                let mut queue = world
                    .remove_non_send_resource::<LoadQueue>()
                    .expect("load queue missing from world");
                let finished = queue.advance(world, 1000 / LOADING_FPS);
                world.insert_non_send_resource(queue);
                finished
            };

            if !finished {
                draw_loading(world);
            } else {
                let begin = world.resource::<BootClock>().begin;
                info!("Time to load: {:?}", begin.elapsed());

                *world.resource_mut::<BootState>() = BootState::PostInit;
                with_registry(world, |registry, world| registry.post_init(world));
                *world.resource_mut::<BootState>() = BootState::Running;

                // Observers spawned during post-init must be live before
                // the one-shot readiness event fires.
                world.flush();
                world.trigger(ClientLoadEvent {});

                with_registry(world, |registry, world| registry.update_all(world));
                pump_audio(world);
            }
        }
        BootState::PostInit => {
            // Transient within the finishing frame; nothing drives frames
            // from this state.
        }
        BootState::Running => {
            update_world_time(world, raw_delta_seconds);
            with_registry(world, |registry, world| registry.update_all(world));
            pump_audio(world);
        }
    }

    pace_frame(world);
}

/// Window resize entry point.
///
/// While assets are loading only the loading screen's projection is
/// re-derived from the new dimensions; forwarding to modules starts once
/// the client is running.
pub fn resize_frame(world: &mut World, width: i32, height: i32) {
    if let Some(mut size) = world.get_resource_mut::<WindowSize>() {
        size.w = width;
        size.h = height;
    }
    if world.resource::<BootState>().is_running() {
        with_registry(world, |registry, world| {
            registry.resize_all(world, width, height)
        });
    }
}

/// Application resume entry point.
///
/// Suppressed entirely until the client is running, so partially-loaded
/// modules never observe a resume.
pub fn resume_frame(world: &mut World) {
    if world.resource::<BootState>().is_running() {
        with_registry(world, |registry, world| registry.resume_all(world));
    }
}
