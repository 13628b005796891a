//! Emberfall client entry point.
//!
//! Opens the window, assembles the ECS world, and hands every frame to the
//! lifecycle driver. The driver runs the bootstrap sequencer on the first
//! frame, drives the loading screen until the load queue drains, then
//! forwards frames to the registered application modules. Frame pacing is
//! applied every frame regardless of load state.

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::prelude::World;
use clap::Parser;
use emberfall::resources::audio::shutdown_audio;
use emberfall::resources::bootstate::BootState;
use emberfall::resources::gameconfig::GameConfig;
use emberfall::resources::windowsize::WindowSize;
use emberfall::systems::lifecycle::{lifecycle_frame, resize_frame, resume_frame};
use raylib::prelude::RaylibHandle;
use std::path::PathBuf;

/// Emberfall game client
#[derive(Parser)]
#[command(version, about = "Emberfall game client")]
struct Cli {
    /// Path to the configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();

    let mut config = match cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    let (window_width, window_height) = config.window_size();
    let (mut rl, thread) = raylib::init()
        .size(window_width as i32, window_height as i32)
        .resizable()
        .title("Emberfall")
        .build();
    // Disable ESC to exit; control module owns the key.
    rl.set_exit_key(None);

    let mut world = World::new();
    world.insert_resource(BootState::default());
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(config);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    let mut focused = true;
    while !world
        .non_send_resource::<RaylibHandle>()
        .window_should_close()
    {
        let (raw_delta, resized, size, now_focused) = {
            let rl = world.non_send_resource::<RaylibHandle>();
            (
                rl.get_frame_time(),
                rl.is_window_resized(),
                (rl.get_screen_width(), rl.get_screen_height()),
                rl.is_window_focused(),
            )
        };

        if resized {
            resize_frame(&mut world, size.0, size.1);
        }
        if now_focused && !focused {
            resume_frame(&mut world);
        }
        focused = now_focused;

        lifecycle_frame(&mut world, raw_delta);

        world.clear_trackers();
    }

    shutdown_audio(&mut world);
}
