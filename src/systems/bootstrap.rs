//! Bootstrap sequencer.
//!
//! [`setup`] runs exactly once, before any frame update, and takes the
//! client from "nothing loaded" to "loading screen ready": core rendering
//! primitives, the clamped time source, the baseline UI assets, and a load
//! queue filled with every deferred asset the client needs. Synchronous
//! failures in the early steps are fatal; anything enqueued is handled by
//! the queue's own error channel and never crashes the sequencer.

use crate::events::audio::AudioCmd;
use crate::logging;
use crate::modules::control::Control;
use crate::modules::logic::GameLogic;
use crate::modules::netclient::NetClient;
use crate::modules::netserver::NetServer;
use crate::modules::renderer::GameRenderer;
use crate::modules::ui::Ui;
use crate::resources::atlas::{AtlasIndex, SpriteAtlas};
use crate::resources::audio::{AudioBridge, setup_audio};
use crate::resources::bootstate::BootClock;
use crate::resources::bundle::Bundle;
use crate::resources::content::ContentDb;
use crate::resources::cursors::SystemCursors;
use crate::resources::fontstore::FontStore;
use crate::resources::frametiming::FrameTiming;
use crate::resources::gameconfig::GameConfig;
use crate::resources::loadingvisual::LoadingVisual;
use crate::resources::loadqueue::LoadQueue;
use crate::resources::registry::ModuleRegistry;
use crate::resources::texturestore::TextureStore;
use crate::resources::worldtime::WorldTime;
use bevy_ecs::prelude::World;
use log::info;
use raylib::prelude::{RaylibHandle, RaylibThread};
use std::time::Instant;

/// Asset paths relative to the configured assets directory.
const DEFAULT_FONT_PATH: &str = "fonts/default.ttf";
const ATLAS_IMAGE_PATH: &str = "sprites/sprites.png";
const ATLAS_INDEX_PATH: &str = "sprites/sprites.json";
const CONTENT_DEFS_PATH: &str = "content/content.json";

/// Music tracks and sound effects enqueued at boot: (id, relative path).
const MUSIC_TRACKS: &[(&str, &str)] = &[
    ("menu", "music/menu.ogg"),
    ("game1", "music/game1.ogg"),
    ("game2", "music/game2.ogg"),
];
const SOUND_FX: &[(&str, &str)] = &[
    ("click", "sounds/click.ogg"),
    ("explosion", "sounds/explosion.ogg"),
    ("place", "sounds/place.ogg"),
];

/// Borrow the raylib handle and thread out of the world for `f`.
///
/// Load work that decodes into GPU resources needs both at once, which the
/// world cannot hand out while it is also being mutated. Panics when the
/// handles are missing: raylib-backed work only runs in windowed sessions.
pub fn with_raylib<R>(
    world: &mut World,
    f: impl FnOnce(&mut World, &mut RaylibHandle, &RaylibThread) -> R,
) -> R {
    let mut rl = world
        .remove_non_send_resource::<RaylibHandle>()
        .expect("raylib handle missing from world");
    let thread = world
        .remove_non_send_resource::<RaylibThread>()
        .expect("raylib thread missing from world");
    let out = f(world, &mut rl, &thread);
    world.insert_non_send_resource(thread);
    world.insert_non_send_resource(rl);
    out
}

/// One-shot bootstrap sequencer. See the module docs; step numbers below
/// are load-bearing, later steps depend on earlier ones.
pub fn setup(world: &mut World) {
    // 1. Environment-neutral log output before anything can log.
    logging::init_plain();

    // 2. Boot latency starts counting here.
    world.insert_resource(BootClock::start());

    // 3. The clamped time source; every later timing reads go through it.
    world.insert_resource(WorldTime::default());
    world.insert_resource(FrameTiming::default());

    // 4. Core rendering primitives and subsystems. Modules registered
    //    below may hold references into these from the moment they are
    //    constructed, so all of them exist before step 7.
    world.insert_non_send_resource(SpriteAtlas::blank());
    world.insert_non_send_resource(TextureStore::new());
    world.insert_non_send_resource(FontStore::new());
    world.insert_resource(Bundle::with_defaults());
    world.insert_resource(LoadingVisual::default());
    setup_audio(world);
    let mut queue = LoadQueue::new();

    // 5. Baseline UI resources, synchronous and fatal on failure: without
    //    them the loading screen itself cannot render.
    let ui_mark = Instant::now();
    with_raylib(world, |world, rl, thread| {
        let font_path = world.resource::<GameConfig>().asset_path(DEFAULT_FONT_PATH);
        let font = rl
            .load_font(thread, &font_path.display().to_string())
            .expect("failed to load default font");
        world
            .non_send_resource_mut::<FontStore>()
            .add(FontStore::DEFAULT, font);

        let cursors = SystemCursors::default();
        rl.set_mouse_cursor(cursors.normal);
        world.insert_resource(cursors);
    });
    info!("UI init: {:?}", ui_mark.elapsed());

    // 6. Deferred loads: localized strings, the real sprite atlas, audio.
    queue.load_and_run("bundle.ini", |world| {
        let path = world.resource::<GameConfig>().bundle_path.clone();
        let mut bundle = world.resource_mut::<Bundle>();
        bundle.overlay_from_file(&path.display().to_string())
    });

    queue.load_and_run("sprites.png", |world| {
        let config = world.resource::<GameConfig>().clone();
        let index_json = std::fs::read_to_string(config.asset_path(ATLAS_INDEX_PATH))
            .map_err(|e| format!("atlas index: {}", e))?;
        let index = AtlasIndex::parse(&index_json)?;
        with_raylib(world, |world, rl, thread| {
            let page_path = config.asset_path(ATLAS_IMAGE_PATH);
            let page = rl
                .load_texture(thread, &page_path.display().to_string())
                .map_err(|e| format!("atlas page: {}", e))?;
            // Whole-resource swap: the next frame sees either the blank
            // placeholder or the finished atlas, never a partial one.
            world.insert_non_send_resource(SpriteAtlas::from_parts(page, index));
            Ok(())
        })
    });

    queue.load_and_run("music.ogg", |world| {
        send_audio_loads(world, MUSIC_TRACKS, true)
    });
    queue.load_and_run("sounds.ogg", |world| {
        send_audio_loads(world, SOUND_FX, false)
    });

    // 7. Application modules, in init order. Loadable modules get their
    //    asset tasks enqueued as part of registration.
    let mut registry = ModuleRegistry::new();
    registry.register(&mut queue, Box::new(GameLogic::new()));
    registry.register(&mut queue, Box::new(Control::new()));
    registry.register(&mut queue, Box::new(GameRenderer::new()));
    registry.register(&mut queue, Box::new(Ui::new()));
    registry.register(&mut queue, Box::new(NetServer::new()));
    registry.register(&mut queue, Box::new(NetClient::new()));

    // 8. Structured content last: definitions parse, then resources
    //    resolve, strictly after every asset they may reference.
    queue.load_and_run("content.json", |world| {
        let config = world.resource::<GameConfig>().clone();
        let json = std::fs::read_to_string(config.asset_path(CONTENT_DEFS_PATH))
            .map_err(|e| format!("content definitions: {}", e))?;
        let mut content = ContentDb::new();
        content.init(&json)?;
        content.load(world.non_send_resource::<SpriteAtlas>())?;
        world.insert_resource(content);
        Ok(())
    });

    world.insert_non_send_resource(queue);
    world.insert_non_send_resource(registry);
}

/// Push load commands for a set of audio assets to the audio thread.
///
/// Decode happens on the audio thread; from the queue's point of view the
/// set is "loaded" once every command is handed off.
fn send_audio_loads(
    world: &mut World,
    entries: &[(&str, &str)],
    music: bool,
) -> Result<(), String> {
    let config = world.resource::<GameConfig>().clone();
    let bridge = world.resource::<AudioBridge>();
    for (id, path) in entries {
        let path = config.asset_path(path).display().to_string();
        let cmd = if music {
            AudioCmd::LoadMusic {
                id: (*id).to_string(),
                path,
            }
        } else {
            AudioCmd::LoadSound {
                id: (*id).to_string(),
                path,
            }
        };
        bridge.tx_cmd.send(cmd).map_err(|e| e.to_string())?;
    }
    Ok(())
}
