//! Long-lived state injected into the ECS world.
//!
//! Overview
//! - `atlas` – sprite atlas with a blank placeholder swapped on load
//! - `audio` – bridge and channels for the background audio thread
//! - `bootstate` – boot state machine and the boot-latency clock
//! - `bundle` – localization strings for the loading screen captions
//! - `content` – structured content definitions and their load phases
//! - `cursors` – baseline system cursor set
//! - `fontstore` – loaded fonts keyed by string IDs
//! - `frametiming` – frame-pacing reference timestamp
//! - `gameconfig` – INI-backed client configuration (fps cap, paths)
//! - `loadingvisual` – smoothed loading-bar animation state
//! - `loadqueue` – bounded-work asynchronous asset load queue
//! - `registry` – ordered application module registry
//! - `texturestore` – standalone textures keyed by string IDs
//! - `windowsize` – current window dimensions
//! - `worldtime` – clamped per-frame delta and elapsed time

pub mod atlas;
pub mod audio;
pub mod bootstate;
pub mod bundle;
pub mod content;
pub mod cursors;
pub mod fontstore;
pub mod frametiming;
pub mod gameconfig;
pub mod loadingvisual;
pub mod loadqueue;
pub mod registry;
pub mod texturestore;
pub mod windowsize;
pub mod worldtime;
