//! Window size resource.
//!
//! Tracks the current window dimensions in pixels. While assets are still
//! loading this doubles as the loading screen's projection: a resize
//! re-derives the full-viewport bar layout from these values before any
//! module is ready to handle the event itself.

use bevy_ecs::prelude::Resource;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
