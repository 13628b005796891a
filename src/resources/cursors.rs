//! System cursor set.

use bevy_ecs::prelude::Resource;
use raylib::consts::MouseCursor;

/// Baseline cursor shapes resolved during bootstrap.
///
/// raylib ships these with the platform layer, so "loading" the set is
/// picking the shapes the UI relies on. The default shape is applied to the
/// window as soon as this resource is built.
#[derive(Resource, Clone, Copy)]
pub struct SystemCursors {
    pub normal: MouseCursor,
    pub hand: MouseCursor,
    pub ibeam: MouseCursor,
    pub crosshair: MouseCursor,
}

impl Default for SystemCursors {
    fn default() -> Self {
        Self {
            normal: MouseCursor::MOUSE_CURSOR_DEFAULT,
            hand: MouseCursor::MOUSE_CURSOR_POINTING_HAND,
            ibeam: MouseCursor::MOUSE_CURSOR_IBEAM,
            crosshair: MouseCursor::MOUSE_CURSOR_CROSSHAIR,
        }
    }
}
