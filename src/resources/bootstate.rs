//! Boot state machine resources.
//!
//! The lifecycle driver in [`crate::systems::lifecycle`] moves the client
//! through [`BootState`] exactly once per process run. There is no path
//! back to `Loading` once `Running` is reached; the one-shot post-init pass
//! and the load-complete event hang off these transitions.

use bevy_ecs::prelude::Resource;
use std::time::Instant;

/// Discrete phases of client startup.
///
/// Transitions: `Uninitialized → Loading` (bootstrap sequencer done),
/// `Loading → PostInit` (load queue drained, exactly once),
/// `PostInit → Running` (one-shot init pass over all modules done).
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BootState {
    #[default]
    Uninitialized,
    Loading,
    PostInit,
    Running,
}

impl BootState {
    pub fn is_running(&self) -> bool {
        matches!(self, BootState::Running)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, BootState::Loading)
    }
}

/// Wall-clock marker recorded at the start of the bootstrap sequence.
///
/// Used to log total boot latency on the frame loading completes.
#[derive(Resource, Clone, Copy)]
pub struct BootClock {
    pub begin: Instant,
}

impl BootClock {
    pub fn start() -> Self {
        BootClock {
            begin: Instant::now(),
        }
    }
}
