//! Client load completion event.

use bevy_ecs::prelude::Event;

/// Fired exactly once, after the one-shot post-init pass completes and
/// before the first running frame's module updates.
///
/// External observers (networking, UI) use this to react to full client
/// readiness. The single-fire guarantee is tied to the
/// `Loading → PostInit → Running` transition of
/// [`BootState`](crate::resources::bootstate::BootState), not to an ad hoc
/// flag.
#[derive(Event, Debug, Clone, Copy)]
pub struct ClientLoadEvent {}
