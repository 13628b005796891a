//! Client-side networking module.
//!
//! Registers an observer for the one-shot
//! [`ClientLoadEvent`](crate::events::clientload::ClientLoadEvent) during
//! init: connection attempts are only allowed once the whole client has
//! finished loading.

use crate::events::clientload::ClientLoadEvent;
use crate::resources::registry::AppModule;
use bevy_ecs::observer::{Observer, On};
use bevy_ecs::prelude::{Resource, World};
use log::info;

/// Presence marks the client as fully loaded and allowed to connect.
#[derive(Resource, Default, Clone, Copy)]
pub struct NetReady;

fn on_client_load(_trigger: On<ClientLoadEvent>, mut commands: bevy_ecs::prelude::Commands) {
    info!("netclient: client fully loaded, connections enabled");
    commands.insert_resource(NetReady);
}

pub struct NetClient {
    connected: bool,
}

impl NetClient {
    pub fn new() -> Self {
        Self { connected: false }
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl Default for NetClient {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModule for NetClient {
    fn name(&self) -> &'static str {
        "netclient"
    }

    fn init(&mut self, world: &mut World) {
        world.spawn(Observer::new(on_client_load));
        info!("netclient: ready");
    }
}
