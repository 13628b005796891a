//! Server-side networking module.
//!
//! The client can host games; the listener stays dormant until a host
//! request arrives, so this module only tracks readiness within the
//! lifecycle.

use crate::resources::registry::AppModule;
use bevy_ecs::prelude::World;
use log::info;

pub struct NetServer {
    hosting: bool,
}

impl NetServer {
    pub fn new() -> Self {
        Self { hosting: false }
    }

    pub fn is_hosting(&self) -> bool {
        self.hosting
    }
}

impl Default for NetServer {
    fn default() -> Self {
        Self::new()
    }
}

impl AppModule for NetServer {
    fn name(&self) -> &'static str {
        "netserver"
    }

    fn init(&mut self, _world: &mut World) {
        info!("netserver: ready, hosting disabled");
    }
}
