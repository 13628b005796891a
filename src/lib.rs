//! Emberfall client library.
//!
//! Startup orchestration for the game client: the bootstrap sequencer,
//! the asynchronous load queue and loading screen, the deterministic time
//! source, frame pacing, and the module lifecycle that drives the running
//! game. Exposed as a library so integration tests can drive headless
//! worlds through the same code paths as the windowed client.

pub mod events;
pub mod logging;
pub mod modules;
pub mod resources;
pub mod systems;
