//! Top-level application modules registered by the bootstrap sequencer.
//!
//! These are the lifecycle collaborators driven through
//! [`ModuleRegistry`](crate::resources::registry::ModuleRegistry); their
//! internals are deliberately thin seams, the bootstrap core cares only
//! about when their hooks run.
//!
//! Submodules:
//! - [`logic`] – simulation stepping
//! - [`control`] – hardware input polling and pause state
//! - [`renderer`] – running-game draw pass
//! - [`ui`] – UI system; loadable, its assets go through the load queue
//! - [`netserver`] – hosting readiness
//! - [`netclient`] – connection gating on the load-complete event

pub mod control;
pub mod logic;
pub mod netclient;
pub mod netserver;
pub mod renderer;
pub mod ui;
