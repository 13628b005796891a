//! Per-frame orchestration systems.
//!
//! Submodules overview
//! - [`audio`] – background audio thread and its channel bridge systems
//! - [`bootstrap`] – one-shot startup sequencer
//! - [`lifecycle`] – per-frame boot state machine and module forwarding
//! - [`loadingscreen`] – progress bar, percentage, and caption drawing
//! - [`pacing`] – wall-clock frame-rate capping
//! - [`time`] – clamped deterministic time source

pub mod audio;
pub mod bootstrap;
pub mod lifecycle;
pub mod loadingscreen;
pub mod pacing;
pub mod time;
