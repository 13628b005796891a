//! Event types exchanged across the client.
//!
//! Submodules:
//! - [`audio`] – commands and messages for the background audio thread
//! - [`clientload`] – one-shot notification that loading fully completed

pub mod audio;
pub mod clientload;
