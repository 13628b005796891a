//! Logger initialization.

use std::sync::Once;

static INIT: Once = Once::new();

/// Initialize the global logger once, with colorized output disabled so
/// boot diagnostics read the same in terminals, log files, and CI capture.
///
/// Respects `RUST_LOG`; the default filter is `info`. Idempotent, so tests
/// and the bootstrap sequencer can both call it safely.
pub fn init_plain() {
    INIT.call_once(|| {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
            .write_style(env_logger::WriteStyle::Never)
            .init();
    });
}
