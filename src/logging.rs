//! Purpose: Opt-in diagnostics subscriber for hosts embedding the library.
//! Exports: `init_tracing`.
//! Role: Backs `sls_logging_init`; the library itself only emits `tracing` events.
//! Invariants: Installing is idempotent; an existing global subscriber is left untouched.
//! Invariants: Filter comes from `RUST_LOG`, falling back to `warn`.
use tracing_subscriber::EnvFilter;

/// Installs a fmt subscriber. Returns `true` only for the call that installed it.
pub fn init_tracing() -> bool {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .try_init()
        .is_ok()
}
