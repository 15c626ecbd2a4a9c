//! Tagtrack is an interactive console client for a remote process-tracking
//! API. Tags, filters, sessions, reports and the global tracking switch all
//! live behind that API; this crate only drives the conversation with it.

pub mod api;
pub mod cli;
pub mod dates;
pub mod errors;
pub mod settings;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Diagnostics go to stderr so they never interleave with menu output.
pub fn init() {
    INIT_TRACING.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("tagtrack=info".parse().unwrap());

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    });
}
