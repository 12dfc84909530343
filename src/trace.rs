//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::EnvFilter;

static INIT: Once = Once::new();

/// Initialize tracing. Safe to call multiple times.
///
/// `debug` raises the default level from INFO to DEBUG; an explicit `RUST_LOG`
/// directive still wins over either.
pub fn init(debug: bool) {
    INIT.call_once(|| {
        let filter = EnvFilter::from_default_env().add_directive(
            if debug {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            }
            .into(),
        );

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .compact()
            .with_writer(std::io::stderr);

        if let Err(e) = builder.try_init() {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
