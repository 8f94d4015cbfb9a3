//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the Carve tracing/logging system.
///
/// Reads the `CARVE_LOG` environment variable for per-crate log levels.
/// Format: `CARVE_LOG=carve_analysis=debug,carve=info`
///
/// Falls back to `carve=info` if `CARVE_LOG` is not set or is invalid.
/// Output goes to stderr; stdout is reserved for the assessment JSON.
///
/// Idempotent: calling it multiple times is safe.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CARVE_LOG")
            .unwrap_or_else(|_| EnvFilter::new("carve=info"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .init();
    });
}
