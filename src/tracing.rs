//! Tracing initialization.

use std::sync::Once;
use tracing_subscriber::{EnvFilter, fmt::format::FmtSpan, util::SubscriberInitExt};

static INIT: Once = Once::new();

/// Whether output should go through the test harness's captured writer.
fn running_under_test_harness() -> bool {
    cfg!(test) || std::env::var_os("NEXTEST").is_some()
}

/// Initialize tracing. Safe to call multiple times.
///
/// Logs always go to stderr: stdout carries the MCP protocol when serving.
/// Under the test harness the subscriber writes through the captured test
/// writer at DEBUG level instead.
pub fn init() {
    INIT.call_once(|| {
        let is_test = running_under_test_harness();
        let level = if is_test {
            tracing::Level::DEBUG
        } else {
            tracing::Level::INFO
        };
        let filter = EnvFilter::from_default_env().add_directive(level.into());

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_target(true)
            .with_span_events(FmtSpan::NONE)
            .compact();

        let installed = if is_test {
            builder.with_test_writer().finish().try_init()
        } else {
            builder.with_writer(std::io::stderr).finish().try_init()
        };

        if let Err(e) = installed {
            eprintln!("Failed to initialize tracing: {}", e);
        }
    });
}
