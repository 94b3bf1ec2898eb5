use anyhow::Result;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use uuid::Uuid;

/// Initialize structured JSON logging on stderr.
///
/// Stdout carries the operator transcript, so logs stay on stderr and default
/// to `warn` unless `RUST_LOG` asks for more.
pub fn init_telemetry() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .with_current_span(true)
                .with_span_list(true)
                .with_writer(std::io::stderr),
        )
        .with(filter)
        .try_init()?;

    tracing::debug!("Masjid setup telemetry initialized");
    Ok(())
}

/// Generate a correlation ID for linking the log lines of one run
pub fn generate_correlation_id() -> String {
    Uuid::new_v4().to_string()
}

/// Span wrapping a whole bootstrap run
pub fn create_setup_span(correlation_id: &str, dry_run: bool) -> tracing::Span {
    tracing::info_span!(
        "setup",
        correlation.id = correlation_id,
        dry_run = dry_run,
    )
}
