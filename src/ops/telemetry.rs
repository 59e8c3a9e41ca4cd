// * Telemetry - structured logging setup
// * JSON lines for production runs, pretty output for local work

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// * Filter used when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "furniture_ner=debug,info";

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Initializes tracing with JSON formatting
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().json().with_target(false))
        .init();
}

/// Initializes tracing with pretty formatting (for development)
pub fn init_tracing_pretty() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().pretty())
        .init();
}
