use std::io;
use tracing_subscriber::{fmt, EnvFilter};

const COMPACT_FILTER: &str = "info,tower_http=info,axum=info,sqlx=warn";
const JSON_FILTER: &str = "info,service=debug,sqlx=warn";

/// `RUST_LOG` when set and parseable, otherwise `fallback`.
fn env_filter(fallback: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Compact, human-readable output on stdout.
/// Default filter keeps HTTP tracing at `info` and silences per-query sqlx logs.
pub fn init_logging_default() {
    let _ = fmt()
        .with_env_filter(env_filter(COMPACT_FILTER))
        .with_target(false)
        .compact()
        .with_writer(io::stdout)
        .try_init();
}

/// One JSON object per event, for log shippers.
/// Service-layer spans (`#[instrument]`) are visible at `debug`.
pub fn init_logging_json() {
    let _ = fmt()
        .with_env_filter(env_filter(JSON_FILTER))
        .with_target(false)
        .json()
        .with_writer(io::stdout)
        .try_init();
}

/// `LOG_FORMAT=json` selects JSON; anything else is compact.
/// Safe to call more than once: later calls are no-ops.
pub fn init_logging_from_env() {
    match std::env::var("LOG_FORMAT").as_deref() {
        Ok("json") => init_logging_json(),
        _ => init_logging_default(),
    }
}
