//! Logging bootstrap (tracing + env filter).
//!
//! The filter is read from `LOG_LEVEL` (e.g. `LOG_LEVEL=orbsim=debug`) and
//! falls back to `info`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init_tracing(pretty: bool) {
    let filter = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = if pretty { fmt::layer().pretty().boxed() } else { fmt::layer().boxed() };
    let registry = tracing_subscriber::registry().with(filter).with(fmt_layer);
    let _ = registry.try_init();
}
