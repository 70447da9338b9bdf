//! Browser console logging

use tracing::Level;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::format::Pretty;
use tracing_subscriber::prelude::*;
use tracing_web::{performance_layer, MakeWebConsoleWriter};

/// Route `tracing` output and panics to the browser console
pub fn init() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) {
        Level::DEBUG
    } else {
        Level::INFO
    };

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(LevelFilter::from_level(level));
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    if tracing_subscriber::registry()
        .with(fmt_layer)
        .with(perf_layer)
        .try_init()
        .is_err()
    {
        tracing::warn!("Logging was already initialized");
    }
}
