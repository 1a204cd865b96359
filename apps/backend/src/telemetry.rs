//! Tracing setup for the server binary.
//!
//! Output is one JSON object per line. Events raised while a request is in
//! flight carry the `request` span opened by `TraceSpan`, so service-layer
//! events such as `service created` can be joined to their access log line
//! by `trace_id`.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Directives used when `RUST_LOG` is unset or does not parse.
pub const DEFAULT_LOG_FILTER: &str = "info,servicebook=info,actix_web=info,actix_server=warn";

/// Parse `directives`, falling back to [`DEFAULT_LOG_FILTER`].
pub fn env_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

pub fn init_tracing() {
    let directives = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json()
        .flatten_event(true)
        .with_current_span(true)
        .with_span_list(false);

    tracing_subscriber::registry()
        .with(env_filter(directives.as_deref()))
        .with(fmt_layer)
        .init();
}
