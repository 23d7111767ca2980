use std::sync::Once;

use time::format_description::well_known::Iso8601;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{
    fmt::{
        format::{FmtSpan, Pretty},
        time::UtcTime,
    },
    layer::SubscriberExt,
    util::SubscriberInitExt,
    Layer,
};
use tracing_web::{performance_layer, MakeWebConsoleWriter};

use crate::config::LOG_LEVEL;

/// Console output capped at `max_level`. Handler spans are reported when they
/// close so each event's time in the worker shows up next to its log lines
pub fn configure_tracing(max_level: LevelFilter) {
    let console_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false) // Only partially supported across browsers
        .with_timer(UtcTime::new(Iso8601::DEFAULT))
        .with_span_events(FmtSpan::CLOSE)
        .with_writer(MakeWebConsoleWriter::new())
        .with_filter(max_level);

    // Shows up as marks/measures in the devtools performance panel
    let perf_layer = performance_layer().with_details_from_fields(Pretty::default());

    tracing_subscriber::registry()
        .with(console_layer)
        .with(perf_layer)
        .init();
}

/// Every handler calls this, the worker may be started by any of its events
pub fn configure_tracing_once() {
    static ONCE: Once = Once::new();
    ONCE.call_once(|| configure_tracing(LOG_LEVEL));
}
