//! JSON trace logging for the engine crates.
//!
//! Spans and events are emitted under the `drill_core` (romanize, type_char)
//! and `drill_session` (handle_key) targets. `RUST_LOG` overrides the default
//! filter.

#[cfg(feature = "trace")]
use std::path::Path;
#[cfg(feature = "trace")]
use std::sync::Once;

/// Default `EnvFilter` directives: debug level for both engine crates.
pub const DEFAULT_FILTER: &str = "drill_core=debug,drill_session=debug";

#[cfg(feature = "trace")]
static INIT: Once = Once::new();

/// Write JSON trace events to `<log_dir>/driller-trace.jsonl`. Only the first
/// call has any effect.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) {
    INIT.call_once(|| {
        let file_appender = tracing_appender::rolling::never(log_dir, "driller-trace.jsonl");
        let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);
        std::mem::forget(guard); // keep flushing until the process exits

        tracing_subscriber::fmt()
            .json()
            .with_writer(non_blocking)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER)),
            )
            .init();
    });
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(_log_dir: &std::path::Path) {}
