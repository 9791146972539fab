/*!
 * Run Tracing
 * Structured tracing for harness runs using the tracing crate
 *
 * All output goes to stderr so the console contract on stdout stays intact.
 */

use std::time::Duration;
use tracing::{debug, info, span, Level};
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: warn)
/// - HAZARDS_TRACE_JSON: Enable JSON output (default: false)
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let use_json = std::env::var("HAZARDS_TRACE_JSON")
        .map(|v| v == "1" || v == "true")
        .unwrap_or(false);

    let registry = tracing_subscriber::registry().with(env_filter);

    let installed = if use_json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true)
                    .with_current_span(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(false)
                    .with_thread_names(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        debug!(json = use_json, "tracing initialized");
    }
}

/// Span covering one harness run, from spawn to join
///
/// A deadlocked run never reaches `finish`, so the span stays open until the
/// process is killed.
pub struct RunSpan {
    span: tracing::Span,
    mode: &'static str,
}

impl RunSpan {
    pub fn new(mode: &'static str) -> Self {
        let span = span!(
            Level::INFO,
            "run",
            mode = mode,
            counter = tracing::field::Empty,
            elapsed_ms = tracing::field::Empty,
        );

        span.in_scope(|| debug!(mode, "run started"));

        Self {
            span,
            mode,
        }
    }

    /// Enter the span on the current thread
    pub fn enter(&self) -> tracing::span::Entered<'_> {
        self.span.enter()
    }

    /// Handle for propagating the span into task threads
    pub fn span(&self) -> &tracing::Span {
        &self.span
    }

    /// Record the outcome of a completed run
    pub fn finish(self, counter: u64, elapsed: Duration) {
        self.span.record("counter", counter);
        self.span.record("elapsed_ms", elapsed.as_millis() as u64);
        self.span.in_scope(|| {
            info!(
                mode = self.mode,
                counter,
                elapsed_ms = elapsed.as_millis() as u64,
                "run completed"
            )
        });
    }
}
