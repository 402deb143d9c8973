/*!
 * Structured Tracing
 * Subscriber setup for the simulator's tracing events
 *
 * The library only emits events; installing a subscriber is left to the
 * binary (or an embedding application).
 */

use crate::core::limits::ENV_TRACE_JSON;
use tracing::info;
use tracing_subscriber::{
    fmt::format::FmtSpan, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

/// Initialize structured tracing
///
/// Environment variables:
/// - RUST_LOG: Set log level (default: info)
/// - SCHEDSIM_TRACE_JSON: Enable JSON output (default: false)
///
/// Logs go to stderr so stdout stays free for simulation output. Calling this
/// more than once is a no-op.
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let use_json = std::env::var(ENV_TRACE_JSON)
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
                    .with_current_span(true)
                    .with_span_list(true)
                    .with_span_events(FmtSpan::CLOSE),
            )
            .try_init()
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_span_events(FmtSpan::CLOSE)
                    .compact(),
            )
            .try_init()
    };

    if installed.is_ok() {
        info!(json = use_json, "Structured tracing initialized");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::process::ProcessSpec;
    use crate::scheduler::{Algorithm, Dispatcher};

    fn init_test_tracing() {
        let _ = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(tracing_subscriber::fmt::layer().with_test_writer().compact())
            .try_init();
    }

    #[test]
    fn test_simulation_under_trace_subscriber() {
        init_test_tracing();

        let specs = ProcessSpec::sequential(&[(0, 3, None), (6, 2, None)]);
        let schedule = Dispatcher::default().run(Algorithm::Srtf, &specs).unwrap();
        assert_eq!(schedule.total_time(), 8);
    }

    #[test]
    fn test_init_tracing_is_idempotent() {
        init_tracing();
        init_tracing();
    }
}
