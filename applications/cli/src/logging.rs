/// Tracing set-up and the informational log sink
use tagsort_core::{LogSink, NoopLog};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used with `--verbose`
pub const VERBOSE_FILTER: &str = "tagsort=info";

/// Filter used otherwise
pub const QUIET_FILTER: &str = "tagsort=warn";

/// Install the global tracing subscriber, writing to stderr
///
/// `RUST_LOG` wins, then `filter_override`, then the verbosity default.
/// A second call is a no-op.
pub fn init(verbose: bool, filter_override: Option<&str>) {
    let default_directive = filter_override.unwrap_or(if verbose {
        VERBOSE_FILTER
    } else {
        QUIET_FILTER
    });

    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directive)),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Log sink forwarding to `tracing::info!`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLog;

impl LogSink for TracingLog {
    fn info(&self, message: &str) {
        tracing::info!("{}", message);
    }
}

/// The sink handed to the organizer
pub fn sink(verbose: bool) -> Box<dyn LogSink> {
    if verbose {
        Box::new(TracingLog)
    } else {
        Box::new(NoopLog)
    }
}
