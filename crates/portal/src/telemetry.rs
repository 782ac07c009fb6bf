use shared_types::LoggingConfig;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install the process-wide subscriber for the native binary.
///
/// Logs go to stderr so stdout stays clean for JSON snapshots. An invalid
/// filter falls back to `info`. Calling this twice leaves the first
/// subscriber in place.
pub fn init_tracing(logging: &LoggingConfig) {
    let filter = EnvFilter::try_new(&logging.filter).unwrap_or_else(|e| {
        eprintln!("[telemetry] Invalid log filter {:?}: {e}, using info", logging.filter);
        EnvFilter::new("info")
    });

    let result = if logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init()
    };

    if let Err(e) = result {
        eprintln!("[telemetry] Subscriber already installed: {e}");
    }
}
