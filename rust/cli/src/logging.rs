use croupier_engine::logger::Verbosity;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;

/// Installs the stderr subscriber. `RUST_LOG` applies unless `--verbose`
/// asks for everything; otherwise only warnings show.
///
/// Safe to call more than once: later calls leave the first subscriber in
/// place.
pub fn init_logging(verbosity: Verbosity) {
    let filter = match verbosity {
        Verbosity::Debug => EnvFilter::new("debug"),
        _ => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };

    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
