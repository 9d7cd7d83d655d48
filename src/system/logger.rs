use tracing_subscriber::{EnvFilter, FmtSubscriber};

/// Level used when neither `THOR_LOG` nor `RUST_LOG` is set. Per-throw and
/// per-hammer progress sits below it; only run-level conditions show.
const DEFAULT_FILTER: &str = "warn";

pub(crate) fn init_logging(no_color: bool) {
    let filter = std::env::var("THOR_LOG")
        .or_else(|_| std::env::var("RUST_LOG"))
        .map_or_else(
            |_| EnvFilter::new(DEFAULT_FILTER),
            |value| EnvFilter::try_new(value).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER)),
        );

    // stdout carries the report.
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!no_color)
        .finish();

    if let Err(err) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set global default subscriber: {}", err);
    }
}
