use std::ffi::OsString;
use std::sync::Arc;

use clap::{CommandFactory, FromArgMatches, error::ErrorKind};
use tracing::{info, warn};

use thor::args::ThorArgs;
use thor::config::RunConfig;
use thor::dispatch::dispatch;
use thor::error::{AppError, AppResult, ConfigError};
use thor::http::HttpThrowClient;
use thor::metrics::aggregate;
use thor::report::{write_hammers, write_total};
use thor::shutdown::{setup_signal_shutdown_handler, shutdown_channel};

pub(crate) fn run() -> AppResult<()> {
    let Some(args) = parse_args(std::env::args_os())? else {
        return Ok(());
    };

    crate::system::logger::init_logging(args.no_color);

    let config = RunConfig::from_args(&args)?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    runtime.block_on(run_async(config))
}

/// Parses the command line. `Ok(None)` means help or version was printed.
///
/// Any other parse failure prints the usage text to stderr and becomes a
/// usage error, so nothing touches the network.
fn parse_args<I>(raw_args: I) -> AppResult<Option<ThorArgs>>
where
    I: IntoIterator<Item = OsString>,
{
    let mut cmd = ThorArgs::command();
    let matches = match cmd.try_get_matches_from_mut(raw_args) {
        Ok(matches) => matches,
        Err(err) if matches!(err.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            err.print()?;
            return Ok(None);
        }
        Err(err) => {
            eprint!("{}", cmd.render_help());
            return Err(AppError::config(ConfigError::Usage {
                message: usage_message(&err),
            }));
        }
    };
    let args = ThorArgs::from_arg_matches(&matches)?;
    Ok(Some(args))
}

fn usage_message(err: &clap::Error) -> String {
    summarize_clap_error(&err.to_string())
}

/// Collapses a rendered clap error into one line: the error body up to the
/// usage section, without `tip:` hints.
fn summarize_clap_error(rendered: &str) -> String {
    let summary = rendered
        .lines()
        .map(str::trim)
        .take_while(|line| !line.starts_with("Usage:"))
        .filter(|line| !line.is_empty() && !line.starts_with("tip:"))
        .map(|line| line.trim_start_matches("error: "))
        .collect::<Vec<_>>()
        .join(" ");
    if summary.is_empty() {
        return "invalid arguments".to_owned();
    }
    summary
}

async fn run_async(config: RunConfig) -> AppResult<()> {
    let client = Arc::new(HttpThrowClient::new(&config)?);
    let (shutdown_tx, _) = shutdown_channel();
    let signal_handle = setup_signal_shutdown_handler(&shutdown_tx);

    info!(
        url = %config.url,
        hammers = config.hammers,
        throws = config.throws,
        "Starting run."
    );
    let outcome = dispatch(&config, client, &shutdown_tx).await;

    // Releases the signal handler; nothing else is listening any more.
    drop(shutdown_tx.send(()));
    if let Err(err) = signal_handle.await {
        warn!("Signal handler task failed: {}", err);
    }

    info!(
        recorded = outcome.recorded_throws(),
        expected = config.total_throws(),
        peak_in_flight = outcome.peak_in_flight,
        "Run finished."
    );

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    write_hammers(&mut out, &outcome)?;
    let overall = aggregate(&outcome)?;
    if !overall.failed_hammer_ids().is_empty() {
        warn!(
            failed = ?overall.failed_hammer_ids(),
            "Some hammers had no successful throws and were left out of the total."
        );
    }
    write_total(&mut out, &overall)?;
    Ok(())
}
