use std::time::Duration;

use tokio::sync::broadcast::error::RecvError;
use tokio::time::{Instant, timeout};
use tracing::{debug, info};

use crate::config::RunConfig;
use crate::error::{HammerError, ThrowError};
use crate::http::ThrowClient;
use crate::metrics::InFlightGauge;
use crate::shutdown::ShutdownReceiver;

use super::types::{HammerResult, ThrowOutcome};

/// What one hammer is asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammerSpec {
    pub hammer_id: usize,
    pub url: String,
    pub throws: usize,
    pub verbose: bool,
    pub request_timeout: Duration,
}

impl HammerSpec {
    #[must_use]
    pub fn for_hammer(config: &RunConfig, hammer_id: usize) -> Self {
        Self {
            hammer_id,
            url: config.url.clone(),
            throws: config.throws,
            verbose: config.verbose,
            request_timeout: config.request_timeout,
        }
    }
}

/// Runs every throw of `spec` in order and summarizes them.
///
/// A failed throw is recorded and the loop moves on. Each throw is bounded by
/// `spec.request_timeout` and races the shutdown signal.
///
/// # Errors
///
/// Returns [`HammerError::AllThrowsFailed`] when no throw succeeded and
/// [`HammerError::Interrupted`] when shutdown fired mid-run.
pub async fn run_hammer<C>(
    spec: HammerSpec,
    client: &C,
    shutdown_rx: &mut ShutdownReceiver,
    gauge: &InFlightGauge,
) -> Result<HammerResult, HammerError>
where
    C: ThrowClient + ?Sized,
{
    let hammer_id = spec.hammer_id;
    let mut throws = Vec::with_capacity(spec.throws);

    for throw_index in 0..spec.throws {
        let start = Instant::now();
        let attempt = {
            let _in_flight = gauge.enter();
            tokio::select! {
                () = shutdown_signal(shutdown_rx) => None,
                result = timeout(spec.request_timeout, client.get(&spec.url, spec.verbose)) => {
                    Some(result)
                }
            }
        };
        let elapsed = start.elapsed();

        let Some(result) = attempt else {
            info!(hammer_id, throw = throw_index, "Hammer interrupted by shutdown.");
            return Err(HammerError::Interrupted { hammer_id, throws });
        };
        let outcome = match result {
            Ok(Ok(body)) => ThrowOutcome::success(throw_index, elapsed, body),
            Ok(Err(err)) => ThrowOutcome::failure(throw_index, elapsed, err),
            Err(_) => ThrowOutcome::failure(throw_index, elapsed, ThrowError::timeout()),
        };
        log_throw(hammer_id, &outcome, gauge);
        throws.push(outcome);
    }

    let summary = HammerResult::from_throws(hammer_id, throws);
    match &summary {
        Ok(result) => info!(
            hammer_id,
            average_ms = whole_millis(result.average()),
            ok = result.successful_throws(),
            total = result.throws().len(),
            "Hammer finished."
        ),
        Err(err) => info!(hammer_id, "{}", err),
    }
    summary
}

fn log_throw(hammer_id: usize, outcome: &ThrowOutcome, gauge: &InFlightGauge) {
    let elapsed_ms = whole_millis(outcome.elapsed());
    let throw = outcome.throw_index();
    match outcome.error() {
        None => info!(hammer_id, throw, elapsed_ms, "Throw succeeded."),
        Some(err) => debug!(hammer_id, throw, elapsed_ms, error = %err, "Throw failed."),
    }
    debug!(hammer_id, in_flight = gauge.current(), "In-flight throws.");
}

fn whole_millis(duration: Duration) -> u64 {
    u64::try_from(duration.as_millis()).unwrap_or(u64::MAX)
}

/// Resolves on a shutdown broadcast. A closed channel means nobody can ask
/// for shutdown any more, so it never resolves.
async fn shutdown_signal(shutdown_rx: &mut ShutdownReceiver) {
    match shutdown_rx.recv().await {
        Ok(()) | Err(RecvError::Lagged(_)) => {}
        Err(RecvError::Closed) => std::future::pending::<()>().await,
    }
}
