//! Fan-out/fan-in of hammers: one task per hammer, joined before reporting.
use std::sync::Arc;

use tracing::{debug, error};

use crate::config::RunConfig;
use crate::error::HammerError;
use crate::hammer::{HammerResult, HammerSpec, run_hammer};
use crate::http::ThrowClient;
use crate::metrics::InFlightGauge;
use crate::shutdown::ShutdownSender;

#[cfg(test)]
mod tests;

/// Every hammer of a run, split by whether it produced an average.
/// Both lists are sorted by hammer id.
#[derive(Debug)]
pub struct DispatchOutcome {
    pub successes: Vec<HammerResult>,
    pub failures: Vec<HammerError>,
    /// Highest number of throws observed on the wire at the same time.
    pub peak_in_flight: usize,
}

impl DispatchOutcome {
    #[must_use]
    pub fn hammer_count(&self) -> usize {
        self.successes.len().saturating_add(self.failures.len())
    }

    #[must_use]
    pub fn failed_hammer_ids(&self) -> Vec<usize> {
        self.failures.iter().map(HammerError::hammer_id).collect()
    }

    /// Throws recorded across all hammers, failed hammers included.
    #[must_use]
    pub fn recorded_throws(&self) -> usize {
        let succeeded = self
            .successes
            .iter()
            .map(|result| result.throws().len())
            .fold(0usize, usize::saturating_add);
        let failed = self
            .failures
            .iter()
            .map(|failure| failure.throws().len())
            .fold(0usize, usize::saturating_add);
        succeeded.saturating_add(failed)
    }

    #[must_use]
    pub fn interrupted(&self) -> bool {
        self.failures.iter().any(HammerError::is_interrupted)
    }
}

/// Runs `config.hammers` hammers concurrently and waits for all of them.
///
/// A hammer that fails, or whose task panics, only adds an entry to
/// `failures`; its siblings keep running. Broadcasting on `shutdown_tx`
/// stops every hammer at its current throw.
pub async fn dispatch<C>(
    config: &RunConfig,
    client: Arc<C>,
    shutdown_tx: &ShutdownSender,
) -> DispatchOutcome
where
    C: ThrowClient + 'static,
{
    let gauge = Arc::new(InFlightGauge::default());
    let mut handles = Vec::with_capacity(config.hammers);

    for hammer_id in 0..config.hammers {
        let spec = HammerSpec::for_hammer(config, hammer_id);
        let client = Arc::clone(&client);
        let gauge = Arc::clone(&gauge);
        let mut shutdown_rx = shutdown_tx.subscribe();
        let handle = tokio::spawn(async move {
            run_hammer(spec, client.as_ref(), &mut shutdown_rx, &gauge).await
        });
        handles.push((hammer_id, handle));
    }
    debug!(hammers = handles.len(), "Spawned hammers.");

    let mut successes = Vec::with_capacity(handles.len());
    let mut failures = Vec::new();
    for (hammer_id, handle) in handles {
        match handle.await {
            Ok(Ok(result)) => successes.push(result),
            Ok(Err(err)) => failures.push(err),
            Err(err) => {
                error!(hammer_id, "Hammer task failed: {}", err);
                failures.push(HammerError::Aborted {
                    hammer_id,
                    reason: err.to_string(),
                });
            }
        }
    }

    successes.sort_by_key(HammerResult::hammer_id);
    failures.sort_by_key(HammerError::hammer_id);

    let peak_in_flight = gauge.peak();
    debug!(
        peak_in_flight,
        succeeded = successes.len(),
        failed = failures.len(),
        "All hammers joined."
    );
    DispatchOutcome {
        successes,
        failures,
        peak_in_flight,
    }
}
