use std::time::Duration;

use crate::dispatch::DispatchOutcome;
use crate::error::RunError;
use crate::hammer::HammerResult;

use super::stats::mean_duration;

/// The grand total of a run that produced at least one hammer average.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverallResult<'run> {
    hammer_results: &'run [HammerResult],
    failed_hammer_ids: Vec<usize>,
    overall_average: Duration,
}

impl<'run> OverallResult<'run> {
    /// Surviving hammers, ordered by id.
    #[must_use]
    pub const fn hammer_results(&self) -> &'run [HammerResult] {
        self.hammer_results
    }

    #[must_use]
    pub fn failed_hammer_ids(&self) -> &[usize] {
        &self.failed_hammer_ids
    }

    /// Mean of the per-hammer averages. Every surviving hammer weighs the
    /// same regardless of how many of its throws succeeded.
    #[must_use]
    pub const fn overall_average(&self) -> Duration {
        self.overall_average
    }
}

/// Folds the dispatcher's output into the run total.
///
/// # Errors
///
/// Returns [`RunError::Interrupted`] when shutdown cut any hammer short and
/// [`RunError::AllHammersFailed`] when no hammer has an average.
pub fn aggregate(outcome: &DispatchOutcome) -> Result<OverallResult<'_>, RunError> {
    if outcome.interrupted() {
        return Err(RunError::Interrupted {
            completed: outcome.successes.len(),
            failed: outcome.failures.len(),
        });
    }

    let Some(overall_average) = mean_duration(outcome.successes.iter().map(HammerResult::average))
    else {
        return Err(RunError::AllHammersFailed {
            hammers: outcome.failures.len(),
        });
    };

    Ok(OverallResult {
        hammer_results: &outcome.successes,
        failed_hammer_ids: outcome.failed_hammer_ids(),
        overall_average,
    })
}
