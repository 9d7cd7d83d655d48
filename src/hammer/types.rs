use std::time::Duration;

use crate::error::{HammerError, ThrowError};
use crate::metrics::mean_duration;

/// Timed result of one GET attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThrowOutcome {
    throw_index: usize,
    elapsed: Duration,
    result: Result<Option<String>, ThrowError>,
}

impl ThrowOutcome {
    #[must_use]
    pub const fn success(throw_index: usize, elapsed: Duration, body: Option<String>) -> Self {
        Self {
            throw_index,
            elapsed,
            result: Ok(body),
        }
    }

    #[must_use]
    pub const fn failure(throw_index: usize, elapsed: Duration, error: ThrowError) -> Self {
        Self {
            throw_index,
            elapsed,
            result: Err(error),
        }
    }

    /// Position of the throw within its hammer, starting at 0.
    #[must_use]
    pub const fn throw_index(&self) -> usize {
        self.throw_index
    }

    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Response text, only captured in verbose mode.
    #[must_use]
    pub fn body(&self) -> Option<&str> {
        self.result.as_ref().ok().and_then(Option::as_deref)
    }

    #[must_use]
    pub fn error(&self) -> Option<&ThrowError> {
        self.result.as_ref().err()
    }
}

/// Summary of a hammer that had at least one successful throw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HammerResult {
    hammer_id: usize,
    throws: Vec<ThrowOutcome>,
    average: Duration,
}

impl HammerResult {
    /// Computes the hammer average over its successful throws.
    ///
    /// # Errors
    ///
    /// Returns [`HammerError::AllThrowsFailed`] (carrying the throws) when no
    /// throw succeeded, since such a hammer has no average.
    pub fn from_throws(hammer_id: usize, throws: Vec<ThrowOutcome>) -> Result<Self, HammerError> {
        let successful = throws
            .iter()
            .filter(|outcome| outcome.is_success())
            .map(ThrowOutcome::elapsed);
        match mean_duration(successful) {
            Some(average) => Ok(Self {
                hammer_id,
                throws,
                average,
            }),
            None => Err(HammerError::AllThrowsFailed { hammer_id, throws }),
        }
    }

    #[must_use]
    pub const fn hammer_id(&self) -> usize {
        self.hammer_id
    }

    /// Every throw in issuance order, failed ones included.
    #[must_use]
    pub fn throws(&self) -> &[ThrowOutcome] {
        &self.throws
    }

    /// Mean elapsed time of the successful throws.
    #[must_use]
    pub const fn average(&self) -> Duration {
        self.average
    }

    #[must_use]
    pub fn successful_throws(&self) -> usize {
        self.throws.iter().filter(|outcome| outcome.is_success()).count()
    }
}
