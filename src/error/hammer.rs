use thiserror::Error;

use crate::hammer::ThrowOutcome;

/// Why a single throw did not count as a success.
///
/// Throw errors are data: they are stored on the [`ThrowOutcome`] and never
/// abort the hammer that produced them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ThrowError {
    #[error("network error: {reason}")]
    Network { reason: String, timed_out: bool },
    #[error("HTTP status {status}")]
    HttpStatus { status: u16 },
}

impl ThrowError {
    #[must_use]
    pub fn timeout() -> Self {
        ThrowError::Network {
            reason: "request timed out".to_owned(),
            timed_out: true,
        }
    }

    #[must_use]
    pub const fn is_timeout(&self) -> bool {
        matches!(
            self,
            ThrowError::Network {
                timed_out: true,
                ..
            }
        )
    }

    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            ThrowError::HttpStatus { status } => Some(*status),
            ThrowError::Network { .. } => None,
        }
    }
}

/// A hammer that finished without a usable average.
#[derive(Debug, Error)]
pub enum HammerError {
    #[error("hammer {hammer_id}: all {} throws failed", throws.len())]
    AllThrowsFailed {
        hammer_id: usize,
        throws: Vec<ThrowOutcome>,
    },
    #[error("hammer {hammer_id}: interrupted after {} throws", throws.len())]
    Interrupted {
        hammer_id: usize,
        throws: Vec<ThrowOutcome>,
    },
    #[error("hammer {hammer_id}: task aborted ({reason})")]
    Aborted { hammer_id: usize, reason: String },
}

impl HammerError {
    #[must_use]
    pub const fn hammer_id(&self) -> usize {
        match self {
            HammerError::AllThrowsFailed { hammer_id, .. }
            | HammerError::Interrupted { hammer_id, .. }
            | HammerError::Aborted { hammer_id, .. } => *hammer_id,
        }
    }

    /// Throws recorded before the hammer gave up.
    #[must_use]
    pub fn throws(&self) -> &[ThrowOutcome] {
        match self {
            HammerError::AllThrowsFailed { throws, .. }
            | HammerError::Interrupted { throws, .. } => throws,
            HammerError::Aborted { .. } => &[],
        }
    }

    #[must_use]
    pub const fn is_interrupted(&self) -> bool {
        matches!(self, HammerError::Interrupted { .. })
    }
}
