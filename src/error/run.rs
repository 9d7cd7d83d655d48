use thiserror::Error;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("all {hammers} hammers failed; no average to report")]
    AllHammersFailed { hammers: usize },
    #[error("interrupted ({completed} hammers completed, {failed} did not)")]
    Interrupted { completed: usize, failed: usize },
}
