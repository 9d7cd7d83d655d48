//! HTTP client port used by hammers and its reqwest implementation.
mod client;
mod execution;

#[cfg(test)]
pub(crate) mod test_support;

pub use client::{HttpThrowClient, ThrowClient};
