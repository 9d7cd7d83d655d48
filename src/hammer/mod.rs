//! A hammer: one worker issuing its throws strictly one after another.
mod runner;
mod types;


pub use runner::{HammerSpec, run_hammer};
pub use types::{HammerResult, ThrowOutcome};
