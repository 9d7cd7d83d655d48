//! Core library for the `thor` CLI.
//!
//! `thor` sends repeated HTTP GET requests to one URL from several concurrent
//! hammers. Each hammer performs its throws one after another; the run
//! reports every throw, every hammer average, and the mean of those averages.
//! The binary is a thin shell over [`dispatch::dispatch`],
//! [`metrics::aggregate`] and [`report`].
pub mod args;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod hammer;
pub mod http;
pub mod metrics;
pub mod report;
pub mod shutdown;
