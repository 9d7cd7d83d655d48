use clap::{ArgAction, Parser};
use std::time::Duration;

use super::defaults::{
    DEFAULT_CONNECT_TIMEOUT, DEFAULT_HAMMERS, DEFAULT_REQUEST_TIMEOUT, DEFAULT_THROWS,
};
use super::parsers::{parse_duration_arg, parse_positive_usize};
use super::types::PositiveUsize;

/// `-h` belongs to the hammer count, so help is only reachable as `--help`.
#[derive(Debug, Parser, Clone)]
#[command(
    name = "thor",
    version,
    about = "Hammer a URL with concurrent HTTP GET requests and report the latency.",
    override_usage = "thor [-h HAMMERS] [-t THROWS] [-v] URL",
    disable_help_flag = true
)]
pub struct ThorArgs {
    /// Number of hammers to utilize
    #[arg(
        short = 'h',
        long = "hammers",
        value_name = "HAMMERS",
        default_value = DEFAULT_HAMMERS,
        value_parser = parse_positive_usize
    )]
    pub hammers: PositiveUsize,

    /// Number of throws per hammer
    #[arg(
        short = 't',
        long = "throws",
        value_name = "THROWS",
        default_value = DEFAULT_THROWS,
        value_parser = parse_positive_usize
    )]
    pub throws: PositiveUsize,

    /// Display verbose output (the body of every successful response)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Per-request timeout (supports ms/s/m/h)
    #[arg(
        long = "timeout",
        value_name = "DURATION",
        default_value = DEFAULT_REQUEST_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub request_timeout: Duration,

    /// TCP connect timeout (supports ms/s/m/h)
    #[arg(
        long = "connect-timeout",
        value_name = "DURATION",
        default_value = DEFAULT_CONNECT_TIMEOUT,
        value_parser = parse_duration_arg
    )]
    pub connect_timeout: Duration,

    /// Disable colored log output
    #[arg(long = "no-color")]
    pub no_color: bool,

    /// Print help
    #[arg(long = "help", action = ArgAction::Help)]
    pub help: Option<bool>,

    /// URL to request
    #[arg(value_name = "URL")]
    pub url: String,
}
