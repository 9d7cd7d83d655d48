//! Validated run configuration derived from the CLI.
use std::time::Duration;

use url::Url;

use crate::args::ThorArgs;
use crate::error::ConfigError;


/// Everything a run needs, checked before any request goes out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub url: String,
    pub hammers: usize,
    pub throws: usize,
    pub verbose: bool,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl RunConfig {
    /// Builds the run configuration from parsed CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error when the URL is malformed or is not an http(s) URL
    /// with a host.
    pub fn from_args(args: &ThorArgs) -> Result<Self, ConfigError> {
        let url = validate_url(&args.url)?;
        Ok(Self {
            url: url.into(),
            hammers: args.hammers.get(),
            throws: args.throws.get(),
            verbose: args.verbose,
            request_timeout: args.request_timeout,
            connect_timeout: args.connect_timeout,
        })
    }

    /// Number of requests the run will attempt.
    #[must_use]
    pub const fn total_throws(&self) -> usize {
        self.hammers.saturating_mul(self.throws)
    }
}

/// Parses `raw` and accepts only absolute `http`/`https` URLs with a host.
///
/// # Errors
///
/// Returns an error when the URL cannot be parsed, uses another scheme, or
/// has no host.
pub fn validate_url(raw: &str) -> Result<Url, ConfigError> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|err| ConfigError::InvalidUrl {
        url: trimmed.to_owned(),
        source: err,
    })?;
    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(ConfigError::UnsupportedScheme {
                url: trimmed.to_owned(),
                scheme: other.to_owned(),
            });
        }
    }
    if url.host_str().is_none_or(str::is_empty) {
        return Err(ConfigError::MissingHost {
            url: trimmed.to_owned(),
        });
    }
    Ok(url)
}
