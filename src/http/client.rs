use async_trait::async_trait;
use reqwest::Client;
use tracing::error;

use crate::args::DEFAULT_USER_AGENT;
use crate::config::RunConfig;
use crate::error::{HttpError, ThrowError};

use super::execution::execute_get;

/// Issues the GET behind one throw.
///
/// Implementations report every failure as a [`ThrowError`]; they never
/// panic and never retry. Timing and timeouts are applied by the caller.
#[async_trait]
pub trait ThrowClient: Send + Sync {
    /// Sends a GET to `url`. With `capture_body` the response text is
    /// returned, otherwise the body is drained and discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ThrowError::Network`] on transport failures and
    /// [`ThrowError::HttpStatus`] when the server answers with a non-2xx
    /// status.
    async fn get(&self, url: &str, capture_body: bool) -> Result<Option<String>, ThrowError>;
}

/// Shared reqwest client. Cloning is cheap and reuses the connection pool.
#[derive(Debug, Clone)]
pub struct HttpThrowClient {
    client: Client,
}

impl HttpThrowClient {
    /// Builds the pooled client used by every hammer of a run.
    ///
    /// # Errors
    ///
    /// Returns an error when the TLS backend or client cannot be initialised.
    pub fn new(config: &RunConfig) -> Result<Self, HttpError> {
        let client = match Client::builder()
            .connect_timeout(config.connect_timeout)
            .user_agent(DEFAULT_USER_AGENT)
            .pool_max_idle_per_host(config.hammers)
            .build()
        {
            Ok(client) => client,
            Err(err) => {
                error!("Failed to build HTTP client: {}", err);
                return Err(HttpError::BuildClientFailed { source: err });
            }
        };
        Ok(Self { client })
    }
}

#[async_trait]
impl ThrowClient for HttpThrowClient {
    async fn get(&self, url: &str, capture_body: bool) -> Result<Option<String>, ThrowError> {
        execute_get(&self.client, url, capture_body).await
    }
}
