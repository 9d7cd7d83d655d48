use futures_util::StreamExt;
use reqwest::Client;
use tracing::{debug, trace};

use crate::error::ThrowError;

pub(super) async fn execute_get(
    client: &Client,
    url: &str,
    capture_body: bool,
) -> Result<Option<String>, ThrowError> {
    let response = client
        .get(url)
        .send()
        .await
        .map_err(|err| network_error(&err))?;
    let status = response.status();

    if !status.is_success() {
        // Read the rest so the connection can go back to the pool.
        if let Err(err) = drain_response_body(response).await {
            debug!("Failed to drain error response: {}", err);
        }
        return Err(ThrowError::HttpStatus {
            status: status.as_u16(),
        });
    }

    if capture_body {
        let body = response.text().await.map_err(|err| network_error(&err))?;
        return Ok(Some(body));
    }

    let bytes = drain_response_body(response)
        .await
        .map_err(|err| network_error(&err))?;
    trace!(bytes, "drained response body");
    Ok(None)
}

fn network_error(err: &reqwest::Error) -> ThrowError {
    ThrowError::Network {
        reason: err.to_string(),
        timed_out: err.is_timeout(),
    }
}

async fn drain_response_body(response: reqwest::Response) -> Result<u64, reqwest::Error> {
    let mut stream = response.bytes_stream();
    let mut total_bytes: u64 = 0;
    while let Some(chunk) = stream.next().await {
        let bytes = chunk?;
        total_bytes = total_bytes.saturating_add(u64::try_from(bytes.len()).unwrap_or(u64::MAX));
    }
    Ok(total_bytes)
}
