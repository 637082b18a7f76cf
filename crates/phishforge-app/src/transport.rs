//! Blocking HTTP transport backed by `ureq`.

use std::io::Read;
use std::time::Duration;

use phishforge_client::{AnalysisTransport, TransportError, TransportResponse};
use url::Url;

/// Response bodies above this size fail with [`TransportError::Body`].
const MAX_BODY_BYTES: u64 = 4 * 1024 * 1024;

/// [`AnalysisTransport`] over a shared `ureq` agent.
#[derive(Clone)]
pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    /// Builds a transport whose connect, read and write phases each time out
    /// after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(timeout)
            .timeout_read(timeout)
            .timeout_write(timeout)
            .user_agent(concat!("phishforge/", env!("PHISHFORGE_VERSION")))
            .build();
        Self { agent }
    }

    fn finish(
        result: Result<ureq::Response, ureq::Error>,
    ) -> Result<TransportResponse, TransportError> {
        // Non-2xx statuses still carry a body with the backend's `error` text.
        let response = match result {
            Ok(response) | Err(ureq::Error::Status(_, response)) => response,
            Err(ureq::Error::Transport(transport)) => {
                return Err(TransportError::Connection(transport.to_string()));
            }
        };

        let status = response.status();
        let body = read_capped(response.into_reader(), MAX_BODY_BYTES)?;
        Ok(TransportResponse { status, body })
    }
}

/// Reads at most `limit` bytes; a longer body is an error, not a truncation.
fn read_capped(reader: impl Read, limit: u64) -> Result<Vec<u8>, TransportError> {
    let mut body = Vec::new();
    reader
        .take(limit.saturating_add(1))
        .read_to_end(&mut body)
        .map_err(|error| TransportError::Body(error.to_string()))?;
    if body.len() as u64 > limit {
        return Err(TransportError::Body(format!("response body exceeds {limit} bytes")));
    }
    Ok(body)
}

impl AnalysisTransport for UreqTransport {
    fn post_json(&self, url: &Url, body: &[u8]) -> Result<TransportResponse, TransportError> {
        Self::finish(
            self.agent
                .post(url.as_str())
                .set("Content-Type", "application/json")
                .set("Accept", "application/json")
                .send_bytes(body),
        )
    }

    fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        Self::finish(
            self.agent
                .get(url.as_str())
                .set("Accept", "application/json")
                .call(),
        )
    }
}
