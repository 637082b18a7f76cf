//! Shared fixtures and transports for app integration tests.

use std::sync::{Arc, Mutex};

use phishforge_client::{AnalysisClient, AnalysisTransport, TransportError, TransportResponse};
use url::Url;

/// Reads one frozen response fixture by generation (`v1`..`v5`).
#[allow(dead_code)]
pub fn response_fixture(generation: &str) -> String {
    let path = format!(
        "{}/../../contracts/fixtures/analysis-response.{generation}.json",
        env!("CARGO_MANIFEST_DIR")
    );
    std::fs::read_to_string(&path).expect("response fixture should be readable")
}

/// One request seen by [`MockTransport`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[allow(dead_code)]
pub struct RecordedCall {
    pub method: &'static str,
    pub url: String,
    pub body: Vec<u8>,
}

/// Transport answering every call with one canned outcome.
#[derive(Debug)]
#[allow(dead_code)]
pub struct MockTransport {
    outcome: Result<TransportResponse, TransportError>,
    calls: Mutex<Vec<RecordedCall>>,
}

#[allow(dead_code)]
impl MockTransport {
    pub fn responding(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            outcome: Ok(TransportResponse {
                status,
                body: body.as_bytes().to_vec(),
            }),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn failing(error: TransportError) -> Arc<Self> {
        Arc::new(Self {
            outcome: Err(error),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().expect("call log lock should work").clone()
    }

    fn record(
        &self,
        method: &'static str,
        url: &Url,
        body: &[u8],
    ) -> Result<TransportResponse, TransportError> {
        self.calls
            .lock()
            .expect("call log lock should work")
            .push(RecordedCall {
                method,
                url: url.to_string(),
                body: body.to_vec(),
            });
        self.outcome.clone()
    }
}

impl AnalysisTransport for MockTransport {
    fn post_json(&self, url: &Url, body: &[u8]) -> Result<TransportResponse, TransportError> {
        self.record("POST", url, body)
    }

    fn get(&self, url: &Url) -> Result<TransportResponse, TransportError> {
        self.record("GET", url, &[])
    }
}

/// Client bound to a local test backend.
#[allow(dead_code)]
pub fn client_with(transport: Arc<MockTransport>) -> AnalysisClient {
    AnalysisClient::new("http://localhost:8000", transport).expect("local client should build")
}
