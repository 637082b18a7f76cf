#![warn(missing_docs)]
//! # phishforge-client
//!
//! ## Purpose
//! Sends analysis requests to the PhishForge backend and returns decoded
//! response bodies.
//!
//! ## Responsibilities
//! - Validate the backend base URL (HTTPS, loopback excepted).
//! - Route each request to its mode's endpoint.
//! - Turn backend and connection failures into user-facing messages.
//! - Probe `/health` without ever failing the caller.
//!
//! ## Data flow
//! [`AnalysisRequest`] -> [`AnalysisClient::analyze`] -> [`AnalysisTransport`]
//! -> decoded JSON body -> normalization (another crate).
//!
//! ## Ownership and lifetimes
//! The client owns its base URL and shares the transport through `Arc`, so
//! it is cheap to clone into UI event handlers.
//!
//! ## Error model
//! Every failure is a [`ClientError`]; [`ClientError::user_message`] gives
//! the text to show. No retries happen here: one user action, one request.
//!
//! ## Security and privacy notes
//! Request bodies (email content, URLs) are never logged.

use std::net::IpAddr;
use std::sync::Arc;

use phishforge_core::{AnalysisMode, AnalysisRequest, CoreError};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, info, warn};
use url::{Host, Url};

/// Shown when the backend failed without explaining why.
pub const DEFAULT_ANALYSIS_ERROR: &str = "Analysis error. Please try again later.";

/// Shown when the backend could not be reached.
pub const CONNECTION_ERROR: &str = "Connection error. Check your internet connection and try again.";

/// Health probe path.
pub const HEALTH_PATH: &str = "/health";

/// Raw HTTP response handed back by a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body bytes.
    pub body: Vec<u8>,
}

impl TransportResponse {
    /// Returns `true` for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstract HTTP transport used by [`AnalysisClient`].
pub trait AnalysisTransport: Send + Sync {
    /// Sends a JSON `POST`.
    fn post_json(&self, url: &Url, body: &[u8]) -> Result<TransportResponse, TransportError>;

    /// Sends a `GET`.
    fn get(&self, url: &Url) -> Result<TransportResponse, TransportError>;
}

/// Analysis client bound to one backend.
#[derive(Clone)]
pub struct AnalysisClient {
    base_url: Url,
    transport: Arc<dyn AnalysisTransport>,
}

impl AnalysisClient {
    /// Creates a client for `base_url`.
    ///
    /// # Errors
    /// Returns [`ClientError::InvalidEndpoint`] when the URL does not parse or
    /// uses plain HTTP on a non-loopback host.
    pub fn new(
        base_url: &str,
        transport: Arc<dyn AnalysisTransport>,
    ) -> Result<Self, ClientError> {
        let base_url = validate_base_url(base_url)?;
        Ok(Self {
            base_url,
            transport,
        })
    }

    /// Returns the configured base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the endpoint analyzing `mode`.
    pub fn endpoint_url(&self, mode: AnalysisMode) -> Url {
        self.join(mode.endpoint_path())
    }

    fn join(&self, path: &str) -> Url {
        let mut url = self.base_url.clone();
        let joined = format!("{}{path}", url.path().trim_end_matches('/'));
        url.set_path(&joined);
        url
    }

    /// Submits one request and returns the decoded response body.
    ///
    /// # Errors
    /// Returns [`ClientError::Core`] when the request cannot be encoded,
    /// [`ClientError::Transport`] when the backend is unreachable,
    /// [`ClientError::Backend`] for non-2xx statuses and
    /// [`ClientError::Decode`] when a 2xx body is not JSON.
    pub fn analyze(&self, request: &AnalysisRequest) -> Result<Value, ClientError> {
        let url = self.endpoint_url(request.mode());
        let body = request.to_json_bytes()?;
        debug!(mode = %request.mode(), %url, bytes = body.len(), "sending analysis request");

        let response = self.transport.post_json(&url, &body).map_err(|error| {
            warn!(mode = %request.mode(), %error, "analysis transport failed");
            ClientError::Transport(error)
        })?;

        if !response.is_success() {
            let message = backend_error_message(&response.body);
            warn!(
                mode = %request.mode(),
                status = response.status,
                has_message = message.is_some(),
                "analysis rejected by backend"
            );
            return Err(ClientError::Backend {
                status: response.status,
                message,
            });
        }

        info!(mode = %request.mode(), status = response.status, "analysis completed");
        serde_json::from_slice(&response.body).map_err(ClientError::Decode)
    }

    /// Probes the backend health endpoint.
    ///
    /// Failures are logged and reported as `false`.
    pub fn check_health(&self) -> bool {
        let url = self.join(HEALTH_PATH);
        match self.transport.get(&url) {
            Ok(response) if response.is_success() => {
                info!(%url, "api is healthy");
                true
            }
            Ok(response) => {
                warn!(%url, status = response.status, "api health check failed");
                false
            }
            Err(error) => {
                warn!(%url, %error, "api health check failed");
                false
            }
        }
    }
}

/// Validates the backend base URL.
///
/// # Errors
/// Returns [`ClientError::InvalidEndpoint`] for unparsable URLs, non-HTTP
/// schemes, and plain HTTP on non-loopback hosts.
pub fn validate_base_url(base_url: &str) -> Result<Url, ClientError> {
    let parsed = Url::parse(base_url)
        .map_err(|error| ClientError::InvalidEndpoint(format!("invalid base url: {error}")))?;

    match parsed.scheme() {
        "https" => Ok(parsed),
        "http" if is_loopback(&parsed) => Ok(parsed),
        "http" => Err(ClientError::InvalidEndpoint(
            "base url must use https outside localhost".to_string(),
        )),
        other => Err(ClientError::InvalidEndpoint(format!(
            "unsupported scheme: {other}"
        ))),
    }
}

fn is_loopback(url: &Url) -> bool {
    match url.host() {
        Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
        Some(Host::Ipv4(address)) => IpAddr::V4(address).is_loopback(),
        Some(Host::Ipv6(address)) => IpAddr::V6(address).is_loopback(),
        None => false,
    }
}

/// Extracts the backend's `error` text from a failure body.
fn backend_error_message(body: &[u8]) -> Option<String> {
    let value: Value = serde_json::from_slice(body).ok()?;
    value
        .get("error")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|message| !message.is_empty())
        .map(str::to_string)
}

/// Transport-level failures.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum TransportError {
    /// Backend unreachable (DNS, TLS, refused, timeout).
    #[error("connection failure: {0}")]
    Connection(String),
    /// Response body could not be read.
    #[error("response body unreadable: {0}")]
    Body(String),
}

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// Base URL violates endpoint policy.
    #[error("invalid endpoint: {0}")]
    InvalidEndpoint(String),
    /// Request could not be encoded.
    #[error("request error: {0}")]
    Core(#[from] CoreError),
    /// Transport failure.
    #[error("transport error: {0}")]
    Transport(TransportError),
    /// Backend answered with a non-2xx status.
    #[error("backend returned status {status}")]
    Backend {
        /// HTTP status.
        status: u16,
        /// Backend-provided `error` text.
        message: Option<String>,
    },
    /// 2xx body was not JSON.
    #[error("response decode failure: {0}")]
    Decode(serde_json::Error),
}

impl ClientError {
    /// Text to show the user, before translation.
    pub fn user_message(&self) -> String {
        match self {
            Self::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Backend { message: None, .. }
            | Self::Decode(_)
            | Self::Transport(TransportError::Body(_)) => DEFAULT_ANALYSIS_ERROR.to_string(),
            Self::Transport(TransportError::Connection(_)) => CONNECTION_ERROR.to_string(),
            Self::InvalidEndpoint(_) | Self::Core(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    //! Unit tests for endpoint policy and error mapping.

    use super::*;

    #[test]
    fn validates_endpoint_policy() {
        validate_base_url("https://phishforge-lite.onrender.com").expect("https should pass");
        validate_base_url("http://localhost:8000").expect("localhost http should pass");
        validate_base_url("http://127.0.0.1:8000").expect("loopback http should pass");
        assert!(validate_base_url("http://phishforge.example").is_err());
        assert!(validate_base_url("ftp://phishforge.example").is_err());
        assert!(validate_base_url("not a url").is_err());
    }

    #[test]
    fn extracts_backend_error_text() {
        assert_eq!(
            backend_error_message(br#"{"error":"Body too long"}"#).as_deref(),
            Some("Body too long")
        );
        assert_eq!(backend_error_message(br#"{"error":""}"#), None);
        assert_eq!(backend_error_message(b"<html>502</html>"), None);
    }

    #[test]
    fn user_messages_match_failure_kind() {
        assert_eq!(
            ClientError::Transport(TransportError::Connection("refused".to_string()))
                .user_message(),
            CONNECTION_ERROR
        );
        assert_eq!(
            ClientError::Backend {
                status: 500,
                message: None
            }
            .user_message(),
            DEFAULT_ANALYSIS_ERROR
        );
    }
}
