#![warn(missing_docs)]
//! # phishforge-core
//!
//! ## Purpose
//! Defines the request-side data model shared across the `phishforge`
//! workspace.
//!
//! ## Responsibilities
//! - Represent the two analysis modes and their backend endpoints.
//! - Build and validate email and URL analysis requests.
//! - Encode requests as the JSON bodies the backend expects.
//! - Provide the built-in example inputs used to pre-fill forms.
//!
//! ## Data flow
//! Form input -> [`AnalysisRequest`] -> [`AnalysisRequest::to_json_bytes`] ->
//! transport. The request's [`AnalysisMode`] travels with the response into
//! normalization.
//!
//! ## Ownership and lifetimes
//! Requests own their strings so they can outlive the form state that
//! produced them.
//!
//! ## Error model
//! Blank mandatory inputs and codec failures return [`CoreError`].
//!
//! ## Example
//! ```rust
//! use phishforge_core::{AnalysisMode, AnalysisRequest};
//!
//! let request = AnalysisRequest::url("https://www.paypal.com").unwrap();
//! assert_eq!(request.mode(), AnalysisMode::Url);
//! assert_eq!(request.mode().endpoint_path(), "/analyze-url");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which backend analysis a request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisMode {
    /// Full email analysis (sender, subject, body).
    #[default]
    Email,
    /// Single URL analysis.
    Url,
}

impl AnalysisMode {
    /// Returns the lowercase mode name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Url => "url",
        }
    }

    /// Returns the backend path that analyzes this mode.
    pub fn endpoint_path(self) -> &'static str {
        match self {
            Self::Email => "/analyze",
            Self::Url => "/analyze-url",
        }
    }
}

impl fmt::Display for AnalysisMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnalysisMode {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "email" => Ok(Self::Email),
            "url" => Ok(Self::Url),
            _ => Err(CoreError::UnknownMode(raw.to_string())),
        }
    }
}

/// Body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailAnalysisRequest {
    /// Display sender, for example `PayPal <noreply@paypal.com>`.
    pub sender: String,
    /// Subject line.
    pub subject: String,
    /// Message body text.
    pub body: String,
}

/// Body of `POST /analyze-url`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAnalysisRequest {
    /// URL submitted for analysis.
    pub url: String,
}

/// One validated analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnalysisRequest {
    /// Email analysis.
    Email(EmailAnalysisRequest),
    /// URL analysis.
    Url(UrlAnalysisRequest),
}

impl AnalysisRequest {
    /// Builds a validated email request.
    ///
    /// Sender and subject may be blank; the backend scores what it gets.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyField`] when `body` is blank.
    pub fn email(
        sender: impl Into<String>,
        subject: impl Into<String>,
        body: impl Into<String>,
    ) -> Result<Self, CoreError> {
        let body = body.into();
        if body.trim().is_empty() {
            return Err(CoreError::EmptyField("body"));
        }

        Ok(Self::Email(EmailAnalysisRequest {
            sender: sender.into(),
            subject: subject.into(),
            body,
        }))
    }

    /// Builds a validated URL request. Surrounding whitespace is trimmed.
    ///
    /// # Errors
    /// Returns [`CoreError::EmptyField`] when `url` is blank.
    pub fn url(url: impl Into<String>) -> Result<Self, CoreError> {
        let url = url.into();
        let trimmed = url.trim();
        if trimmed.is_empty() {
            return Err(CoreError::EmptyField("url"));
        }

        Ok(Self::Url(UrlAnalysisRequest {
            url: trimmed.to_string(),
        }))
    }

    /// Returns the mode this request targets.
    pub fn mode(&self) -> AnalysisMode {
        match self {
            Self::Email(_) => AnalysisMode::Email,
            Self::Url(_) => AnalysisMode::Url,
        }
    }

    /// Serializes the request body to compact JSON bytes.
    ///
    /// # Errors
    /// Returns [`CoreError::Codec`] when JSON serialization fails.
    pub fn to_json_bytes(&self) -> Result<Vec<u8>, CoreError> {
        match self {
            Self::Email(request) => serde_json::to_vec(request),
            Self::Url(request) => serde_json::to_vec(request),
        }
        .map_err(CoreError::Codec)
    }
}

/// Built-in example inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExampleKind {
    /// Typical credential-phishing email.
    Phishing,
    /// Ordinary newsletter.
    Legitimate,
    /// Look-alike login URL.
    PhishingUrl,
    /// Genuine vendor URL.
    LegitimateUrl,
}

impl ExampleKind {
    /// Builds the example request.
    pub fn request(self) -> AnalysisRequest {
        match self {
            Self::Phishing => AnalysisRequest::Email(EmailAnalysisRequest {
                sender: "PayPal Security <noreply@paypal-verify.xyz>".to_string(),
                subject: "URGENT: Your account will be suspended!".to_string(),
                body: "Your PayPal account has been locked due to suspicious activity.\n\n\
                       Click here immediately to verify your identity: http://bit.ly/paypal-verify-now\n\n\
                       WARNING: You have only 24 hours before permanent suspension!\n\n\
                       Failure to verify will result in account closure."
                    .to_string(),
            }),
            Self::Legitimate => AnalysisRequest::Email(EmailAnalysisRequest {
                sender: "Company Newsletter <newsletter@company.com>".to_string(),
                subject: "Monthly Newsletter - November 2025".to_string(),
                body: "Hello valued customer,\n\n\
                       Here is our monthly newsletter with updates and news about our services.\n\n\
                       Visit our website for more information: https://www.company.com\n\n\
                       Best regards,\nThe Team"
                    .to_string(),
            }),
            Self::PhishingUrl => AnalysisRequest::Url(UrlAnalysisRequest {
                url: "http://paypal-verify.xyz/account/login".to_string(),
            }),
            Self::LegitimateUrl => AnalysisRequest::Url(UrlAnalysisRequest {
                url: "https://www.paypal.com".to_string(),
            }),
        }
    }
}

impl FromStr for ExampleKind {
    type Err = CoreError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "phishing" => Ok(Self::Phishing),
            "legitimate" => Ok(Self::Legitimate),
            "phishing-url" => Ok(Self::PhishingUrl),
            "legitimate-url" => Ok(Self::LegitimateUrl),
            _ => Err(CoreError::UnknownExample(raw.to_string())),
        }
    }
}

/// Error type for request validation and codec failures.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A mandatory request field was blank.
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
    /// Mode name is not `email` or `url`.
    #[error("unknown analysis mode: {0}")]
    UnknownMode(String),
    /// Example name is not one of the built-in examples.
    #[error("unknown example: {0}")]
    UnknownExample(String),
    /// JSON encoding failure.
    #[error("request codec failure: {0}")]
    Codec(#[from] serde_json::Error),
}
