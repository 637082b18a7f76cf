#![warn(missing_docs)]
//! # phishforge-app
//!
//! ## Purpose
//! Orchestrates request building, backend calls, normalization and UI state
//! for `phishforge`.
//!
//! ## Responsibilities
//! - Load runtime configuration and install logging.
//! - Drive one analysis through the UI state machine: loading, then result
//!   or translated error.
//! - Normalize saved response bodies offline.
//! - Render assessments for the terminal.
//!
//! ## Data flow
//! CLI input -> [`AnalysisRequest`] -> [`AnalysisClient`] -> raw JSON ->
//! normalization -> [`UiState`] -> report.
//!
//! ## Ownership and lifetimes
//! The UI state is owned by the caller and mutated in place. Assessments are
//! owned values handed to both the state and the caller.
//!
//! ## Error model
//! Subsystem failures are wrapped in [`AppError`]; every error has a
//! translated user message.
//!
//! ## Security and privacy notes
//! - Plain HTTP is refused outside loopback.
//! - Email content is never logged.

mod config;
mod logging;
mod report;
mod transport;

pub use config::{
    AppConfig, DEFAULT_API_BASE_URL, ENV_API_BASE_URL, ENV_HEALTH_CHECK, ENV_LOG_LEVEL,
    ENV_TIMEOUT_SECS, switch_enabled,
};
pub use logging::init_tracing;
pub use report::{Report, render_report};
pub use transport::UreqTransport;

use phishforge_analysis_contract::{
    AnalysisContractError, NormalizedAssessment, assess, normalize_value,
};
use phishforge_client::{AnalysisClient, ClientError};
use phishforge_core::{AnalysisMode, AnalysisRequest, CoreError};
use phishforge_translate::TranslationTable;
use phishforge_ui::UiState;
use thiserror::Error;
use tracing::{info, warn};

/// Build-time application version loaded from root `VERSION` file.
pub const APP_VERSION: &str = env!("PHISHFORGE_VERSION");

/// Returns the app version sourced from root `VERSION`.
pub fn app_version() -> &'static str {
    APP_VERSION
}

/// Version label shown in the page footer.
pub fn version_label() -> String {
    format!("v{APP_VERSION}")
}

/// Runs one analysis end to end.
///
/// `state` shows loading while the request is in flight, then either the
/// assessment or the translated error message. The mode recorded on the
/// assessment is the request's mode.
///
/// # Errors
/// Returns [`AppError::Client`] when the request fails.
pub fn run_analysis(
    client: &AnalysisClient,
    request: &AnalysisRequest,
    table: &TranslationTable,
    state: &mut UiState,
) -> Result<NormalizedAssessment, AppError> {
    let mode = request.mode();
    state.mode = mode;
    state.begin_loading();

    match client.analyze(request) {
        Ok(raw) => {
            let assessment = normalize_value(&raw, mode, table);
            info!(
                %mode,
                tier = assessment.risk_tier.as_str(),
                score = assessment.score,
                findings = assessment.findings.len(),
                "assessment ready"
            );
            state.show_assessment(assessment.clone());
            Ok(assessment)
        }
        Err(error) => {
            warn!(%mode, %error, "analysis failed");
            let error = AppError::Client(error);
            state.show_error(&error.user_message(table), table);
            Err(error)
        }
    }
}

/// Normalizes a saved response body.
///
/// # Errors
/// Returns [`AppError::Analysis`] when `raw` is not JSON.
pub fn assess_json(
    raw: &str,
    mode: AnalysisMode,
    table: &TranslationTable,
) -> Result<NormalizedAssessment, AppError> {
    Ok(assess(raw, mode, table)?)
}

/// Encodes an assessment as pretty JSON.
///
/// # Errors
/// Returns [`AppError::Encode`] when serialization fails.
pub fn assessment_json(assessment: &NormalizedAssessment) -> Result<String, AppError> {
    serde_json::to_string_pretty(assessment).map_err(AppError::Encode)
}

/// App integration error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Invalid runtime configuration.
    #[error("config error: {0}")]
    Config(String),
    /// Request model error.
    #[error("core error: {0}")]
    Core(#[from] CoreError),
    /// Backend call error.
    #[error("client error: {0}")]
    Client(#[from] ClientError),
    /// Response decode error.
    #[error("analysis error: {0}")]
    Analysis(#[from] AnalysisContractError),
    /// Local file or stream error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    /// Output encoding error.
    #[error("encode error: {0}")]
    Encode(serde_json::Error),
}

impl AppError {
    /// Translated text to show the user.
    pub fn user_message(&self, table: &TranslationTable) -> String {
        let message = match self {
            Self::Client(error) => error.user_message(),
            other => other.to_string(),
        };
        table.translate(&message)
    }
}
