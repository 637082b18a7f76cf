#![warn(missing_docs)]
//! # phishforge-analysis-contract
//!
//! ## Purpose
//! Defines the analysis response contract and turns any backend generation's
//! payload into one canonical [`NormalizedAssessment`].
//!
//! ## Responsibilities
//! - Enumerate which backend keys feed each canonical field
//!   ([`CanonicalField`]).
//! - Decide element shapes once at the parsing boundary ([`TextItem`]).
//! - Classify risk tiers in English and Italian, preserving unknown values.
//! - Translate every free-text field through the shared table.
//!
//! ## Data flow
//! Raw JSON response -> [`parse_analysis_response`] -> [`RawAnalysisResult`]
//! -> [`normalize`] -> presentation layer.
//!
//! ## Ownership and lifetimes
//! Parsed values are owned so nothing borrows from transient network
//! buffers. Normalization only reads its input.
//!
//! ## Error model
//! Only JSON text decoding can fail ([`AnalysisContractError`]). Once a body
//! is decoded, normalization always returns a value: missing or mistyped
//! fields take documented defaults and malformed findings are dropped.
//!
//! ## Example
//! ```rust
//! use phishforge_analysis_contract::{RiskTier, assess};
//! use phishforge_core::AnalysisMode;
//! use phishforge_translate::TranslationTable;
//!
//! let assessment = assess(
//!     r#"{"risk_level":"alto","risk_score":88}"#,
//!     AnalysisMode::Email,
//!     TranslationTable::builtin(),
//! )
//! .unwrap();
//! assert_eq!(assessment.risk_tier, RiskTier::High);
//! assert_eq!(assessment.score, 88);
//! ```

mod fields;
mod normalize;
mod raw;
mod tier;

pub use fields::{
    ATTACHMENT_NAME_KEYS, CanonicalField, DETAIL_TEXT_KEYS, RISK_FACTOR_TEXT_KEYS, coalesce,
};
pub use normalize::{
    AttachmentAssessment, AttachmentFile, Explainability, Finding, NormalizedAssessment,
    UNNAMED_ATTACHMENT, normalize, normalize_value,
};
pub use raw::{
    FindingEntry, MalformedFinding, RawAnalysisResult, RawAttachment, RawAttachmentFile,
    RawEducational, RawFinding, TextItem,
};
pub use tier::{ExplainabilityLabel, RiskTier};

use phishforge_core::AnalysisMode;
use phishforge_translate::TranslationTable;
use thiserror::Error;

/// Decodes a response body into its parsed, shape-decided form.
///
/// # Errors
/// Returns [`AnalysisContractError::Decode`] when `raw` is not JSON.
pub fn parse_analysis_response(raw: &str) -> Result<RawAnalysisResult, AnalysisContractError> {
    let value: serde_json::Value = serde_json::from_str(raw)?;
    Ok(RawAnalysisResult::from_value(&value))
}

/// Decodes and normalizes a response body in one step.
///
/// # Errors
/// Returns [`AnalysisContractError::Decode`] when `raw` is not JSON.
pub fn assess(
    raw: &str,
    mode: AnalysisMode,
    table: &TranslationTable,
) -> Result<NormalizedAssessment, AnalysisContractError> {
    let parsed = parse_analysis_response(raw)?;
    Ok(normalize(&parsed, mode, table))
}

/// Analysis contract errors.
#[derive(Debug, Error)]
pub enum AnalysisContractError {
    /// JSON decode failure.
    #[error("analysis decode failure: {0}")]
    Decode(#[from] serde_json::Error),
}
