//! Compatibility matrix between canonical fields and backend keys.
//!
//! Every backend generation added keys without removing old ones. Each
//! canonical field lists its source keys in priority order; the first key
//! that is present and non-null wins.

use serde_json::{Map, Value};

/// Canonical field resolved from one or more backend keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CanonicalField {
    /// Textual risk verdict.
    RiskIndicator,
    /// Numeric 0-100 risk score.
    Score,
    /// Explainability confidence.
    Confidence,
    /// Free-text recommendation.
    Recommendation,
    /// Itemized analysis details.
    DetailItems,
    /// Structured findings with educational blocks.
    Findings,
    /// URLs extracted by the backend.
    Urls,
    /// Attachment sub-result score.
    AttachmentScore,
    /// Attachment flags and file list.
    AttachmentDetails,
    /// Explainability risk factors.
    RiskFactors,
}

impl CanonicalField {
    /// All canonical fields, in output order.
    pub const ALL: [CanonicalField; 10] = [
        Self::RiskIndicator,
        Self::Score,
        Self::Confidence,
        Self::Recommendation,
        Self::DetailItems,
        Self::Findings,
        Self::Urls,
        Self::AttachmentScore,
        Self::AttachmentDetails,
        Self::RiskFactors,
    ];

    /// Backend keys checked for this field, in priority order.
    pub fn source_keys(self) -> &'static [&'static str] {
        match self {
            Self::RiskIndicator => &["risk_level", "label", "classification"],
            Self::Score => &["risk_score", "confidence_score"],
            Self::Confidence => &["confidence"],
            Self::Recommendation => &["recommendation"],
            Self::DetailItems => &["analysisDetails", "details", "indicators"],
            Self::Findings => &["findings"],
            Self::Urls => &["urls"],
            Self::AttachmentScore => &["attachment_score"],
            Self::AttachmentDetails => &["attachment_details"],
            Self::RiskFactors => &["risk_factors", "factors"],
        }
    }

    /// Returns the first present, non-null value among this field's keys.
    pub fn coalesce(self, object: &Map<String, Value>) -> Option<&Value> {
        coalesce(object, self.source_keys())
    }
}

/// Sub-keys that carry text inside record-shaped detail items.
pub const DETAIL_TEXT_KEYS: &[&str] = &["message", "description", "text"];

/// Sub-keys that carry text inside record-shaped risk factors.
pub const RISK_FACTOR_TEXT_KEYS: &[&str] = &["description", "message", "reason"];

/// Keys naming one attachment file.
pub const ATTACHMENT_NAME_KEYS: &[&str] = &["filename", "name"];

/// Returns the first value under `keys` that is present and not `null`.
pub fn coalesce<'a>(object: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter()
        .filter_map(|key| object.get(*key))
        .find(|value| !value.is_null())
}
