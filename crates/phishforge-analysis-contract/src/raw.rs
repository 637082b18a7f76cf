//! Parsing boundary for backend result payloads.
//!
//! Shape decisions (string vs record vs anything else) are made here, once,
//! so normalization works on a closed set of variants.

use serde_json::{Map, Value};
use tracing::debug;

use crate::fields::{
    ATTACHMENT_NAME_KEYS, CanonicalField, DETAIL_TEXT_KEYS, RISK_FACTOR_TEXT_KEYS, coalesce,
};

/// One free-text element after its shape has been decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TextItem {
    /// Element was plain text.
    Text(String),
    /// Element was a record; text extracted from one of its known sub-keys.
    Nested(String),
    /// Element had no usable text; its JSON rendering.
    Literal(String),
}

impl TextItem {
    /// Decides the shape of one list element.
    ///
    /// Records yield the first non-empty string under `record_keys`.
    pub fn from_value(value: &Value, record_keys: &[&str]) -> Self {
        match value {
            Value::String(text) => Self::Text(text.clone()),
            Value::Object(record) => record_keys
                .iter()
                .filter_map(|key| record.get(*key).and_then(Value::as_str))
                .find(|text| !text.is_empty())
                .map(|text| Self::Nested(text.to_string()))
                .unwrap_or_else(|| Self::Literal(value.to_string())),
            other => Self::Literal(other.to_string()),
        }
    }

    /// Returns `true` when the text came from the backend as prose and
    /// should be translated.
    pub fn is_prose(&self) -> bool {
        matches!(self, Self::Text(_) | Self::Nested(_))
    }

    /// Returns the carried text.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(text) | Self::Nested(text) | Self::Literal(text) => text,
        }
    }
}

/// Educational block attached to one finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawEducational {
    /// Short finding title.
    pub title: String,
    /// Why the indicator matters.
    pub explanation: String,
    /// Advice items.
    pub tips: Vec<TextItem>,
}

/// One finding that carried a well-formed educational block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFinding {
    /// Score contribution.
    pub risk_score: i64,
    /// Finding detail text.
    pub detail: TextItem,
    /// Educational block.
    pub educational: RawEducational,
}

/// Why a finding could not be used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MalformedFinding {
    /// Element was not a record.
    NotARecord,
    /// `educational` missing, null, or not a record.
    MissingEducational,
    /// `educational.title` missing or not text.
    MissingTitle,
    /// `educational.explanation` missing or not text.
    MissingExplanation,
    /// `educational.tips` missing or not a list.
    MissingTips,
}

/// Finding list element: usable, or the reason it is not.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingEntry {
    /// Finding with all mandatory nested fields.
    WellFormed(RawFinding),
    /// Finding that must not be rendered.
    Malformed(MalformedFinding),
}

/// One file listed in the attachment sub-result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAttachmentFile {
    /// `filename` or `name`, when present.
    pub name: Option<String>,
    /// Size in bytes, when present.
    pub size: Option<u64>,
}

/// Attachment sub-result; only built when `attachment_score` is non-null.
#[derive(Debug, Clone, PartialEq)]
pub struct RawAttachment {
    /// Attachment score; `None` when the value was not numeric.
    pub score: Option<f64>,
    /// Double extension such as `invoice.pdf.exe`.
    pub double_extension: bool,
    /// HTML content disguised as another type.
    pub html_disguised: bool,
    /// Declared MIME type disagrees with content.
    pub mime_mismatch: bool,
    /// Inherently dangerous file type.
    pub high_risk_type: bool,
    /// Listed files.
    pub files: Vec<RawAttachmentFile>,
}

/// Backend result after key coalescing and shape decisions.
///
/// Built infallibly: absent or mistyped fields become `None` or empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawAnalysisResult {
    /// Risk indicator text as sent.
    pub risk_indicator: Option<String>,
    /// Numeric score as sent.
    pub score: Option<f64>,
    /// Explainability confidence as sent.
    pub confidence: Option<f64>,
    /// Recommendation text as sent.
    pub recommendation: Option<String>,
    /// Detail list elements.
    pub detail_items: Vec<TextItem>,
    /// Finding list elements.
    pub findings: Vec<FindingEntry>,
    /// URL list elements.
    pub urls: Vec<TextItem>,
    /// Attachment sub-result.
    pub attachment: Option<RawAttachment>,
    /// Risk factor elements.
    pub risk_factors: Vec<TextItem>,
}

impl RawAnalysisResult {
    /// Reads a decoded response body. Non-object bodies yield an empty
    /// result.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            debug!(kind = json_kind(value), "analysis body is not an object");
            return Self::default();
        };

        Self {
            risk_indicator: text_field(object, CanonicalField::RiskIndicator),
            score: number_field(object, CanonicalField::Score),
            confidence: number_field(object, CanonicalField::Confidence),
            recommendation: text_field(object, CanonicalField::Recommendation),
            detail_items: text_list(object, CanonicalField::DetailItems, DETAIL_TEXT_KEYS),
            findings: list_field(object, CanonicalField::Findings)
                .iter()
                .map(parse_finding)
                .collect(),
            urls: text_list(object, CanonicalField::Urls, &[]),
            attachment: parse_attachment(object),
            risk_factors: text_list(object, CanonicalField::RiskFactors, RISK_FACTOR_TEXT_KEYS),
        }
    }
}

fn text_field(object: &Map<String, Value>, field: CanonicalField) -> Option<String> {
    let value = field.coalesce(object)?;
    match value.as_str() {
        Some(text) => Some(text.to_string()),
        None => {
            debug!(field = ?field, kind = json_kind(value), "ignoring non-text field");
            None
        }
    }
}

fn number_field(object: &Map<String, Value>, field: CanonicalField) -> Option<f64> {
    let value = field.coalesce(object)?;
    let number = as_number(value);
    if number.is_none() {
        debug!(field = ?field, kind = json_kind(value), "ignoring non-numeric field");
    }
    number
}

fn list_field(object: &Map<String, Value>, field: CanonicalField) -> &[Value] {
    match field.coalesce(object) {
        Some(Value::Array(items)) => items.as_slice(),
        Some(other) => {
            debug!(field = ?field, kind = json_kind(other), "ignoring non-list field");
            &[]
        }
        None => &[],
    }
}

fn text_list(
    object: &Map<String, Value>,
    field: CanonicalField,
    record_keys: &[&str],
) -> Vec<TextItem> {
    list_field(object, field)
        .iter()
        .map(|item| TextItem::from_value(item, record_keys))
        .collect()
}

/// Accepts JSON numbers and numeric strings such as `"85"`.
fn as_number(value: &Value) -> Option<f64> {
    let number = match value {
        Value::Number(number) => number.as_f64(),
        Value::String(text) => text.trim().parse::<f64>().ok(),
        _ => None,
    };
    number.filter(|number| number.is_finite())
}

fn parse_finding(value: &Value) -> FindingEntry {
    let Some(finding) = value.as_object() else {
        return FindingEntry::Malformed(MalformedFinding::NotARecord);
    };
    let Some(educational) = finding.get("educational").and_then(Value::as_object) else {
        return FindingEntry::Malformed(MalformedFinding::MissingEducational);
    };
    let Some(title) = educational.get("title").and_then(Value::as_str) else {
        return FindingEntry::Malformed(MalformedFinding::MissingTitle);
    };
    let Some(explanation) = educational.get("explanation").and_then(Value::as_str) else {
        return FindingEntry::Malformed(MalformedFinding::MissingExplanation);
    };
    let Some(tips) = educational.get("tips").and_then(Value::as_array) else {
        return FindingEntry::Malformed(MalformedFinding::MissingTips);
    };

    let detail = match finding.get("detail") {
        None | Some(Value::Null) => TextItem::Text(String::new()),
        Some(other) => TextItem::from_value(other, &[]),
    };

    FindingEntry::WellFormed(RawFinding {
        risk_score: finding
            .get("risk_score")
            .and_then(as_number)
            .map(|score| score.round() as i64)
            .unwrap_or(0),
        detail,
        educational: RawEducational {
            title: title.to_string(),
            explanation: explanation.to_string(),
            tips: tips
                .iter()
                .map(|tip| TextItem::from_value(tip, &[]))
                .collect(),
        },
    })
}

fn parse_attachment(object: &Map<String, Value>) -> Option<RawAttachment> {
    let score = CanonicalField::AttachmentScore.coalesce(object)?;
    let details = CanonicalField::AttachmentDetails
        .coalesce(object)
        .and_then(Value::as_object);
    let flag = |key: &str| {
        details
            .and_then(|record| record.get(key))
            .and_then(Value::as_bool)
            .unwrap_or(false)
    };

    let files = details
        .and_then(|record| record.get("attachments"))
        .and_then(Value::as_array)
        .map(|files| {
            files
                .iter()
                .filter_map(Value::as_object)
                .map(|file| RawAttachmentFile {
                    name: coalesce(file, ATTACHMENT_NAME_KEYS)
                        .and_then(Value::as_str)
                        .map(str::to_string),
                    size: file.get("size").and_then(Value::as_u64),
                })
                .collect()
        })
        .unwrap_or_default();

    Some(RawAttachment {
        score: as_number(score),
        double_extension: flag("double_extension"),
        html_disguised: flag("html_disguised"),
        mime_mismatch: flag("mime_mismatch"),
        high_risk_type: flag("high_risk_type"),
        files,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
