//! Raw result -> canonical assessment.

use phishforge_core::AnalysisMode;
use phishforge_translate::TranslationTable;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::raw::{FindingEntry, RawAnalysisResult, RawAttachment, TextItem};
use crate::tier::{ExplainabilityLabel, RiskTier};

/// Name shown for attachment files the backend did not name.
pub const UNNAMED_ATTACHMENT: &str = "unnamed attachment";

/// Canonical, presentable risk assessment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedAssessment {
    /// Mode of the request that produced the result.
    pub mode: AnalysisMode,
    /// Primary risk tier.
    pub risk_tier: RiskTier,
    /// Risk score in [0, 100]; 0 when the backend sent none.
    pub score: u8,
    /// Translated, non-empty recommendation.
    pub recommendation_text: String,
    /// Translated detail lines, in source order.
    pub detail_items: Vec<String>,
    /// Well-formed findings, in source order.
    pub findings: Vec<Finding>,
    /// Reported URLs.
    pub urls: Vec<String>,
    /// Attachment sub-result; `None` when attachments were not evaluated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_assessment: Option<AttachmentAssessment>,
    /// Explainability ribbon content.
    pub explainability: Explainability,
}

/// One explained finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Score contribution, shown as `+N`.
    pub score_delta: i64,
    /// Translated detail line.
    pub detail_text: String,
    /// Translated title.
    pub title: String,
    /// Translated explanation.
    pub explanation: String,
    /// Translated tips.
    pub tips: Vec<String>,
}

/// Attachment analysis outcome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentAssessment {
    /// Attachment score in [0, 100]. Zero means evaluated and clean.
    pub score: u8,
    /// Double extension detected.
    pub double_extension: bool,
    /// HTML disguised as another type.
    pub html_disguised: bool,
    /// MIME type mismatch.
    pub mime_mismatch: bool,
    /// High-risk file type.
    pub high_risk_type: bool,
    /// Listed files.
    pub files: Vec<AttachmentFile>,
}

impl AttachmentAssessment {
    /// Number of detected flags.
    pub fn detected_flag_count(&self) -> usize {
        [
            self.double_extension,
            self.html_disguised,
            self.mime_mismatch,
            self.high_risk_type,
        ]
        .into_iter()
        .filter(|flag| *flag)
        .count()
    }
}

/// One attachment file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachmentFile {
    /// File name, or [`UNNAMED_ATTACHMENT`].
    pub name: String,
    /// Size in bytes when reported.
    pub size_bytes: Option<u64>,
}

/// Explainability ribbon content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explainability {
    /// Ribbon label.
    pub label: ExplainabilityLabel,
    /// Confidence in [0, 100].
    pub confidence_percent: u8,
    /// Translated risk factors; never empty.
    pub risk_factors: Vec<String>,
}

/// Normalizes one decoded response body.
pub fn normalize_value(
    value: &Value,
    mode: AnalysisMode,
    table: &TranslationTable,
) -> NormalizedAssessment {
    normalize(&RawAnalysisResult::from_value(value), mode, table)
}

/// Normalizes one parsed result.
///
/// Never fails: every absent or malformed field degrades to its default,
/// and malformed findings are dropped individually.
pub fn normalize(
    raw: &RawAnalysisResult,
    mode: AnalysisMode,
    table: &TranslationTable,
) -> NormalizedAssessment {
    let risk_tier = RiskTier::classify(raw.risk_indicator.as_deref());
    if risk_tier == RiskTier::Unknown {
        debug!(indicator = ?raw.risk_indicator, "risk indicator not recognized");
    }
    let score = raw.score.map(percent).unwrap_or(0);

    NormalizedAssessment {
        mode,
        risk_tier,
        score,
        recommendation_text: recommendation(raw, risk_tier, table),
        detail_items: render_items(&raw.detail_items, table),
        findings: findings(raw, table),
        urls: raw.urls.iter().map(|url| url.as_str().to_string()).collect(),
        attachment_assessment: raw.attachment.as_ref().map(attachment),
        explainability: explainability(raw, risk_tier, score, table),
    }
}

fn recommendation(raw: &RawAnalysisResult, tier: RiskTier, table: &TranslationTable) -> String {
    raw.recommendation
        .as_deref()
        .filter(|text| !text.trim().is_empty())
        .map(|text| table.translate(text))
        .filter(|text| !text.trim().is_empty())
        .unwrap_or_else(|| tier.canned_recommendation().to_string())
}

fn render_item(item: &TextItem, table: &TranslationTable) -> String {
    if item.is_prose() {
        table.translate(item.as_str())
    } else {
        item.as_str().to_string()
    }
}

fn render_items(items: &[TextItem], table: &TranslationTable) -> Vec<String> {
    items.iter().map(|item| render_item(item, table)).collect()
}

fn findings(raw: &RawAnalysisResult, table: &TranslationTable) -> Vec<Finding> {
    raw.findings
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| match entry {
            FindingEntry::WellFormed(finding) => Some(Finding {
                score_delta: finding.risk_score,
                detail_text: render_item(&finding.detail, table),
                title: table.translate(&finding.educational.title),
                explanation: table.translate(&finding.educational.explanation),
                tips: render_items(&finding.educational.tips, table),
            }),
            FindingEntry::Malformed(reason) => {
                debug!(index, reason = ?reason, "dropping malformed finding");
                None
            }
        })
        .collect()
}

fn attachment(raw: &RawAttachment) -> AttachmentAssessment {
    AttachmentAssessment {
        score: raw.score.map(percent).unwrap_or(0),
        double_extension: raw.double_extension,
        html_disguised: raw.html_disguised,
        mime_mismatch: raw.mime_mismatch,
        high_risk_type: raw.high_risk_type,
        files: raw
            .files
            .iter()
            .map(|file| AttachmentFile {
                name: file
                    .name
                    .clone()
                    .filter(|name| !name.trim().is_empty())
                    .unwrap_or_else(|| UNNAMED_ATTACHMENT.to_string()),
                size_bytes: file.size,
            })
            .collect(),
    }
}

fn explainability(
    raw: &RawAnalysisResult,
    tier: RiskTier,
    score: u8,
    table: &TranslationTable,
) -> Explainability {
    let mut risk_factors = render_items(&raw.risk_factors, table);
    if risk_factors.is_empty() {
        risk_factors.push(tier.canned_risk_factor().to_string());
    }

    Explainability {
        label: ExplainabilityLabel::classify(raw.risk_indicator.as_deref()),
        confidence_percent: raw.confidence.map(confidence_percent).unwrap_or(score),
        risk_factors,
    }
}

/// Rounds and clamps into [0, 100].
fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// Confidence may arrive as a ratio in (0, 1) or as a percentage.
fn confidence_percent(value: f64) -> u8 {
    if value > 0.0 && value < 1.0 {
        percent(value * 100.0)
    } else {
        percent(value)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn run(value: Value) -> NormalizedAssessment {
        normalize_value(&value, AnalysisMode::Email, TranslationTable::builtin())
    }

    #[test]
    fn score_is_clamped_and_rounded() {
        assert_eq!(run(json!({"risk_score": 140})).score, 100);
        assert_eq!(run(json!({"risk_score": -3})).score, 0);
        assert_eq!(run(json!({"risk_score": 41.6})).score, 42);
        assert_eq!(run(json!({})).score, 0);
    }

    #[test]
    fn tier_and_score_are_not_reconciled() {
        let assessment = run(json!({"risk_level": "high", "risk_score": 10}));
        assert_eq!(assessment.risk_tier, RiskTier::High);
        assert_eq!(assessment.score, 10);
    }

    #[test]
    fn blank_recommendation_uses_canned_sentence() {
        let assessment = run(json!({"risk_level": "medio", "recommendation": "  "}));
        assert_eq!(
            assessment.recommendation_text,
            RiskTier::Medium.canned_recommendation()
        );
    }

    #[test]
    fn recommendation_is_translated() {
        let assessment = run(json!({
            "risk_level": "alto",
            "recommendation": "Errore durante l'analisi. Riprova più tardi.",
        }));
        assert_eq!(
            assessment.recommendation_text,
            "Analysis error. Please try again later."
        );
    }

    #[test]
    fn literal_items_are_not_translated() {
        let table = TranslationTable::new([("7", "seven")]).expect("table should build");
        let assessment = normalize_value(
            &json!({"indicators": ["7", 7]}),
            AnalysisMode::Url,
            &table,
        );
        assert_eq!(assessment.detail_items, vec!["seven", "7"]);
        assert_eq!(assessment.mode, AnalysisMode::Url);
    }

    #[test]
    fn confidence_prefers_own_field_then_score() {
        assert_eq!(
            run(json!({"risk_score": 30, "confidence": 0.87}))
                .explainability
                .confidence_percent,
            87
        );
        assert_eq!(
            run(json!({"risk_score": 30, "confidence": 64}))
                .explainability
                .confidence_percent,
            64
        );
        assert_eq!(
            run(json!({"risk_score": 30})).explainability.confidence_percent,
            30
        );
    }

    #[test]
    fn risk_factor_records_are_extracted() {
        let assessment = run(json!({
            "risk_level": "high",
            "factors": [{"reason": "Mittente sospetto"}, "Linguaggio urgente"],
        }));
        assert_eq!(
            assessment.explainability.risk_factors,
            vec!["Suspicious sender", "Urgent language"]
        );
    }

    #[test]
    fn unknown_tier_falls_back_to_high_risk_factor() {
        let assessment = run(json!({"classification": "phishy"}));
        assert_eq!(assessment.risk_tier, RiskTier::Unknown);
        assert_eq!(
            assessment.explainability.risk_factors,
            vec![RiskTier::High.canned_risk_factor()]
        );
    }

    #[test]
    fn serializes_with_camel_case_and_omits_missing_attachment() {
        let value = serde_json::to_value(run(json!({"risk_level": "low"})))
            .expect("assessment should serialize");
        assert_eq!(value["riskTier"], json!("Low"));
        assert!(value.get("recommendationText").is_some());
        assert!(value.get("attachmentAssessment").is_none());
        assert_eq!(value["explainability"]["label"], json!("low"));
    }

    #[test]
    fn unnamed_attachment_files_get_placeholder() {
        let assessment = run(json!({
            "attachment_score": "55",
            "attachment_details": {"attachments": [{"size": 10}]},
        }));
        let attachment = assessment
            .attachment_assessment
            .expect("attachment should be present");
        assert_eq!(attachment.score, 55);
        assert_eq!(attachment.files[0].name, UNNAMED_ATTACHMENT);
        assert_eq!(attachment.detected_flag_count(), 0);
    }
}
