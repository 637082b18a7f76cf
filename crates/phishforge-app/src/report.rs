//! Plain-text rendering of a normalized assessment.

use std::fmt;

use phishforge_analysis_contract::NormalizedAssessment;
use phishforge_ui::{findings_header, mode_badge, ribbon_visual, score_caption, tier_visual};

/// Display adapter writing a terminal report.
pub struct Report<'a>(pub &'a NormalizedAssessment);

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let assessment = self.0;
        if let Some(badge) = mode_badge(assessment.mode) {
            writeln!(f, "[{badge}]")?;
        }

        let visual = tier_visual(assessment.risk_tier);
        writeln!(f, "{} - {}", visual.headline, score_caption(assessment.score))?;
        writeln!(f, "{}", assessment.recommendation_text)?;

        if !assessment.detail_items.is_empty() {
            writeln!(f)?;
            writeln!(f, "Details:")?;
            for item in &assessment.detail_items {
                writeln!(f, "  - {item}")?;
            }
        }

        if !assessment.findings.is_empty() {
            writeln!(f)?;
            writeln!(f, "{}:", findings_header(assessment.findings.len()))?;
            for finding in &assessment.findings {
                writeln!(f, "  [+{}] {}", finding.score_delta, finding.title)?;
                writeln!(f, "      {}", finding.detail_text)?;
                writeln!(f, "      {}", finding.explanation)?;
                for tip in &finding.tips {
                    writeln!(f, "      * {tip}")?;
                }
            }
        }

        if !assessment.urls.is_empty() {
            writeln!(f)?;
            writeln!(f, "URLs found ({}):", assessment.urls.len())?;
            for url in &assessment.urls {
                writeln!(f, "  - {url}")?;
            }
        }

        if let Some(attachment) = &assessment.attachment_assessment {
            writeln!(f)?;
            writeln!(
                f,
                "Attachments: {} ({} risk flags)",
                score_caption(attachment.score),
                attachment.detected_flag_count()
            )?;
            let flags = [
                ("double extension", attachment.double_extension),
                ("disguised HTML", attachment.html_disguised),
                ("MIME mismatch", attachment.mime_mismatch),
                ("high-risk type", attachment.high_risk_type),
            ];
            for (name, detected) in flags {
                if detected {
                    writeln!(f, "  ! {name}")?;
                }
            }
            for file in &attachment.files {
                match file.size_bytes {
                    Some(size) => writeln!(f, "  - {} ({size} bytes)", file.name)?,
                    None => writeln!(f, "  - {}", file.name)?,
                }
            }
        }

        let explainability = &assessment.explainability;
        writeln!(f)?;
        writeln!(
            f,
            "{} - confidence {}%",
            ribbon_visual(explainability.label).headline,
            explainability.confidence_percent
        )?;
        for factor in &explainability.risk_factors {
            writeln!(f, "  - {factor}")?;
        }
        Ok(())
    }
}

/// Renders `assessment` as a terminal report.
pub fn render_report(assessment: &NormalizedAssessment) -> String {
    Report(assessment).to_string()
}
