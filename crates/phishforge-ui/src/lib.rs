#![warn(missing_docs)]
//! # phishforge-ui
//!
//! ## Purpose
//! Defines the UI-facing state model and tier visuals for `phishforge`.
//!
//! ## Responsibilities
//! - Track the current mode and what the result panel shows.
//! - Map risk tiers to CSS class, icon and headline, keeping `Unknown`
//!   visually distinct from `Low`.
//! - Format scores, badges and escaped text for rendering.
//!
//! ## Data flow
//! App orchestration events mutate [`UiState`]; the renderer reads
//! [`UiState::view`] and the visual helpers.
//!
//! ## Ownership and lifetimes
//! `UiState` owns the displayed assessment and error text. Nothing here is
//! global; the caller owns the state and passes it where needed.
//!
//! ## Error model
//! This crate favors explicit state over recoverable errors. Out-of-range
//! finding toggles are ignored.

use std::collections::BTreeSet;

use phishforge_analysis_contract::{ExplainabilityLabel, NormalizedAssessment, RiskTier};
use phishforge_core::AnalysisMode;
use phishforge_translate::TranslationTable;

/// Visual treatment for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierVisual {
    /// CSS class for card and score bar.
    pub css_class: &'static str,
    /// Font Awesome icon class.
    pub icon: &'static str,
    /// Headline text.
    pub headline: &'static str,
}

/// Returns the risk card visual for `tier`.
pub fn tier_visual(tier: RiskTier) -> TierVisual {
    match tier {
        RiskTier::High => TierVisual {
            css_class: "risk-high",
            icon: "fa-exclamation-triangle",
            headline: "HIGH RISK",
        },
        RiskTier::Medium => TierVisual {
            css_class: "risk-medium",
            icon: "fa-exclamation-circle",
            headline: "MEDIUM RISK",
        },
        RiskTier::Low => TierVisual {
            css_class: "risk-low",
            icon: "fa-check-circle",
            headline: "LOW RISK",
        },
        RiskTier::Unknown => TierVisual {
            css_class: "risk-unknown",
            icon: "fa-shield-alt",
            headline: "ANALYSIS COMPLETE",
        },
    }
}

/// Returns the explainability ribbon visual for `label`.
///
/// `Suspicious` borrows the medium treatment under its own headline.
pub fn ribbon_visual(label: ExplainabilityLabel) -> TierVisual {
    let visual = tier_visual(label.tone());
    match label {
        ExplainabilityLabel::Suspicious => TierVisual {
            headline: "SUSPICIOUS",
            ..visual
        },
        _ => visual,
    }
}

/// Badge shown above results; URL-only analyses are flagged.
pub fn mode_badge(mode: AnalysisMode) -> Option<&'static str> {
    match mode {
        AnalysisMode::Url => Some("Mode: URL only"),
        AnalysisMode::Email => None,
    }
}

/// Score caption such as `72/100`.
pub fn score_caption(score: u8) -> String {
    format!("{score}/100")
}

/// Score bar width such as `72%`.
pub fn score_bar_width(score: u8) -> String {
    format!("{}%", score.min(100))
}

/// Header of the findings card.
pub fn findings_header(count: usize) -> String {
    format!("Issues Detected ({count})")
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#039;"),
            other => escaped.push(other),
        }
    }
    escaped
}

/// What the result panel currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultView {
    /// Nothing submitted yet, or results hidden.
    Idle,
    /// Request in flight.
    Loading,
    /// Normalized assessment.
    Result(Box<NormalizedAssessment>),
    /// Translated error text.
    Error(String),
}

/// Aggregate UI runtime state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    /// App version string sourced from root `VERSION`.
    pub version: String,
    /// Active form.
    pub mode: AnalysisMode,
    view: ResultView,
    expanded_findings: BTreeSet<usize>,
}

impl UiState {
    /// Creates default UI state in email mode.
    pub fn new(version: impl Into<String>) -> Self {
        Self {
            version: version.into(),
            mode: AnalysisMode::Email,
            view: ResultView::Idle,
            expanded_findings: BTreeSet::new(),
        }
    }

    /// Returns the result panel content.
    pub fn view(&self) -> &ResultView {
        &self.view
    }

    /// Switches the active form and hides any shown result.
    pub fn switch_mode(&mut self, mode: AnalysisMode) {
        self.mode = mode;
        self.hide_results();
    }

    /// Marks a request as in flight.
    pub fn begin_loading(&mut self) {
        self.view = ResultView::Loading;
        self.expanded_findings.clear();
    }

    /// Returns `true` while submit buttons must stay disabled.
    pub fn busy(&self) -> bool {
        matches!(self.view, ResultView::Loading)
    }

    /// Shows an assessment; all findings start collapsed.
    pub fn show_assessment(&mut self, assessment: NormalizedAssessment) {
        self.view = ResultView::Result(Box::new(assessment));
        self.expanded_findings.clear();
    }

    /// Shows an error message after translating it.
    pub fn show_error(&mut self, message: &str, table: &TranslationTable) {
        self.view = ResultView::Error(table.translate(message));
        self.expanded_findings.clear();
    }

    /// Toggles one finding's explanation block.
    ///
    /// Returns the new expanded state; indexes without a finding stay
    /// collapsed.
    pub fn toggle_finding(&mut self, index: usize) -> bool {
        let finding_count = match &self.view {
            ResultView::Result(assessment) => assessment.findings.len(),
            _ => 0,
        };
        if index >= finding_count {
            return false;
        }

        if self.expanded_findings.remove(&index) {
            false
        } else {
            self.expanded_findings.insert(index);
            true
        }
    }

    /// Returns `true` when the finding at `index` is expanded.
    pub fn is_finding_expanded(&self, index: usize) -> bool {
        self.expanded_findings.contains(&index)
    }

    /// Clears results, keeping the active mode.
    pub fn reset(&mut self) {
        self.hide_results();
    }

    fn hide_results(&mut self) {
        self.view = ResultView::Idle;
        self.expanded_findings.clear();
    }

    /// One-line status for compact displays.
    pub fn status_text(&self) -> String {
        match &self.view {
            ResultView::Idle => "No analysis yet".to_string(),
            ResultView::Loading => "Analyzing...".to_string(),
            ResultView::Result(assessment) => format!(
                "{} ({})",
                tier_visual(assessment.risk_tier).headline,
                score_caption(assessment.score)
            ),
            ResultView::Error(message) => format!("Error: {message}"),
        }
    }
}
