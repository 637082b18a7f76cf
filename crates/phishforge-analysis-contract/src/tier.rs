//! Risk tier classification and tier-indexed canned sentences.

use serde::{Deserialize, Serialize};

/// UI-safe risk tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskTier {
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// High risk.
    High,
    /// Indicator absent or not understood. Never a synonym for `Low`.
    Unknown,
}

impl RiskTier {
    /// Classifies a backend risk indicator.
    ///
    /// Matching is case-insensitive and accepts English and Italian tokens.
    pub fn classify(indicator: Option<&str>) -> Self {
        let Some(indicator) = indicator else {
            return Self::Unknown;
        };

        match indicator.trim().to_lowercase().as_str() {
            "high" | "alto" => Self::High,
            "medium" | "medio" => Self::Medium,
            "low" | "basso" => Self::Low,
            _ => Self::Unknown,
        }
    }

    /// Lowercase tier name for logs.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }

    /// Recommendation used when the backend sends none.
    pub fn canned_recommendation(self) -> &'static str {
        match self {
            Self::Low => LOW_RECOMMENDATION,
            Self::Medium => MEDIUM_RECOMMENDATION,
            Self::High => HIGH_RECOMMENDATION,
            Self::Unknown => UNKNOWN_RECOMMENDATION,
        }
    }

    /// Risk-factor sentence used when the backend sends no factors.
    ///
    /// `Unknown` shares the `High` sentence: an unreadable verdict is treated
    /// with suspicion here.
    pub fn canned_risk_factor(self) -> &'static str {
        match self {
            Self::Low => LOW_RISK_FACTOR,
            Self::Medium => MEDIUM_RISK_FACTOR,
            Self::High | Self::Unknown => HIGH_RISK_FACTOR,
        }
    }
}

/// Classification used only by the explainability ribbon.
///
/// Looser than [`RiskTier`]: it also accepts `suspicious`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExplainabilityLabel {
    /// Low risk.
    Low,
    /// Medium risk.
    Medium,
    /// Suspicious; rendered like `Medium`.
    Suspicious,
    /// High risk.
    High,
    /// Indicator absent or not understood.
    Unknown,
}

impl ExplainabilityLabel {
    /// Classifies a backend risk indicator for the explainability ribbon.
    pub fn classify(indicator: Option<&str>) -> Self {
        match indicator.map(|raw| raw.trim().to_lowercase()).as_deref() {
            Some("suspicious") => Self::Suspicious,
            other => match RiskTier::classify(other) {
                RiskTier::Low => Self::Low,
                RiskTier::Medium => Self::Medium,
                RiskTier::High => Self::High,
                RiskTier::Unknown => Self::Unknown,
            },
        }
    }

    /// Tier whose visual treatment this label borrows.
    pub fn tone(self) -> RiskTier {
        match self {
            Self::Low => RiskTier::Low,
            Self::Medium | Self::Suspicious => RiskTier::Medium,
            Self::High => RiskTier::High,
            Self::Unknown => RiskTier::Unknown,
        }
    }

    /// Lowercase label name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::Suspicious => "suspicious",
            Self::High => "high",
            Self::Unknown => "unknown",
        }
    }
}

const LOW_RECOMMENDATION: &str = "Low risk. No clear phishing indicators were detected, but stay cautious and verify the sender if something feels unusual.";
const MEDIUM_RECOMMENDATION: &str = "Medium risk. Some suspicious patterns were found. Double-check the sender and links before clicking or sharing any information.";
const HIGH_RECOMMENDATION: &str = "High risk. This message matches common phishing patterns. Do not click any links or share credentials. Treat it as a likely phishing attempt.";
const UNKNOWN_RECOMMENDATION: &str = "Analysis complete. Check the details below.";

const LOW_RISK_FACTOR: &str =
    "No significant risk factors were identified; the content resembles legitimate traffic.";
const MEDIUM_RISK_FACTOR: &str =
    "Some elements deviate from legitimate patterns and deserve a closer look.";
const HIGH_RISK_FACTOR: &str =
    "Several strong phishing signals contributed to this verdict; treat the content as untrusted.";
