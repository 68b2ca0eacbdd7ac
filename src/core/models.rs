// src/core/models.rs

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;

// --- Errors ---

/// The only way a scorer can fail: the required field was missing or empty.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    #[error("{0}")]
    InvalidInput(&'static str),
}

// --- Shared scoring primitives ---

/// Upper bound of every heuristic score.
pub const MAX_SCORE: i32 = 100;

/// Clamps a raw accumulated score into the `[0, 100]` range.
pub fn clamp_score(raw: i32) -> u8 {
    raw.clamp(0, MAX_SCORE) as u8
}

/// Severity attached to a vulnerability finding.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Medium,
    Info,
}

// --- Phishing ---

/// Discrete phishing category derived from the accumulated score.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum RiskStatus {
    Safe,
    LowRisk,
    MediumRisk,
    HighRisk,
}

impl RiskStatus {
    /// Threshold lookup: `>=70` high, `>=40` medium, `>0` low, otherwise safe.
    pub fn from_score(score: i32) -> Self {
        if score >= 70 {
            RiskStatus::HighRisk
        } else if score >= 40 {
            RiskStatus::MediumRisk
        } else if score > 0 {
            RiskStatus::LowRisk
        } else {
            RiskStatus::Safe
        }
    }

    /// Human sentence shown next to the verdict.
    pub fn message(&self) -> String {
        match self {
            RiskStatus::Safe => "This appears to be safe".to_string(),
            other => format!("This appears to be {}", other.as_ref().replacen('-', " ", 1)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PhishingReport {
    pub status: RiskStatus,
    pub risk_score: u8,
    pub detected_patterns: Vec<String>,
    pub message: String,
}

// --- Vulnerability ---

/// The kinds of issue the URL scanner knows how to flag.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, AsRefStr)]
pub enum FindingKind {
    #[serde(rename = "MissingHTTPS")]
    #[strum(serialize = "MissingHTTPS")]
    MissingHttps,
    SensitiveEndpoint,
}

/// A structured vulnerability-check result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    #[serde(rename = "type")]
    pub kind: FindingKind,
    pub title: String,
    pub severity: Severity,
    pub description: String,
    pub remediation: String,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum RiskLevel {
    Low,
    Medium,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VulnerabilityReport {
    pub url: String,
    pub risk_level: RiskLevel,
    pub vulnerabilities: Vec<Finding>,
    pub message: String,
}

// --- Password ---

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StrengthLevel {
    Weak,
    Fair,
    Moderate,
    Strong,
}

impl StrengthLevel {
    /// Threshold lookup: `>=80` strong, `>=60` moderate, `>=40` fair, otherwise weak.
    pub fn from_score(score: i32) -> Self {
        if score >= 80 {
            StrengthLevel::Strong
        } else if score >= 60 {
            StrengthLevel::Moderate
        } else if score >= 40 {
            StrengthLevel::Fair
        } else {
            StrengthLevel::Weak
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordReport {
    pub strength: u8,
    pub strength_level: StrengthLevel,
    pub feedback: Vec<String>,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_score_bounds() {
        assert_eq!(clamp_score(-30), 0);
        assert_eq!(clamp_score(55), 55);
        assert_eq!(clamp_score(145), 100);
    }

    #[test]
    fn risk_status_thresholds() {
        assert_eq!(RiskStatus::from_score(0), RiskStatus::Safe);
        assert_eq!(RiskStatus::from_score(1), RiskStatus::LowRisk);
        assert_eq!(RiskStatus::from_score(39), RiskStatus::LowRisk);
        assert_eq!(RiskStatus::from_score(40), RiskStatus::MediumRisk);
        assert_eq!(RiskStatus::from_score(70), RiskStatus::HighRisk);
    }

    #[test]
    fn risk_status_messages() {
        assert_eq!(RiskStatus::Safe.message(), "This appears to be safe");
        assert_eq!(RiskStatus::HighRisk.message(), "This appears to be high risk");
        assert_eq!(RiskStatus::LowRisk.to_string(), "low-risk");
    }

    #[test]
    fn strength_level_thresholds() {
        assert_eq!(StrengthLevel::from_score(-10), StrengthLevel::Weak);
        assert_eq!(StrengthLevel::from_score(40), StrengthLevel::Fair);
        assert_eq!(StrengthLevel::from_score(60), StrengthLevel::Moderate);
        assert_eq!(StrengthLevel::from_score(80), StrengthLevel::Strong);
    }

    #[test]
    fn finding_kind_wire_names() {
        let json = serde_json::to_value(FindingKind::MissingHttps).unwrap();
        assert_eq!(json, "MissingHTTPS");
        assert_eq!(Severity::Medium.to_string(), "medium");
    }
}
