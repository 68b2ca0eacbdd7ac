//! Static, read-only catalogue of every finding the URL scanner can raise,
//! with the human-readable explanation and remediation returned to clients.

use crate::core::models::{Finding, FindingKind, Severity};
use std::fmt;

/// High-level grouping of findings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum FindingCategory {
    /// Findings about how the connection is protected.
    Transport,
    /// Findings about what the URL exposes.
    Exposure,
}

impl fmt::Display for FindingCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FindingCategory::Transport => write!(f, "Transport Security"),
            FindingCategory::Exposure => write!(f, "Endpoint Exposure"),
        }
    }
}

/// Everything needed to present a finding to a user.
pub struct FindingDetail {
    pub kind: FindingKind,
    pub title: &'static str,
    pub category: FindingCategory,
    pub severity: Severity,
    pub description: &'static str,
    pub remediation: &'static str,
}

impl FindingDetail {
    /// Materialises the catalogue entry as an owned finding.
    pub fn to_finding(&self) -> Finding {
        Finding {
            kind: self.kind,
            title: self.title.to_string(),
            severity: self.severity,
            description: self.description.to_string(),
            remediation: self.remediation.to_string(),
        }
    }
}

static FINDINGS: &[FindingDetail] = &[
    FindingDetail {
        kind: FindingKind::MissingHttps,
        title: "Missing HTTPS",
        category: FindingCategory::Transport,
        severity: Severity::Medium,
        description: "The website does not use HTTPS encryption",
        remediation: "Serve the site over HTTPS with a valid certificate and redirect plain HTTP requests to the secure origin.",
    },
    FindingDetail {
        kind: FindingKind::SensitiveEndpoint,
        title: "Sensitive Endpoint",
        category: FindingCategory::Exposure,
        severity: Severity::Info,
        description: "Sensitive endpoint detected",
        remediation: "Make sure administrative and login pages enforce strong authentication, rate limiting and are not linked publicly unless required.",
    },
];

/// Looks up the catalogue entry for a finding kind.
pub fn get_finding_detail(kind: FindingKind) -> Option<&'static FindingDetail> {
    FINDINGS.iter().find(|f| f.kind == kind)
}
