// src/core/scanner/vulnerability_scanner.rs

use super::require_input;
use crate::core::knowledge_base::get_finding_detail;
use crate::core::models::{Finding, FindingKind, RiskLevel, ScoreError, VulnerabilityReport};
use tracing::{debug, info, warn};
use url::Url;

pub const MISSING_INPUT: &str = "Please provide a URL to scan";

const SENSITIVE_SEGMENTS: &[&str] = &["admin", "login"];

/// The parts of the target the checks look at.
struct Target {
    secure: bool,
    path: String,
}

impl Target {
    /// Uses the parsed scheme and path when possible, otherwise falls back to the raw string.
    fn from_input(input: &str) -> Self {
        match Url::parse(input.trim()) {
            Ok(url) => Target {
                secure: url.scheme() == "https",
                path: url.path().to_ascii_lowercase(),
            },
            Err(e) => {
                debug!(error = %e, "Input is not an absolute URL, checking raw string.");
                Target {
                    secure: input.trim_start().to_ascii_lowercase().starts_with("https://"),
                    path: input.to_ascii_lowercase(),
                }
            }
        }
    }
}

/// Runs the presence/absence checks against a URL.
pub fn run_vulnerability_scan(input: Option<&str>) -> Result<VulnerabilityReport, ScoreError> {
    let input = require_input(input, MISSING_INPUT)?;
    info!(url = input, "Starting vulnerability scan.");

    let target = Target::from_input(input);
    let mut vulnerabilities = Vec::new();

    if !target.secure {
        debug!("Scheme is not https, adding MissingHTTPS finding.");
        push_finding(&mut vulnerabilities, FindingKind::MissingHttps);
    }

    if SENSITIVE_SEGMENTS.iter().any(|s| target.path.contains(s)) {
        debug!(path = %target.path, "Sensitive endpoint in path, adding finding.");
        push_finding(&mut vulnerabilities, FindingKind::SensitiveEndpoint);
    }

    let (risk_level, message) = if vulnerabilities.is_empty() {
        (RiskLevel::Low, "No obvious vulnerabilities detected".to_string())
    } else {
        (
            RiskLevel::Medium,
            format!("Found {} potential issue(s)", vulnerabilities.len()),
        )
    };

    info!(findings = vulnerabilities.len(), risk = %risk_level, "Vulnerability scan finished.");
    Ok(VulnerabilityReport {
        url: input.to_string(),
        risk_level,
        vulnerabilities,
        message,
    })
}

fn push_finding(findings: &mut Vec<Finding>, kind: FindingKind) {
    match get_finding_detail(kind) {
        Some(detail) => {
            debug!(%kind, category = %detail.category, "Recording finding.");
            findings.push(detail.to_finding());
        }
        None => warn!(%kind, "No knowledge base entry for finding."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Severity;

    fn kinds(report: &VulnerabilityReport) -> Vec<FindingKind> {
        report.vulnerabilities.iter().map(|f| f.kind).collect()
    }

    #[test]
    fn missing_url_is_rejected() {
        assert_eq!(run_vulnerability_scan(None), Err(ScoreError::InvalidInput(MISSING_INPUT)));
    }

    #[test]
    fn plain_http_admin_page_has_two_findings() {
        let report = run_vulnerability_scan(Some("http://example.com/admin")).unwrap();
        assert_eq!(kinds(&report), vec![FindingKind::MissingHttps, FindingKind::SensitiveEndpoint]);
        assert_eq!(report.vulnerabilities[0].severity, Severity::Medium);
        assert_eq!(report.vulnerabilities[1].severity, Severity::Info);
        assert_eq!(report.risk_level, RiskLevel::Medium);
        assert_eq!(report.message, "Found 2 potential issue(s)");
    }

    #[test]
    fn https_root_is_clean() {
        let report = run_vulnerability_scan(Some("https://example.com/")).unwrap();
        assert!(report.vulnerabilities.is_empty());
        assert_eq!(report.risk_level, RiskLevel::Low);
        assert_eq!(report.message, "No obvious vulnerabilities detected");
        assert_eq!(report.url, "https://example.com/");
    }

    #[test]
    fn login_path_over_https_is_informational() {
        let report = run_vulnerability_scan(Some("https://example.com/user/Login")).unwrap();
        assert_eq!(kinds(&report), vec![FindingKind::SensitiveEndpoint]);
        assert_eq!(report.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn host_named_admin_is_not_a_sensitive_path() {
        let report = run_vulnerability_scan(Some("https://admin.example.com/")).unwrap();
        assert!(report.vulnerabilities.is_empty());
    }

    #[test]
    fn repeated_scans_are_identical() {
        let url = "http://example.com/login";
        assert_eq!(run_vulnerability_scan(Some(url)), run_vulnerability_scan(Some(url)));
    }

    #[test]
    fn schemeless_input_falls_back_to_raw_checks() {
        let report = run_vulnerability_scan(Some("example.com/admin")).unwrap();
        assert_eq!(kinds(&report), vec![FindingKind::MissingHttps, FindingKind::SensitiveEndpoint]);
    }
}
