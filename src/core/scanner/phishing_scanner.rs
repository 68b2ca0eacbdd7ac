// src/core/scanner/phishing_scanner.rs

use super::{Check, Rule, evaluate, require_input};
use crate::core::models::{PhishingReport, RiskStatus, ScoreError, clamp_score};
use once_cell::sync::Lazy;
use regex::Regex;
use std::net::Ipv4Addr;
use tracing::{debug, info};
use url::{Host, Url};

pub const MISSING_INPUT: &str = "Please provide an email or URL to analyze";

const PATTERN_WEIGHT: i32 = 20;
const DOMAIN_MISMATCH_WEIGHT: i32 = 30;
const IP_HOST_WEIGHT: i32 = 25;
const INVALID_URL_WEIGHT: i32 = 15;

pub const LABEL_DOMAIN_MISMATCH: &str = "Suspicious domain mismatch";
pub const LABEL_IP_HOST: &str = "IP address used instead of domain";
pub const LABEL_INVALID_URL: &str = "Invalid URL format";

static RE_SHORTENER: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:http|https)://(?:www\.)?(?:bit\.ly|tinyurl|t\.co|goo\.gl|short\.link)").unwrap()
});
static RE_URGENCY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:urgent|immediate|action required|verify account|suspended|locked)").unwrap()
});
static RE_BRAND_PHRASE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)(?:paypal|amazon|microsoft|apple|google)\.(?:verify|secure|account)").unwrap()
});
static RE_CALL_TO_ACTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:click here|verify now|update immediately)").unwrap());
static RE_PRIZE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(?:free|prize|winner|congratulations)").unwrap());
static RE_EXECUTABLE: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)(?:\.exe|\.zip|\.rar|\.scr)$").unwrap());

/// Text patterns, evaluated in order, each worth the same weight.
static RULES: &[Rule] = &[
    Rule { label: "Shortened link domain", weight: PATTERN_WEIGHT, check: Check::Pattern(&RE_SHORTENER) },
    Rule { label: "Urgency language", weight: PATTERN_WEIGHT, check: Check::Pattern(&RE_URGENCY) },
    Rule { label: "Brand impersonation phrase", weight: PATTERN_WEIGHT, check: Check::Pattern(&RE_BRAND_PHRASE) },
    Rule { label: "Call-to-action phrase", weight: PATTERN_WEIGHT, check: Check::Pattern(&RE_CALL_TO_ACTION) },
    Rule { label: "Prize or lottery language", weight: PATTERN_WEIGHT, check: Check::Pattern(&RE_PRIZE) },
    Rule { label: "Executable file extension", weight: PATTERN_WEIGHT, check: Check::Pattern(&RE_EXECUTABLE) },
];

/// Brand keyword and the only registrable domain allowed to carry it.
static BRAND_DOMAINS: &[(&str, &str)] = &[
    ("paypal", "paypal.com"),
    ("amazon", "amazon.com"),
    ("microsoft", "microsoft.com"),
    ("apple", "apple.com"),
    ("google", "google.com"),
];

/// True when the host mentions a brand but is neither its canonical domain nor a subdomain of it.
fn is_brand_mismatch(host: &str) -> bool {
    let host = host.to_ascii_lowercase();
    BRAND_DOMAINS.iter().any(|(brand, canonical)| {
        host.contains(brand)
            && host != *canonical
            && !host.ends_with(&format!(".{}", canonical))
    })
}

/// Scores an email body or URL for phishing indicators.
///
/// Text rules run first. When the input mentions `http` it is additionally parsed as a URL:
/// a parse failure is itself a scored signal, a successful parse enables the host checks.
pub fn run_phishing_scan(input: Option<&str>) -> Result<PhishingReport, ScoreError> {
    let input = require_input(input, MISSING_INPUT)?;
    debug!(length = input.len(), "Starting phishing scan.");

    let mut score = evaluate(RULES, input);

    if input.contains("http") {
        match Url::parse(input) {
            Ok(url) => match url.host() {
                Some(Host::Ipv4(addr)) => {
                    debug!(%addr, "Host is a raw IPv4 literal.");
                    score.add(IP_HOST_WEIGHT, LABEL_IP_HOST);
                }
                // Non-special schemes keep dotted quads as opaque domain hosts.
                Some(Host::Domain(domain)) if domain.parse::<Ipv4Addr>().is_ok() => {
                    debug!(domain, "Opaque host is a raw IPv4 literal.");
                    score.add(IP_HOST_WEIGHT, LABEL_IP_HOST);
                }
                Some(Host::Domain(domain)) if is_brand_mismatch(domain) => {
                    debug!(domain, "Host impersonates a known brand.");
                    score.add(DOMAIN_MISMATCH_WEIGHT, LABEL_DOMAIN_MISMATCH);
                }
                _ => {}
            },
            Err(e) => {
                debug!(error = %e, "Input mentions http but is not a valid URL.");
                score.add(INVALID_URL_WEIGHT, LABEL_INVALID_URL);
            }
        }
    }

    let status = RiskStatus::from_score(score.raw);
    let report = PhishingReport {
        status,
        risk_score: clamp_score(score.raw),
        detected_patterns: score.triggered,
        message: status.message(),
    };
    info!(status = %report.status, score = report.risk_score, patterns = report.detected_patterns.len(), "Phishing scan finished.");
    Ok(report)
}
