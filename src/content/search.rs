// src/content/search.rs

use serde::Serialize;
use strum::{AsRefStr, Display};

/// Where a site-search query should send the visitor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Display, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum SearchTarget {
    PhishingDetective,
    VulnerabilityScanner,
    PasswordStrength,
    Steganography,
    CybersecurityArticle,
}

/// Keyword routing table; the first entry with any matching keyword wins.
const ROUTES: &[(&[&str], SearchTarget)] = &[
    (&["phishing"], SearchTarget::PhishingDetective),
    (&["vulnerability"], SearchTarget::VulnerabilityScanner),
    (&["password"], SearchTarget::PasswordStrength),
    (&["steganography", "hide", "secret"], SearchTarget::Steganography),
    (&["cyber", "article"], SearchTarget::CybersecurityArticle),
];

/// Maps a free-text query to a tool page or to an article search. `None` means no match.
pub fn classify(query: &str) -> Option<SearchTarget> {
    let lowered = query.to_lowercase();
    ROUTES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| lowered.contains(k)))
        .map(|(_, target)| *target)
}
