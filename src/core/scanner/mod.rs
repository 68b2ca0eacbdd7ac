// src/core/scanner/mod.rs

// Public interface of the heuristic scanners. Each sub-module owns one static
// rule table and one pure entry point.
pub mod password_scanner;
pub mod phishing_scanner;
pub mod vulnerability_scanner;

use crate::core::models::ScoreError;
use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

pub use self::password_scanner::run_password_check;
pub use self::phishing_scanner::run_phishing_scan;
pub use self::vulnerability_scanner::run_vulnerability_scan;

/// How a rule decides whether it applies to an input.
pub(crate) enum Check<'a> {
    /// The regex matches somewhere in the input.
    Pattern(&'a Lazy<Regex>),
    /// A plain predicate over the input.
    Predicate(fn(&str) -> bool),
}

impl Check<'_> {
    pub(crate) fn matches(&self, input: &str) -> bool {
        match self {
            Check::Pattern(re) => re.is_match(input),
            Check::Predicate(f) => f(input),
        }
    }
}

/// A named predicate-weight pair.
pub(crate) struct Rule<'a> {
    pub label: &'a str,
    pub weight: i32,
    pub check: Check<'a>,
}

/// Running total of one evaluation pass.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub(crate) struct RuleScore {
    pub raw: i32,
    pub triggered: Vec<String>,
}

impl RuleScore {
    pub(crate) fn add(&mut self, weight: i32, label: &str) {
        self.raw += weight;
        self.triggered.push(label.to_string());
    }
}

/// Applies every rule in order; each match adds its weight and records its label.
pub(crate) fn evaluate(rules: &[Rule], input: &str) -> RuleScore {
    let mut score = RuleScore::default();
    for rule in rules {
        if rule.check.matches(input) {
            debug!(rule = rule.label, weight = rule.weight, "Rule matched.");
            score.add(rule.weight, rule.label);
        }
    }
    score
}

/// Rejects missing or empty input with the caller's message.
pub(crate) fn require_input<'s>(
    input: Option<&'s str>,
    message: &'static str,
) -> Result<&'s str, ScoreError> {
    match input {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ScoreError::InvalidInput(message)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static RE_DIGIT: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d").unwrap());

    fn is_long(s: &str) -> bool {
        s.len() > 5
    }

    static TEST_RULES: &[Rule] = &[
        Rule { label: "digit", weight: 10, check: Check::Pattern(&RE_DIGIT) },
        Rule { label: "long", weight: 5, check: Check::Predicate(is_long) },
    ];

    #[test]
    fn evaluate_accumulates_in_rule_order() {
        let score = evaluate(TEST_RULES, "abcdef1");
        assert_eq!(score.raw, 15);
        assert_eq!(score.triggered, vec!["digit", "long"]);
    }

    #[test]
    fn evaluate_without_matches_is_zero() {
        let score = evaluate(TEST_RULES, "abc");
        assert_eq!(score, RuleScore::default());
    }

    #[test]
    fn require_input_rejects_missing_and_empty() {
        assert!(require_input(None, "missing").is_err());
        assert_eq!(
            require_input(Some(""), "missing"),
            Err(ScoreError::InvalidInput("missing"))
        );
        assert_eq!(require_input(Some("   "), "missing"), Ok("   "));
        assert_eq!(require_input(Some("x"), "missing"), Ok("x"));
    }
}
