// src/core/scanner/password_scanner.rs

use super::{Check, Rule, require_input};
use crate::core::models::{PasswordReport, ScoreError, StrengthLevel, clamp_score};
use tracing::{debug, info};

pub const MISSING_INPUT: &str = "Please provide a password to check";

pub const FEEDBACK_TOO_SHORT: &str = "Password is too short (minimum 8 characters)";
pub const FEEDBACK_LONGER: &str = "Consider using a longer password (12+ characters)";
pub const FEEDBACK_COMMON: &str = "Avoid common passwords";

const SPECIAL_CHARACTERS: &str = "!@#$%^&*(),.?\":{}|<>";
const COMMON_PASSWORDS: &[&str] = &["password", "123456", "qwerty", "admin", "letmein"];
const COMMON_PENALTY: i32 = -30;

/// Length tiers, longest first: minimum length, points, feedback when this tier is the best reached.
const LENGTH_TIERS: &[(usize, i32, Option<&str>)] = &[
    (12, 25, None),
    (8, 15, Some(FEEDBACK_LONGER)),
    (0, 0, Some(FEEDBACK_TOO_SHORT)),
];

fn has_uppercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_uppercase())
}

fn has_lowercase(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_lowercase())
}

fn has_digit(s: &str) -> bool {
    s.chars().any(|c| c.is_ascii_digit())
}

fn has_special(s: &str) -> bool {
    s.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

/// Character-class rules. Here the label is the feedback given when the rule does NOT match.
static CLASS_RULES: &[Rule] = &[
    Rule { label: "Add uppercase letters", weight: 20, check: Check::Predicate(has_uppercase) },
    Rule { label: "Add lowercase letters", weight: 20, check: Check::Predicate(has_lowercase) },
    Rule { label: "Add numbers", weight: 15, check: Check::Predicate(has_digit) },
    Rule { label: "Add special characters", weight: 20, check: Check::Predicate(has_special) },
];

fn is_common(password: &str) -> bool {
    let lowered = password.to_lowercase();
    COMMON_PASSWORDS.iter().any(|common| lowered.contains(common))
}

/// Scores a password additively and collects improvement hints.
pub fn run_password_check(input: Option<&str>) -> Result<PasswordReport, ScoreError> {
    let password = require_input(input, MISSING_INPUT)?;
    let length = password.chars().count();
    debug!(length, "Starting password check.");

    let mut strength = 0;
    let mut feedback = Vec::new();

    if let Some((_, points, hint)) = LENGTH_TIERS.iter().find(|(min, _, _)| length >= *min) {
        strength += points;
        feedback.extend(hint.map(str::to_string));
    }

    for rule in CLASS_RULES {
        if rule.check.matches(password) {
            strength += rule.weight;
        } else {
            feedback.push(rule.label.to_string());
        }
    }

    if is_common(password) {
        debug!("Password contains a common password.");
        strength += COMMON_PENALTY;
        feedback.push(FEEDBACK_COMMON.to_string());
    }

    let level = StrengthLevel::from_score(strength);
    info!(strength = clamp_score(strength), level = %level, "Password check finished.");
    Ok(PasswordReport {
        strength: clamp_score(strength),
        strength_level: level,
        feedback,
        message: format!("Password strength: {}", level),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn check(password: &str) -> PasswordReport {
        run_password_check(Some(password)).unwrap()
    }

    #[test]
    fn missing_password_is_rejected() {
        assert_eq!(run_password_check(Some("")), Err(ScoreError::InvalidInput(MISSING_INPUT)));
    }

    #[test]
    fn whitespace_password_is_scored_weak() {
        let report = check("        ");
        assert_eq!(report.strength, 15);
        assert_eq!(report.strength_level, StrengthLevel::Weak);
        assert!(report.feedback.contains(&FEEDBACK_LONGER.to_string()));
    }

    #[test]
    fn strong_password_has_no_feedback() {
        let report = check("Str0ng!Pass2024");
        assert!(report.strength >= 80);
        assert_eq!(report.strength, 100);
        assert_eq!(report.strength_level, StrengthLevel::Strong);
        assert!(report.feedback.is_empty());
        assert_eq!(report.message, "Password strength: strong");
    }

    #[test]
    fn short_password_is_weak() {
        let report = check("pass");
        assert_eq!(report.strength_level, StrengthLevel::Weak);
        assert_eq!(report.strength, 20);
        assert_eq!(
            report.feedback,
            vec![
                FEEDBACK_TOO_SHORT,
                "Add uppercase letters",
                "Add numbers",
                "Add special characters",
            ]
        );
    }

    #[test]
    fn medium_length_suggests_longer() {
        let report = check("Abcdef1!x");
        assert_eq!(report.strength, 90);
        assert_eq!(report.feedback, vec![FEEDBACK_LONGER]);
    }

    #[test]
    fn common_password_is_penalised_and_clamped() {
        let report = check("123456");
        // 15 for digits, minus 30
        assert_eq!(report.strength, 0);
        assert_eq!(report.strength_level, StrengthLevel::Weak);
        assert!(report.feedback.contains(&FEEDBACK_COMMON.to_string()));

        let report = check("MyPassword!2024x");
        assert_eq!(report.strength, 70);
        assert_eq!(report.strength_level, StrengthLevel::Moderate);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        let report = check("ééééééééAa1!");
        assert!(!report.feedback.contains(&FEEDBACK_TOO_SHORT.to_string()));
        assert!(!report.feedback.contains(&FEEDBACK_LONGER.to_string()));
    }

    #[test]
    fn repeated_checks_are_identical() {
        assert_eq!(check("letmein99"), check("letmein99"));
    }
}
