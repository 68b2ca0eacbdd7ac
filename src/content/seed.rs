// src/content/seed.rs

//! Startup provisioning of the content store. Nothing is written unless the
//! configuration asks for it.

use crate::content::models::{ArticleDraft, QuizDraft, Resource, ValidationError};
use crate::content::store::ContentStore;
use color_eyre::eyre::{Result, WrapErr};
use serde::Deserialize;
use std::path::Path;
use tracing::{info, warn};

/// A JSON document describing the initial content.
#[derive(Debug, Default, Deserialize)]
pub struct ContentBundle {
    #[serde(default)]
    pub articles: Vec<ArticleDraft>,
    #[serde(default)]
    pub quiz: Vec<QuizDraft>,
    pub resource: Option<Resource>,
}

impl ContentBundle {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path)
            .wrap_err_with(|| format!("reading content bundle {}", path.display()))?;
        serde_json::from_str(&raw).wrap_err_with(|| format!("parsing content bundle {}", path.display()))
    }
}

fn builtin_question(question: &str, options: [&str; 4], correct_answer: usize) -> QuizDraft {
    QuizDraft {
        question: question.to_string(),
        options: options.iter().map(|o| o.to_string()).collect(),
        correct_answer,
        difficulty: Some("easy".to_string()),
    }
}

/// The starter quiz shipped with the binary.
pub fn builtin_quiz() -> Vec<QuizDraft> {
    vec![
        builtin_question(
            "What does 'phishing' mean in cybersecurity?",
            [
                "A type of fishing sport",
                "Fraudulent attempts to steal sensitive information",
                "A computer virus that swims through networks",
                "A secure email protocol",
            ],
            1,
        ),
        builtin_question(
            "What is a strong password characteristic?",
            [
                "Using your birthday",
                "Using 'password123'",
                "Mix of uppercase, lowercase, numbers, and symbols",
                "Using your pet's name",
            ],
            2,
        ),
        builtin_question("What does the 'S' in HTTPS stand for?", ["Speed", "Secure", "Server", "Simple"], 1),
        builtin_question(
            "What is malware?",
            [
                "A type of hardware",
                "Malicious software designed to harm computers",
                "A programming language",
                "A type of firewall",
            ],
            1,
        ),
        builtin_question(
            "What should you do if you receive a suspicious email?",
            [
                "Open all attachments immediately",
                "Click all links to verify",
                "Delete it or report it as spam",
                "Forward it to all your contacts",
            ],
            2,
        ),
    ]
}

/// Counts of what made it into the store.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedSummary {
    pub articles: usize,
    pub questions: usize,
    pub rejected: usize,
}

/// Validates every draft and stores the ones that pass. Invalid drafts are logged and skipped.
pub fn apply(store: &dyn ContentStore, bundle: ContentBundle) -> SeedSummary {
    let mut summary = SeedSummary::default();

    for draft in bundle.articles {
        match draft.validate() {
            Ok(article) => {
                store.insert_article(article);
                summary.articles += 1;
            }
            Err(e) => reject(&mut summary, "article", &e),
        }
    }

    for draft in bundle.quiz {
        match draft.validate() {
            Ok(question) => {
                store.insert_quiz_question(question);
                summary.questions += 1;
            }
            Err(e) => reject(&mut summary, "quiz question", &e),
        }
    }

    if let Some(resource) = bundle.resource {
        store.set_resource(resource);
    }

    info!(articles = summary.articles, questions = summary.questions, rejected = summary.rejected, "Content seeded.");
    summary
}

fn reject(summary: &mut SeedSummary, kind: &str, error: &ValidationError) {
    warn!(kind, error = %error, "Skipping invalid seed entry.");
    summary.rejected += 1;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::store::MemoryStore;

    #[test]
    fn builtin_quiz_is_valid() {
        let store = MemoryStore::new();
        let summary = apply(&store, ContentBundle { quiz: builtin_quiz(), ..Default::default() });
        assert_eq!(summary, SeedSummary { articles: 0, questions: 5, rejected: 0 });
        assert_eq!(store.quiz_questions().len(), 5);
    }

    #[test]
    fn bundle_json_is_applied_and_invalid_entries_skipped() {
        let json = r#"{
            "articles": [
                {"title": "Breach at retailer", "description": "Cards leaked", "websiteUrl": "https://news.example/1", "category": "breach"},
                {"title": "", "description": "no title", "websiteUrl": "https://news.example/2"}
            ],
            "resource": {"title": "Stay safe", "url": "https://safe.example", "description": "Guide"}
        }"#;
        let bundle: ContentBundle = serde_json::from_str(json).unwrap();
        let store = MemoryStore::new();
        let summary = apply(&store, bundle);
        assert_eq!(summary.articles, 1);
        assert_eq!(summary.rejected, 1);
        assert_eq!(store.resource().title, "Stay safe");
    }
}
