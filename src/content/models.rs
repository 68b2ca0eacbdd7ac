// src/content/models.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use thiserror::Error;
use uuid::Uuid;

/// Schema violations caught before anything reaches the store.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("Unknown {field}: {value}")]
    UnknownVariant { field: &'static str, value: String },
    #[error("A question needs between 1 and {max} options")]
    OptionCount { max: usize },
    #[error("Correct answer {0} does not point at an option")]
    AnswerOutOfRange(usize),
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ArticleCategory {
    #[default]
    Breach,
    Phishing,
    Malware,
    Ransomware,
    Scam,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Display, EnumString, AsRefStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

fn required(value: &str, field: &'static str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        Err(ValidationError::MissingField(field))
    } else {
        Ok(())
    }
}

fn parse_variant<T>(raw: Option<&str>, field: &'static str) -> Result<T, ValidationError>
where
    T: std::str::FromStr + Default,
{
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        None => Ok(T::default()),
        Some(s) => s
            .to_ascii_lowercase()
            .parse()
            .map_err(|_| ValidationError::UnknownVariant { field, value: s.to_string() }),
    }
}

// --- Articles ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub author: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

pub const ANONYMOUS: &str = "Anonymous";

/// Untrusted comment input.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentDraft {
    pub author: Option<String>,
    pub content: Option<String>,
}

impl CommentDraft {
    pub fn validate(self) -> Result<Comment, ValidationError> {
        let content = self.content.unwrap_or_default();
        required(&content, "content")?;
        let author = self
            .author
            .map(|a| a.trim().to_string())
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| ANONYMOUS.to_string());
        Ok(Comment { author, content, created_at: Utc::now() })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub category: ArticleCategory,
    pub image: String,
    pub website_url: String,
    pub likes: u64,
    pub comments: Vec<Comment>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Untrusted article input, as an editor would submit it.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ArticleDraft {
    pub title: String,
    pub description: String,
    pub category: Option<String>,
    pub image: Option<String>,
    pub website_url: String,
}

impl ArticleDraft {
    /// Checks required fields and the category enum, producing a fresh article.
    pub fn validate(self) -> Result<Article, ValidationError> {
        let title = self.title.trim().to_string();
        required(&title, "title")?;
        required(&self.description, "description")?;
        required(&self.website_url, "websiteUrl")?;
        let category = parse_variant(self.category.as_deref(), "category")?;
        let now = Utc::now();
        Ok(Article {
            id: Uuid::new_v4(),
            title,
            description: self.description,
            category,
            image: self.image.unwrap_or_default(),
            website_url: self.website_url.trim().to_string(),
            likes: 0,
            comments: Vec::new(),
            created_at: now,
            updated_at: now,
        })
    }
}

// --- Quiz ---

pub const MAX_OPTIONS: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: Uuid,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub difficulty: Difficulty,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QuizDraft {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
    pub difficulty: Option<String>,
}

impl QuizDraft {
    pub fn validate(self) -> Result<QuizQuestion, ValidationError> {
        let question = self.question.trim().to_string();
        required(&question, "question")?;
        if self.options.is_empty() || self.options.len() > MAX_OPTIONS {
            return Err(ValidationError::OptionCount { max: MAX_OPTIONS });
        }
        for option in &self.options {
            required(option, "option")?;
        }
        if self.correct_answer >= self.options.len() {
            return Err(ValidationError::AnswerOutOfRange(self.correct_answer));
        }
        let difficulty = parse_variant(self.difficulty.as_deref(), "difficulty")?;
        Ok(QuizQuestion {
            id: Uuid::new_v4(),
            question,
            options: self.options,
            correct_answer: self.correct_answer,
            difficulty,
            created_at: Utc::now(),
        })
    }
}

/// The shape the quiz page consumes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QuizItem {
    pub question: String,
    pub options: Vec<String>,
    pub correct: usize,
}

impl From<&QuizQuestion> for QuizItem {
    fn from(q: &QuizQuestion) -> Self {
        Self {
            question: q.question.clone(),
            options: q.options.clone(),
            correct: q.correct_answer,
        }
    }
}

// --- Featured resource ---

pub const DEFAULT_RESOURCE_TITLE: &str = "Become a Cyber Hero";
pub const DEFAULT_RESOURCE_URL: &str = "https://www.cisa.gov/cyber-essentials";
pub const DEFAULT_RESOURCE_DESCRIPTION: &str = "Essential guide for everyone to stay safe online.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub title: String,
    pub url: String,
    pub description: String,
}

impl Default for Resource {
    fn default() -> Self {
        Self {
            title: DEFAULT_RESOURCE_TITLE.to_string(),
            url: DEFAULT_RESOURCE_URL.to_string(),
            description: DEFAULT_RESOURCE_DESCRIPTION.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> ArticleDraft {
        ArticleDraft {
            title: "  Hospital ransomware  ".to_string(),
            description: "Systems encrypted overnight".to_string(),
            category: Some("Ransomware".to_string()),
            image: None,
            website_url: "https://news.example/ransom".to_string(),
        }
    }

    #[test]
    fn article_draft_trims_and_parses_category() {
        let article = draft().validate().unwrap();
        assert_eq!(article.title, "Hospital ransomware");
        assert_eq!(article.category, ArticleCategory::Ransomware);
        assert_eq!(article.likes, 0);
        assert!(article.image.is_empty());
    }

    #[test]
    fn article_category_defaults_to_breach() {
        let article = ArticleDraft { category: None, ..draft() }.validate().unwrap();
        assert_eq!(article.category, ArticleCategory::Breach);
    }

    #[test]
    fn article_draft_rejects_bad_input() {
        let err = ArticleDraft { title: "   ".into(), ..draft() }.validate().unwrap_err();
        assert_eq!(err, ValidationError::MissingField("title"));
        let err = ArticleDraft { category: Some("spam".into()), ..draft() }.validate().unwrap_err();
        assert!(matches!(err, ValidationError::UnknownVariant { field: "category", .. }));
    }

    #[test]
    fn comment_defaults_to_anonymous() {
        let comment = CommentDraft { author: Some("  ".into()), content: Some("Nice".into()) }
            .validate()
            .unwrap();
        assert_eq!(comment.author, ANONYMOUS);
        assert_eq!(
            CommentDraft::default().validate().unwrap_err(),
            ValidationError::MissingField("content")
        );
    }

    #[test]
    fn quiz_answer_must_index_an_option() {
        let quiz = QuizDraft {
            question: "What does the S in HTTPS stand for?".into(),
            options: vec!["Speed".into(), "Secure".into()],
            correct_answer: 3,
            difficulty: None,
        };
        assert_eq!(quiz.clone().validate().unwrap_err(), ValidationError::AnswerOutOfRange(3));
        let ok = QuizDraft { correct_answer: 1, ..quiz }.validate().unwrap();
        assert_eq!(ok.difficulty, Difficulty::Easy);
    }

    #[test]
    fn quiz_option_count_is_bounded() {
        let quiz = QuizDraft {
            question: "Pick one".into(),
            options: vec!["a".into(); 5],
            correct_answer: 0,
            difficulty: Some("hard".into()),
        };
        assert_eq!(quiz.validate().unwrap_err(), ValidationError::OptionCount { max: MAX_OPTIONS });
    }
}
