// src/content/store.rs

use crate::content::models::{Article, Comment, QuizQuestion, Resource};
use chrono::Utc;
use parking_lot::RwLock;
use std::collections::HashMap;
use thiserror::Error;
use tracing::debug;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("Article not found")]
    ArticleNotFound,
}

/// Storage seam for articles, quiz questions and the featured resource.
///
/// Inputs are already validated; implementations only persist and fetch.
pub trait ContentStore: Send + Sync {
    /// All articles, newest first.
    fn list_articles(&self) -> Vec<Article>;
    fn get_article(&self, id: Uuid) -> Result<Article, StoreError>;
    fn insert_article(&self, article: Article) -> Article;
    /// Increments the like counter by one and returns the new total.
    fn like_article(&self, id: Uuid) -> Result<u64, StoreError>;
    /// Appends a comment and returns it as stored.
    fn add_comment(&self, id: Uuid, comment: Comment) -> Result<Comment, StoreError>;
    /// Case-insensitive substring search over title and description, newest first.
    fn search_articles(&self, query: &str) -> Vec<Article>;
    fn quiz_questions(&self) -> Vec<QuizQuestion>;
    fn insert_quiz_question(&self, question: QuizQuestion) -> QuizQuestion;
    fn resource(&self) -> Resource;
    fn set_resource(&self, resource: Resource);
}

#[derive(Default)]
struct Inner {
    articles: HashMap<Uuid, Article>,
    quiz: Vec<QuizQuestion>,
    resource: Option<Resource>,
}

/// Process-local store. Each call holds the lock for one short read or write.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn newest_first(mut articles: Vec<Article>) -> Vec<Article> {
    articles.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    articles
}

impl ContentStore for MemoryStore {
    fn list_articles(&self) -> Vec<Article> {
        newest_first(self.inner.read().articles.values().cloned().collect())
    }

    fn get_article(&self, id: Uuid) -> Result<Article, StoreError> {
        self.inner
            .read()
            .articles
            .get(&id)
            .cloned()
            .ok_or(StoreError::ArticleNotFound)
    }

    fn insert_article(&self, article: Article) -> Article {
        debug!(id = %article.id, title = %article.title, "Storing article.");
        self.inner.write().articles.insert(article.id, article.clone());
        article
    }

    fn like_article(&self, id: Uuid) -> Result<u64, StoreError> {
        let mut inner = self.inner.write();
        let article = inner.articles.get_mut(&id).ok_or(StoreError::ArticleNotFound)?;
        article.likes += 1;
        article.updated_at = Utc::now();
        Ok(article.likes)
    }

    fn add_comment(&self, id: Uuid, comment: Comment) -> Result<Comment, StoreError> {
        let mut inner = self.inner.write();
        let article = inner.articles.get_mut(&id).ok_or(StoreError::ArticleNotFound)?;
        article.comments.push(comment.clone());
        article.updated_at = Utc::now();
        Ok(comment)
    }

    fn search_articles(&self, query: &str) -> Vec<Article> {
        let needle = query.to_lowercase();
        let matches = self
            .inner
            .read()
            .articles
            .values()
            .filter(|a| {
                a.title.to_lowercase().contains(&needle)
                    || a.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect();
        newest_first(matches)
    }

    fn quiz_questions(&self) -> Vec<QuizQuestion> {
        self.inner.read().quiz.clone()
    }

    fn insert_quiz_question(&self, question: QuizQuestion) -> QuizQuestion {
        self.inner.write().quiz.push(question.clone());
        question
    }

    fn resource(&self) -> Resource {
        self.inner.read().resource.clone().unwrap_or_default()
    }

    fn set_resource(&self, resource: Resource) {
        self.inner.write().resource = Some(resource);
    }
}
