//! JSON handlers for the security tools and the content endpoints.
//!
//! Every handler answers HTTP 200. Failures are reported in-band as
//! `{"success": false, "message": ...}` so the browser pages can show them inline.

use axum::{
    extract::{Path, Query, State, rejection::JsonRejection},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::app::SharedState;
use crate::content::models::{CommentDraft, QuizItem};
use crate::content::search::{self, SearchTarget};
use crate::content::store::StoreError;
use crate::core::scanner::{run_password_check, run_phishing_scan, run_vulnerability_scan};

/// `{"success": true}` merged with the fields of `body`.
#[derive(Debug, Serialize)]
struct Success<T> {
    success: bool,
    #[serde(flatten)]
    body: T,
}

fn json_success<T: Serialize>(body: T) -> Response {
    Json(Success { success: true, body }).into_response()
}

fn json_failure(message: impl ToString) -> Response {
    Json(json!({"success": false, "message": message.to_string()})).into_response()
}

/// Treats an unreadable body like an empty one.
fn body_or_default<T: Default>(payload: Result<Json<T>, JsonRejection>) -> T {
    match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            debug!(error = %rejection, "Unreadable JSON body, treating as empty.");
            T::default()
        }
    }
}

fn parse_article_id(raw: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(raw).map_err(|_| StoreError::ArticleNotFound)
}

// --- Security tools ---

#[derive(Debug, Default, Deserialize)]
pub struct PhishingRequest {
    pub email: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct ScanRequest {
    pub url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PasswordRequest {
    pub password: Option<String>,
}

/// POST /api/phishing/detect
pub async fn detect_phishing(payload: Result<Json<PhishingRequest>, JsonRejection>) -> Response {
    let req = body_or_default(payload);
    let input = req.email.filter(|e| !e.is_empty()).or(req.url);
    match run_phishing_scan(input.as_deref()) {
        Ok(report) => json_success(report),
        Err(e) => json_failure(e),
    }
}

/// POST /api/vulnerability/scan
pub async fn scan_vulnerability(payload: Result<Json<ScanRequest>, JsonRejection>) -> Response {
    let req = body_or_default(payload);
    match run_vulnerability_scan(req.url.as_deref()) {
        Ok(report) => json_success(report),
        Err(e) => json_failure(e),
    }
}

/// POST /api/password/check
pub async fn check_password(payload: Result<Json<PasswordRequest>, JsonRejection>) -> Response {
    let req = body_or_default(payload);
    match run_password_check(req.password.as_deref()) {
        Ok(report) => json_success(report),
        Err(e) => json_failure(e),
    }
}

// --- Articles ---

/// GET /api/articles
pub async fn list_articles(State(state): State<SharedState>) -> Response {
    json_success(json!({ "articles": state.store.list_articles() }))
}

/// GET /api/articles/{id}
pub async fn get_article(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match parse_article_id(&id).and_then(|id| state.store.get_article(id)) {
        Ok(article) => json_success(json!({ "article": article })),
        Err(e) => json_failure(e),
    }
}

/// POST /api/articles/{id}/like
pub async fn like_article(State(state): State<SharedState>, Path(id): Path<String>) -> Response {
    match parse_article_id(&id).and_then(|id| state.store.like_article(id)) {
        Ok(likes) => json_success(json!({ "likes": likes })),
        Err(e) => json_failure(e),
    }
}

/// POST /api/articles/{id}/comment
pub async fn add_comment(
    State(state): State<SharedState>,
    Path(id): Path<String>,
    payload: Result<Json<CommentDraft>, JsonRejection>,
) -> Response {
    let id = match parse_article_id(&id) {
        Ok(id) => id,
        Err(e) => return json_failure(e),
    };
    let comment = match body_or_default(payload).validate() {
        Ok(comment) => comment,
        Err(e) => return json_failure(e),
    };
    match state.store.add_comment(id, comment) {
        Ok(comment) => json_success(json!({ "comment": comment })),
        Err(e) => {
            warn!(%id, error = %e, "Comment on missing article.");
            json_failure(e)
        }
    }
}

// --- Quiz, resource, search ---

/// GET /api/quiz
pub async fn get_quiz(State(state): State<SharedState>) -> Json<Vec<QuizItem>> {
    Json(state.store.quiz_questions().iter().map(QuizItem::from).collect())
}

/// GET /api/resource
pub async fn get_resource(State(state): State<SharedState>) -> Response {
    Json(state.store.resource()).into_response()
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// GET /api/search?q=
pub async fn search(State(state): State<SharedState>, Query(params): Query<SearchParams>) -> Response {
    let query = params.q.unwrap_or_default();
    let target = search::classify(&query);
    let results = match target {
        Some(SearchTarget::CybersecurityArticle) => state.store.search_articles(&query),
        _ => Vec::new(),
    };
    debug!(query = %query, route = ?target, results = results.len(), "Search routed.");
    let search_type = target.map(|t| t.to_string()).unwrap_or_default();
    json_success(json!({
        "query": query,
        "searchType": search_type,
        "results": results,
    }))
}

/// GET /health
pub async fn health() -> Json<serde_json::Value> {
    Json(json!({"status": "ok", "version": env!("CARGO_PKG_VERSION")}))
}
