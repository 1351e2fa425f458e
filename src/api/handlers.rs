use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use std::sync::Arc;

use crate::media::MediaClient;

/// Shared request state: the repository store plus the media host client.
pub struct AppState<S> {
    pub store: Arc<S>,
    pub media: Arc<MediaClient>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            media: Arc::clone(&self.media),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self {
            error: message.to_string(),
        }
    }
}

/// Simple health check endpoint
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
    })
}

/// Case-insensitive, whitespace-trimmed name comparison used by the
/// duplicate-name precondition on every create endpoint. Read-then-write:
/// two concurrent creates with the same name can both pass this check.
pub fn names_match(existing: &str, candidate: &str) -> bool {
    existing.trim().to_uppercase() == candidate.trim().to_uppercase()
}

/// Last-resort translation of a panicking handler into a generic problem
/// response.
pub fn handle_panic(err: Box<dyn std::any::Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };
    log::error!("Request handler panicked: {}", detail);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse::new("An unexpected error occurred")),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_ignores_case_and_surrounding_whitespace() {
        assert!(names_match("Water", " water "));
        assert!(names_match(" WATER", "water"));
        assert!(!names_match("Water", "Fire"));
        assert!(!names_match("Water", "Wat er"));
    }
}
