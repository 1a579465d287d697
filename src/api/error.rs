//! API error types with HTTP status mapping.
//!
//! Two families, one per response format: [`ApiError`] for the JSON
//! routes (flat `{"error": message}` body), [`PageError`] for the HTML
//! form route (rendered error page). Handler failures surface their
//! message to the caller — acceptable at this trust level — and never
//! take the process down.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::render;

/// JSON error body.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Errors for the JSON routes.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("No symptoms provided")]
    NoSymptoms,
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::NoSymptoms => StatusCode::BAD_REQUEST,
            ApiError::Internal(detail) => {
                tracing::error!(%detail, "predict request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        let body = ErrorBody {
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

/// Failure on the HTML form route: rendered as the error page.
#[derive(Debug)]
pub struct PageError(pub String);

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        tracing::error!(detail = %self.0, "form request failed");
        let page = render::error_page(&format!("An error occurred: {}", self.0));
        (StatusCode::INTERNAL_SERVER_ERROR, Html(page)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn no_symptoms_returns_400_with_fixed_message() {
        let response = ApiError::NoSymptoms.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "No symptoms provided");
    }

    #[tokio::test]
    async fn internal_returns_500_and_surfaces_the_message() {
        let response = ApiError::Internal("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 1024).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["error"], "boom");
    }

    #[tokio::test]
    async fn page_error_renders_html_500() {
        let response = PageError("boom".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("An error occurred: boom"));
    }

    #[tokio::test]
    async fn page_error_escapes_the_detail() {
        let response = PageError("<script>".into()).into_response();
        let body = to_bytes(response.into_body(), 64 * 1024).await.unwrap();
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(!html.contains("<script>"));
    }
}
