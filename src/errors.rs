// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{
    error::{JsonPayloadError, PathError, ResponseError},
    http::StatusCode,
    HttpRequest, HttpResponse,
};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: One variant per failure class in the API contract
/// Each variant maps to an HTTP status code and an `{"error": <detail>}` body
#[derive(Error, Debug)]
pub enum TownsError {
    #[error("Permission denied")]
    PermissionDenied,

    /// Carries the outward-facing message ("Image not found", "Town not found", ...)
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl TownsError {
    /// Shorthand for the not-found messages used across the service.
    pub fn image_not_found() -> Self {
        TownsError::NotFound("Image not found".to_string())
    }

    pub fn town_not_found() -> Self {
        TownsError::NotFound("Town not found".to_string())
    }

    pub fn attraction_not_found() -> Self {
        TownsError::NotFound("Attraction not found".to_string())
    }
}

/// Convert TownsError to HTTP response
/// DOCUMENTATION: Errors are never retried and never fatal to the process;
/// each one is translated 1:1 at the request boundary
impl ResponseError for TownsError {
    fn status_code(&self) -> StatusCode {
        match self {
            TownsError::PermissionDenied => StatusCode::FORBIDDEN,
            TownsError::NotFound(_) => StatusCode::NOT_FOUND,
            TownsError::Validation(_) => StatusCode::BAD_REQUEST,
            TownsError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({
            "error": self.to_string()
        }))
    }
}

/// Translate body deserialization failures into the API error shape
/// DOCUMENTATION: Registered on web::JsonConfig in main.rs so a missing or
/// mistyped field (e.g. no "order" in a reorder body) yields 400 {"error": ...}
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    TownsError::Validation(err.to_string()).into()
}

/// Translate path parameter failures (e.g. a malformed UUID segment) the same way
pub fn path_error_handler(err: PathError, _req: &HttpRequest) -> actix_web::Error {
    TownsError::Validation(err.to_string()).into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_status_codes() {
        assert_eq!(
            TownsError::PermissionDenied.status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            TownsError::image_not_found().status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            TownsError::Validation("bad".to_string()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            TownsError::Database("down".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_error_body_shape() {
        let resp = TownsError::image_not_found().error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed, json!({"error": "Image not found"}));
    }

    #[actix_web::test]
    async fn test_permission_denied_body() {
        let resp = TownsError::PermissionDenied.error_response();
        let body = to_bytes(resp.into_body()).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&body).unwrap();

        assert_eq!(parsed, json!({"error": "Permission denied"}));
    }
}
