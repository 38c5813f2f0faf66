//! Error value and JSON envelope shared by every endpoint

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Error returned by handlers
///
/// Serialized as `{"code": <u16>, "message": "...", "details": {...}}` with the
/// HTTP status taken from [`ErrorCode::http_status`]. `details` carries the
/// offending field for validation failures.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    pub code: ErrorCode,
    pub message: String,
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Error with the code's default message
    pub fn new(code: ErrorCode) -> Self {
        Self::with_message(code, code.message())
    }

    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// `"{field} is required"`, with the field name under `details.field`
    pub fn required(field: &str) -> Self {
        Self::with_message(ErrorCode::RequiredField, format!("{} is required", field))
            .with_detail("field", field)
    }

    /// Reorder body that does not have the `{items: [{_id, order}]}` shape
    pub fn reorder_payload(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ReorderPayloadInvalid, msg)
    }

    pub fn not_authenticated() -> Self {
        Self::new(ErrorCode::NotAuthenticated)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials)
    }

    pub fn invalid_token(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::TokenInvalid, msg)
    }

    pub fn token_expired() -> Self {
        Self::new(ErrorCode::TokenExpired)
    }

    pub fn admin_required() -> Self {
        Self::new(ErrorCode::AdminRequired)
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InternalError, msg)
    }
}

/// Result alias used across handlers and services
pub type AppResult<T> = Result<T, AppError>;

/// JSON envelope for message-only answers (deletes) and for errors
///
/// List, get and create endpoints answer with the bare model instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T = ()> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<u16>,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<HashMap<String, Value>>,
}

impl ApiResponse<()> {
    /// `{"code": 0, "message": ...}`
    pub fn ok_with_message(message: impl Into<String>) -> Self {
        Self {
            code: Some(ErrorCode::Success.code()),
            message: message.into(),
            data: None,
            details: None,
        }
    }

    pub fn error(err: &AppError) -> Self {
        Self {
            code: Some(err.code.code()),
            message: err.message.clone(),
            data: None,
            details: err.details.clone(),
        }
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        // client mistakes are answered quietly; storage and internal failures are logged
        if self.code.category() == ErrorCategory::System {
            tracing::error!(code = %self.code, message = %self.message, "Request failed");
        }

        (self.http_status(), axum::Json(ApiResponse::error(&self))).into_response()
    }
}

impl<T: Serialize> axum::response::IntoResponse for ApiResponse<T> {
    fn into_response(self) -> axum::response::Response {
        let status = self
            .code
            .and_then(|code| ErrorCode::try_from(code).ok())
            .map_or(StatusCode::OK, |code| code.http_status());

        (status, axum::Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_message() {
        let err = AppError::new(ErrorCode::HeroSlideNotFound);
        assert_eq!(err.message, "Hero slide not found");
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
        assert!(err.details.is_none());
    }

    #[test]
    fn test_required_field_detail() {
        let err = AppError::required("imageUrl");
        assert_eq!(err.code, ErrorCode::RequiredField);
        assert_eq!(err.message, "imageUrl is required");
        assert_eq!(err.details.unwrap()["field"], "imageUrl");
    }

    #[test]
    fn test_reorder_payload_is_bad_request() {
        let err = AppError::reorder_payload("items must be an array");
        assert_eq!(err.code.code(), 3301);
        assert_eq!(err.http_status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_auth_statuses() {
        assert_eq!(AppError::not_authenticated().http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::token_expired().http_status(), StatusCode::UNAUTHORIZED);
        assert_eq!(AppError::admin_required().http_status(), StatusCode::FORBIDDEN);
    }

    #[test]
    fn test_error_envelope() {
        let err = AppError::with_message(ErrorCode::LogoNameExists, "Logo 'Acme' already exists")
            .with_detail("name", "Acme");
        let json = serde_json::to_value(ApiResponse::error(&err)).unwrap();

        assert_eq!(json["code"], 4102);
        assert_eq!(json["message"], "Logo 'Acme' already exists");
        assert_eq!(json["details"]["name"], "Acme");
        assert!(json.get("data").is_none());
    }

    #[test]
    fn test_message_envelope() {
        let json = serde_json::to_string(&ApiResponse::ok_with_message("Review removed")).unwrap();
        assert_eq!(json, r#"{"code":0,"message":"Review removed"}"#);
    }
}
