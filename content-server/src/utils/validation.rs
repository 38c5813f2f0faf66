//! Input validation helpers
//!
//! Centralized text length constants and validation functions used by the
//! CRUD handlers. Documents are schemaless in the store, so limits are
//! enforced here before anything is written.

use validator::ValidateEmail;

use crate::utils::AppError;

// ── Text length limits ──────────────────────────────────────────────

/// Titles, names, CTA labels
pub const MAX_NAME_LEN: usize = 200;

/// Slide content, descriptions, review comments, contact messages
pub const MAX_TEXT_LEN: usize = 20_000;

/// Blog post bodies
pub const MAX_ARTICLE_LEN: usize = 200_000;

/// Short identifiers: phone, page path, media public id
pub const MAX_SHORT_TEXT_LEN: usize = 255;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords (before hashing)
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_PASSWORD_LEN: usize = 128;

/// URLs
pub const MAX_URL_LEN: usize = 2048;

// ── Validation helpers (CRUD handlers) ──────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.len() > max_len {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            value.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.len() > max_len
    {
        return Err(AppError::validation(format!(
            "{field} is too long ({} chars, max {max_len})",
            v.len()
        ))
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate a required email address.
pub fn validate_email(value: &str, field: &str) -> Result<(), AppError> {
    validate_required_text(value, field, MAX_EMAIL_LEN)?;
    if !value.trim().validate_email() {
        return Err(
            AppError::new(shared::error::ErrorCode::ContactEmailInvalid).with_detail("field", field)
        );
    }
    Ok(())
}

/// Trim and drop empty optional strings.
pub fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
