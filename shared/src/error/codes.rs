//! Unified error codes for the content backend
//!
//! This module defines all error codes used by the content-server and the admin
//! dashboard. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 3xxx: Ordered content errors (hero slides, products, services)
//! - 4xxx: Editorial errors (blogs, logos, reviews)
//! - 5xxx: Contact errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Required field missing
    RequiredField = 7,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,
    /// Token has expired
    TokenExpired = 1003,
    /// Token is invalid
    TokenInvalid = 1004,
    /// Username already taken
    UsernameExists = 1005,

    // ==================== 2xxx: Permission ====================
    /// Admin flag required
    AdminRequired = 2003,

    // ==================== 3xxx: Ordered content ====================
    /// Hero slide not found
    HeroSlideNotFound = 3001,
    /// Product not found
    ProductNotFound = 3101,
    /// Product page path already used by another product
    ProductPagePathExists = 3102,
    /// Service not found
    ServiceNotFound = 3201,
    /// Reorder payload is not a list of `{_id, order}` objects
    ReorderPayloadInvalid = 3301,

    // ==================== 4xxx: Editorial ====================
    /// Blog post not found
    BlogNotFound = 4001,
    /// Logo not found
    LogoNotFound = 4101,
    /// Logo name already exists
    LogoNameExists = 4102,
    /// Review not found
    ReviewNotFound = 4201,
    /// Review rating outside 1..=5
    ReviewRatingInvalid = 4202,

    // ==================== 5xxx: Contact ====================
    /// Contact submission not found
    ContactNotFound = 5001,
    /// Contact email address malformed
    ContactEmailInvalid = 5002,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error (store unreachable or query failed)
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the default message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::RequiredField => "Required field is missing",

            // Auth
            ErrorCode::NotAuthenticated => "No token, authorization denied",
            ErrorCode::InvalidCredentials => "Invalid username or password",
            ErrorCode::TokenExpired => "Authentication token has expired",
            ErrorCode::TokenInvalid => "Token is not valid",
            ErrorCode::UsernameExists => "Username already exists",

            // Permission
            ErrorCode::AdminRequired => "Access denied. Not an admin.",

            // Ordered content
            ErrorCode::HeroSlideNotFound => "Hero slide not found",
            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductPagePathExists => "Product page path already exists",
            ErrorCode::ServiceNotFound => "Service not found",
            ErrorCode::ReorderPayloadInvalid => "Items must be an array of {_id, order}",

            // Editorial
            ErrorCode::BlogNotFound => "Blog not found",
            ErrorCode::LogoNotFound => "Logo not found",
            ErrorCode::LogoNameExists => "Logo name already exists",
            ErrorCode::ReviewNotFound => "Review not found",
            ErrorCode::ReviewRatingInvalid => "Rating must be between 1 and 5",

            // Contact
            ErrorCode::ContactNotFound => "Contact not found",
            ErrorCode::ContactEmailInvalid => "Email address is not valid",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error returned when a u16 does not map to a known [`ErrorCode`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            7 => Ok(ErrorCode::RequiredField),

            // Auth
            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),
            1003 => Ok(ErrorCode::TokenExpired),
            1004 => Ok(ErrorCode::TokenInvalid),
            1005 => Ok(ErrorCode::UsernameExists),

            // Permission
            2003 => Ok(ErrorCode::AdminRequired),

            // Ordered content
            3001 => Ok(ErrorCode::HeroSlideNotFound),
            3101 => Ok(ErrorCode::ProductNotFound),
            3102 => Ok(ErrorCode::ProductPagePathExists),
            3201 => Ok(ErrorCode::ServiceNotFound),
            3301 => Ok(ErrorCode::ReorderPayloadInvalid),

            // Editorial
            4001 => Ok(ErrorCode::BlogNotFound),
            4101 => Ok(ErrorCode::LogoNotFound),
            4102 => Ok(ErrorCode::LogoNameExists),
            4201 => Ok(ErrorCode::ReviewNotFound),
            4202 => Ok(ErrorCode::ReviewRatingInvalid),

            // Contact
            5001 => Ok(ErrorCode::ContactNotFound),
            5002 => Ok(ErrorCode::ContactEmailInvalid),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::NotFound.code(), 3);
        assert_eq!(ErrorCode::NotAuthenticated.code(), 1001);
        assert_eq!(ErrorCode::AdminRequired.code(), 2003);
        assert_eq!(ErrorCode::ReorderPayloadInvalid.code(), 3301);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_try_from_matches_code() {
        let all = [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::TokenInvalid,
            ErrorCode::AdminRequired,
            ErrorCode::HeroSlideNotFound,
            ErrorCode::ProductPagePathExists,
            ErrorCode::ServiceNotFound,
            ErrorCode::LogoNameExists,
            ErrorCode::ReviewRatingInvalid,
            ErrorCode::ContactNotFound,
            ErrorCode::InternalError,
            ErrorCode::DatabaseError,
        ];
        for code in all {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_try_from_unknown() {
        assert_eq!(ErrorCode::try_from(7777), Err(InvalidErrorCode(7777)));
        // retired ranges do not decode
        assert_eq!(ErrorCode::try_from(1), Err(InvalidErrorCode(1)));
        assert_eq!(ErrorCode::try_from(6001), Err(InvalidErrorCode(6001)));
        assert_eq!(ErrorCode::try_from(9005), Err(InvalidErrorCode(9005)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, "3101");

        let code: ErrorCode = serde_json::from_str("4101").unwrap();
        assert_eq!(code, ErrorCode::LogoNotFound);

        assert!(serde_json::from_str::<ErrorCode>("4242").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::TokenExpired.to_string(), "1003");
    }
}
