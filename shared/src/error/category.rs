//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Authentication errors
/// - 2xxx: Permission errors
/// - 3xxx: Ordered content errors
/// - 4xxx: Editorial errors
/// - 5xxx: Contact errors
/// - 9xxx: System errors (any code from 6000 up)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Authentication errors (1xxx)
    Auth,
    /// Permission errors (2xxx)
    Permission,
    /// Hero slides, products, services (3xxx)
    Content,
    /// Blogs, logos, reviews (4xxx)
    Editorial,
    /// Contact submissions (5xxx)
    Contact,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Auth,
            2000..3000 => Self::Permission,
            3000..4000 => Self::Content,
            4000..5000 => Self::Editorial,
            5000..6000 => Self::Contact,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Auth => "auth",
            Self::Permission => "permission",
            Self::Content => "content",
            Self::Editorial => "editorial",
            Self::Contact => "contact",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Auth);
        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Permission);
        assert_eq!(ErrorCategory::from_code(3301), ErrorCategory::Content);
        assert_eq!(ErrorCategory::from_code(4201), ErrorCategory::Editorial);
        assert_eq!(ErrorCategory::from_code(5001), ErrorCategory::Contact);
        assert_eq!(ErrorCategory::from_code(6001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(9002), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::NotFound.category(), ErrorCategory::General);
        assert_eq!(ErrorCode::TokenInvalid.category(), ErrorCategory::Auth);
        assert_eq!(ErrorCode::AdminRequired.category(), ErrorCategory::Permission);
        assert_eq!(ErrorCode::HeroSlideNotFound.category(), ErrorCategory::Content);
        assert_eq!(ErrorCode::LogoNameExists.category(), ErrorCategory::Editorial);
        assert_eq!(ErrorCode::ContactNotFound.category(), ErrorCategory::Contact);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_serialize() {
        let json = serde_json::to_string(&ErrorCategory::Editorial).unwrap();
        assert_eq!(json, "\"editorial\"");

        let category: ErrorCategory = serde_json::from_str("\"contact\"").unwrap();
        assert_eq!(category, ErrorCategory::Contact);
    }
}
