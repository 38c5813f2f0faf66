//! Database Models
//!
//! Stored documents use snake_case fields, `sort_order` / `is_active` for the
//! ordering columns, Unix-millis timestamps and `RecordId` ids. Nested payload
//! objects reuse the wire types from `shared::models`.

pub mod blog;
pub mod contact;
pub mod hero;
pub mod logo;
pub mod product;
pub mod review;
pub mod service;
pub mod user;

pub use blog::Blog;
pub use contact::Contact;
pub use hero::HeroSlide;
pub use logo::Logo;
pub use product::Product;
pub use review::Review;
pub use service::Service;
pub use user::User;

use surrealdb::RecordId;

pub(crate) fn default_true() -> bool {
    true
}

/// Record id rendered as `table:key` for the API
pub(crate) fn id_string(id: &Option<RecordId>) -> String {
    id.as_ref().map(|r| r.to_string()).unwrap_or_default()
}
