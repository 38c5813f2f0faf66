//! Data models
//!
//! Wire types exchanged with the admin dashboard and the public site.
//! Fields are camelCase and record ids are serialized as `_id` (`table:key`).
//! `*Input` types are request bodies; required fields default to empty so the
//! server can answer a missing field with a validation error instead of a
//! deserialization failure.

pub mod blog;
pub mod contact;
pub mod hero;
pub mod logo;
pub mod media;
pub mod product;
pub mod review;
pub mod service;
pub mod user;

// Re-exports
pub use blog::*;
pub use contact::*;
pub use hero::*;
pub use logo::*;
pub use media::*;
pub use product::*;
pub use review::*;
pub use service::*;
pub use user::*;
