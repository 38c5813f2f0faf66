//! Shared types for the content backend
//!
//! Types used by the server and mirrored by the admin dashboard: the unified
//! error envelope, wire models and the display-ordering protocol.

pub mod error;
pub mod models;
pub mod ordering;

pub use ordering::{MoveDirection, OrderUpdate, Orderable, ReorderReport, plan_move, sort_canonical};
