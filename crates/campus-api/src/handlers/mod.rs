//! Route handlers
//!
//! All HTTP request handlers organized by domain.

pub mod comments;
pub mod health;
pub mod likes;
pub mod meals;
pub mod messages;
pub mod topics;
