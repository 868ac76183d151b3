//! Topic database model

use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for topics table
#[derive(Debug, Clone, FromRow)]
pub struct TopicModel {
    pub id: i64,
    pub title: String,
    pub position: i32,
    pub created_at: DateTime<Utc>,
}
