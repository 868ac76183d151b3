//! Pagination extractor
//!
//! Extracts cursor-based pagination parameters from query strings.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use campus_core::traits::MessageQuery;
use campus_core::Snowflake;
use serde::Deserialize;

use crate::response::ApiError;

/// Default page size
const DEFAULT_LIMIT: i32 = 50;
/// Maximum page size
const MAX_LIMIT: i32 = 100;

/// Raw pagination query parameters
#[derive(Debug, Deserialize)]
pub struct PaginationParams {
    /// Get items before this ID
    #[serde(default)]
    pub before: Option<String>,
    /// Get items after this ID
    #[serde(default)]
    pub after: Option<String>,
    /// Maximum number of items to return
    #[serde(default)]
    pub limit: Option<i32>,
}

/// Validated pagination parameters
#[derive(Debug, Clone)]
pub struct Pagination {
    /// Get items before this ID
    pub before: Option<Snowflake>,
    /// Get items after this ID
    pub after: Option<Snowflake>,
    /// Maximum number of items to return (validated to 1-100)
    pub limit: i32,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            before: None,
            after: None,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl Pagination {
    /// Create pagination with only a limit
    pub fn with_limit(limit: i32) -> Self {
        Self {
            before: None,
            after: None,
            limit: limit.clamp(1, MAX_LIMIT),
        }
    }

    /// Convert into the repository-level query
    pub fn into_query(self) -> MessageQuery {
        MessageQuery {
            before: self.before,
            after: self.after,
            limit: i64::from(self.limit),
        }
    }
}

impl TryFrom<PaginationParams> for Pagination {
    type Error = ApiError;

    fn try_from(params: PaginationParams) -> Result<Self, Self::Error> {
        // Parse before cursor
        let before = params
            .before
            .map(|s| {
                s.parse::<Snowflake>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'before' cursor format"))
            })
            .transpose()?;

        // Parse after cursor
        let after = params
            .after
            .map(|s| {
                s.parse::<Snowflake>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'after' cursor format"))
            })
            .transpose()?;

        // Validate and clamp limit
        let limit = params.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        Ok(Pagination {
            before,
            after,
            limit,
        })
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Pagination
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<PaginationParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Pagination::try_from(params)
    }
}
