//! Viewer extractor
//!
//! Extracts the optional `viewerId` query parameter that read endpoints
//! use to fill the viewer's own like flags.

use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use campus_core::Snowflake;
use serde::Deserialize;

use crate::response::ApiError;

/// Raw viewer query parameters
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewerParams {
    #[serde(default)]
    pub viewer_id: Option<String>,
}

/// Optional viewer identity for read personalization
///
/// Absent viewer means anonymous: listings still work, with every
/// `viewerHasLiked` flag false.
#[derive(Debug, Clone, Copy, Default)]
pub struct Viewer(pub Option<Snowflake>);

impl TryFrom<ViewerParams> for Viewer {
    type Error = ApiError;

    fn try_from(params: ViewerParams) -> Result<Self, Self::Error> {
        let viewer_id = params
            .viewer_id
            .map(|s| {
                s.parse::<Snowflake>()
                    .map_err(|_| ApiError::invalid_query("Invalid 'viewerId' format"))
            })
            .transpose()?;

        Ok(Viewer(viewer_id))
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<ViewerParams>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::invalid_query(e.to_string()))?;

        Viewer::try_from(params)
    }
}
