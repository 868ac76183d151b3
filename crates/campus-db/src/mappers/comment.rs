//! Comment model -> entity mapper

use campus_core::entities::{Comment, CommentView};
use campus_core::value_objects::Snowflake;

use crate::models::CommentViewModel;

/// Convert CommentViewModel to CommentView entity
impl From<CommentViewModel> for CommentView {
    fn from(model: CommentViewModel) -> Self {
        CommentView {
            comment: Comment {
                id: Snowflake::new(model.id),
                message_id: Snowflake::new(model.message_id),
                author_id: Snowflake::new(model.author_id),
                author_name: model.author_name,
                body: model.body,
                created_at: model.created_at,
            },
            like_count: model.like_count,
            viewer_has_liked: model.viewer_has_liked,
        }
    }
}
