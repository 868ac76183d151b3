//! Message model -> entity mapper

use campus_core::entities::{Message, MessageView};
use campus_core::value_objects::Snowflake;

use crate::models::MessageViewModel;

/// Convert MessageViewModel to MessageView entity
impl From<MessageViewModel> for MessageView {
    fn from(model: MessageViewModel) -> Self {
        MessageView {
            message: Message {
                id: Snowflake::new(model.id),
                author_id: Snowflake::new(model.author_id),
                author_name: model.author_name,
                body: model.body,
                created_at: model.created_at,
            },
            like_count: model.like_count,
            comment_count: model.comment_count,
            viewer_has_liked: model.viewer_has_liked,
        }
    }
}
