//! Topic model -> entity mapper

use campus_core::entities::Topic;
use campus_core::value_objects::Snowflake;

use crate::models::TopicModel;

/// Convert TopicModel to Topic entity
impl From<TopicModel> for Topic {
    fn from(model: TopicModel) -> Self {
        Topic {
            id: Snowflake::new(model.id),
            title: model.title,
            position: model.position,
            created_at: model.created_at,
        }
    }
}
