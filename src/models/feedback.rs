use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// 用户反馈，id 在所有反馈中唯一（顺序递增）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    pub id: u64,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl Feedback {
    pub fn new(id: u64, content: impl Into<String>) -> Self {
        Self {
            id,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SubmitFeedbackRequest {
    #[schema(example = "Please add a sound effect when the wheel stops")]
    pub content: String,
}
