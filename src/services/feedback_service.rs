use crate::config::FeedbackConfig;
use crate::database::LotteryStore;
use crate::error::{AppError, AppResult};
use crate::models::*;
use crate::utils::validate_feedback_content;

#[derive(Clone)]
pub struct FeedbackService {
    store: LotteryStore,
    max_content_length: usize,
}

impl FeedbackService {
    pub fn new(store: LotteryStore, config: &FeedbackConfig) -> Self {
        Self {
            store,
            max_content_length: config.max_content_length,
        }
    }

    /// 提交反馈，id 顺序递增
    pub async fn submit(&self, request: SubmitFeedbackRequest) -> AppResult<Feedback> {
        let content = request.content.trim();
        validate_feedback_content(content, self.max_content_length)?;

        let mut state = self.store.write().await;
        let feedback = Feedback::new(state.next_feedback_id()?, content);
        state.feedback.push(feedback.clone());
        log::info!("Received feedback #{}", feedback.id);
        Ok(feedback)
    }

    /// 获取反馈列表（最新在前）
    pub async fn list(&self) -> AppResult<Vec<Feedback>> {
        let mut list = self.store.read().await.feedback.clone();
        list.sort_by(|a, b| b.timestamp.cmp(&a.timestamp).then(b.id.cmp(&a.id)));
        Ok(list)
    }

    pub async fn delete(&self, id: u64) -> AppResult<()> {
        let mut state = self.store.write().await;
        let pos = state
            .feedback
            .iter()
            .position(|f| f.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Feedback {id} not found")))?;
        state.feedback.remove(pos);
        Ok(())
    }
}
