//! 反馈数据模型

use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct FeedbackRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub message: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub name: String,
    pub email: String,
    pub message: String,
    pub received_at: String,
}
