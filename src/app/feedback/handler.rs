//! 反馈处理器
//!
//! 只做结构校验并记录日志，不落存储。

use axum::{extract::rejection::JsonRejection, http::StatusCode, response::Json};
use tracing::info;
use uuid::Uuid;

use super::model::{Feedback, FeedbackRequest};
use crate::{core::error::CoreError, validators::is_valid_email};

pub async fn submit_feedback(
    payload: Result<Json<FeedbackRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Feedback>), CoreError> {
    let Json(request) = payload?;
    let feedback = validate(request)?;

    info!(feedback_id = %feedback.id, email = %feedback.email, "收到反馈");

    Ok((StatusCode::CREATED, Json(feedback)))
}

fn validate(request: FeedbackRequest) -> Result<Feedback, CoreError> {
    if !is_valid_email(request.email.as_deref()) {
        return Err(CoreError::BadRequest("请提供有效的邮箱地址".to_string()));
    }

    let message = match request.message {
        Some(message) if !message.trim().is_empty() => message.trim().to_string(),
        _ => return Err(CoreError::BadRequest("反馈内容不能为空".to_string())),
    };

    Ok(Feedback {
        id: Uuid::new_v4().to_string(),
        name: request.name.unwrap_or_default().trim().to_string(),
        email: request.email.unwrap_or_default(),
        message,
        received_at: chrono::Utc::now().to_rfc3339(),
    })
}
