//! # サブスクリプションタスクハンドラ
//!
//! ## エンドポイント
//!
//! - `GET /api/subscription-tasks` - 受付中のタスク一覧
//! - `GET /api/subscriptions/tasks/{id}` - タスク達成の検証
//!
//! 検証エンドポイントはユーザー ID を `X-Telegram-User-Id` ヘッダーで受け取る。
//! ヘッダーの検証はタスクの存在確認より先に行うため、
//! ヘッダーが不正な場合はタスク ID に関係なく 400 を返す。

use std::sync::Arc;

use axum::{
    Json,
    extract::{Path, State},
    http::HeaderMap,
    response::IntoResponse,
};
use serde::Serialize;
use subcheck_domain::{
    subscription_task::{SubscriptionTaskId, SubscriptionTaskSummary},
    telegram_user::TelegramUserId,
};

use crate::{error::ServiceError, usecase::SubscriptionTaskUseCase};

/// ユーザー ID を運ぶリクエストヘッダー
pub const TELEGRAM_USER_ID_HEADER: &str = "x-telegram-user-id";

/// サブスクリプションタスクハンドラの共有状態
pub struct SubscriptionTaskState {
    pub usecase: Arc<dyn SubscriptionTaskUseCase>,
}

// --- レスポンス型 ---

/// タスク一覧の要素
#[derive(Debug, Serialize)]
pub struct SubscriptionTaskDto {
    pub id:   i64,
    pub text: String,
}

impl From<SubscriptionTaskSummary> for SubscriptionTaskDto {
    fn from(summary: SubscriptionTaskSummary) -> Self {
        Self {
            id:   summary.id.as_i64(),
            text: summary.text,
        }
    }
}

/// 達成検証レスポンス
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifySubscriptionResponse {
    pub user_subscribed: bool,
}

// --- ハンドラ ---

/// GET /api/subscription-tasks
///
/// 受付中のタスクを最大 3 件、`[{id, text}]` 形式で返す。
pub async fn list_subscription_tasks(
    State(state): State<Arc<SubscriptionTaskState>>,
) -> Result<impl IntoResponse, ServiceError> {
    let tasks = state.usecase.list_open_tasks().await?;

    Ok(Json(
        tasks
            .into_iter()
            .map(SubscriptionTaskDto::from)
            .collect::<Vec<_>>(),
    ))
}

/// GET /api/subscriptions/tasks/{id}
///
/// ユーザーがタスクを達成しているかを検証し、`{userSubscribed}` を返す。
/// 数値として解釈できないタスク ID は存在しないタスクとして扱う。
pub async fn verify_subscription(
    State(state): State<Arc<SubscriptionTaskState>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Result<impl IntoResponse, ServiceError> {
    let user_id = telegram_user_id(&headers)?;
    let task_id = SubscriptionTaskId::parse(&id)
        .ok_or_else(|| ServiceError::NotFound("Task not found".to_string()))?;

    let user_subscribed = state.usecase.verify_subscription(task_id, user_id).await?;

    Ok(Json(VerifySubscriptionResponse { user_subscribed }))
}

/// `X-Telegram-User-Id` ヘッダーからユーザー ID を取り出す
fn telegram_user_id(headers: &HeaderMap) -> Result<TelegramUserId, ServiceError> {
    let value = headers
        .get(TELEGRAM_USER_ID_HEADER)
        .ok_or_else(|| ServiceError::BadRequest("User ID not provided".to_string()))?;

    value
        .to_str()
        .ok()
        .and_then(|v| TelegramUserId::parse(v).ok())
        .ok_or_else(|| ServiceError::BadRequest("Invalid user ID".to_string()))
}
