//! # ユースケース層
//!
//! Subscription Service のビジネスロジックを実装する。
//!
//! ## 設計方針
//!
//! - **トレイトベースの設計**: ハンドラテストでスタブに差し替えられるようトレイトを定義
//! - **依存性注入**: リポジトリと Telegram クライアントを外部から注入

pub mod subscription_task;

use async_trait::async_trait;
pub use subscription_task::{OPEN_TASK_LIMIT, SubscriptionTaskUseCaseImpl};
use subcheck_domain::{
    subscription_task::{SubscriptionTaskId, SubscriptionTaskSummary},
    telegram_user::TelegramUserId,
};

use crate::error::ServiceError;

/// サブスクリプションタスクユースケーストレイト
#[async_trait]
pub trait SubscriptionTaskUseCase: Send + Sync {
    /// 受付中のタスクを最大 [`OPEN_TASK_LIMIT`] 件取得する
    async fn list_open_tasks(&self) -> Result<Vec<SubscriptionTaskSummary>, ServiceError>;

    /// ユーザーがタスクを達成しているかを検証する
    ///
    /// ## 戻り値
    ///
    /// - `Ok(true)`: 達成済み（達成記録が存在することを保証する）
    /// - `Ok(false)`: 未達成、または検証できなかった
    /// - `Err(ServiceError::NotFound)`: タスクが存在しない
    async fn verify_subscription(
        &self,
        task_id: SubscriptionTaskId,
        user_id: TelegramUserId,
    ) -> Result<bool, ServiceError>;
}

#[async_trait]
impl SubscriptionTaskUseCase for SubscriptionTaskUseCaseImpl {
    async fn list_open_tasks(&self) -> Result<Vec<SubscriptionTaskSummary>, ServiceError> {
        self.list_open_tasks().await
    }

    async fn verify_subscription(
        &self,
        task_id: SubscriptionTaskId,
        user_id: TelegramUserId,
    ) -> Result<bool, ServiceError> {
        self.verify_subscription(task_id, user_id).await
    }
}
