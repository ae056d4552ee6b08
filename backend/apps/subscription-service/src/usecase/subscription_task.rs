//! # サブスクリプションタスクユースケース
//!
//! タスク一覧の取得と、ユーザーのタスク達成の検証・記録を行う。
//!
//! ## 検証の流れ
//!
//! 1. タスクを取得（存在しなければ NotFound）
//! 2. タスク種別に応じて Bot API で検証
//! 3. 達成していれば達成記録を冪等に登録
//!
//! Bot API の失敗は Telegram クライアント内で「未達成」に変換されるため、
//! ここでエラーになるのはデータベースの失敗のみ。

use std::sync::Arc;

use subcheck_domain::{
    subscription_task::{
        ChannelUsername,
        SubscriptionTaskId,
        SubscriptionTaskSummary,
        VerificationMethod,
    },
    telegram_user::TelegramUserId,
    user_subscription::UserSubscription,
};
use subcheck_infra::{
    TelegramClient,
    repository::{SubscriptionTaskRepository, UserSubscriptionRepository},
};

use crate::error::ServiceError;

/// タスク一覧で返す最大件数
pub const OPEN_TASK_LIMIT: i64 = 3;

/// サブスクリプションタスクユースケースの実装
pub struct SubscriptionTaskUseCaseImpl {
    task_repository:         Arc<dyn SubscriptionTaskRepository>,
    subscription_repository: Arc<dyn UserSubscriptionRepository>,
    telegram_client:         Arc<dyn TelegramClient>,
}

impl SubscriptionTaskUseCaseImpl {
    pub fn new(
        task_repository: Arc<dyn SubscriptionTaskRepository>,
        subscription_repository: Arc<dyn UserSubscriptionRepository>,
        telegram_client: Arc<dyn TelegramClient>,
    ) -> Self {
        Self {
            task_repository,
            subscription_repository,
            telegram_client,
        }
    }

    /// 受付中のタスクを取得する
    pub async fn list_open_tasks(&self) -> Result<Vec<SubscriptionTaskSummary>, ServiceError> {
        Ok(self.task_repository.find_open(OPEN_TASK_LIMIT).await?)
    }

    /// ユーザーのタスク達成を検証し、達成していれば記録する
    #[tracing::instrument(skip_all, fields(%task_id, %user_id))]
    pub async fn verify_subscription(
        &self,
        task_id: SubscriptionTaskId,
        user_id: TelegramUserId,
    ) -> Result<bool, ServiceError> {
        let task = self
            .task_repository
            .find_by_id(task_id)
            .await?
            .ok_or_else(|| ServiceError::NotFound("Task not found".to_string()))?;

        let subscribed = match task.verification_method() {
            VerificationMethod::ChannelMembership(channel) => {
                self.telegram_client
                    .is_channel_member(user_id, task.bot_token(), channel)
                    .await
            }
            VerificationMethod::BotStart => {
                self.telegram_client
                    .has_started_bot(user_id, task.bot_token())
                    .await
            }
            VerificationMethod::Unverifiable => {
                tracing::warn!(
                    task_type = task.task_type().as_str(),
                    entity_username = task.entity_username().map(ChannelUsername::as_str),
                    "検証方法のないタスクのため未達成として扱います"
                );
                false
            }
        };

        if subscribed {
            let inserted = self
                .subscription_repository
                .insert_if_absent(&UserSubscription::new(task.id(), user_id))
                .await?;
            if inserted {
                tracing::info!("タスク達成を記録しました");
            }
        }

        Ok(subscribed)
    }
}
