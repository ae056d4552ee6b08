//! # UserSubscriptionRepository
//!
//! ユーザーのタスク達成記録の永続化を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **冪等な登録**: `(task_id, telegram_user_id)` の UNIQUE 制約と
//!   `ON CONFLICT DO NOTHING` により、同時リクエストでも 1 件のみ作成される
//! - **追記のみ**: 達成記録の更新・削除は行わない

use async_trait::async_trait;
use sqlx::PgPool;
use subcheck_domain::user_subscription::UserSubscription;

use crate::error::InfraError;

/// ユーザーサブスクリプションリポジトリトレイト
#[async_trait]
pub trait UserSubscriptionRepository: Send + Sync {
    /// 達成記録を登録する（既に存在する場合は何もしない）
    ///
    /// 新規に登録した場合は `true`、既存の記録があった場合は `false` を返す。
    async fn insert_if_absent(
        &self,
        subscription: &UserSubscription,
    ) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の UserSubscriptionRepository
#[derive(Debug, Clone)]
pub struct PostgresUserSubscriptionRepository {
    pool: PgPool,
}

impl PostgresUserSubscriptionRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserSubscriptionRepository for PostgresUserSubscriptionRepository {
    #[tracing::instrument(
        skip_all,
        level = "debug",
        fields(task_id = %subscription.task_id(), telegram_user_id = %subscription.telegram_user_id())
    )]
    async fn insert_if_absent(
        &self,
        subscription: &UserSubscription,
    ) -> Result<bool, InfraError> {
        let result = sqlx::query(
            r#"
            INSERT INTO user_subscriptions (task_id, telegram_user_id)
            VALUES ($1, $2)
            ON CONFLICT (task_id, telegram_user_id) DO NOTHING
            "#,
        )
        .bind(subscription.task_id().as_i64())
        .bind(subscription.telegram_user_id().as_i64())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() == 1)
    }
}
