//! # SubscriptionTaskRepository
//!
//! サブスクリプションタスクの取得を担当するリポジトリ。
//!
//! ## 設計方針
//!
//! - **読み取り専用**: タスクの作成・更新は管理側の責務
//! - **達成判定は SQL で行う**: 達成者数の集計と閾値の比較を
//!   `GROUP BY` + `HAVING` で DB に任せる

use async_trait::async_trait;
use sqlx::PgPool;
use subcheck_domain::subscription_task::{
    BotToken,
    ChannelUsername,
    SubscriptionTask,
    SubscriptionTaskId,
    SubscriptionTaskSummary,
    TaskType,
};

use crate::error::InfraError;

/// サブスクリプションタスクリポジトリトレイト
#[async_trait]
pub trait SubscriptionTaskRepository: Send + Sync {
    /// 受付中のタスクを最大 `limit` 件取得する
    ///
    /// 受付中 = 達成記録の件数が `required_subscriptions_count` 未満。
    async fn find_open(&self, limit: i64) -> Result<Vec<SubscriptionTaskSummary>, InfraError>;

    /// ID でタスクを検索する
    async fn find_by_id(
        &self,
        id: SubscriptionTaskId,
    ) -> Result<Option<SubscriptionTask>, InfraError>;
}

/// PostgreSQL 実装の SubscriptionTaskRepository
#[derive(Debug, Clone)]
pub struct PostgresSubscriptionTaskRepository {
    pool: PgPool,
}

impl PostgresSubscriptionTaskRepository {
    /// 新しいリポジトリインスタンスを作成
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct SummaryRow {
    id:   i64,
    text: String,
}

#[derive(sqlx::FromRow)]
struct TaskRow {
    id:                           i64,
    bot_token:                    String,
    text:                         String,
    required_subscriptions_count: i32,
    initial_subscriptions_count:  i32,
    #[sqlx(rename = "type")]
    task_type:                    String,
    entity_username:              Option<String>,
}

impl From<TaskRow> for SubscriptionTask {
    fn from(row: TaskRow) -> Self {
        SubscriptionTask::from_db(
            SubscriptionTaskId::new(row.id),
            BotToken::new(row.bot_token),
            row.text,
            row.required_subscriptions_count,
            row.initial_subscriptions_count,
            TaskType::from_db(&row.task_type),
            row.entity_username.map(ChannelUsername::new),
        )
    }
}

#[async_trait]
impl SubscriptionTaskRepository for PostgresSubscriptionTaskRepository {
    #[tracing::instrument(skip_all, level = "debug", fields(limit = limit))]
    async fn find_open(&self, limit: i64) -> Result<Vec<SubscriptionTaskSummary>, InfraError> {
        let rows = sqlx::query_as::<_, SummaryRow>(
            r#"
            SELECT t.id, t.text
            FROM subscription_tasks t
            LEFT JOIN user_subscriptions us ON us.task_id = t.id
            GROUP BY t.id
            HAVING COUNT(us.id) < t.required_subscriptions_count
            ORDER BY t.id
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows
            .into_iter()
            .map(|row| SubscriptionTaskSummary {
                id:   SubscriptionTaskId::new(row.id),
                text: row.text,
            })
            .collect())
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%id))]
    async fn find_by_id(
        &self,
        id: SubscriptionTaskId,
    ) -> Result<Option<SubscriptionTask>, InfraError> {
        let row = sqlx::query_as::<_, TaskRow>(
            r#"
            SELECT
                id,
                bot_token,
                text,
                required_subscriptions_count,
                initial_subscriptions_count,
                "type",
                entity_username
            FROM subscription_tasks
            WHERE id = $1
            "#,
        )
        .bind(id.as_i64())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(SubscriptionTask::from))
    }
}
