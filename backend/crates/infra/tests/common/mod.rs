//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードデータ挿入ヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use sqlx::PgPool;
use subcheck_domain::subscription_task::SubscriptionTaskId;

/// チャンネル参加タスクを挿入し、採番された ID を返す
pub async fn insert_channel_task(
    pool: &PgPool,
    text: &str,
    required_subscriptions_count: i32,
    channel: &str,
) -> SubscriptionTaskId {
    insert_task(pool, text, required_subscriptions_count, "channel", Some(channel)).await
}

/// ボット開始タスクを挿入し、採番された ID を返す
pub async fn insert_bot_task(
    pool: &PgPool,
    text: &str,
    required_subscriptions_count: i32,
) -> SubscriptionTaskId {
    insert_task(pool, text, required_subscriptions_count, "bot", None).await
}

/// 任意の種別のタスクを挿入し、採番された ID を返す
pub async fn insert_task(
    pool: &PgPool,
    text: &str,
    required_subscriptions_count: i32,
    task_type: &str,
    entity_username: Option<&str>,
) -> SubscriptionTaskId {
    let (id,): (i64,) = sqlx::query_as(
        r#"
        INSERT INTO subscription_tasks
            (bot_token, text, required_subscriptions_count, initial_subscriptions_count, "type", entity_username)
        VALUES ('123:TEST', $1, $2, 0, $3, $4)
        RETURNING id
        "#,
    )
    .bind(text)
    .bind(required_subscriptions_count)
    .bind(task_type)
    .bind(entity_username)
    .fetch_one(pool)
    .await
    .expect("タスク作成に失敗");

    SubscriptionTaskId::new(id)
}

/// 達成記録を直接挿入する
pub async fn insert_subscription(pool: &PgPool, task_id: SubscriptionTaskId, telegram_user_id: i64) {
    sqlx::query("INSERT INTO user_subscriptions (task_id, telegram_user_id) VALUES ($1, $2)")
        .bind(task_id.as_i64())
        .bind(telegram_user_id)
        .execute(pool)
        .await
        .expect("達成記録の作成に失敗");
}

/// タスクの達成記録件数を数える
pub async fn count_subscriptions(pool: &PgPool, task_id: SubscriptionTaskId) -> i64 {
    let (count,): (i64,) =
        sqlx::query_as("SELECT COUNT(*) FROM user_subscriptions WHERE task_id = $1")
            .bind(task_id.as_i64())
            .fetch_one(pool)
            .await
            .expect("件数の取得に失敗");
    count
}
