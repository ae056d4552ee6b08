//! SubscriptionTaskRepository 統合テスト
//!
//! データベースを使用したテスト。sqlx::test マクロを使用して、
//! テストごとに独立したデータベースを作成する。
//!
//! 実行方法:
//! ```bash
//! cargo test -p subcheck-infra --test subscription_task_repository_test
//! ```

mod common;

use common::{insert_bot_task, insert_channel_task, insert_subscription, insert_task};
use pretty_assertions::assert_eq;
use sqlx::PgPool;
use subcheck_domain::subscription_task::{
    ChannelUsername,
    SubscriptionTaskId,
    TaskType,
    VerificationMethod,
};
use subcheck_infra::repository::{PostgresSubscriptionTaskRepository, SubscriptionTaskRepository};

#[sqlx::test(migrations = "../../migrations")]
async fn test_受付中のタスクのみが返る(pool: PgPool) {
    // Given: 達成者が上限に達したタスクと未達のタスク
    let full = insert_channel_task(&pool, "満員", 2, "@full").await;
    insert_subscription(&pool, full, 1).await;
    insert_subscription(&pool, full, 2).await;
    let open = insert_channel_task(&pool, "受付中", 2, "@open").await;
    insert_subscription(&pool, open, 1).await;

    let repo = PostgresSubscriptionTaskRepository::new(pool);

    // When
    let tasks = repo.find_open(3).await.unwrap();

    // Then
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0].id, open);
    assert_eq!(tasks[0].text, "受付中");
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_受付中のタスクは上限件数までしか返らない(pool: PgPool) {
    for i in 0..5 {
        insert_bot_task(&pool, &format!("タスク{i}"), 10).await;
    }
    let repo = PostgresSubscriptionTaskRepository::new(pool);

    let tasks = repo.find_open(3).await.unwrap();

    assert_eq!(tasks.len(), 3);
    let texts: Vec<_> = tasks.iter().map(|t| t.text.as_str()).collect();
    assert_eq!(texts, vec!["タスク0", "タスク1", "タスク2"]);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_必要人数が0のタスクは受付中にならない(pool: PgPool) {
    insert_bot_task(&pool, "締め切り済み", 0).await;
    let repo = PostgresSubscriptionTaskRepository::new(pool);

    let tasks = repo.find_open(3).await.unwrap();

    assert!(tasks.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_タスクがない場合は空のリストを返す(pool: PgPool) {
    let repo = PostgresSubscriptionTaskRepository::new(pool);

    let tasks = repo.find_open(3).await.unwrap();

    assert!(tasks.is_empty());
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_idでタスクを取得できる(pool: PgPool) {
    let id = insert_channel_task(&pool, "チャンネルに参加", 5, "mychannel").await;
    let repo = PostgresSubscriptionTaskRepository::new(pool);

    let task = repo.find_by_id(id).await.unwrap().expect("タスクが見つからない");

    assert_eq!(task.id(), id);
    assert_eq!(task.text(), "チャンネルに参加");
    assert_eq!(task.bot_token().as_str(), "123:TEST");
    assert_eq!(task.required_subscriptions_count(), 5);
    assert_eq!(task.initial_subscriptions_count(), 0);
    assert_eq!(task.task_type(), &TaskType::Channel);
    assert_eq!(task.entity_username(), Some(&ChannelUsername::new("mychannel")));
    match task.verification_method() {
        VerificationMethod::ChannelMembership(channel) => {
            assert_eq!(channel.chat_id(), "@mychannel");
        }
        other => panic!("想定外の検証方法: {other:?}"),
    }
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_未知の種別のタスクも取得できる(pool: PgPool) {
    let id = insert_task(&pool, "投票", 5, "poll", None).await;
    let repo = PostgresSubscriptionTaskRepository::new(pool);

    let task = repo.find_by_id(id).await.unwrap().expect("タスクが見つからない");

    assert_eq!(task.task_type(), &TaskType::Unsupported("poll".to_string()));
    assert_eq!(task.entity_username(), None);
    assert_eq!(task.verification_method(), VerificationMethod::Unverifiable);
}

#[sqlx::test(migrations = "../../migrations")]
async fn test_存在しないidの場合noneを返す(pool: PgPool) {
    let repo = PostgresSubscriptionTaskRepository::new(pool);

    let result = repo.find_by_id(SubscriptionTaskId::new(999_999)).await.unwrap();

    assert!(result.is_none());
}
