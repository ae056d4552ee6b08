//! # リポジトリ実装
//!
//! ドメインモデルの永続化を担当するリポジトリのトレイトと PostgreSQL 実装。
//!
//! ## 設計方針
//!
//! - **データベース抽象化**: sqlx を使用し、PostgreSQL 固有の処理をカプセル化
//! - **テスタビリティ**: トレイト経由でモック可能な設計

pub mod subscription_task_repository;
pub mod user_subscription_repository;

pub use subscription_task_repository::{
    PostgresSubscriptionTaskRepository,
    SubscriptionTaskRepository,
};
pub use user_subscription_repository::{
    PostgresUserSubscriptionRepository,
    UserSubscriptionRepository,
};
