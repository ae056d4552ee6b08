//! # subcheck インフラ層
//!
//! 外部システムとの接続・通信を担当するインフラストラクチャ層。
//!
//! ## 責務
//!
//! - **データベース接続**: PostgreSQL への接続プール管理とマイグレーション
//! - **リポジトリ実装**: タスクと達成記録の永続化
//! - **外部 API クライアント**: Telegram Bot API との通信
//!
//! ## 依存関係
//!
//! ```text
//! subscription-service → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`db`] - PostgreSQL データベース接続管理
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリ実装
//! - [`telegram`] - Telegram Bot API クライアント
//!
//! ## 使用例
//!
//! ```rust,ignore
//! use subcheck_infra::{db, repository::PostgresSubscriptionTaskRepository};
//!
//! async fn setup() -> Result<(), Box<dyn std::error::Error>> {
//!     let pool = db::create_pool("postgres://localhost/subcheck").await?;
//!     db::run_migrations(&pool).await?;
//!
//!     let tasks = PostgresSubscriptionTaskRepository::new(pool);
//!     Ok(())
//! }
//! ```

pub mod db;
pub mod error;
#[cfg(any(test, feature = "test-utils"))]
pub mod mock;
pub mod repository;
pub mod telegram;

pub use error::InfraError;
pub use telegram::{TelegramApiClient, TelegramClient, TelegramError};
