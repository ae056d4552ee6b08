//! # subcheck ドメイン層
//!
//! サブスクリプションタスク（チャンネル参加・ボット開始）の検証サービスにおける
//! ドメインモデルを定義する。
//!
//! ## 設計方針
//!
//! - **エンティティ**: 一意の識別子を持つオブジェクト（例: SubscriptionTask）
//! - **値オブジェクト**: 識別子を持たない不変オブジェクト（例: TelegramUserId,
//!   BotToken）
//! - **ドメインエラー**: ビジネスルール違反を表現するエラー型
//!
//! ## 依存関係の方向
//!
//! ```text
//! subscription-service → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（DB、Telegram Bot API）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`error`] - ドメイン層で発生するエラーの定義
//! - [`subscription_task`] - サブスクリプションタスクと検証方法
//! - [`telegram_user`] - Telegram ユーザー識別子
//! - [`user_subscription`] - ユーザーのタスク達成記録
//!
//! ## 使用例
//!
//! ```rust
//! use subcheck_domain::{DomainError, telegram_user::TelegramUserId};
//!
//! let user_id = TelegramUserId::new(777).unwrap();
//! assert_eq!(user_id.as_i64(), 777);
//!
//! assert!(matches!(TelegramUserId::new(0), Err(DomainError::Validation(_))));
//! ```

pub mod error;
pub mod subscription_task;
pub mod telegram_user;
pub mod user_subscription;

pub use error::DomainError;
