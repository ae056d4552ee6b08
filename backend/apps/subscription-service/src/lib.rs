//! # Subscription Service ライブラリ
//!
//! Telegram ユーザーのタスク達成（チャンネル参加・ボット開始）を検証する
//! HTTP サービス。ルーター・ハンドラ・ユースケースを公開し、
//! 統合テストから組み立て済みのルーターを利用できるようにする。
//!
//! ## 依存関係
//!
//! ```text
//! subscription-service → infra → domain
//!          ↘
//!            shared
//! ```

pub mod app_builder;
pub mod error;
pub mod handler;
pub mod middleware;
pub mod usecase;

pub use app_builder::build_app;
