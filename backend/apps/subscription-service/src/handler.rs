//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、ビジネスロジックは usecase 層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ヘルスチェック
//! - `subscription_task`: タスク一覧・達成検証

pub mod health;
pub mod subscription_task;

pub use health::{ReadinessState, health_check, readiness_check};
pub use subscription_task::{
    SubscriptionTaskState,
    TELEGRAM_USER_ID_HEADER,
    list_subscription_tasks,
    verify_subscription,
};

use axum::http::StatusCode;

/// ルートに一致しないリクエストへの応答（プレーンテキスト）
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}
