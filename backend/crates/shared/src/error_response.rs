//! # エラーレスポンス
//!
//! 全エンドポイントで共通のエラーレスポンス構造体を提供する。
//!
//! クライアント（Telegram Mini App）は `{"error": "..."}` 形式のみを解釈するため、
//! 追加のフィールドは持たない。
//!
//! axum の `IntoResponse` 変換は各サービスの責務（shared に axum 依存を入れない）。

use serde::{Deserialize, Serialize};

/// エラーレスポンス
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 人が読めるエラーメッセージ
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_jsonシリアライズでerrorフィールドのみを持つ() {
        let error = ErrorResponse::new("Task not found");
        let json = serde_json::to_value(&error).unwrap();

        assert_eq!(json, serde_json::json!({ "error": "Task not found" }));
    }

    #[test]
    fn test_jsonからデシリアライズできる() {
        let error: ErrorResponse =
            serde_json::from_str(r#"{"error": "User ID not provided"}"#).unwrap();

        assert_eq!(error, ErrorResponse::new("User ID not provided"));
    }
}
