//! # Subscription Service エラー定義
//!
//! サービス固有のエラーと、HTTP レスポンスへの変換を定義する。
//!
//! レスポンスボディは常に `{"error": "..."}`。
//! 500 系はエラーメッセージをそのまま返し、ERROR ログを出力する。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use subcheck_shared::ErrorResponse;
use thiserror::Error;

/// Subscription Service で発生するエラー
#[derive(Debug, Error)]
pub enum ServiceError {
    /// 不正なリクエスト
    #[error("{0}")]
    BadRequest(String),

    /// リソースが見つからない
    #[error("{0}")]
    NotFound(String),

    /// データベースエラー
    #[error("{0}")]
    Database(#[from] subcheck_infra::InfraError),
}

impl ServiceError {
    fn status(&self) -> StatusCode {
        match self {
            ServiceError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ServiceError::Database(e) => {
                tracing::error!(error = %e, span_trace = %e.span_trace(), "データベースエラー");
            }
            ServiceError::BadRequest(_) | ServiceError::NotFound(_) => {}
        }

        (status, Json(ErrorResponse::new(self.to_string()))).into_response()
    }
}
