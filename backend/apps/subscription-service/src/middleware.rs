//! # ミドルウェア
//!
//! 全ルートに適用する axum ミドルウェア。

pub mod cors;

pub use cors::cors;
