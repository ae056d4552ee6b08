//! # Telegram ユーザー
//!
//! Telegram 側で採番されるユーザー識別子を表す値オブジェクト。
//!
//! ## 不変条件
//!
//! - ユーザー ID は 1 以上の整数
//!
//! クライアントは `X-Telegram-User-Id` ヘッダーで ID を送ってくるため、
//! 文字列からの生成（[`TelegramUserId::parse`]）も提供する。

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// Telegram ユーザー ID（値オブジェクト）
///
/// # 使用例
///
/// ```rust
/// use subcheck_domain::telegram_user::TelegramUserId;
///
/// let id = TelegramUserId::parse("777").unwrap();
/// assert_eq!(id.as_i64(), 777);
/// assert_eq!(id.to_string(), "777");
///
/// assert!(TelegramUserId::parse("abc").is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct TelegramUserId(i64);

impl TelegramUserId {
    /// 整数から ID を作成する
    ///
    /// # エラー
    ///
    /// 0 以下の場合は `DomainError::Validation` を返す。
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value <= 0 {
            return Err(DomainError::Validation(
                "Telegram ユーザー ID は 1 以上である必要があります".to_string(),
            ));
        }
        Ok(Self(value))
    }

    /// 文字列（ヘッダー値）から ID を作成する
    ///
    /// 前後の空白は無視する。数値として解釈できない場合や
    /// 0 以下の場合は `DomainError::Validation` を返す。
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let number = value.trim().parse::<i64>().map_err(|_| {
            DomainError::Validation(format!(
                "Telegram ユーザー ID は整数である必要があります: {value:?}"
            ))
        })?;
        Self::new(number)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}
