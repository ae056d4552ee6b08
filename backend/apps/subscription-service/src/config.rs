//! # Subscription Service 設定
//!
//! 環境変数から Subscription Service サーバーの設定を読み込む。
//!
//! | 変数 | 必須 | デフォルト |
//! |------|------|-----------|
//! | `SUBSCRIPTION_HOST` | - | `0.0.0.0` |
//! | `SUBSCRIPTION_PORT` | ○ | - |
//! | `DATABASE_URL` | ○ | - |
//! | `TELEGRAM_API_BASE_URL` | - | `https://api.telegram.org` |

use std::env;

use subcheck_infra::telegram::DEFAULT_BASE_URL;
use thiserror::Error;

/// 設定読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} が設定されていません")]
    Missing(&'static str),

    #[error("{name} の値が不正です: {value:?}")]
    Invalid { name: &'static str, value: String },
}

/// Subscription Service サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionConfig {
    /// バインドアドレス
    pub host:                  String,
    /// ポート番号
    pub port:                  u16,
    /// データベース接続 URL
    pub database_url:          String,
    /// Telegram Bot API のベース URL
    pub telegram_api_base_url: String,
}

impl SubscriptionConfig {
    /// 環境変数から設定を読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// 任意の参照関数から設定を読み込む
    ///
    /// 空文字列は未設定として扱う。
    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| lookup(name).filter(|v| !v.is_empty());

        let port_value = get("SUBSCRIPTION_PORT").ok_or(ConfigError::Missing("SUBSCRIPTION_PORT"))?;
        let port = port_value
            .parse()
            .map_err(|_| ConfigError::Invalid {
                name:  "SUBSCRIPTION_PORT",
                value: port_value.clone(),
            })?;

        Ok(Self {
            host: get("SUBSCRIPTION_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            database_url: get("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            telegram_api_base_url: get("TELEGRAM_API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        })
    }
}
