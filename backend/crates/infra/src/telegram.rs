//! # Telegram Bot API クライアント
//!
//! タスク達成の検証に使う Bot API 呼び出しを担当する。
//!
//! ## エンドポイント
//!
//! - `GET /bot{token}/getChatMember?chat_id=@channel&user_id=N` - チャンネル参加状況
//! - `GET /bot{token}/getChat?chat_id=N` - ボットとの会話開始状況
//!
//! ## エラー方針
//!
//! 検証呼び出しの失敗（ネットワークエラー、`ok: false`、不正なレスポンス）は
//! 呼び出し元に伝播させず、WARN ログを出した上で「未達成」（`false`）として扱う。
//! Bot API はエラー時も 4xx と `{"ok": false, ...}` を返すため、
//! HTTP ステータスに関係なくボディをデコードして `ok` を確認する。
//!
//! ボットトークンは URL パスに含まれるため、ログやエラーメッセージには
//! URL を出力しない。

use async_trait::async_trait;
use serde::{Deserialize, de::DeserializeOwned};
use subcheck_domain::{
    subscription_task::{BotToken, ChannelUsername},
    telegram_user::TelegramUserId,
};
use thiserror::Error;

/// Bot API のデフォルトのベース URL
pub const DEFAULT_BASE_URL: &str = "https://api.telegram.org";

/// Bot API 呼び出しのエラー
#[derive(Debug, Clone, Error)]
pub enum TelegramError {
    /// ネットワークエラー（接続失敗、タイムアウトなど）
    #[error("ネットワークエラー: {0}")]
    Network(String),

    /// レスポンスのデコード失敗
    #[error("レスポンスの解析に失敗しました: {0}")]
    Decode(String),

    /// Bot API がリクエストを拒否した（`ok: false`）
    #[error("Bot API エラー: {0}")]
    Api(String),

    /// `ok: true` だが `result` が含まれていない
    #[error("Bot API のレスポンスに result が含まれていません")]
    MissingResult,
}

impl From<reqwest::Error> for TelegramError {
    fn from(err: reqwest::Error) -> Self {
        // URL にボットトークンが含まれるため取り除く
        let err = err.without_url();
        if err.is_decode() {
            TelegramError::Decode(err.to_string())
        } else {
            TelegramError::Network(err.to_string())
        }
    }
}

// --- レスポンス型 ---

/// Bot API 共通のレスポンス形式
#[derive(Debug, Deserialize)]
struct TelegramResponse<T> {
    ok:          bool,
    result:      Option<T>,
    description: Option<String>,
}

impl<T> TelegramResponse<T> {
    /// `ok` のみを確認する（`result` の有無は問わない）
    fn into_ok(self) -> Result<Option<T>, TelegramError> {
        if !self.ok {
            return Err(TelegramError::Api(
                self.description
                    .unwrap_or_else(|| "説明なし".to_string()),
            ));
        }
        Ok(self.result)
    }

    fn into_result(self) -> Result<T, TelegramError> {
        self.into_ok()?.ok_or(TelegramError::MissingResult)
    }
}

/// チャンネル内でのメンバーの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChatMemberStatus {
    Creator,
    Administrator,
    Member,
    Restricted,
    Left,
    Kicked,
    #[serde(other)]
    Unknown,
}

impl ChatMemberStatus {
    /// チャンネルに参加しているとみなす状態か
    ///
    /// `creator` / `administrator` / `member` のみ参加扱い。
    pub fn is_subscribed(self) -> bool {
        matches!(self, Self::Creator | Self::Administrator | Self::Member)
    }
}

/// `getChatMember` の result
#[derive(Debug, Deserialize)]
struct ChatMember {
    status: ChatMemberStatus,
}

// --- クライアント ---

/// Telegram Bot API クライアントトレイト
///
/// 検証結果は常に bool で返し、エラーを伝播しない。
/// テスト時にスタブを使用できるようトレイトで定義。
#[async_trait]
pub trait TelegramClient: Send + Sync {
    /// ユーザーがチャンネルに参加しているかを確認する
    async fn is_channel_member(
        &self,
        user_id: TelegramUserId,
        bot_token: &BotToken,
        channel: &ChannelUsername,
    ) -> bool;

    /// ユーザーがボットとの会話を開始しているかを確認する
    async fn has_started_bot(&self, user_id: TelegramUserId, bot_token: &BotToken) -> bool;
}

/// Telegram Bot API クライアント実装
#[derive(Debug, Clone)]
pub struct TelegramApiClient {
    base_url: String,
    client:   reqwest::Client,
}

impl TelegramApiClient {
    /// 新しい TelegramApiClient を作成する
    ///
    /// # 引数
    ///
    /// - `base_url`: Bot API のベース URL（通常は [`DEFAULT_BASE_URL`]）
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client:   reqwest::Client::new(),
        }
    }

    /// Bot API のメソッドを呼び出し、レスポンス全体をデコードする
    async fn call<T: DeserializeOwned>(
        &self,
        bot_token: &BotToken,
        method: &str,
        query: &[(&str, String)],
    ) -> Result<TelegramResponse<T>, TelegramError> {
        let url = format!("{}/bot{}/{}", self.base_url, bot_token.as_str(), method);

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();
        let body = response.json::<TelegramResponse<T>>().await?;

        tracing::debug!(method, http.status_code = status.as_u16(), ok = body.ok, "Bot API 応答");

        Ok(body)
    }

    /// `getChatMember` でチャンネル内のユーザーの状態を取得する
    pub async fn get_chat_member_status(
        &self,
        user_id: TelegramUserId,
        bot_token: &BotToken,
        channel: &ChannelUsername,
    ) -> Result<ChatMemberStatus, TelegramError> {
        let member: ChatMember = self
            .call(
                bot_token,
                "getChatMember",
                &[
                    ("chat_id", channel.chat_id()),
                    ("user_id", user_id.to_string()),
                ],
            )
            .await?
            .into_result()?;
        Ok(member.status)
    }

    /// `getChat` でユーザーとのプライベートチャットを取得する
    ///
    /// ユーザーがボットを開始していない場合、Bot API は `ok: false` を返す。
    /// `ok: true` であれば `result` が無くても開始済みとみなす。
    pub async fn get_private_chat(
        &self,
        user_id: TelegramUserId,
        bot_token: &BotToken,
    ) -> Result<(), TelegramError> {
        self.call::<serde::de::IgnoredAny>(
            bot_token,
            "getChat",
            &[("chat_id", user_id.to_string())],
        )
        .await?
        .into_ok()?;
        Ok(())
    }
}

#[async_trait]
impl TelegramClient for TelegramApiClient {
    #[tracing::instrument(skip_all, level = "debug", fields(%user_id, channel = channel.as_str()))]
    async fn is_channel_member(
        &self,
        user_id: TelegramUserId,
        bot_token: &BotToken,
        channel: &ChannelUsername,
    ) -> bool {
        match self.get_chat_member_status(user_id, bot_token, channel).await {
            Ok(status) => status.is_subscribed(),
            Err(e) => {
                tracing::warn!(error = %e, "チャンネル参加状況の確認に失敗しました");
                false
            }
        }
    }

    #[tracing::instrument(skip_all, level = "debug", fields(%user_id))]
    async fn has_started_bot(&self, user_id: TelegramUserId, bot_token: &BotToken) -> bool {
        match self.get_private_chat(user_id, bot_token).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "ボット開始状況の確認に失敗しました");
                false
            }
        }
    }
}
