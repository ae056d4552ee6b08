//! # サブスクリプションタスク
//!
//! ユーザーが達成すると報酬を得られるタスクのモデル。
//! タスクには 2 種類ある:
//!
//! - **チャンネル参加**（`channel`）: ユーザーが指定チャンネルのメンバーであること
//! - **ボット開始**（`bot`）: ユーザーがボットとの会話を開始していること
//!
//! ## 設計判断
//!
//! - タスクの作成・更新は管理側で行うため、本モデルは DB からの復元
//!   （[`SubscriptionTask::from_db`]）のみを提供する
//! - DB に未知の種別が格納されていてもエラーにせず
//!   [`TaskType::Unsupported`] として保持する。未知の種別は「未達成」として扱う
//! - `initial_subscriptions_count` は表示用の値であり、達成判定には使用しない
//!
//! ## 使用例
//!
//! ```rust
//! use subcheck_domain::subscription_task::TaskType;
//!
//! assert_eq!(TaskType::from_db("channel"), TaskType::Channel);
//! assert_eq!(TaskType::from_db("bot"), TaskType::Bot);
//! assert_eq!(
//!     TaskType::from_db("poll"),
//!     TaskType::Unsupported("poll".to_string())
//! );
//! ```

use derive_more::Display;
use serde::{Deserialize, Serialize};
use strum::EnumString;

// =========================================================================
// SubscriptionTaskId
// =========================================================================

/// サブスクリプションタスクの一意識別子
///
/// DB の BIGSERIAL 主キーをそのまま保持する。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("{_0}")]
pub struct SubscriptionTaskId(i64);

impl SubscriptionTaskId {
    /// 整数から ID を作成する
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// パスパラメータから ID を作成する
    ///
    /// 数値として解釈できない場合は `None` を返す。
    /// 呼び出し側では「該当タスクなし」として扱う。
    pub fn parse(value: &str) -> Option<Self> {
        value.trim().parse::<i64>().ok().map(Self)
    }

    /// 内部の i64 値を取得する
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

// =========================================================================
// TaskType
// =========================================================================

/// タスク種別
///
/// DB の `type` カラムの値と対応する。大文字小文字は区別する。
#[derive(Debug, Clone, PartialEq, Eq, EnumString)]
#[strum(serialize_all = "snake_case")]
pub enum TaskType {
    /// チャンネル参加タスク
    Channel,
    /// ボット開始タスク
    Bot,
    /// 未対応の種別（DB 上の値をそのまま保持）
    #[strum(disabled)]
    Unsupported(String),
}

impl TaskType {
    /// DB の値からタスク種別を復元する
    pub fn from_db(value: &str) -> Self {
        value
            .parse()
            .unwrap_or_else(|_| Self::Unsupported(value.to_string()))
    }

    /// DB に格納する文字列表現を返す
    pub fn as_str(&self) -> &str {
        match self {
            Self::Channel => "channel",
            Self::Bot => "bot",
            Self::Unsupported(value) => value,
        }
    }
}

// =========================================================================
// BotToken
// =========================================================================

/// Telegram ボットのトークン
///
/// Bot API の URL パスに埋め込まれる認証情報。
/// ログへの漏洩を防ぐため `Debug` 出力はマスクし、`Display` は実装しない。
#[derive(Clone, PartialEq, Eq)]
pub struct BotToken(String);

impl BotToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// 文字列参照を取得する
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for BotToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("BotToken").field(&"[REDACTED]").finish()
    }
}

// =========================================================================
// ChannelUsername
// =========================================================================

/// チャンネルのユーザー名
///
/// DB には `@` 付き・なしのどちらでも格納されうる。
/// Bot API の `chat_id` に渡す際は [`ChannelUsername::chat_id`] で
/// 先頭に `@` を補う。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChannelUsername(String);

impl ChannelUsername {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// DB に格納された値をそのまま返す
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Bot API の `chat_id` として使う `@` 付きの値を返す
    ///
    /// ```rust
    /// use subcheck_domain::subscription_task::ChannelUsername;
    ///
    /// assert_eq!(ChannelUsername::new("mychannel").chat_id(), "@mychannel");
    /// assert_eq!(ChannelUsername::new("@mychannel").chat_id(), "@mychannel");
    /// ```
    pub fn chat_id(&self) -> String {
        if self.0.starts_with('@') {
            self.0.clone()
        } else {
            format!("@{}", self.0)
        }
    }
}

// =========================================================================
// SubscriptionTask
// =========================================================================

/// 達成の検証方法
///
/// タスク種別から導出される。Bot API のどのエンドポイントで
/// 検証するかを表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationMethod<'a> {
    /// `getChatMember` でチャンネルのメンバーシップを確認する
    ChannelMembership(&'a ChannelUsername),
    /// `getChat` でボットとの会話開始を確認する
    BotStart,
    /// 検証手段がない（未対応の種別、またはチャンネル名の欠落）
    Unverifiable,
}

/// サブスクリプションタスク（エンティティ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionTask {
    id:                           SubscriptionTaskId,
    bot_token:                    BotToken,
    text:                         String,
    required_subscriptions_count: i32,
    initial_subscriptions_count:  i32,
    task_type:                    TaskType,
    entity_username:              Option<ChannelUsername>,
}

impl SubscriptionTask {
    /// DB から取得した値でタスクを復元する
    pub fn from_db(
        id: SubscriptionTaskId,
        bot_token: BotToken,
        text: String,
        required_subscriptions_count: i32,
        initial_subscriptions_count: i32,
        task_type: TaskType,
        entity_username: Option<ChannelUsername>,
    ) -> Self {
        Self {
            id,
            bot_token,
            text,
            required_subscriptions_count,
            initial_subscriptions_count,
            task_type,
            entity_username,
        }
    }

    pub fn id(&self) -> SubscriptionTaskId {
        self.id
    }

    pub fn bot_token(&self) -> &BotToken {
        &self.bot_token
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn required_subscriptions_count(&self) -> i32 {
        self.required_subscriptions_count
    }

    pub fn initial_subscriptions_count(&self) -> i32 {
        self.initial_subscriptions_count
    }

    pub fn task_type(&self) -> &TaskType {
        &self.task_type
    }

    pub fn entity_username(&self) -> Option<&ChannelUsername> {
        self.entity_username.as_ref()
    }

    /// タスク種別から検証方法を導出する
    ///
    /// チャンネル参加タスクでチャンネル名が未設定の場合は
    /// 検証できないため [`VerificationMethod::Unverifiable`] を返す。
    pub fn verification_method(&self) -> VerificationMethod<'_> {
        match (&self.task_type, &self.entity_username) {
            (TaskType::Channel, Some(channel)) => VerificationMethod::ChannelMembership(channel),
            (TaskType::Channel, None) => VerificationMethod::Unverifiable,
            (TaskType::Bot, _) => VerificationMethod::BotStart,
            (TaskType::Unsupported(_), _) => VerificationMethod::Unverifiable,
        }
    }
}

/// タスク一覧に表示する最小限の情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubscriptionTaskSummary {
    pub id:   SubscriptionTaskId,
    pub text: String,
}
