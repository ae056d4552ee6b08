//! # テスト用モック
//!
//! ユースケーステストで使用するインメモリモックリポジトリと
//! Telegram クライアントのスタブ。
//! `test-utils` feature を有効にすることで、他クレートからも利用可能。
//!
//! ```toml
//! [dev-dependencies]
//! subcheck-infra = { workspace = true, features = ["test-utils"] }
//! ```

use std::{
    collections::HashSet,
    sync::{Arc, Mutex},
};

use async_trait::async_trait;
use subcheck_domain::{
    subscription_task::{
        BotToken,
        ChannelUsername,
        SubscriptionTask,
        SubscriptionTaskId,
        SubscriptionTaskSummary,
    },
    telegram_user::TelegramUserId,
    user_subscription::UserSubscription,
};

use crate::{
    error::InfraError,
    repository::{SubscriptionTaskRepository, UserSubscriptionRepository},
    telegram::TelegramClient,
};

// ===== MockUserSubscriptionRepository =====

#[derive(Clone, Default)]
pub struct MockUserSubscriptionRepository {
    subscriptions: Arc<Mutex<Vec<UserSubscription>>>,
}

impl MockUserSubscriptionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_subscription(&self, subscription: UserSubscription) {
        self.subscriptions.lock().unwrap().push(subscription);
    }

    /// 登録済みの達成記録のスナップショットを返す
    pub fn subscriptions(&self) -> Vec<UserSubscription> {
        self.subscriptions.lock().unwrap().clone()
    }

    fn count_for(&self, task_id: SubscriptionTaskId) -> usize {
        self.subscriptions
            .lock()
            .unwrap()
            .iter()
            .filter(|s| s.task_id() == task_id)
            .count()
    }
}

#[async_trait]
impl UserSubscriptionRepository for MockUserSubscriptionRepository {
    async fn insert_if_absent(
        &self,
        subscription: &UserSubscription,
    ) -> Result<bool, InfraError> {
        let mut subscriptions = self.subscriptions.lock().unwrap();
        if subscriptions.contains(subscription) {
            return Ok(false);
        }
        subscriptions.push(*subscription);
        Ok(true)
    }
}

// ===== MockSubscriptionTaskRepository =====

/// タスクのモックリポジトリ
///
/// 受付中の判定には共有した [`MockUserSubscriptionRepository`] の
/// 達成記録を使う。
#[derive(Clone)]
pub struct MockSubscriptionTaskRepository {
    tasks:         Arc<Mutex<Vec<SubscriptionTask>>>,
    subscriptions: MockUserSubscriptionRepository,
}

impl MockSubscriptionTaskRepository {
    pub fn new(subscriptions: MockUserSubscriptionRepository) -> Self {
        Self {
            tasks: Arc::new(Mutex::new(Vec::new())),
            subscriptions,
        }
    }

    pub fn add_task(&self, task: SubscriptionTask) {
        self.tasks.lock().unwrap().push(task);
    }
}

#[async_trait]
impl SubscriptionTaskRepository for MockSubscriptionTaskRepository {
    async fn find_open(&self, limit: i64) -> Result<Vec<SubscriptionTaskSummary>, InfraError> {
        let mut tasks = self.tasks.lock().unwrap().clone();
        tasks.sort_by_key(|t| t.id().as_i64());

        Ok(tasks
            .into_iter()
            .filter(|t| {
                (self.subscriptions.count_for(t.id()) as i64)
                    < i64::from(t.required_subscriptions_count())
            })
            .take(usize::try_from(limit).unwrap_or(0))
            .map(|t| SubscriptionTaskSummary {
                id:   t.id(),
                text: t.text().to_string(),
            })
            .collect())
    }

    async fn find_by_id(
        &self,
        id: SubscriptionTaskId,
    ) -> Result<Option<SubscriptionTask>, InfraError> {
        Ok(self
            .tasks
            .lock()
            .unwrap()
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }
}

// ===== MockTelegramClient =====

/// Bot API 呼び出しの記録
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TelegramCall {
    IsChannelMember {
        user_id: TelegramUserId,
        channel: String,
    },
    HasStartedBot {
        user_id: TelegramUserId,
    },
}

/// Telegram クライアントのスタブ
///
/// 登録したチャンネル参加・ボット開始の状態に基づいて応答し、
/// 呼び出しを記録する。
#[derive(Clone, Default)]
pub struct MockTelegramClient {
    channel_members: Arc<Mutex<HashSet<(String, TelegramUserId)>>>,
    bot_users:       Arc<Mutex<HashSet<TelegramUserId>>>,
    calls:           Arc<Mutex<Vec<TelegramCall>>>,
}

impl MockTelegramClient {
    pub fn new() -> Self {
        Self::default()
    }

    /// ユーザーをチャンネルのメンバーとして登録する
    ///
    /// チャンネル名は `@` の有無を区別しない。
    pub fn add_channel_member(&self, channel: &ChannelUsername, user_id: TelegramUserId) {
        self.channel_members
            .lock()
            .unwrap()
            .insert((channel.chat_id(), user_id));
    }

    /// ユーザーをボット開始済みとして登録する
    pub fn add_bot_user(&self, user_id: TelegramUserId) {
        self.bot_users.lock().unwrap().insert(user_id);
    }

    /// これまでの呼び出し履歴を返す
    pub fn calls(&self) -> Vec<TelegramCall> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TelegramClient for MockTelegramClient {
    async fn is_channel_member(
        &self,
        user_id: TelegramUserId,
        _bot_token: &BotToken,
        channel: &ChannelUsername,
    ) -> bool {
        self.calls.lock().unwrap().push(TelegramCall::IsChannelMember {
            user_id,
            channel: channel.chat_id(),
        });
        self.channel_members
            .lock()
            .unwrap()
            .contains(&(channel.chat_id(), user_id))
    }

    async fn has_started_bot(&self, user_id: TelegramUserId, _bot_token: &BotToken) -> bool {
        self.calls
            .lock()
            .unwrap()
            .push(TelegramCall::HasStartedBot { user_id });
        self.bot_users.lock().unwrap().contains(&user_id)
    }
}
