//! # ユーザーサブスクリプション
//!
//! あるユーザーがあるタスクを達成したことの記録。
//!
//! (タスク, ユーザー) の組ごとに高々 1 件のみ存在する。
//! 一意性は DB の UNIQUE 制約で保証し、登録は冪等に行う。
//! 作成後に更新・削除されることはない。

use crate::{subscription_task::SubscriptionTaskId, telegram_user::TelegramUserId};

/// ユーザーのタスク達成記録
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct UserSubscription {
    task_id:          SubscriptionTaskId,
    telegram_user_id: TelegramUserId,
}

impl UserSubscription {
    pub fn new(task_id: SubscriptionTaskId, telegram_user_id: TelegramUserId) -> Self {
        Self {
            task_id,
            telegram_user_id,
        }
    }

    pub fn task_id(&self) -> SubscriptionTaskId {
        self.task_id
    }

    pub fn telegram_user_id(&self) -> TelegramUserId {
        self.telegram_user_id
    }
}
