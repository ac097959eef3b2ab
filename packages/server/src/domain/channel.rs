//! SyncChannel trait 定義
//!
//! セッションマネージャーが参加者にイベントを届けるためのインターフェース。
//! 具体的な実装（WebSocket など）は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;
use tokio::sync::mpsc;

use super::{error::ChannelError, event::GameEvent, identity::ConnectionId};

/// コネクションの送信タスクに渡すフレーム
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutboundFrame {
    /// エンコード済みのイベント
    Text(String),
    /// 理由を添えてコネクションを閉じる
    Close(String),
}

/// コネクションごとの送信チャンネル
pub type PusherChannel = mpsc::UnboundedSender<OutboundFrame>;

/// 参加者へのイベント配信の抽象化
///
/// - `send_to`: 特定のコネクションへのユニキャスト
/// - `broadcast`: 複数コネクションへの配信（一部の失敗は許容）
/// - `disconnect`: コネクションの強制切断
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SyncChannel: Send + Sync {
    /// コネクションを登録
    async fn register(&self, connection: ConnectionId, sender: PusherChannel);

    /// コネクションを登録解除
    async fn unregister(&self, connection: &ConnectionId);

    /// 特定のコネクションにイベントを送信
    async fn send_to(
        &self,
        connection: &ConnectionId,
        event: &GameEvent,
    ) -> Result<(), ChannelError>;

    /// 指定したコネクション全てにイベントを送信
    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &GameEvent,
    ) -> Result<(), ChannelError>;

    /// コネクションを閉じて登録解除
    async fn disconnect(&self, connection: &ConnectionId, reason: &str);
}
