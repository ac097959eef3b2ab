//! WebSocket を使った SyncChannel 実装
//!
//! ## 責務
//!
//! - コネクションごとの `PusherChannel` を管理
//! - `GameEvent` を JSON フレームにエンコードして送信（send_to, broadcast）
//! - Close フレームによる強制切断（disconnect）
//!
//! ## 設計ノート
//!
//! WebSocket の生成は UI 層（`ui/handler/websocket.rs`）で行われます。
//! この実装は生成された `PusherChannel` を受け取り、フレームの送信に使用します。

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::{
    domain::{ChannelError, ConnectionId, GameEvent, OutboundFrame, PusherChannel, SyncChannel},
    infrastructure::dto::websocket::ServerMessage,
};

/// WebSocket を使った SyncChannel 実装
///
/// ## 使用例
///
/// ```ignore
/// let channel = WebSocketSyncChannel::new();
/// channel.register(connection, sender).await;
/// channel.send_to(&connection, &GameEvent::ConfigureRequested).await?;
/// ```
#[derive(Default)]
pub struct WebSocketSyncChannel {
    /// 接続中のコネクションの sender
    clients: Mutex<HashMap<ConnectionId, PusherChannel>>,
}

impl WebSocketSyncChannel {
    /// 新しい WebSocketSyncChannel を作成
    pub fn new() -> Self {
        Self::default()
    }

    /// イベントをワイヤーフォーマット（JSON）にエンコード
    fn encode(event: &GameEvent) -> Result<String, ChannelError> {
        serde_json::to_string(&ServerMessage::from(event))
            .map_err(|e| ChannelError::Encode(e.to_string()))
    }
}

#[async_trait]
impl SyncChannel for WebSocketSyncChannel {
    async fn register(&self, connection: ConnectionId, sender: PusherChannel) {
        let mut clients = self.clients.lock().await;
        clients.insert(connection, sender);
        tracing::debug!("Connection '{}' registered to SyncChannel", connection);
    }

    async fn unregister(&self, connection: &ConnectionId) {
        let mut clients = self.clients.lock().await;
        if clients.remove(connection).is_some() {
            tracing::debug!("Connection '{}' unregistered from SyncChannel", connection);
        }
    }

    async fn send_to(
        &self,
        connection: &ConnectionId,
        event: &GameEvent,
    ) -> Result<(), ChannelError> {
        let json = Self::encode(event)?;
        let clients = self.clients.lock().await;

        let sender = clients
            .get(connection)
            .ok_or_else(|| ChannelError::ConnectionNotFound(connection.to_string()))?;
        sender
            .send(OutboundFrame::Text(json))
            .map_err(|e| ChannelError::PushFailed(e.to_string()))?;
        tracing::debug!("Pushed '{}' to connection '{}'", event.name(), connection);
        Ok(())
    }

    async fn broadcast(
        &self,
        targets: Vec<ConnectionId>,
        event: &GameEvent,
    ) -> Result<(), ChannelError> {
        let json = Self::encode(event)?;
        let clients = self.clients.lock().await;

        for target in targets {
            // ブロードキャストでは一部の送信失敗を許容
            match clients.get(&target) {
                Some(sender) => {
                    if let Err(e) = sender.send(OutboundFrame::Text(json.clone())) {
                        tracing::warn!("Failed to push '{}' to '{}': {}", event.name(), target, e);
                    } else {
                        tracing::debug!(
                            "Broadcasted '{}' to connection '{}'",
                            event.name(),
                            target
                        );
                    }
                }
                None => {
                    tracing::warn!(
                        "Connection '{}' not found during broadcast, skipping",
                        target
                    );
                }
            }
        }

        Ok(())
    }

    async fn disconnect(&self, connection: &ConnectionId, reason: &str) {
        let mut clients = self.clients.lock().await;
        if let Some(sender) = clients.remove(connection) {
            let frame = OutboundFrame::Close(reason.to_string());
            if sender.send(frame).is_err() {
                tracing::debug!("Connection '{}' already closed", connection);
            }
            tracing::debug!("Connection '{}' disconnected: {}", connection, reason);
        }
    }
}
