//! HTTP API endpoint handlers.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};

use crate::{
    infrastructure::dto::{conversion::players_to_dto, http::SessionDetailDto},
    ui::state::AppState,
};
use kinrow_shared::time::millis_to_rfc3339;

/// Health check endpoint
pub async fn health_check() -> Json<serde_json::Value> {
    Json(serde_json::json!({"status": "ok"}))
}

/// Get the current session, or 404 before the first configuration
pub async fn get_session(
    State(state): State<Arc<AppState>>,
) -> Result<Json<SessionDetailDto>, StatusCode> {
    let (snapshot, connected_players) = {
        let manager = state.session_manager.lock().await;
        let snapshot = manager.snapshot().ok_or(StatusCode::NOT_FOUND)?;
        (snapshot, manager.connected_count())
    };

    let started_at = millis_to_rfc3339(snapshot.started_at).ok_or_else(|| {
        tracing::error!("Session start time {} is out of range", snapshot.started_at);
        StatusCode::INTERNAL_SERVER_ERROR
    })?;

    // Domain Model から DTO への変換
    Ok(Json(SessionDetailDto {
        board_size: snapshot.board_size,
        win_length: snapshot.win_length,
        status: snapshot.status.into(),
        players: players_to_dto(&snapshot.players),
        started_at,
        connected_players,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{ConnectionId, ParticipantId};
    use crate::infrastructure::sync_channel::WebSocketSyncChannel;
    use crate::usecase::{ManagerSettings, SessionManager};
    use kinrow_shared::time::FixedClock;
    use tokio::sync::mpsc;

    fn app_state() -> Arc<AppState> {
        let manager = SessionManager::new(
            Arc::new(WebSocketSyncChannel::new()),
            Arc::new(FixedClock::new(1_700_000_000_000)),
            ManagerSettings::default(),
        );
        Arc::new(AppState::new(manager))
    }

    #[tokio::test]
    async fn test_get_session_before_configuration() {
        // テスト項目: 対局が構成される前は 404 を返す
        // given (前提条件):
        let state = app_state();

        // when (操作):
        let result = get_session(State(state)).await;

        // then (期待する結果):
        assert_eq!(result.err(), Some(StatusCode::NOT_FOUND));
    }

    #[tokio::test]
    async fn test_get_session_after_configuration() {
        // テスト項目: 構成後は盤面設定と接続人数を返す
        // given (前提条件):
        let state = app_state();
        let connection = ConnectionId::generate();
        {
            let mut manager = state.session_manager.lock().await;
            let (tx, _rx) = mpsc::unbounded_channel();
            let alice = ParticipantId::new("alice".to_string()).unwrap();
            manager.admit(connection, alice, tx).await.unwrap();
            manager.configure(connection, 7, 4).await.unwrap();
        }

        // when (操作):
        let Json(detail) = get_session(State(state)).await.unwrap();

        // then (期待する結果):
        assert_eq!(detail.board_size, 7);
        assert_eq!(detail.win_length, 4);
        assert_eq!(detail.connected_players, 1);
        assert_eq!(detail.players.len(), 2);
        assert!(detail.started_at.starts_with("2023-11-14T22:13:20"));
    }
}
