//! WebSocket connection handlers.

use std::sync::Arc;

use axum::{
    extract::{
        Query, State,
        ws::{CloseFrame, Message, WebSocket, WebSocketUpgrade, close_code},
    },
    http::StatusCode,
    response::IntoResponse,
};
use futures_util::{
    sink::SinkExt,
    stream::{SplitSink, StreamExt},
};
use serde::Deserialize;
use tokio::{sync::mpsc, task::JoinHandle};

use crate::{
    domain::{ConnectionId, Coordinate, OutboundFrame, ParticipantId},
    infrastructure::dto::websocket::ClientMessage,
    ui::state::AppState,
};

/// Query parameters for WebSocket connection
#[derive(Debug, Deserialize)]
pub struct ConnectQuery {
    pub client_id: String,
}

pub async fn websocket_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
    Query(query): Query<ConnectQuery>,
) -> Result<impl IntoResponse, StatusCode> {
    // String -> ParticipantId (Domain Model)
    let participant = match ParticipantId::try_from(query.client_id.clone()) {
        Ok(id) => id,
        Err(e) => {
            tracing::warn!("Invalid client_id '{}': {}", query.client_id, e);
            return Err(StatusCode::BAD_REQUEST);
        }
    };

    // 定員超過や ID 重複は upgrade 後に `rejected` フレームで通知する
    let on_upgrade = move |socket| handle_socket(socket, state, participant);
    Ok(ws.on_upgrade(on_upgrade))
}

/// Spawns a task that drains the connection's outbound queue into the WebSocket sink.
///
/// A `Close` frame ends the task after the close frame is written.
fn pusher_loop(
    mut rx: mpsc::UnboundedReceiver<OutboundFrame>,
    mut sender: SplitSink<WebSocket, Message>,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        while let Some(frame) = rx.recv().await {
            match frame {
                OutboundFrame::Text(text) => {
                    if sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                OutboundFrame::Close(reason) => {
                    let close = CloseFrame {
                        code: close_code::POLICY,
                        reason: reason.into(),
                    };
                    if let Err(e) = sender.send(Message::Close(Some(close))).await {
                        tracing::debug!("Failed to send close frame: {}", e);
                    }
                    break;
                }
            }
        }
    })
}

async fn handle_socket(socket: WebSocket, state: Arc<AppState>, participant: ParticipantId) {
    let connection = ConnectionId::generate();
    let (sender, mut receiver) = socket.split();
    let (tx, rx) = mpsc::unbounded_channel();
    let mut send_task = pusher_loop(rx, sender);

    let admission = state
        .session_manager
        .lock()
        .await
        .admit(connection, participant.clone(), tx)
        .await;

    match admission {
        Ok(admission) => {
            tracing::info!(
                "Participant '{}' connected as {} on connection '{}'{}",
                participant,
                admission.symbol,
                connection,
                if admission.resumed { " (resumed)" } else { "" }
            );
        }
        Err(e) => {
            tracing::info!("Participant '{}' turned away: {}", participant, e);
            // rejected と Close フレームを送り切ってから終了する
            if let Err(e) = send_task.await {
                tracing::debug!("Pusher task for '{}' ended abnormally: {}", connection, e);
            }
            return;
        }
    }

    let recv_state = state.clone();
    let mut recv_task = tokio::spawn(async move {
        while let Some(result) = receiver.next().await {
            let message = match result {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!("WebSocket error on '{}': {}", connection, e);
                    break;
                }
            };

            match message {
                Message::Text(text) => {
                    dispatch_frame(&recv_state, connection, text.as_str()).await;
                }
                Message::Close(_) => {
                    tracing::debug!("Connection '{}' sent close frame", connection);
                    break;
                }
                _ => {}
            }
        }
    });

    // どちらかのタスクが終了したら、もう一方も終了させる
    tokio::select! {
        _ = &mut send_task => recv_task.abort(),
        _ = &mut recv_task => send_task.abort(),
    }

    let released = state.session_manager.lock().await.release(connection).await;
    match released {
        Some(seat) => tracing::info!(
            "Participant '{}' disconnected, seat {} is free",
            participant,
            seat.index()
        ),
        None => tracing::debug!("Connection '{}' closed without a seat", connection),
    }
}

/// Parse one inbound text frame and dispatch it to the session manager.
///
/// Frames that do not parse are logged and ignored; the connection stays open.
async fn dispatch_frame(state: &AppState, connection: ConnectionId, text: &str) {
    let message = match serde_json::from_str::<ClientMessage>(text) {
        Ok(message) => message,
        Err(e) => {
            tracing::warn!("Ignoring malformed frame from '{}': {}", connection, e);
            return;
        }
    };

    // 拒否は SessionManager が送信者に通知済みのため、ここでは結果を記録するだけ
    let mut manager = state.session_manager.lock().await;
    match message {
        ClientMessage::Configure {
            board_size,
            win_length,
        } => {
            if let Err(e) = manager.configure(connection, board_size, win_length).await {
                tracing::debug!("Configuration from '{}' refused: {}", connection, e);
            }
        }
        ClientMessage::Move { row, col } => {
            let coordinate = Coordinate::new(row, col);
            match manager.submit_move(connection, coordinate).await {
                Ok(outcome) => tracing::trace!("Move ({}, {}) applied: {:?}", row, col, outcome),
                Err(rejection) => {
                    tracing::trace!("Move ({}, {}) refused: {}", row, col, rejection.code())
                }
            }
        }
    }
}
