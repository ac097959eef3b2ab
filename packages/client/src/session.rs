//! WebSocket client session management.

use futures_util::{SinkExt, StreamExt};
use kinrow_server::{domain::ParticipantId, infrastructure::dto::websocket::ServerMessage};
use kinrow_shared::time::now_millis;
use tokio::sync::mpsc;
use tokio_tungstenite::{connect_async, tungstenite::protocol::Message};

use crate::{
    command::Command,
    error::ClientError,
    formatter::GameFormatter,
    prompt::redisplay_prompt,
    view::GameView,
};

/// Run one WebSocket session until the user quits or the connection ends
///
/// # Returns
///
/// * `Ok(())` - The user quit or closed the input
/// * `Err(ClientError)` - The server rejected us or the connection was lost
pub async fn run_client_session(
    url: &str,
    participant: &ParticipantId,
    input_rx: &mut mpsc::UnboundedReceiver<String>,
) -> Result<(), ClientError> {
    // Construct URL with client_id as query parameter
    let url = format!("{}?client_id={}", url, participant);

    let (ws_stream, _response) = connect_async(&url)
        .await
        .map_err(|e| ClientError::ConnectionError(e.to_string()))?;

    tracing::info!("Connected to game server!");
    println!(
        "\nYou are '{}'. Type /help for commands. Press Ctrl+C to exit.\n",
        participant
    );

    let (mut write, mut read) = ws_stream.split();

    let client_id = participant.to_string();
    let mut read_task = tokio::spawn(async move {
        let mut view = GameView::new();

        while let Some(frame) = read.next().await {
            match frame {
                Ok(Message::Text(text)) => {
                    let output = match serde_json::from_str::<ServerMessage>(text.as_str()) {
                        Ok(message) => match view.apply(message, now_millis()) {
                            Ok(output) => output,
                            Err(e) => return Err(e),
                        },
                        Err(e) => {
                            tracing::debug!("Unrecognized frame: {}", e);
                            GameFormatter::format_raw_message(text.as_str())
                        }
                    };
                    if !output.is_empty() {
                        print!("{}", output);
                        redisplay_prompt(&client_id);
                    }
                }
                Ok(Message::Close(_)) => {
                    tracing::info!("Server closed the connection");
                    break;
                }
                Err(e) => {
                    tracing::warn!("WebSocket read error: {}", e);
                    break;
                }
                _ => {}
            }
        }

        Err::<(), _>(ClientError::ConnectionError("Connection lost".to_string()))
    });

    let client_id = participant.to_string();
    loop {
        tokio::select! {
            result = &mut read_task => {
                return result.unwrap_or_else(|e| {
                    Err(ClientError::ConnectionError(format!("Reader task failed: {}", e)))
                });
            }
            line = input_rx.recv() => {
                let command = match line {
                    // 入力が閉じられた場合は /quit と同じ扱い
                    None => Command::Quit,
                    Some(line) => match Command::parse(&line) {
                        Ok(command) => command,
                        Err(e) => {
                            print!("{}", GameFormatter::format_notice(&e.to_string()));
                            redisplay_prompt(&client_id);
                            continue;
                        }
                    },
                };

                match command {
                    Command::Quit => {
                        read_task.abort();
                        if let Err(e) = write.close().await {
                            tracing::debug!("Failed to close connection cleanly: {}", e);
                        }
                        return Ok(());
                    }
                    Command::Help => {
                        print!("{}", GameFormatter::format_help());
                        redisplay_prompt(&client_id);
                    }
                    command => {
                        let Some(message) = command.to_message() else {
                            continue;
                        };
                        let json = serde_json::to_string(&message)?;
                        if let Err(e) = write.send(Message::Text(json.into())).await {
                            tracing::warn!("Failed to send message: {}", e);
                            read_task.abort();
                            return Err(ClientError::ConnectionError(e.to_string()));
                        }
                    }
                }
            }
        }
    }
}
