//! Client execution logic with reconnection support.

use std::time::Duration;

use kinrow_server::domain::ParticipantId;

use crate::{
    error::ClientError,
    prompt::spawn_input_reader,
    reconnect::{should_attempt_reconnect, should_exit_immediately},
    session::run_client_session,
};

pub const MAX_RECONNECT_ATTEMPTS: u32 = 5;
const RECONNECT_INTERVAL_SECS: u64 = 5;

/// Run the terminal client with reconnection logic
///
/// # Errors
///
/// Returns the last error once the server rejected us or every attempt failed.
pub async fn run_client(url: String, client_id: String) -> Result<(), ClientError> {
    let participant = ParticipantId::new(client_id)?;
    let mut input_rx = spawn_input_reader(participant.as_str());
    let mut failed_attempts = 0;

    loop {
        tracing::info!(
            "Attempting to connect to {} as '{}' (attempt {}/{})",
            url,
            participant,
            failed_attempts + 1,
            MAX_RECONNECT_ATTEMPTS
        );

        match run_client_session(&url, &participant, &mut input_rx).await {
            Ok(()) => {
                tracing::info!("Client session ended normally");
                return Ok(());
            }
            Err(e) => {
                failed_attempts += 1;

                if !should_attempt_reconnect(&e, failed_attempts, MAX_RECONNECT_ATTEMPTS) {
                    if should_exit_immediately(&e) {
                        tracing::error!("Cannot join the game as '{}'. Exiting.", participant);
                    } else {
                        tracing::error!(
                            "Failed to reconnect after {} attempts. Exiting.",
                            MAX_RECONNECT_ATTEMPTS
                        );
                    }
                    return Err(e);
                }

                tracing::warn!("Connection lost: {}", e);
                tracing::info!(
                    "Reconnecting in {} seconds... (attempt {}/{})",
                    RECONNECT_INTERVAL_SECS,
                    failed_attempts + 1,
                    MAX_RECONNECT_ATTEMPTS
                );

                tokio::time::sleep(Duration::from_secs(RECONNECT_INTERVAL_SECS)).await;
            }
        }
    }
}
