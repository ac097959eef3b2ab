//! Client-side copy of the game state, updated from server frames.

use kinrow_server::infrastructure::dto::websocket::{ServerMessage, SessionSnapshotDto, SymbolDto};

use crate::{error::ClientError, formatter::GameFormatter};

/// What this client knows about the game
#[derive(Debug, Default)]
pub struct GameView {
    symbol: Option<SymbolDto>,
    session: Option<SessionSnapshotDto>,
}

impl GameView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbol(&self) -> Option<SymbolDto> {
        self.symbol
    }

    pub fn session(&self) -> Option<&SessionSnapshotDto> {
        self.session.as_ref()
    }

    /// Apply one server frame and return the text to display
    ///
    /// # Errors
    ///
    /// `ClientError::Rejected` when the server turned this participant away.
    pub fn apply(&mut self, message: ServerMessage, now: i64) -> Result<String, ClientError> {
        let output = match message {
            ServerMessage::Rejected { reason } => return Err(ClientError::Rejected(reason)),
            ServerMessage::ConfigureRequested => GameFormatter::format_configure_requested(),
            ServerMessage::ConfigureRejected { reason } => {
                GameFormatter::format_configure_rejected(&reason)
            }
            ServerMessage::SessionStarted(snapshot) => {
                self.session = Some(snapshot);
                self.render(now)
            }
            ServerMessage::SymbolAssigned { symbol } => {
                self.symbol = Some(symbol);
                GameFormatter::format_symbol_assigned(symbol)
            }
            ServerMessage::MovesUpdated { players } => match self.session.as_mut() {
                Some(session) => {
                    session.players = players;
                    self.render(now)
                }
                None => {
                    tracing::debug!("Ignoring movesUpdated before sessionStarted");
                    String::new()
                }
            },
            ServerMessage::MoveRejected {
                reason,
                message,
                row,
                col,
            } => {
                tracing::debug!("Move ({}, {}) rejected with {}", row, col, reason);
                GameFormatter::format_move_rejected(row, col, &message)
            }
            ServerMessage::SessionEnded { status, players } => {
                let mut output = String::new();
                if let Some(session) = self.session.as_mut() {
                    session.status = status;
                    session.players = players;
                    output.push_str(&self.render(now));
                }
                output.push_str(&GameFormatter::format_session_ended(status, self.symbol));
                output
            }
        };

        Ok(output)
    }

    fn render(&self, now: i64) -> String {
        match &self.session {
            Some(session) => GameFormatter::format_session(session, self.symbol, now),
            None => String::new(),
        }
    }
}
