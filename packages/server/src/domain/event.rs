//! Outbound game events.
//!
//! The session manager talks in these events; the transport decides how they
//! are encoded on the wire.

use super::{
    coordinate::Coordinate,
    error::MoveRejection,
    player::{PlayerPair, Symbol},
    session::SessionStatus,
};

/// Full picture of the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    pub board_size: usize,
    pub win_length: usize,
    pub players: PlayerPair,
    pub status: SessionStatus,
    /// Unix timestamp (milliseconds) at which the session was configured
    pub started_at: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// Admission refused; the connection is closed right after.
    Rejected { reason: String },
    /// Ask the configuring participant for board size and win length.
    ConfigureRequested,
    ConfigureRejected { reason: String },
    SessionStarted(SessionSnapshot),
    SymbolAssigned(Symbol),
    MovesUpdated(PlayerPair),
    MoveRejected {
        coordinate: Coordinate,
        rejection: MoveRejection,
    },
    SessionEnded {
        status: SessionStatus,
        players: PlayerPair,
    },
}

impl GameEvent {
    /// Event name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            GameEvent::Rejected { .. } => "rejected",
            GameEvent::ConfigureRequested => "configureRequested",
            GameEvent::ConfigureRejected { .. } => "configureRejected",
            GameEvent::SessionStarted(_) => "sessionStarted",
            GameEvent::SymbolAssigned(_) => "symbolAssigned",
            GameEvent::MovesUpdated(_) => "movesUpdated",
            GameEvent::MoveRejected { .. } => "moveRejected",
            GameEvent::SessionEnded { .. } => "sessionEnded",
        }
    }
}
