//! WebSocket frame DTOs.
//!
//! Every frame is a JSON object tagged by `type`, with camelCase fields.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SymbolDto {
    O,
    X,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoordinateDto {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerDto {
    pub symbol: SymbolDto,
    pub connected: bool,
    pub has_turn: bool,
    pub wins: u32,
    pub claimed: Vec<CoordinateDto>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum StatusDto {
    InProgress,
    Won { symbol: SymbolDto },
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshotDto {
    pub board_size: usize,
    pub win_length: usize,
    pub players: Vec<PlayerDto>,
    pub status: StatusDto,
    pub started_at: i64,
}

/// Client → Server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ClientMessage {
    Configure {
        board_size: usize,
        win_length: usize,
    },
    Move { row: usize, col: usize },
}

/// Server → Client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "camelCase",
    rename_all_fields = "camelCase"
)]
pub enum ServerMessage {
    Rejected {
        reason: String,
    },
    ConfigureRequested,
    ConfigureRejected {
        reason: String,
    },
    SessionStarted(SessionSnapshotDto),
    SymbolAssigned {
        symbol: SymbolDto,
    },
    MovesUpdated {
        players: Vec<PlayerDto>,
    },
    MoveRejected {
        /// Machine-readable code such as `OUT_OF_TURN`
        reason: String,
        message: String,
        row: usize,
        col: usize,
    },
    SessionEnded {
        status: StatusDto,
        players: Vec<PlayerDto>,
    },
}
