//! HTTP API response DTOs.

use serde::Serialize;

use super::websocket::{PlayerDto, StatusDto};

/// Response of `GET /api/session`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetailDto {
    pub board_size: usize,
    pub win_length: usize,
    pub status: StatusDto,
    pub players: Vec<PlayerDto>,
    /// RFC 3339 (UTC)
    pub started_at: String,
    pub connected_players: usize,
}
