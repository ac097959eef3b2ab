//! Conversion logic between DTOs and domain entities.

use crate::domain::{
    Coordinate, GameEvent, Player, PlayerPair, SessionSnapshot, SessionStatus, Symbol,
};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain Entity
// ========================================

impl From<dto::SymbolDto> for Symbol {
    fn from(dto: dto::SymbolDto) -> Self {
        match dto {
            dto::SymbolDto::O => Symbol::O,
            dto::SymbolDto::X => Symbol::X,
        }
    }
}

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Symbol> for dto::SymbolDto {
    fn from(model: Symbol) -> Self {
        match model {
            Symbol::O => dto::SymbolDto::O,
            Symbol::X => dto::SymbolDto::X,
        }
    }
}

impl From<Coordinate> for dto::CoordinateDto {
    fn from(model: Coordinate) -> Self {
        Self {
            row: model.row,
            col: model.col,
        }
    }
}

impl From<&Player> for dto::PlayerDto {
    fn from(model: &Player) -> Self {
        Self {
            symbol: model.symbol.into(),
            connected: model.connected,
            has_turn: model.has_turn,
            wins: model.wins,
            claimed: model.claimed.iter().copied().map(Into::into).collect(),
        }
    }
}

impl From<SessionStatus> for dto::StatusDto {
    fn from(model: SessionStatus) -> Self {
        match model {
            SessionStatus::InProgress => dto::StatusDto::InProgress,
            SessionStatus::Won(symbol) => dto::StatusDto::Won {
                symbol: symbol.into(),
            },
            SessionStatus::Draw => dto::StatusDto::Draw,
        }
    }
}

impl From<&SessionSnapshot> for dto::SessionSnapshotDto {
    fn from(model: &SessionSnapshot) -> Self {
        Self {
            board_size: model.board_size,
            win_length: model.win_length,
            players: players_to_dto(&model.players),
            status: model.status.into(),
            started_at: model.started_at,
        }
    }
}

impl From<&GameEvent> for dto::ServerMessage {
    fn from(event: &GameEvent) -> Self {
        match event {
            GameEvent::Rejected { reason } => Self::Rejected {
                reason: reason.clone(),
            },
            GameEvent::ConfigureRequested => Self::ConfigureRequested,
            GameEvent::ConfigureRejected { reason } => Self::ConfigureRejected {
                reason: reason.clone(),
            },
            GameEvent::SessionStarted(snapshot) => Self::SessionStarted(snapshot.into()),
            GameEvent::SymbolAssigned(symbol) => Self::SymbolAssigned {
                symbol: (*symbol).into(),
            },
            GameEvent::MovesUpdated(players) => Self::MovesUpdated {
                players: players_to_dto(players),
            },
            GameEvent::MoveRejected {
                coordinate,
                rejection,
            } => Self::MoveRejected {
                reason: rejection.code().to_string(),
                message: rejection.to_string(),
                row: coordinate.row,
                col: coordinate.col,
            },
            GameEvent::SessionEnded { status, players } => Self::SessionEnded {
                status: (*status).into(),
                players: players_to_dto(players),
            },
        }
    }
}

/// Player pair in seat order
pub fn players_to_dto(players: &PlayerPair) -> Vec<dto::PlayerDto> {
    players.iter().map(dto::PlayerDto::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{MoveRejection, initial_players};
    use serde_json::json;

    #[test]
    fn test_session_started_wire_format() {
        // テスト項目: sessionStarted が type タグ付きの camelCase JSON になる
        // given (前提条件):
        let mut players = initial_players();
        players[0].connected = true;
        players[0].claimed.push(Coordinate::new(0, 2));
        let event = GameEvent::SessionStarted(SessionSnapshot {
            board_size: 3,
            win_length: 3,
            players,
            status: SessionStatus::InProgress,
            started_at: 1000,
        });

        // when (操作):
        let value = serde_json::to_value(dto::ServerMessage::from(&event)).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({
                "type": "sessionStarted",
                "boardSize": 3,
                "winLength": 3,
                "players": [
                    {"symbol": "O", "connected": true, "hasTurn": true, "wins": 0,
                     "claimed": [{"row": 0, "col": 2}]},
                    {"symbol": "X", "connected": false, "hasTurn": false, "wins": 0,
                     "claimed": []}
                ],
                "status": {"state": "inProgress"},
                "startedAt": 1000
            })
        );
    }

    #[test]
    fn test_move_rejected_wire_format() {
        // テスト項目: moveRejected に拒否理由のコードと座標が含まれる
        // given (前提条件):
        let event = GameEvent::MoveRejected {
            coordinate: Coordinate::new(1, 2),
            rejection: MoveRejection::CellOccupied,
        };

        // when (操作):
        let value = serde_json::to_value(dto::ServerMessage::from(&event)).unwrap();

        // then (期待する結果):
        assert_eq!(
            value,
            json!({
                "type": "moveRejected",
                "reason": "CELL_OCCUPIED",
                "message": "cell is already claimed",
                "row": 1,
                "col": 2
            })
        );
    }

    #[test]
    fn test_session_ended_with_winner() {
        // テスト項目: 勝者付きの sessionEnded の status が state と symbol を持つ
        // given (前提条件):
        let event = GameEvent::SessionEnded {
            status: SessionStatus::Won(Symbol::X),
            players: initial_players(),
        };

        // when (操作):
        let value = serde_json::to_value(dto::ServerMessage::from(&event)).unwrap();

        // then (期待する結果):
        assert_eq!(value["type"], "sessionEnded");
        assert_eq!(value["status"], json!({"state": "won", "symbol": "X"}));
        assert_eq!(value["players"].as_array().map(Vec::len), Some(2));
    }

    #[test]
    fn test_unit_events_wire_format() {
        // テスト項目: フィールドを持たないイベントは type のみになる
        let message = dto::ServerMessage::from(&GameEvent::ConfigureRequested);
        let value = serde_json::to_value(message).unwrap();
        assert_eq!(value, json!({"type": "configureRequested"}));
    }

    #[test]
    fn test_parse_client_messages() {
        // テスト項目: クライアントからの configure と move を解析できる
        // given (前提条件):
        let configure = r#"{"type":"configure","boardSize":15,"winLength":5}"#;
        let movement = r#"{"type":"move","row":4,"col":8}"#;

        // when (操作):
        let configure: dto::ClientMessage = serde_json::from_str(configure).unwrap();
        let movement: dto::ClientMessage = serde_json::from_str(movement).unwrap();

        // then (期待する結果):
        assert_eq!(
            configure,
            dto::ClientMessage::Configure {
                board_size: 15,
                win_length: 5
            }
        );
        assert_eq!(movement, dto::ClientMessage::Move { row: 4, col: 8 });
    }

    #[test]
    fn test_win_claim_is_not_part_of_protocol() {
        // テスト項目: クライアントによる勝利申告 (winClaim) は受け付けない
        let result = serde_json::from_str::<dto::ClientMessage>(r#"{"type":"winClaim"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_negative_coordinate_is_rejected_by_parser() {
        // テスト項目: 負の座標は解析エラーになる
        let json = r#"{"type":"move","row":-1,"col":0}"#;
        let result = serde_json::from_str::<dto::ClientMessage>(json);
        assert!(result.is_err());
    }
}
