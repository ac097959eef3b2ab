//! Domain errors.

use thiserror::Error;

/// Invalid session configuration. The session is never constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("win length {win_length} is shorter than the minimum of {minimum}")]
    WinLengthTooShort { win_length: usize, minimum: usize },

    #[error("win length {win_length} exceeds board size {board_size}")]
    WinLengthExceedsBoard {
        win_length: usize,
        board_size: usize,
    },

    #[error("board size {board_size} exceeds the maximum of {maximum}")]
    BoardTooLarge { board_size: usize, maximum: usize },
}

/// Why a move was refused. A refused move never changes any state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveRejection {
    #[error("no session has been configured yet")]
    NoSession,

    #[error("connection is not bound to a player")]
    NotSeated,

    #[error("the session has already finished")]
    SessionFinished,

    #[error("it is not your turn")]
    OutOfTurn,

    #[error("cell is already claimed")]
    CellOccupied,

    #[error("cell is outside the board")]
    OutOfBounds,
}

impl MoveRejection {
    /// Stable machine-readable code sent to clients.
    pub fn code(self) -> &'static str {
        match self {
            MoveRejection::NoSession => "NO_SESSION",
            MoveRejection::NotSeated => "NOT_SEATED",
            MoveRejection::SessionFinished => "SESSION_FINISHED",
            MoveRejection::OutOfTurn => "OUT_OF_TURN",
            MoveRejection::CellOccupied => "CELL_OCCUPIED",
            MoveRejection::OutOfBounds => "OUT_OF_BOUNDS",
        }
    }
}

/// Invalid participant token.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    #[error("participant id must not be empty")]
    Empty,

    #[error("participant id must be at most {max} characters")]
    TooLong { max: usize },

    #[error("participant id contains invalid character '{0}'")]
    InvalidCharacter(char),
}

/// SyncChannel のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChannelError {
    /// 送信先のコネクションが登録されていない
    #[error("connection '{0}' is not registered")]
    ConnectionNotFound(String),

    /// 送信に失敗した
    #[error("failed to push event: {0}")]
    PushFailed(String),

    /// イベントのエンコードに失敗した
    #[error("failed to encode event: {0}")]
    Encode(String),
}
