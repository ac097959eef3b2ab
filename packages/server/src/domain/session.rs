//! Game session and turn coordination.

use super::{
    board::Board,
    coordinate::Coordinate,
    error::{ConfigError, MoveRejection},
    event::SessionSnapshot,
    player::{PlayerPair, Seat, Symbol},
    win_detector,
};

/// Shortest run that counts as a win.
pub const MIN_WIN_LENGTH: usize = 3;

/// Validated board size and win length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    board_size: usize,
    win_length: usize,
}

impl GameConfig {
    /// Validate `win_length >= 3` and `win_length <= board_size`.
    ///
    /// Out-of-range values are refused, never clamped.
    pub fn new(board_size: usize, win_length: usize) -> Result<Self, ConfigError> {
        if win_length < MIN_WIN_LENGTH {
            return Err(ConfigError::WinLengthTooShort {
                win_length,
                minimum: MIN_WIN_LENGTH,
            });
        }
        if win_length > board_size {
            return Err(ConfigError::WinLengthExceedsBoard {
                win_length,
                board_size,
            });
        }
        Ok(Self {
            board_size,
            win_length,
        })
    }

    pub fn board_size(&self) -> usize {
        self.board_size
    }

    pub fn win_length(&self) -> usize {
        self.win_length
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    InProgress,
    Won(Symbol),
    Draw,
}

impl SessionStatus {
    pub fn is_terminal(self) -> bool {
        !matches!(self, SessionStatus::InProgress)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    Continued,
    Won(Symbol),
    Draw,
}

/// One game from configuration to a terminal status.
///
/// The session owns the board; the player pair is owned by the caller and
/// lent to each operation, since symbols and win counts outlive a session.
#[derive(Debug, Clone)]
pub struct GameSession {
    config: GameConfig,
    status: SessionStatus,
    board: Board,
    started_at: i64,
}

impl GameSession {
    /// Start a session: clears every claim and gives the first seat the turn.
    pub fn start(config: GameConfig, players: &mut PlayerPair, started_at: i64) -> Self {
        for seat in Seat::ALL {
            players[seat.index()].reset_for_session(seat == Seat::First);
        }
        Self {
            config,
            status: SessionStatus::InProgress,
            board: Board::new(config.board_size()),
            started_at,
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn started_at(&self) -> i64 {
        self.started_at
    }

    /// Apply a move for the player in `actor`'s seat.
    ///
    /// On success the mark is recorded, the turn passes to the rival and the
    /// move is checked for a win, then for a full board.
    pub fn submit_move(
        &mut self,
        players: &mut PlayerPair,
        actor: Seat,
        coordinate: Coordinate,
    ) -> Result<MoveOutcome, MoveRejection> {
        if self.status.is_terminal() {
            return Err(MoveRejection::SessionFinished);
        }
        if !players[actor.index()].has_turn {
            return Err(MoveRejection::OutOfTurn);
        }
        if !coordinate.is_within(self.config.board_size()) {
            return Err(MoveRejection::OutOfBounds);
        }
        let symbol = players[actor.index()].symbol;
        if !self.board.place(coordinate, symbol) {
            return Err(MoveRejection::CellOccupied);
        }

        let rival = actor.other();
        players[actor.index()].claimed.push(coordinate);
        players[actor.index()].has_turn = false;
        players[rival.index()].has_turn = true;

        let win_length = self.config.win_length();
        if win_detector::evaluate(&self.board, coordinate, symbol, win_length) {
            self.finish(players, SessionStatus::Won(symbol));
            players[actor.index()].wins += 1;
            return Ok(MoveOutcome::Won(symbol));
        }
        if self.board.is_full() {
            self.finish(players, SessionStatus::Draw);
            return Ok(MoveOutcome::Draw);
        }
        Ok(MoveOutcome::Continued)
    }

    pub fn snapshot(&self, players: &PlayerPair) -> SessionSnapshot {
        SessionSnapshot {
            board_size: self.config.board_size(),
            win_length: self.config.win_length(),
            players: players.clone(),
            status: self.status,
            started_at: self.started_at,
        }
    }

    fn finish(&mut self, players: &mut PlayerPair, status: SessionStatus) {
        self.status = status;
        for player in players.iter_mut() {
            player.has_turn = false;
        }
    }
}
