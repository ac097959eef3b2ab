//! Players, their symbols and their seats.

use std::fmt;

use super::coordinate::Coordinate;

/// The mark a player places on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    O,
    X,
}

impl Symbol {
    pub fn as_str(self) -> &'static str {
        match self {
            Symbol::O => "O",
            Symbol::X => "X",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One of the two fixed player slots.
///
/// The first seat plays `O` and always opens a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Seat {
    First,
    Second,
}

impl Seat {
    pub const ALL: [Seat; 2] = [Seat::First, Seat::Second];

    pub fn index(self) -> usize {
        match self {
            Seat::First => 0,
            Seat::Second => 1,
        }
    }

    pub fn other(self) -> Seat {
        match self {
            Seat::First => Seat::Second,
            Seat::Second => Seat::First,
        }
    }

    pub fn symbol(self) -> Symbol {
        match self {
            Seat::First => Symbol::O,
            Seat::Second => Symbol::X,
        }
    }
}

/// A participant's record.
///
/// `symbol` and `wins` survive across sessions; `claimed` and `has_turn`
/// belong to the current session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    pub symbol: Symbol,
    pub connected: bool,
    pub has_turn: bool,
    pub wins: u32,
    pub claimed: Vec<Coordinate>,
}

impl Player {
    pub fn new(symbol: Symbol) -> Self {
        Self {
            symbol,
            connected: false,
            has_turn: false,
            wins: 0,
            claimed: Vec::new(),
        }
    }

    /// Clear per-session state before a new session starts.
    pub fn reset_for_session(&mut self, has_turn: bool) {
        self.claimed.clear();
        self.has_turn = has_turn;
    }
}

/// The fixed pair of players, indexed by [`Seat::index`].
pub type PlayerPair = [Player; 2];

/// The player pair as it exists at process start.
pub fn initial_players() -> PlayerPair {
    let mut players = Seat::ALL.map(|seat| Player::new(seat.symbol()));
    players[Seat::First.index()].has_turn = true;
    players
}
