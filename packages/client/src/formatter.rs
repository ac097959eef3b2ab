//! Text rendering of the game for the terminal.

use kinrow_server::{
    domain::Symbol,
    infrastructure::dto::websocket::{PlayerDto, SessionSnapshotDto, StatusDto, SymbolDto},
};
use kinrow_shared::time::format_elapsed;

const RULE: &str = "============================================================";
const EMPTY_CELL: char = '.';

/// Game formatter for client display
pub struct GameFormatter;

impl GameFormatter {
    /// Render the grid with row and column indices
    ///
    /// Claims outside the board are ignored.
    pub fn format_board(board_size: usize, players: &[PlayerDto]) -> String {
        let mut cells = vec![vec![EMPTY_CELL; board_size]; board_size];
        for player in players {
            let mark = symbol_char(player.symbol);
            for claim in &player.claimed {
                let row = cells.get_mut(claim.row);
                if let Some(cell) = row.and_then(|row| row.get_mut(claim.col)) {
                    *cell = mark;
                }
            }
        }

        let width = board_size.saturating_sub(1).to_string().len();
        let mut output = String::new();

        output.push_str(&" ".repeat(width + 1));
        for col in 0..board_size {
            output.push_str(&format!(" {:>width$}", col));
        }
        output.push('\n');

        for (index, row) in cells.iter().enumerate() {
            output.push_str(&format!("{:>width$} ", index));
            for cell in row {
                output.push_str(&format!(" {:>width$}", cell));
            }
            output.push('\n');
        }

        output
    }

    /// Score line, e.g. `O: 1 (you)  X: 0 (offline)`
    pub fn format_score(players: &[PlayerDto], me: Option<SymbolDto>) -> String {
        players
            .iter()
            .map(|player| {
                let mut entry = format!("{}: {}", symbol_char(player.symbol), player.wins);
                if Some(player.symbol) == me {
                    entry.push_str(" (you)");
                }
                if !player.connected {
                    entry.push_str(" (offline)");
                }
                entry
            })
            .collect::<Vec<_>>()
            .join("  ")
    }

    /// Whose turn it is, or `None` when nobody may move
    pub fn format_turn(players: &[PlayerDto], me: Option<SymbolDto>) -> Option<String> {
        let mover = players.iter().find(|player| player.has_turn)?;
        if Some(mover.symbol) == me {
            Some("Your turn, enter <row> <col>".to_string())
        } else {
            Some(format!("Waiting for {}", symbol_char(mover.symbol)))
        }
    }

    /// Full session view: rules, elapsed time, board, score and turn
    ///
    /// # Arguments
    ///
    /// * `session` - Latest known session state
    /// * `me` - This client's symbol, if already assigned
    /// * `now` - Current Unix timestamp (milliseconds)
    pub fn format_session(session: &SessionSnapshotDto, me: Option<SymbolDto>, now: i64) -> String {
        let mut output = String::new();
        output.push_str("\n\n");
        output.push_str(RULE);
        output.push('\n');
        output.push_str(&format!(
            "{0}x{0} board, {1} in a row | {2}\n\n",
            session.board_size,
            session.win_length,
            format_elapsed(session.started_at, now)
        ));
        output.push_str(&Self::format_board(session.board_size, &session.players));
        output.push('\n');
        output.push_str(&Self::format_score(&session.players, me));
        output.push('\n');
        if session.status == StatusDto::InProgress
            && let Some(turn) = Self::format_turn(&session.players, me)
        {
            output.push_str(&turn);
            output.push('\n');
        }
        output.push_str(RULE);
        output.push('\n');
        output
    }

    pub fn format_symbol_assigned(symbol: SymbolDto) -> String {
        format!("\nYou play {}\n", symbol_char(symbol))
    }

    pub fn format_configure_requested() -> String {
        "\nYou choose the board. Type /new <size> <win>, e.g. /new 3 3 or /new 15 5\n".to_string()
    }

    pub fn format_configure_rejected(reason: &str) -> String {
        format!("\n! Configuration refused: {}\n", reason)
    }

    pub fn format_move_rejected(row: usize, col: usize, message: &str) -> String {
        format!("\n! Move ({}, {}) rejected: {}\n", row, col, message)
    }

    /// Final result line after a win or a draw
    ///
    /// Only the configurator may start the next game; it gets its own
    /// `configureRequested` prompt, so this line carries no command hint.
    pub fn format_session_ended(status: StatusDto, me: Option<SymbolDto>) -> String {
        let result = match status {
            StatusDto::Won { symbol } if Some(symbol) == me => "You win!".to_string(),
            StatusDto::Won { symbol } => format!("{} wins.", symbol_char(symbol)),
            StatusDto::Draw => "Draw.".to_string(),
            StatusDto::InProgress => return String::new(),
        };
        format!("\nGame over: {}\n", result)
    }

    pub fn format_help() -> String {
        "\nCommands:\n  \
         <row> <col>        claim a cell\n  \
         /new <size> <win>  start a game on a size x size board\n  \
         /help              show this help\n  \
         /quit              leave the game\n"
            .to_string()
    }

    pub fn format_notice(text: &str) -> String {
        format!("\n! {}\n", text)
    }

    /// Format a raw text message (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}

fn symbol_char(symbol: SymbolDto) -> char {
    match Symbol::from(symbol) {
        Symbol::O => 'O',
        Symbol::X => 'X',
    }
}
