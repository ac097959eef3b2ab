//! Win detection for k-in-a-row.
//!
//! Only the most recently placed mark can complete a new line, so a move is
//! judged by walking outward from that single cell along each axis.

use tracing::instrument;

use super::{board::Board, coordinate::Coordinate, player::Symbol};

/// The four undirected line directions of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
    Diagonal,
    AntiDiagonal,
}

impl Axis {
    pub const ALL: [Axis; 4] = [
        Axis::Horizontal,
        Axis::Vertical,
        Axis::Diagonal,
        Axis::AntiDiagonal,
    ];

    /// The positive `(delta_row, delta_col)` step along this axis.
    pub const fn direction(self) -> (isize, isize) {
        match self {
            Axis::Horizontal => (0, 1),
            Axis::Vertical => (1, 0),
            Axis::Diagonal => (1, 1),
            Axis::AntiDiagonal => (1, -1),
        }
    }
}

/// Whether placing `symbol` at `origin` completes a run of `win_length`.
#[instrument(level = "trace", skip(board))]
pub fn evaluate(board: &Board, origin: Coordinate, symbol: Symbol, win_length: usize) -> bool {
    winning_axis(board, origin, symbol, win_length).is_some()
}

/// The first axis along which the run through `origin` reaches `win_length`.
pub fn winning_axis(
    board: &Board,
    origin: Coordinate,
    symbol: Symbol,
    win_length: usize,
) -> Option<Axis> {
    let reaches = |axis| run_length(board, origin, symbol, axis) >= win_length;
    Axis::ALL.into_iter().find(|&axis| reaches(axis))
}

/// Length of the run of `symbol` through `origin` along `axis`, origin included.
pub fn run_length(board: &Board, origin: Coordinate, symbol: Symbol, axis: Axis) -> usize {
    let (delta_row, delta_col) = axis.direction();
    1 + steps_along(board, origin, symbol, delta_row, delta_col)
        + steps_along(board, origin, symbol, -delta_row, -delta_col)
}

/// Count consecutive `symbol` cells after `origin` in one direction.
fn steps_along(
    board: &Board,
    origin: Coordinate,
    symbol: Symbol,
    delta_row: isize,
    delta_col: isize,
) -> usize {
    let mut steps = 0;
    let mut cursor = origin;
    while let Some(next) = cursor.step(delta_row, delta_col, board.size()) {
        if board.symbol_at(next) != Some(symbol) {
            break;
        }
        steps += 1;
        cursor = next;
    }
    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(size: usize, marks: &[(usize, usize, Symbol)]) -> Board {
        let mut board = Board::new(size);
        for &(row, col, symbol) in marks {
            assert!(board.place(Coordinate::new(row, col), symbol));
        }
        board
    }

    #[test]
    fn test_tictactoe_horizontal_win() {
        // テスト項目: 3x3 で O が横一列を揃えると勝利になる
        // given (前提条件): O が (0,0),(0,1),(0,2)、X はその間に別のセル
        let board = board_with(
            3,
            &[
                (0, 0, Symbol::O),
                (1, 1, Symbol::X),
                (0, 1, Symbol::O),
                (2, 0, Symbol::X),
                (0, 2, Symbol::O),
            ],
        );

        // when (操作):
        let won = evaluate(&board, Coordinate::new(0, 2), Symbol::O, 3);

        // then (期待する結果):
        assert!(won);
        assert_eq!(
            winning_axis(&board, Coordinate::new(0, 2), Symbol::O, 3),
            Some(Axis::Horizontal)
        );
    }

    #[test]
    fn test_gomoku_five_in_a_row() {
        // テスト項目: 15x15 で 5 つ並べると勝利、4 つでは勝利にならない
        // given (前提条件):
        let four = board_with(
            15,
            &[
                (4, 4, Symbol::X),
                (4, 5, Symbol::X),
                (4, 6, Symbol::X),
                (4, 7, Symbol::X),
            ],
        );
        let mut five = four.clone();
        five.place(Coordinate::new(4, 8), Symbol::X);

        // when (操作):
        let four_wins = evaluate(&four, Coordinate::new(4, 7), Symbol::X, 5);
        let five_wins = evaluate(&five, Coordinate::new(4, 8), Symbol::X, 5);

        // then (期待する結果):
        assert!(!four_wins);
        assert!(five_wins);
    }

    #[test]
    fn test_run_counts_both_directions() {
        // テスト項目: 途中のセルに置いた場合、両方向の連続が合算される
        // given (前提条件):
        let board = board_with(
            5,
            &[
                (2, 0, Symbol::X),
                (2, 1, Symbol::X),
                (2, 3, Symbol::X),
                (2, 2, Symbol::X),
            ],
        );

        // when (操作):
        let length = run_length(&board, Coordinate::new(2, 2), Symbol::X, Axis::Horizontal);

        // then (期待する結果):
        assert_eq!(length, 4);
        assert!(evaluate(&board, Coordinate::new(2, 2), Symbol::X, 4));
    }

    #[test]
    fn test_vertical_diagonal_and_anti_diagonal() {
        // テスト項目: 縦・斜め・逆斜めの各軸で勝利を検出できる
        // given (前提条件):
        let vertical = board_with(
            4,
            &[(0, 3, Symbol::O), (1, 3, Symbol::O), (2, 3, Symbol::O)],
        );
        let diagonal = board_with(
            4,
            &[(1, 0, Symbol::X), (2, 1, Symbol::X), (3, 2, Symbol::X)],
        );
        let anti = board_with(
            4,
            &[(0, 3, Symbol::O), (1, 2, Symbol::O), (2, 1, Symbol::O)],
        );

        // when (操作) / then (期待する結果):
        assert_eq!(
            winning_axis(&vertical, Coordinate::new(1, 3), Symbol::O, 3),
            Some(Axis::Vertical)
        );
        assert_eq!(
            winning_axis(&diagonal, Coordinate::new(3, 2), Symbol::X, 3),
            Some(Axis::Diagonal)
        );
        assert_eq!(
            winning_axis(&anti, Coordinate::new(0, 3), Symbol::O, 3),
            Some(Axis::AntiDiagonal)
        );
    }

    #[test]
    fn test_run_stops_at_other_symbol() {
        // テスト項目: 相手のマークで連続が途切れる
        // given (前提条件):
        let board = board_with(
            4,
            &[(0, 0, Symbol::O), (0, 1, Symbol::X), (0, 2, Symbol::O)],
        );

        // when (操作):
        let length = run_length(&board, Coordinate::new(0, 2), Symbol::O, Axis::Horizontal);

        // then (期待する結果):
        assert_eq!(length, 1);
    }

    #[test]
    fn test_edge_does_not_wrap_around() {
        // テスト項目: 右端から先は数えず、次の行の先頭に折り返さない
        // given (前提条件): (0,2) と (1,0) は行優先の並びでは隣接している
        let board = board_with(
            3,
            &[(0, 1, Symbol::X), (0, 2, Symbol::X), (1, 0, Symbol::X)],
        );

        // when (操作):
        let length = run_length(&board, Coordinate::new(0, 2), Symbol::X, Axis::Horizontal);

        // then (期待する結果):
        assert_eq!(length, 2);
        assert!(!evaluate(&board, Coordinate::new(0, 2), Symbol::X, 3));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        // テスト項目: 同じ盤面と原点で何度評価しても結果が変わらない
        // given (前提条件):
        let board = board_with(
            3,
            &[(0, 0, Symbol::O), (1, 1, Symbol::O), (2, 2, Symbol::O)],
        );
        let origin = Coordinate::new(1, 1);

        // when (操作):
        let results: Vec<bool> = (0..3)
            .map(|_| evaluate(&board, origin, Symbol::O, 3))
            .collect();

        // then (期待する結果):
        assert_eq!(results, vec![true, true, true]);
    }

    #[test]
    fn test_run_length_longer_than_required() {
        // テスト項目: K を超える連続も勝利として扱われる
        let board = board_with(
            6,
            &[
                (5, 0, Symbol::X),
                (5, 1, Symbol::X),
                (5, 2, Symbol::X),
                (5, 3, Symbol::X),
            ],
        );
        assert!(evaluate(&board, Coordinate::new(5, 1), Symbol::X, 3));
    }
}
