//! Board cell coordinates.

use std::fmt;

/// A row/column pair identifying a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Coordinate {
    pub row: usize,
    pub col: usize,
}

impl Coordinate {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the cell lies on an `board_size` x `board_size` board.
    pub fn is_within(self, board_size: usize) -> bool {
        self.row < board_size && self.col < board_size
    }

    /// The neighbouring cell one step along `(delta_row, delta_col)`.
    ///
    /// Returns `None` when the step leaves the board; there is no wraparound.
    pub fn step(self, delta_row: isize, delta_col: isize, board_size: usize) -> Option<Self> {
        let row = self.row.checked_add_signed(delta_row)?;
        let col = self.col.checked_add_signed(delta_col)?;
        let next = Self::new(row, col);
        next.is_within(board_size).then_some(next)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_inside_board() {
        // テスト項目: 盤面内の隣接セルに移動できる
        // given (前提条件):
        let origin = Coordinate::new(1, 1);

        // when (操作):
        let next = origin.step(1, -1, 3);

        // then (期待する結果):
        assert_eq!(next, Some(Coordinate::new(2, 0)));
    }

    #[test]
    fn test_step_past_right_edge_does_not_wrap() {
        // テスト項目: 右端を越える移動は None になり、列 0 に折り返さない
        // given (前提条件):
        let origin = Coordinate::new(0, 2);

        // when (操作):
        let next = origin.step(0, 1, 3);

        // then (期待する結果):
        assert_eq!(next, None);
    }

    #[test]
    fn test_step_below_zero() {
        // テスト項目: 負の方向で 0 を下回る移動は None になる
        // given (前提条件):
        let origin = Coordinate::new(0, 0);

        // when (操作):
        let up = origin.step(-1, 0, 3);
        let left = origin.step(0, -1, 3);

        // then (期待する結果):
        assert_eq!(up, None);
        assert_eq!(left, None);
    }

    #[test]
    fn test_is_within() {
        // テスト項目: 盤面サイズによる範囲判定
        assert!(Coordinate::new(2, 2).is_within(3));
        assert!(!Coordinate::new(3, 0).is_within(3));
        assert!(!Coordinate::new(0, 3).is_within(3));
    }
}
