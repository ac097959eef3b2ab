//! Sparse board representation.

use std::collections::HashMap;

use super::{coordinate::Coordinate, player::Symbol};

/// Occupied cells of an N x N board, keyed by coordinate.
///
/// Only claimed cells are stored, so lookups do not depend on the board size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: usize,
    cells: HashMap<Coordinate, Symbol>,
}

impl Board {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            cells: HashMap::new(),
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn symbol_at(&self, coordinate: Coordinate) -> Option<Symbol> {
        self.cells.get(&coordinate).copied()
    }

    pub fn is_occupied(&self, coordinate: Coordinate) -> bool {
        self.cells.contains_key(&coordinate)
    }

    /// Mark `coordinate` with `symbol`.
    ///
    /// Returns `false` and leaves the board untouched when the cell is
    /// outside the board or already taken.
    pub fn place(&mut self, coordinate: Coordinate, symbol: Symbol) -> bool {
        if !coordinate.is_within(self.size) || self.is_occupied(coordinate) {
            return false;
        }
        self.cells.insert(coordinate, symbol);
        true
    }

    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    pub fn is_full(&self) -> bool {
        let capacity = self.size.checked_mul(self.size);
        capacity.is_some_and(|cells| self.occupied_count() == cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_on_empty_cell() {
        // テスト項目: 空いているセルにマークを置ける
        // given (前提条件):
        let mut board = Board::new(3);

        // when (操作):
        let placed = board.place(Coordinate::new(1, 2), Symbol::X);

        // then (期待する結果):
        assert!(placed);
        assert_eq!(board.symbol_at(Coordinate::new(1, 2)), Some(Symbol::X));
        assert_eq!(board.occupied_count(), 1);
    }

    #[test]
    fn test_place_never_overwrites() {
        // テスト項目: 既に埋まっているセルは上書きされない
        // given (前提条件):
        let mut board = Board::new(3);
        board.place(Coordinate::new(0, 0), Symbol::O);

        // when (操作):
        let placed = board.place(Coordinate::new(0, 0), Symbol::X);

        // then (期待する結果):
        assert!(!placed);
        assert_eq!(board.symbol_at(Coordinate::new(0, 0)), Some(Symbol::O));
    }

    #[test]
    fn test_place_outside_board() {
        // テスト項目: 盤面外のセルには置けない
        let mut board = Board::new(3);
        assert!(!board.place(Coordinate::new(3, 0), Symbol::O));
        assert_eq!(board.occupied_count(), 0);
    }

    #[test]
    fn test_is_full() {
        // テスト項目: 全セルが埋まると is_full が true になる
        // given (前提条件):
        let mut board = Board::new(2);
        board.place(Coordinate::new(0, 0), Symbol::O);
        board.place(Coordinate::new(0, 1), Symbol::X);
        board.place(Coordinate::new(1, 0), Symbol::O);
        assert!(!board.is_full());

        // when (操作):
        board.place(Coordinate::new(1, 1), Symbol::X);

        // then (期待する結果):
        assert!(board.is_full());
    }

    #[test]
    fn test_is_full_on_oversized_board() {
        // テスト項目: N * N が usize に収まらない盤面でも is_full はパニックしない
        let mut board = Board::new(usize::MAX);
        board.place(Coordinate::new(0, 0), Symbol::O);
        assert!(!board.is_full());
    }
}
