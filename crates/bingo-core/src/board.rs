// ABOUTME: Bingo board state: grid size, cell words, and marks.
// ABOUTME: Resizing regenerates the board and clears all marks.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// Supported board dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GridSize {
    Three,
    Four,
    #[default]
    Five,
    Six,
    Seven,
}

impl GridSize {
    pub fn all() -> &'static [GridSize] {
        &[
            GridSize::Three,
            GridSize::Four,
            GridSize::Five,
            GridSize::Six,
            GridSize::Seven,
        ]
    }

    pub fn value(&self) -> u32 {
        match self {
            GridSize::Three => 3,
            GridSize::Four => 4,
            GridSize::Five => 5,
            GridSize::Six => 6,
            GridSize::Seven => 7,
        }
    }

    pub fn from_value(value: u32) -> Option<GridSize> {
        GridSize::all().iter().copied().find(|s| s.value() == value)
    }

    /// Next size in the cycle, wrapping from 7x7 back to 3x3.
    pub fn next(&self) -> GridSize {
        let all = GridSize::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    pub fn label(&self) -> String {
        format!("{0}x{0}", self.value())
    }

    pub fn cells(&self) -> usize {
        (self.value() * self.value()) as usize
    }
}

/// The board proper: a row-major word grid plus the set of marked cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    size: GridSize,
    words: Vec<String>,
    marked: HashSet<(usize, usize)>,
}

impl Board {
    pub fn new(size: GridSize) -> Self {
        Self {
            size,
            words: vec![String::new(); size.cells()],
            marked: HashSet::new(),
        }
    }

    pub fn size(&self) -> GridSize {
        self.size
    }

    pub fn grid_size(&self) -> usize {
        self.size.value() as usize
    }

    fn index(&self, row: usize, col: usize) -> Option<usize> {
        let n = self.grid_size();
        (row < n && col < n).then_some(row * n + col)
    }

    pub fn word(&self, row: usize, col: usize) -> &str {
        self.index(row, col)
            .map(|i| self.words[i].as_str())
            .unwrap_or("")
    }

    /// Set a cell's word. Out-of-range positions are ignored.
    pub fn set_word(&mut self, row: usize, col: usize, word: impl Into<String>) {
        if let Some(i) = self.index(row, col) {
            self.words[i] = word.into();
        }
    }

    pub fn is_marked(&self, row: usize, col: usize) -> bool {
        self.marked.contains(&(row, col))
    }

    /// Toggle the X mark on a cell. Returns the new marked state.
    pub fn toggle_mark(&mut self, row: usize, col: usize) -> bool {
        if self.index(row, col).is_none() {
            return false;
        }
        if self.marked.remove(&(row, col)) {
            false
        } else {
            self.marked.insert((row, col));
            true
        }
    }

    pub fn marked_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.marked.iter().copied()
    }

    /// Switch to a new grid size, discarding all words and marks.
    pub fn resize(&mut self, size: GridSize) {
        *self = Board::new(size);
    }

    pub fn clear(&mut self) {
        self.resize(self.size);
    }

    /// Words as rows, outermost to innermost, for serialization.
    pub fn rows(&self) -> Vec<Vec<String>> {
        let n = self.grid_size();
        (0..n)
            .map(|row| (0..n).map(|col| self.word(row, col).to_string()).collect())
            .collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(GridSize::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_cycle_wraps_around() {
        let mut size = GridSize::Three;
        for expected in [4, 5, 6, 7, 3] {
            size = size.next();
            assert_eq!(size.value(), expected);
        }
    }

    #[test]
    fn from_value_accepts_only_supported_sizes() {
        for v in 3..=7 {
            assert_eq!(GridSize::from_value(v).map(|s| s.value()), Some(v));
        }
        assert_eq!(GridSize::from_value(2), None);
        assert_eq!(GridSize::from_value(8), None);
        assert_eq!(GridSize::from_value(0), None);
    }

    #[test]
    fn new_board_is_empty_and_unmarked() {
        let board = Board::new(GridSize::Five);
        for row in 0..5 {
            for col in 0..5 {
                assert_eq!(board.word(row, col), "");
                assert!(!board.is_marked(row, col));
            }
        }
    }

    #[test]
    fn words_are_stored_per_cell() {
        let mut board = Board::new(GridSize::Three);
        board.set_word(0, 2, "fox");
        board.set_word(2, 0, "owl");
        assert_eq!(board.word(0, 2), "fox");
        assert_eq!(board.word(2, 0), "owl");
        assert_eq!(board.word(1, 1), "");
    }

    #[test]
    fn out_of_range_writes_are_ignored() {
        let mut board = Board::new(GridSize::Three);
        board.set_word(3, 0, "nope");
        assert!(!board.toggle_mark(0, 3));
        assert_eq!(board.word(3, 0), "");
    }

    #[test]
    fn toggle_mark_is_an_involution() {
        let mut board = Board::new(GridSize::Four);
        assert!(board.toggle_mark(1, 2));
        assert!(board.is_marked(1, 2));
        assert!(!board.toggle_mark(1, 2));
        assert!(!board.is_marked(1, 2));
    }

    #[test]
    fn resize_clears_words_and_marks() {
        let mut board = Board::new(GridSize::Five);
        board.set_word(0, 0, "kept?");
        board.toggle_mark(0, 0);
        board.resize(GridSize::Six);
        assert_eq!(board.size(), GridSize::Six);
        assert_eq!(board.word(0, 0), "");
        assert!(!board.is_marked(0, 0));
    }

    #[test]
    fn rows_are_row_major() {
        let mut board = Board::new(GridSize::Three);
        board.set_word(1, 0, "a");
        board.set_word(1, 2, "b");
        let rows = board.rows();
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[1], vec!["a".to_string(), String::new(), "b".to_string()]);
    }
}
