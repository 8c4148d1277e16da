// ABOUTME: Preset persistence for saved boards.
// ABOUTME: Serializes grid size, words, and marks to flat JSON files.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::board::{Board, GridSize};

/// A saved board snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Preset {
    pub grid_size: u32,
    pub board: Vec<Vec<String>>,
    pub marked_cells: Vec<(usize, usize)>,
}

#[derive(Debug, thiserror::Error)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unsupported grid size: {0}")]
    UnsupportedGridSize(u32),

    #[error("board shape does not match grid size {expected}")]
    MalformedBoard { expected: u32 },

    #[error("marked cell ({0}, {1}) is outside the board")]
    MarkOutOfRange(usize, usize),

    #[error("could not determine data directory")]
    NoDataPath,
}

impl Preset {
    pub fn from_board(board: &Board) -> Self {
        let mut marked: Vec<_> = board.marked_cells().collect();
        marked.sort_unstable();
        Self {
            grid_size: board.size().value(),
            board: board.rows(),
            marked_cells: marked,
        }
    }

    /// Validate and convert into a live board.
    pub fn into_board(self) -> Result<Board, PresetError> {
        let size = GridSize::from_value(self.grid_size)
            .ok_or(PresetError::UnsupportedGridSize(self.grid_size))?;
        let n = size.value() as usize;

        if self.board.len() != n || self.board.iter().any(|row| row.len() != n) {
            return Err(PresetError::MalformedBoard {
                expected: size.value(),
            });
        }

        let mut board = Board::new(size);
        for (row, words) in self.board.into_iter().enumerate() {
            for (col, word) in words.into_iter().enumerate() {
                board.set_word(row, col, word);
            }
        }
        for (row, col) in self.marked_cells {
            if row >= n || col >= n {
                return Err(PresetError::MarkOutOfRange(row, col));
            }
            board.toggle_mark(row, col);
        }
        Ok(board)
    }

    /// Default preset path for a grid size
    /// (~/.local/share/bingo-board/preset_5x5.json or platform equivalent).
    pub fn default_path(size: GridSize) -> Option<PathBuf> {
        dirs::data_dir().map(|p| {
            p.join("bingo-board")
                .join(format!("preset_{}.json", size.label()))
        })
    }

    /// Save to a path, creating parent directories as needed.
    pub fn save(&self, path: &std::path::Path) -> Result<(), PresetError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn load(path: &std::path::Path) -> Result<Self, PresetError> {
        let content = std::fs::read_to_string(path)?;
        let preset = serde_json::from_str(&content)?;
        Ok(preset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_board() -> Board {
        let mut board = Board::new(GridSize::Three);
        board.set_word(0, 0, "sun");
        board.set_word(2, 1, "moon");
        board.toggle_mark(2, 1);
        board.toggle_mark(0, 2);
        board
    }

    #[test]
    fn preset_round_trips_through_a_file() {
        let board = sample_board();
        let path = std::env::temp_dir().join("bingo_preset_roundtrip.json");

        Preset::from_board(&board).save(&path).unwrap();
        let loaded = Preset::load(&path).unwrap().into_board().unwrap();

        assert_eq!(loaded, board);
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn marked_cells_serialize_sorted() {
        let preset = Preset::from_board(&sample_board());
        assert_eq!(preset.marked_cells, vec![(0, 2), (2, 1)]);
    }

    #[test]
    fn malformed_json_is_an_error_not_a_panic() {
        let path = std::env::temp_dir().join("bingo_preset_malformed.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Preset::load(&path), Err(PresetError::Json(_))));
        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn missing_keys_are_a_json_error() {
        let err = serde_json::from_str::<Preset>(r#"{"grid_size": 5}"#);
        assert!(err.is_err());
    }

    #[test]
    fn unsupported_grid_size_is_rejected() {
        let preset = Preset {
            grid_size: 9,
            board: vec![],
            marked_cells: vec![],
        };
        assert!(matches!(
            preset.into_board(),
            Err(PresetError::UnsupportedGridSize(9))
        ));
    }

    #[test]
    fn mismatched_board_shape_is_rejected() {
        let preset = Preset {
            grid_size: 3,
            board: vec![vec![String::new(); 3]; 2],
            marked_cells: vec![],
        };
        assert!(matches!(
            preset.into_board(),
            Err(PresetError::MalformedBoard { expected: 3 })
        ));

        let ragged = Preset {
            grid_size: 3,
            board: vec![
                vec![String::new(); 3],
                vec![String::new(); 4],
                vec![String::new(); 3],
            ],
            marked_cells: vec![],
        };
        assert!(ragged.into_board().is_err());
    }

    #[test]
    fn out_of_range_marks_are_rejected() {
        let preset = Preset {
            grid_size: 3,
            board: vec![vec![String::new(); 3]; 3],
            marked_cells: vec![(3, 0)],
        };
        assert!(matches!(
            preset.into_board(),
            Err(PresetError::MarkOutOfRange(3, 0))
        ));
    }

    #[test]
    fn default_path_carries_the_grid_label() {
        if let Some(path) = Preset::default_path(GridSize::Five) {
            assert!(path.ends_with("bingo-board/preset_5x5.json"));
        }
    }
}
