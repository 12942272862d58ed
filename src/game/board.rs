use std::fmt;

use crate::error::{BoardError, BoardParseError};

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Owner(Player),
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Owner(player) => Some(player),
        }
    }
}

/// Fixed 6x7 grid. Row 0 is the bottom row; pieces stack upward from it, so a
/// column's occupied cells are always rows `0..height(col)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
    heights: [usize; COLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
            heights: [0; COLS],
        }
    }

    /// Build a board from text rows, top row first. `.` is empty, `A`/`X` is
    /// player A and `B`/`O` is player B.
    pub fn from_rows(rows: &[&str]) -> Result<Self, BoardParseError> {
        if rows.len() != ROWS {
            return Err(BoardParseError::RowCount {
                expected: ROWS,
                got: rows.len(),
            });
        }

        let mut board = Board::new();
        for (i, line) in rows.iter().enumerate() {
            let row = ROWS - 1 - i;
            let symbols: Vec<char> = line.trim().chars().collect();
            if symbols.len() != COLS {
                return Err(BoardParseError::RowWidth {
                    row,
                    expected: COLS,
                    got: symbols.len(),
                });
            }
            for (col, symbol) in symbols.into_iter().enumerate() {
                board.cells[row][col] = match symbol {
                    '.' => Cell::Empty,
                    'A' | 'a' | 'X' | 'x' => Cell::Owner(Player::A),
                    'B' | 'b' | 'O' | 'o' => Cell::Owner(Player::B),
                    other => return Err(BoardParseError::UnknownSymbol { row, symbol: other }),
                };
            }
        }

        for col in 0..COLS {
            let height = (0..ROWS)
                .take_while(|&row| board.cells[row][col] != Cell::Empty)
                .count();
            if (height..ROWS).any(|row| board.cells[row][col] != Cell::Empty) {
                return Err(BoardParseError::FloatingPiece { col });
            }
            board.heights[col] = height;
        }

        Ok(board)
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Number of pieces in a column; also the row the next piece lands on.
    pub fn height(&self, col: usize) -> usize {
        self.heights[col]
    }

    /// Check if a column is full. Columns outside the board count as full.
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.heights[col] == ROWS
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn apply(&mut self, col: usize, player: Player) -> Result<usize, BoardError> {
        if col >= COLS {
            return Err(BoardError::ColumnOutOfRange(col));
        }
        if self.is_column_full(col) {
            return Err(BoardError::ColumnFull(col));
        }

        let row = self.heights[col];
        self.cells[row][col] = player.to_cell();
        self.heights[col] += 1;
        Ok(row)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a piece, in ascending order.
    pub fn open_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Total pieces on the board.
    pub fn move_count(&self) -> usize {
        self.heights.iter().sum()
    }

    pub fn is_empty(&self) -> bool {
        self.move_count() == 0
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let symbol = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Owner(player) => player.symbol(),
                };
                write!(f, "{symbol}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn assert_no_floating(board: &Board) {
        for col in 0..COLS {
            let height = board.height(col);
            for row in 0..height {
                assert_ne!(board.get(row, col), Cell::Empty, "hole at ({row}, {col})");
            }
            for row in height..ROWS {
                assert_eq!(board.get(row, col), Cell::Empty, "floating at ({row}, {col})");
            }
        }
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new();
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(board.get(row, col), Cell::Empty);
            }
        }
        assert!(board.is_empty());
        assert_eq!(board.open_columns(), vec![0, 1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_apply() {
        let mut board = Board::new();

        let row = board.apply(3, Player::A).unwrap();
        assert_eq!(row, 0);
        assert_eq!(board.get(0, 3), Cell::Owner(Player::A));

        let row = board.apply(3, Player::B).unwrap();
        assert_eq!(row, 1);
        assert_eq!(board.get(1, 3), Cell::Owner(Player::B));
        assert_eq!(board.height(3), 2);
        assert_eq!(board.move_count(), 2);
    }

    #[test]
    fn test_column_full() {
        let mut board = Board::new();
        for _ in 0..ROWS {
            board.apply(0, Player::A).unwrap();
        }

        assert!(board.is_column_full(0));
        let before = board;
        assert_eq!(board.apply(0, Player::B), Err(BoardError::ColumnFull(0)));
        assert_eq!(board, before);
        assert_eq!(board.open_columns(), vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_invalid_column() {
        let mut board = Board::new();
        assert_eq!(board.apply(7, Player::A), Err(BoardError::ColumnOutOfRange(7)));
        assert!(board.is_column_full(7));
        assert!(board.is_empty());
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for col in 0..COLS {
            for _ in 0..ROWS {
                assert!(!board.is_full());
                board.apply(col, Player::A).unwrap();
            }
        }
        assert!(board.is_full());
        assert!(board.open_columns().is_empty());
    }

    #[test]
    fn test_column_height_invariant_under_random_play() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let mut board = Board::new();
            let mut player = Player::A;
            while !board.is_full() {
                let open = board.open_columns();
                let col = open[rng.random_range(0..open.len())];
                let before = board.height(col);
                let row = board.apply(col, player).unwrap();
                assert_eq!(row, before);
                assert_eq!(board.height(col), before + 1);
                assert_no_floating(&board);
                player = player.other();
            }
            assert_eq!(board.move_count(), ROWS * COLS);
        }
    }

    #[test]
    fn test_copy_is_independent_snapshot() {
        let mut board = Board::new();
        board.apply(2, Player::A).unwrap();
        let mut sim = board;
        sim.apply(2, Player::B).unwrap();
        assert_eq!(board.height(2), 1);
        assert_eq!(sim.height(2), 2);
    }

    #[test]
    fn test_from_rows_and_display() {
        let rows = [
            ".......",
            ".......",
            ".......",
            ".......",
            "...B...",
            "..AAB..",
        ];
        let board = Board::from_rows(&rows).unwrap();
        assert_eq!(board.get(0, 2), Cell::Owner(Player::A));
        assert_eq!(board.get(0, 4), Cell::Owner(Player::B));
        assert_eq!(board.get(1, 3), Cell::Owner(Player::B));
        assert_eq!(board.height(3), 2);
        assert_eq!(board.move_count(), 4);
        assert_eq!(board.to_string(), rows.join("\n") + "\n");
    }

    #[test]
    fn test_from_rows_rejects_floating_piece() {
        let rows = [
            ".......",
            ".......",
            ".......",
            ".......",
            "...X...",
            ".......",
        ];
        assert_eq!(
            Board::from_rows(&rows),
            Err(BoardParseError::FloatingPiece { col: 3 })
        );
    }

    #[test]
    fn test_from_rows_rejects_bad_shape() {
        assert_eq!(
            Board::from_rows(&["......."]),
            Err(BoardParseError::RowCount {
                expected: ROWS,
                got: 1
            })
        );
        let rows = [".......", ".......", ".......", ".......", ".......", "...."];
        assert!(matches!(
            Board::from_rows(&rows),
            Err(BoardParseError::RowWidth { row: 0, got: 4, .. })
        ));
        let rows = [".......", ".......", ".......", ".......", ".......", "...?..."];
        assert!(matches!(
            Board::from_rows(&rows),
            Err(BoardParseError::UnknownSymbol { symbol: '?', .. })
        ));
    }
}
