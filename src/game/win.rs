//! Run detection from the most recently written cell.
//!
//! A placement can only create a run that passes through itself, so walking
//! outward from the last cell along the four axes finds every new win.

use super::board::{Board, Cell, COLS, ROWS};
use super::player::Player;

/// Minimum run length that wins.
pub const WIN_LENGTH: usize = 4;

/// Axis pairs in scan order: horizontal, vertical, diagonal, anti-diagonal.
/// Each entry is one direction; the opposite direction is its negation.
const AXES: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Position { row, col }
    }

    fn step(self, dr: isize, dc: isize) -> Option<Position> {
        let row = self.row.checked_add_signed(dr)?;
        let col = self.col.checked_add_signed(dc)?;
        (row < ROWS && col < COLS).then_some(Position { row, col })
    }
}

/// A winning line: every contiguous cell of the run, ordered from one end to
/// the other. Runs longer than [`WIN_LENGTH`] are reported in full.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Run {
    pub player: Player,
    pub cells: Vec<Position>,
}

impl Run {
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells.contains(&Position::new(row, col))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WinResult {
    Undecided,
    Win(Run),
    Draw,
}

/// Evaluate the board after a piece was written at `(row, col)`.
///
/// Wins are checked before fullness, so a move that fills the last cell and
/// completes a run is a win, not a draw.
pub fn check_winner(board: &Board, row: usize, col: usize) -> WinResult {
    if let Cell::Owner(player) = board.get(row, col) {
        let origin = Position::new(row, col);
        for &(dr, dc) in &AXES {
            let run = run_through(board, origin, player, dr, dc);
            if run.len() >= WIN_LENGTH {
                return WinResult::Win(Run { player, cells: run });
            }
        }
    }

    if board.is_full() {
        WinResult::Draw
    } else {
        WinResult::Undecided
    }
}

/// Collect the contiguous same-player cells through `origin` along one axis.
fn run_through(
    board: &Board,
    origin: Position,
    player: Player,
    dr: isize,
    dc: isize,
) -> Vec<Position> {
    let owned = |pos: &Position| board.get(pos.row, pos.col) == Cell::Owner(player);

    let mut backward: Vec<Position> =
        std::iter::successors(origin.step(-dr, -dc), |pos| pos.step(-dr, -dc))
            .take_while(owned)
            .collect();
    backward.reverse();

    let forward = std::iter::successors(origin.step(dr, dc), |pos| pos.step(dr, dc))
        .take_while(owned);

    backward
        .into_iter()
        .chain(std::iter::once(origin))
        .chain(forward)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board(rows: [&str; ROWS]) -> Board {
        Board::from_rows(&rows).unwrap()
    }

    fn cells(coords: &[(usize, usize)]) -> Vec<Position> {
        coords.iter().map(|&(r, c)| Position::new(r, c)).collect()
    }

    /// Full board with no four-in-a-row anywhere.
    const DRAWN: [&str; ROWS] = [
        "BBAABBA",
        "AABBAAB",
        "BBAABBA",
        "AABBAAB",
        "BBAABBA",
        "AABBAAB",
    ];

    #[test]
    fn test_horizontal_win() {
        let b = board([
            ".......",
            ".......",
            ".......",
            ".......",
            "BBB....",
            "AAAA...",
        ]);
        assert_eq!(
            check_winner(&b, 0, 3),
            WinResult::Win(Run {
                player: Player::A,
                cells: cells(&[(0, 0), (0, 1), (0, 2), (0, 3)]),
            })
        );
    }

    #[test]
    fn test_horizontal_win_from_middle_of_run() {
        let b = board([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "..AAAA.",
        ]);
        match check_winner(&b, 0, 3) {
            WinResult::Win(run) => {
                assert_eq!(run.cells, cells(&[(0, 2), (0, 3), (0, 4), (0, 5)]));
            }
            other => panic!("expected a win, got {other:?}"),
        }
    }

    #[test]
    fn test_vertical_win() {
        let b = board([
            ".......",
            ".......",
            "...B...",
            "...B.A.",
            "...B.A.",
            "...B.A.",
        ]);
        assert_eq!(
            check_winner(&b, 3, 3),
            WinResult::Win(Run {
                player: Player::B,
                cells: cells(&[(0, 3), (1, 3), (2, 3), (3, 3)]),
            })
        );
    }

    #[test]
    fn test_diagonal_win() {
        let b = board([
            ".......",
            ".......",
            "...A...",
            "..AB...",
            ".ABB...",
            "ABBA...",
        ]);
        assert_eq!(
            check_winner(&b, 3, 3),
            WinResult::Win(Run {
                player: Player::A,
                cells: cells(&[(0, 0), (1, 1), (2, 2), (3, 3)]),
            })
        );
    }

    #[test]
    fn test_anti_diagonal_win() {
        let b = board([
            ".......",
            ".......",
            "...A...",
            "...BA..",
            "...BBA.",
            "...ABBA",
        ]);
        assert_eq!(
            check_winner(&b, 3, 3),
            WinResult::Win(Run {
                player: Player::A,
                cells: cells(&[(0, 6), (1, 5), (2, 4), (3, 3)]),
            })
        );
    }

    #[test]
    fn test_five_in_a_row_reported_in_full() {
        let b = board([
            ".......",
            ".......",
            ".......",
            ".......",
            "..BB...",
            ".AAAAA.",
        ]);
        match check_winner(&b, 0, 3) {
            WinResult::Win(run) => {
                assert_eq!(run.player, Player::A);
                assert_eq!(run.len(), 5);
                assert_eq!(
                    run.cells,
                    cells(&[(0, 1), (0, 2), (0, 3), (0, 4), (0, 5)])
                );
            }
            other => panic!("expected a win, got {other:?}"),
        }
    }

    #[test]
    fn test_no_win_with_three() {
        let b = board([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "AAA....",
        ]);
        assert_eq!(check_winner(&b, 0, 2), WinResult::Undecided);
    }

    #[test]
    fn test_no_win_when_fourth_is_opponent() {
        let b = board([
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "AAAB...",
        ]);
        assert_eq!(check_winner(&b, 0, 2), WinResult::Undecided);
        assert_eq!(check_winner(&b, 0, 3), WinResult::Undecided);
    }

    #[test]
    fn test_draw_only_when_full() {
        let b = board(DRAWN);
        assert!(b.is_full());
        for row in 0..ROWS {
            for col in 0..COLS {
                assert_eq!(check_winner(&b, row, col), WinResult::Draw);
            }
        }
    }

    #[test]
    fn test_full_board_with_win_is_win() {
        let mut rows = DRAWN;
        rows[5] = "AAAABBA";
        let b = board(rows);
        assert!(b.is_full());
        match check_winner(&b, 0, 3) {
            WinResult::Win(run) => assert_eq!(run.player, Player::A),
            other => panic!("expected a win, got {other:?}"),
        }
    }

    #[test]
    fn test_run_helpers() {
        let run = Run {
            player: Player::B,
            cells: cells(&[(0, 0), (0, 1), (0, 2), (0, 3)]),
        };
        assert!(run.contains(0, 2));
        assert!(!run.contains(1, 2));
        assert!(!run.is_empty());
    }
}
