use std::path::PathBuf;

/// Errors raised by the board when a piece cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is out of range")]
    ColumnOutOfRange(usize),
}

/// Reasons a move is rejected by the game controller. A rejected move never
/// changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is out of range")]
    ColumnOutOfRange(usize),

    #[error("game is not in progress")]
    GameNotInProgress,

    #[error("computer move was computed for a board that has since changed")]
    StaleMove,

    #[error("it is not this side's turn")]
    OutOfTurn,
}

impl From<BoardError> for MoveError {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::ColumnFull(col) => MoveError::ColumnFull(col),
            BoardError::ColumnOutOfRange(col) => MoveError::ColumnOutOfRange(col),
        }
    }
}

/// Errors from parsing the text board notation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardParseError {
    #[error("expected {expected} rows, got {got}")]
    RowCount { expected: usize, got: usize },

    #[error("row {row} has {got} cells, expected {expected}")]
    RowWidth {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("unknown cell symbol '{symbol}' in row {row}")]
    UnknownSymbol { row: usize, symbol: char },

    #[error("column {col} has a piece above an empty cell")]
    FloatingPiece { col: usize },
}

/// Errors from changing the computer difficulty.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DifficultyError {
    #[error("difficulty {0} is out of range (0..=4)")]
    OutOfRange(u8),

    #[error("difficulty only applies when playing against the computer")]
    TwoPlayerMode,
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
