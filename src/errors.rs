//! Error types used throughout the engine.
//!
//! Illegal moves are an expected outcome of user input and are reported as
//! values, never as panics. Out-of-bounds tile access is not an error at
//! all: reads yield an empty tile and writes are ignored.

use thiserror::Error;

use crate::game_state::chess_types::{PieceKind, Square, Team};

/// Failure to construct a board.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    /// Rows and columns must both be positive.
    #[error("invalid board dimensions {rows}x{columns}")]
    InvalidDimensions { rows: i32, columns: i32 },
    /// More tiles than a signed 32-bit index can address.
    #[error("board of {rows}x{columns} has too many tiles")]
    TooLarge { rows: i32, columns: i32 },
    #[error("could not allocate {tiles} tiles")]
    AllocationFailed { tiles: usize },
}

/// Reason an apply-with-validation request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MoveError {
    #[error("no piece selected at {0}")]
    NoPieceSelected(Square),
    #[error("piece at {0} does not belong to the side to move")]
    WrongTurn(Square),
    #[error("piece cannot move from {start} to {dest}")]
    IllegalGeometry { start: Square, dest: Square },
    #[error("path from {start} to {dest} is blocked")]
    PathBlocked { start: Square, dest: Square },
    #[error("castling from {start} to {dest} is not allowed")]
    CastlingNotAllowed { start: Square, dest: Square },
    #[error("moving from {start} to {dest} leaves the king in check")]
    LeavesKingInCheck { start: Square, dest: Square },
}

/// Failure to resolve a pending pawn promotion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PromotionError {
    #[error("no promotion is pending")]
    NoPendingPromotion,
    #[error("a pawn cannot promote to {0:?}")]
    InvalidPieceKind(PieceKind),
}

/// Malformed text layout handed to the layout parser.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("layout is empty")]
    Empty,
    #[error("unknown layout token '{0}'")]
    UnknownToken(char),
    #[error("row {row} has {found} columns, expected {expected}")]
    RaggedRow {
        row: usize,
        found: i32,
        expected: i32,
    },
    #[error("row {row} is too wide")]
    RowTooWide { row: usize },
    #[error("invalid turn field '{0}'")]
    InvalidTurn(String),
    #[error(transparent)]
    Board(#[from] BoardError),
}

/// Replay lookup outside the recorded range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HistoryError {
    #[error("invalid turn number {requested}, {recorded} turns recorded")]
    InvalidTurn { requested: usize, recorded: usize },
}

/// Failure raised by an automated opponent.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("engine returned no move although {0} has legal moves")]
    NoMoveChosen(Team),
    #[error("engine chose a move the board rejected: {0}")]
    RejectedMove(#[from] MoveError),
    #[error(transparent)]
    Promotion(#[from] PromotionError),
}
