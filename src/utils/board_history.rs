//! Move-by-move board snapshots for replay.
//!
//! [`RecordingBoard`] wraps a [`Board`] and appends an owned snapshot to its
//! [`BoardHistory`] after every move the rule engine accepts. Turn numbers
//! are 1-based: `board_state(1)` is the position after the first move.

use chrono::{DateTime, Utc};
use tracing::debug;

use crate::errors::{HistoryError, MoveError, PromotionError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::move_generation::move_apply::{resolve_promotion, try_move_piece};

#[derive(Debug, Clone)]
pub struct Snapshot {
    pub board: Board,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Default)]
pub struct BoardHistory {
    snapshots: Vec<Snapshot>,
}

impl BoardHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a copy of `board`.
    pub fn record(&mut self, board: &Board) {
        self.snapshots.push(Snapshot {
            board: board.clone(),
            recorded_at: Utc::now(),
        });
        debug!(turn = self.snapshots.len(), "board snapshot recorded");
    }

    /// Position after move `turn` (1-based).
    pub fn board_state(&self, turn: usize) -> Result<&Board, HistoryError> {
        self.snapshot(turn).map(|snapshot| &snapshot.board)
    }

    pub fn snapshot(&self, turn: usize) -> Result<&Snapshot, HistoryError> {
        turn.checked_sub(1)
            .and_then(|index| self.snapshots.get(index))
            .ok_or(HistoryError::InvalidTurn {
                requested: turn,
                recorded: self.snapshots.len(),
            })
    }

    pub fn latest(&self) -> Option<&Board> {
        self.snapshots.last().map(|snapshot| &snapshot.board)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Snapshot> {
        self.snapshots.iter()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
    }

    fn amend_latest(&mut self, board: &Board) {
        if let Some(latest) = self.snapshots.last_mut() {
            latest.board = board.clone();
        }
    }
}

/// A board that records its own history.
#[derive(Debug, Clone, Default)]
pub struct RecordingBoard {
    board: Board,
    history: BoardHistory,
}

impl RecordingBoard {
    pub fn new(board: Board) -> Self {
        Self {
            board,
            history: BoardHistory::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &BoardHistory {
        &self.history
    }

    /// Independent copy of the current position.
    pub fn snapshot(&self) -> Board {
        self.board.clone()
    }

    /// Validated move; recorded only when it was played.
    pub fn try_move_piece(&mut self, start: Square, dest: Square) -> Result<(), MoveError> {
        try_move_piece(&mut self.board, start, dest)?;
        self.history.record(&self.board);
        Ok(())
    }

    pub fn move_piece(&mut self, start: Square, dest: Square) -> bool {
        match self.try_move_piece(start, dest) {
            Ok(()) => true,
            Err(reason) => {
                debug!(%start, %dest, %reason, "move rejected");
                false
            }
        }
    }

    /// Resolve the pending promotion; the latest snapshot shows the new piece.
    pub fn resolve_promotion(&mut self, kind: PieceKind) -> Result<(), PromotionError> {
        resolve_promotion(&mut self.board, kind)?;
        self.history.amend_latest(&self.board);
        Ok(())
    }

    pub fn into_parts(self) -> (Board, BoardHistory) {
        (self.board, self.history)
    }
}
