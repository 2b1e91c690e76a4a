//! Undo record produced by `make_move`.

use crate::game_state::chess_types::{Move, PieceKind, Square, Tile};

/// Everything `unmake_move` needs to invert one `make_move`.
///
/// Records are consumed in strict LIFO order by the frame that created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRecord {
    pub mv: Move,
    /// Moved flag of the moving tile before the move.
    pub prior_has_moved: bool,
    /// Tile removed by the move and where it stood. For en passant this is
    /// beside the destination, not on it.
    pub captured: Tile,
    pub captured_square: Square,
    pub prior_en_passant: Option<Square>,
    pub prior_pending_promotion: Option<Square>,
    /// Piece kind the pawn was promoted to as part of this move.
    pub promotion: Option<PieceKind>,
    /// Castling rook: original square, original tile, landing square.
    pub castling_rook: Option<(Square, Tile, Square)>,
}
