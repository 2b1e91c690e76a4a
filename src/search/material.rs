//! Static material values.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Team};

#[inline]
pub const fn piece_value(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Pawn => 1,
        PieceKind::Knight => 3,
        PieceKind::Bishop => 3,
        PieceKind::Rook => 5,
        PieceKind::Queen => 9,
        PieceKind::King | PieceKind::Empty => 0,
    }
}

/// Bonus a pawn earns for promoting to `kind`, on top of any capture.
#[inline]
pub const fn promotion_bonus(kind: PieceKind) -> i32 {
    match kind {
        PieceKind::Queen => 8,
        PieceKind::Rook => 4,
        PieceKind::Knight | PieceKind::Bishop => 2,
        _ => 0,
    }
}

/// Sum of the values of every piece `team` has on the board.
pub fn board_material(board: &Board, team: Team) -> i32 {
    board
        .squares()
        .map(|square| board.tile(square))
        .filter(|tile| tile.team == team)
        .map(|tile| piece_value(tile.kind))
        .sum()
}
