//! Castling validation.
//!
//! The rook taking part is the first piece met when scanning outward from
//! the king along its row, so castling also works on boards wider or
//! narrower than eight columns. Attacked squares are detected by placing
//! the king there provisionally and asking for check.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};
use crate::game_state::provisional::probe_with;
use crate::move_generation::check_detection::is_king_in_check;
use crate::move_generation::geometry::{piece_geometry, Geometry};

/// Column step from the king toward the castling side.
#[inline]
pub fn castling_step(start: Square, dest: Square) -> i32 {
    (dest.col - start.col).signum()
}

/// Square the king passes over, where the rook lands.
#[inline]
pub fn castling_passing_square(start: Square, dest: Square) -> Square {
    start.offset(0, castling_step(start, dest))
}

/// First occupied square past the king toward `dest`, if it holds an
/// unmoved rook of the king's team.
pub fn castling_rook(board: &Board, start: Square, dest: Square) -> Option<Square> {
    let king = board.tile(start);
    let step = castling_step(start, dest);
    if step == 0 {
        return None;
    }

    let mut current = start.offset(0, step);
    while board.in_bounds(current) {
        let tile = board.tile(current);
        if !tile.is_empty() {
            let usable =
                tile.kind == PieceKind::Rook && tile.team == king.team && !tile.has_moved;
            return usable.then_some(current);
        }
        current = current.offset(0, step);
    }
    None
}

/// Full castling check for the king on `start` moving to `dest`.
pub fn is_castling_legal(board: &mut Board, start: Square, dest: Square) -> bool {
    let king = board.tile(start);
    if king.kind != PieceKind::King
        || king.has_moved
        || piece_geometry(board, start, dest) != Geometry::Castling
    {
        return false;
    }

    let Some(rook_square) = castling_rook(board, start, dest) else {
        return false;
    };

    let passing = castling_passing_square(start, dest);
    if !board.tile(passing).is_empty() || !board.tile(dest).is_empty() {
        return false;
    }

    if is_king_in_check(board, king.team) {
        return false;
    }

    let attacked_in_passing = probe_with(
        board,
        |p| {
            p.relocate(start, passing);
        },
        |b| is_king_in_check(b, king.team),
    );
    if attacked_in_passing {
        return false;
    }

    !probe_with(
        board,
        |p| {
            p.relocate(start, dest).relocate(rook_square, passing);
        },
        |b| is_king_in_check(b, king.team),
    )
}
