//! Candidate moves for the search, each tagged with its material delta.
//!
//! Generation order is the board scan order: the side to move's pieces in
//! row-major order, each piece's destinations in enumeration order, and
//! promoting moves expanded into one candidate per promotion choice
//! (queen, knight, bishop, rook). Root tie-breaking depends on this order.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind};
use crate::move_generation::legal_moves::legal_destinations;
use crate::search::material::{piece_value, promotion_bonus};

/// Bonus for a pawn taking en passant; the victim is not on the
/// destination square so it is not counted as a capture.
pub const EN_PASSANT_BONUS: i32 = 1;

/// One candidate: the move, its promotion choice and its signed delta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchMove {
    pub mv: Move,
    pub promotion: Option<PieceKind>,
    pub value: i32,
}

/// Append every legal move of the side to move to `out`.
///
/// Deltas are negated when `negate` is set, i.e. when the mover is the
/// searching team's opponent. Returns the number of moves appended.
pub fn generate_search_moves(board: &mut Board, negate: bool, out: &mut Vec<SearchMove>) -> usize {
    let sign = if negate { -1 } else { 1 };
    let first = out.len();

    for start in board.team_squares(board.turn()) {
        let mover = board.tile(start);
        for dest in legal_destinations(board, start) {
            let target = board.tile(dest);
            let mut value = piece_value(target.kind);
            if mover.kind == PieceKind::Pawn
                && (dest.col - start.col).abs() == 1
                && target.is_empty()
            {
                value += EN_PASSANT_BONUS;
            }

            let mv = Move::new(start, dest);
            if mover.kind == PieceKind::Pawn && board.is_promotion_row(dest) {
                for kind in PieceKind::PROMOTION_CHOICES {
                    out.push(SearchMove {
                        mv,
                        promotion: Some(kind),
                        value: sign * (value + promotion_bonus(kind)),
                    });
                }
            } else {
                out.push(SearchMove {
                    mv,
                    promotion: None,
                    value: sign * value,
                });
            }
        }
    }

    out.len() - first
}
