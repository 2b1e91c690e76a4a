//! Making, unmaking and validating moves.
//!
//! [`make_move`] is the unchecked primitive shared by validated play and the
//! search: it relocates the piece, carries the castling rook, removes the
//! en-passant victim, updates the records and flips the turn, returning a
//! [`MoveRecord`] that [`unmake_move`] consumes to restore the exact prior
//! state.

use tracing::{debug, trace};

use crate::errors::{MoveError, PromotionError};
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind, Square, Tile};
use crate::game_state::move_record::MoveRecord;
use crate::move_generation::castling::{castling_passing_square, castling_rook};
use crate::move_generation::geometry::en_passant_capture_square;
use crate::move_generation::legal_moves::check_move;

/// Apply `mv` without validation.
///
/// `promotion` resolves a pawn landing on the first or last row in the same
/// step; with `None` the promotion is left pending.
pub fn make_move(board: &mut Board, mv: Move, promotion: Option<PieceKind>) -> MoveRecord {
    let Move { start, dest } = mv;
    let mover = board.tile(start);
    let d_col = (dest.col - start.col).abs();

    let is_pawn = mover.kind == PieceKind::Pawn;
    let is_en_passant = is_pawn && d_col == 1 && board.tile(dest).is_empty();
    let captured_square = if is_en_passant {
        en_passant_capture_square(start, dest)
    } else {
        dest
    };

    let castling_rook = if mover.kind == PieceKind::King && start.row == dest.row && d_col == 2 {
        castling_rook(board, start, dest)
            .map(|from| (from, board.tile(from), castling_passing_square(start, dest)))
    } else {
        None
    };

    let mut record = MoveRecord {
        mv,
        prior_has_moved: mover.has_moved,
        captured: board.tile(captured_square),
        captured_square,
        prior_en_passant: board.en_passant(),
        prior_pending_promotion: board.pending_promotion(),
        promotion: None,
        castling_rook,
    };

    board.put_tile(captured_square, Tile::EMPTY);
    board.force_move(start, dest);

    if let Some((rook_from, rook, rook_to)) = castling_rook {
        board.put_tile(rook_from, Tile::EMPTY);
        board.put_tile(rook_to, rook.moved());
    }

    let double_step = is_pawn && d_col == 0 && (dest.row - start.row).abs() == 2;
    board.set_en_passant(double_step.then(|| Square::new((start.row + dest.row) / 2, start.col)));

    if is_pawn && board.is_promotion_row(dest) {
        board.set_pending_promotion(Some(dest));
        if let Some(kind) = promotion {
            if resolve_promotion(board, kind).is_ok() {
                record.promotion = Some(kind);
            }
        }
    } else {
        board.set_pending_promotion(None);
    }

    board.switch_turn();
    record
}

/// Undo the move described by `record`. Must be called on the board state
/// `make_move` produced, in LIFO order.
pub fn unmake_move(board: &mut Board, record: &MoveRecord) {
    let Move { start, dest } = record.mv;

    let mut moved = board.tile(dest);
    board.put_tile(dest, Tile::EMPTY);
    moved.has_moved = record.prior_has_moved;
    if record.promotion.is_some() {
        moved.kind = PieceKind::Pawn;
    }

    if let Some((rook_from, rook, rook_to)) = record.castling_rook {
        board.put_tile(rook_to, Tile::EMPTY);
        board.put_tile(rook_from, rook);
    }

    board.put_tile(start, moved);
    board.put_tile(record.captured_square, record.captured);
    board.set_en_passant(record.prior_en_passant);
    board.set_pending_promotion(record.prior_pending_promotion);
    board.switch_turn();
}

/// Turn the pending pawn into `kind` and clear the pending record.
pub fn resolve_promotion(board: &mut Board, kind: PieceKind) -> Result<(), PromotionError> {
    let square = board
        .pending_promotion()
        .ok_or(PromotionError::NoPendingPromotion)?;
    if !kind.is_promotion_choice() {
        return Err(PromotionError::InvalidPieceKind(kind));
    }
    let mut tile = board.tile(square);
    tile.kind = kind;
    board.put_tile(square, tile);
    board.set_pending_promotion(None);
    Ok(())
}

/// Validate and play `start -> dest` for the side to move.
///
/// On error the board is unchanged.
pub fn try_move_piece(board: &mut Board, start: Square, dest: Square) -> Result<(), MoveError> {
    let mover = board.tile(start);
    if !board.in_bounds(start) || mover.is_empty() {
        return Err(MoveError::NoPieceSelected(start));
    }
    if mover.team != board.turn() {
        return Err(MoveError::WrongTurn(start));
    }
    check_move(board, start, dest)?;

    make_move(board, Move::new(start, dest), None);
    trace!(%start, %dest, kind = ?mover.kind, team = %mover.team, "move applied");
    Ok(())
}

/// Boolean form of [`try_move_piece`]: `true` when the move was played.
pub fn move_piece(board: &mut Board, start: Square, dest: Square) -> bool {
    match try_move_piece(board, start, dest) {
        Ok(()) => true,
        Err(reason) => {
            debug!(%start, %dest, %reason, "move rejected");
            false
        }
    }
}
