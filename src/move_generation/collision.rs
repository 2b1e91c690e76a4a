//! Path collision between a piece and its destination.
//!
//! Expected to run after `piece_geometry` accepted the pair.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square};

/// True when the move from `start` to `dest` is blocked.
///
/// A destination held by a piece of the mover's own team always blocks.
/// Sliders are blocked by any piece strictly between the two squares.
/// Straight pawn moves need every square up to and including the
/// destination to be empty. Knights and kings never collide otherwise.
pub fn has_collision(board: &Board, start: Square, dest: Square) -> bool {
    let piece = board.tile(start);
    let target = board.tile(dest);
    if !target.is_empty() && target.team == piece.team {
        return true;
    }

    match piece.kind {
        kind if kind.is_slider() => !path_is_clear(board, start, dest),
        PieceKind::Pawn if start.col == dest.col => {
            !path_is_clear(board, start, dest) || !target.is_empty()
        }
        _ => false,
    }
}

/// True when every square strictly between `start` and `dest` is empty.
///
/// The squares must share a row, column or diagonal.
pub fn path_is_clear(board: &Board, start: Square, dest: Square) -> bool {
    let step_row = (dest.row - start.row).signum();
    let step_col = (dest.col - start.col).signum();

    let mut current = start.offset(step_row, step_col);
    while current != dest {
        if !board.tile(current).is_empty() {
            return false;
        }
        current = current.offset(step_row, step_col);
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::layout_parser::parse_layout;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn rook_is_blocked_by_pieces_in_between() {
        let board = parse_layout("R2p3n/8/8/8/8/8/8/8").expect("layout should parse");
        assert!(!has_collision(&board, sq(0, 0), sq(0, 3)));
        assert!(has_collision(&board, sq(0, 0), sq(0, 7)));
        assert!(!has_collision(&board, sq(0, 0), sq(7, 0)));
    }

    #[test]
    fn own_piece_on_destination_blocks() {
        let board = parse_layout("8/8/8/8/8/8/8/RN6").expect("layout should parse");
        assert!(has_collision(&board, sq(7, 0), sq(7, 1)));
        assert!(!has_collision(&board, sq(7, 1), sq(5, 0)));
        assert!(has_collision(&board, sq(7, 1), sq(7, 0)));
    }

    #[test]
    fn bishop_and_queen_diagonals() {
        let board = parse_layout("8/8/8/3p4/8/8/8/Q6B").expect("layout should parse");
        assert!(has_collision(&board, sq(7, 7), sq(0, 0)));
        assert!(!has_collision(&board, sq(7, 7), sq(3, 3)));
        assert!(!has_collision(&board, sq(7, 0), sq(2, 5)));
    }

    #[test]
    fn pawns_cannot_push_into_or_through_pieces() {
        let board = parse_layout("8/8/8/8/8/p7/P1P5/8").expect("layout should parse");
        assert!(has_collision(&board, sq(6, 0), sq(5, 0)));
        assert!(has_collision(&board, sq(6, 0), sq(4, 0)));
        assert!(!has_collision(&board, sq(6, 2), sq(4, 2)));
        assert!(!has_collision(&board, sq(6, 2), sq(5, 2)));
    }

    #[test]
    fn knights_jump_over_everything() {
        let board = Board::standard();
        assert!(!has_collision(&board, sq(7, 1), sq(5, 2)));
    }
}
