//! Legal-destination enumeration.
//!
//! Brute force over every square of the board: a destination is legal when
//! its geometry passes, the special-move rules (castling, en passant) or the
//! collision test pass, and the mover's own king is not in check once the
//! move is made.

use crate::errors::MoveError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Square;
use crate::game_state::provisional::probe_with;
use crate::move_generation::castling::is_castling_legal;
use crate::move_generation::check_detection::is_king_in_check;
use crate::move_generation::collision::has_collision;
use crate::move_generation::geometry::{en_passant_capture_square, piece_geometry, Geometry};

/// Validate `start -> dest` for the piece on `start`, regardless of turn.
pub fn check_move(board: &mut Board, start: Square, dest: Square) -> Result<(), MoveError> {
    let mover = board.tile(start);
    if mover.is_empty() {
        return Err(MoveError::NoPieceSelected(start));
    }

    match piece_geometry(board, start, dest) {
        Geometry::Illegal => Err(MoveError::IllegalGeometry { start, dest }),
        Geometry::Castling => {
            if is_castling_legal(board, start, dest) {
                Ok(())
            } else {
                Err(MoveError::CastlingNotAllowed { start, dest })
            }
        }
        Geometry::EnPassant => {
            let captured = en_passant_capture_square(start, dest);
            let exposes_king = probe_with(
                board,
                |p| {
                    p.relocate(start, dest).clear(captured);
                },
                |b| is_king_in_check(b, mover.team),
            );
            if exposes_king {
                Err(MoveError::LeavesKingInCheck { start, dest })
            } else {
                Ok(())
            }
        }
        Geometry::Regular => {
            if has_collision(board, start, dest) {
                return Err(MoveError::PathBlocked { start, dest });
            }
            let exposes_king = probe_with(
                board,
                |p| {
                    p.relocate(start, dest);
                },
                |b| is_king_in_check(b, mover.team),
            );
            if exposes_king {
                Err(MoveError::LeavesKingInCheck { start, dest })
            } else {
                Ok(())
            }
        }
    }
}

#[inline]
pub fn is_legal_move(board: &mut Board, start: Square, dest: Square) -> bool {
    check_move(board, start, dest).is_ok()
}

/// Every legal destination of the piece on `square`, in row-major order.
///
/// Empty or off-board squares have no destinations. The board is left
/// exactly as it was found.
pub fn legal_destinations(board: &mut Board, square: Square) -> Vec<Square> {
    if board.tile(square).is_empty() {
        return Vec::new();
    }
    let (rows, columns) = board.dimensions();
    let mut out = Vec::new();
    for row in 0..rows {
        for col in 0..columns {
            let dest = Square::new(row, col);
            if is_legal_move(board, square, dest) {
                out.push(dest);
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{PieceKind, Team, Tile};
    use crate::utils::layout_parser::parse_layout;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn standard_position_has_twenty_moves_for_white() {
        let mut board = Board::standard();
        let total: usize = board
            .team_squares(Team::White)
            .into_iter()
            .map(|from| legal_destinations(&mut board, from).len())
            .sum();
        assert_eq!(total, 20);
        assert_eq!(
            legal_destinations(&mut board, sq(7, 1)),
            vec![sq(5, 0), sq(5, 2)]
        );
    }

    #[test]
    fn queen_captures_rook_but_not_beyond() {
        let mut board = Board::new(8, 8).expect("board should build");
        board.put_tile(sq(0, 3), Tile::new(PieceKind::Queen, Team::White));
        board.put_tile(sq(0, 0), Tile::new(PieceKind::Rook, Team::Black));
        let destinations = legal_destinations(&mut board, sq(0, 3));
        assert!(destinations.contains(&sq(0, 0)));
        assert!(destinations.contains(&sq(0, 1)));
        assert!(destinations.contains(&sq(0, 7)));
        assert!(!destinations.contains(&sq(0, 3)));
        assert_eq!(destinations.len(), 7 + 7 + 3 + 4);
    }

    #[test]
    fn pinned_piece_cannot_leave_the_line() {
        let mut board = parse_layout("4r3/8/8/8/8/8/4B3/4K3").expect("layout should parse");
        assert!(legal_destinations(&mut board, sq(6, 4)).is_empty());
        assert_eq!(
            check_move(&mut board, sq(6, 4), sq(5, 3)),
            Err(MoveError::LeavesKingInCheck {
                start: sq(6, 4),
                dest: sq(5, 3)
            })
        );
    }

    #[test]
    fn king_cannot_step_into_attack() {
        let mut board = parse_layout("3r4/8/8/8/8/8/8/4K3").expect("layout should parse");
        let destinations = legal_destinations(&mut board, sq(7, 4));
        assert!(!destinations.contains(&sq(7, 3)));
        assert!(!destinations.contains(&sq(6, 3)));
        assert!(destinations.contains(&sq(6, 4)));
        assert!(destinations.contains(&sq(7, 5)));
    }

    #[test]
    fn en_passant_destination_is_enumerated() {
        let mut board = parse_layout("4k3/8/8/3P*p*3/8/8/8/4K3 w").expect("layout should parse");
        board.set_en_passant(Some(sq(2, 4)));
        let destinations = legal_destinations(&mut board, sq(3, 3));
        assert_eq!(destinations, vec![sq(2, 3), sq(2, 4)]);
    }

    #[test]
    fn en_passant_that_exposes_the_king_is_rejected() {
        let mut board = parse_layout("8/8/8/K2Pp2r/8/8/8/7k w").expect("layout should parse");
        board.set_en_passant(Some(sq(2, 4)));
        assert_eq!(
            check_move(&mut board, sq(3, 3), sq(2, 4)),
            Err(MoveError::LeavesKingInCheck {
                start: sq(3, 3),
                dest: sq(2, 4)
            })
        );
    }

    #[test]
    fn castling_destinations_are_enumerated() {
        let mut board = parse_layout("4k3/8/8/8/8/8/8/R3K2R").expect("layout should parse");
        let destinations = legal_destinations(&mut board, sq(7, 4));
        assert!(destinations.contains(&sq(7, 6)));
        assert!(destinations.contains(&sq(7, 2)));
    }

    #[test]
    fn enumeration_leaves_board_untouched() {
        let mut board = parse_layout("r3k2r/pp3ppp/8/3Pp3/8/8/PP3PPP/R3K2R w")
            .expect("layout should parse");
        board.set_en_passant(Some(sq(2, 4)));
        let before = board.clone();
        for from in board.team_squares(Team::White) {
            legal_destinations(&mut board, from);
        }
        assert_eq!(board, before);
    }

    #[test]
    fn empty_or_off_board_selection_has_no_moves() {
        let mut board = Board::standard();
        assert!(legal_destinations(&mut board, sq(4, 4)).is_empty());
        assert!(legal_destinations(&mut board, sq(-1, 4)).is_empty());
    }
}
