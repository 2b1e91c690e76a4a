//! Per-piece movement geometry.
//!
//! Pure shape tests, independent of what stands in between. Pawns are the
//! exception: whether a diagonal step is allowed depends on the destination
//! being occupied (a capture) or being the en-passant target.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square, Tile};

/// Result of the geometry test for one start/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Geometry {
    Illegal,
    /// Plain step, slide, jump or capture.
    Regular,
    /// King moving two columns along its row; needs castling validation.
    Castling,
    /// Pawn diagonal onto the en-passant target.
    EnPassant,
}

impl Geometry {
    #[inline]
    pub const fn is_legal(self) -> bool {
        !matches!(self, Geometry::Illegal)
    }
}

/// Classify the move of the piece on `start` to `dest`.
pub fn piece_geometry(board: &Board, start: Square, dest: Square) -> Geometry {
    if start == dest || !board.in_bounds(dest) {
        return Geometry::Illegal;
    }

    let piece = board.tile(start);
    let d_row = (dest.row - start.row).abs();
    let d_col = (dest.col - start.col).abs();

    let regular = |ok: bool| if ok { Geometry::Regular } else { Geometry::Illegal };

    match piece.kind {
        PieceKind::Empty => Geometry::Illegal,
        PieceKind::Knight => regular((d_row == 1 && d_col == 2) || (d_row == 2 && d_col == 1)),
        PieceKind::Bishop => regular(d_row == d_col),
        PieceKind::Rook => regular(d_row == 0 || d_col == 0),
        PieceKind::Queen => regular(d_row == 0 || d_col == 0 || d_row == d_col),
        PieceKind::King => {
            if d_row <= 1 && d_col <= 1 {
                Geometry::Regular
            } else if d_row == 0 && d_col == 2 {
                Geometry::Castling
            } else {
                Geometry::Illegal
            }
        }
        PieceKind::Pawn => pawn_geometry(board, piece, start, dest),
    }
}

fn pawn_geometry(board: &Board, pawn: Tile, start: Square, dest: Square) -> Geometry {
    let direction = pawn.team.pawn_direction();
    if direction == 0 {
        return Geometry::Illegal;
    }

    let forward = (dest.row - start.row) * direction;
    let d_col = (dest.col - start.col).abs();

    match d_col {
        0 => {
            let reach = if pawn.has_moved { 1 } else { 2 };
            if (1..=reach).contains(&forward) {
                Geometry::Regular
            } else {
                Geometry::Illegal
            }
        }
        1 if forward == 1 => {
            if !board.tile(dest).is_empty() {
                Geometry::Regular
            } else if is_en_passant_target(board, pawn, start, dest) {
                Geometry::EnPassant
            } else {
                Geometry::Illegal
            }
        }
        _ => Geometry::Illegal,
    }
}

fn is_en_passant_target(board: &Board, pawn: Tile, start: Square, dest: Square) -> bool {
    if board.en_passant() != Some(dest) {
        return false;
    }
    let victim = board.tile(en_passant_capture_square(start, dest));
    victim.kind == PieceKind::Pawn && victim.team == pawn.team.opposite()
}

/// The pawn taken en passant sits on the mover's row, in the target column.
#[inline]
pub const fn en_passant_capture_square(start: Square, dest: Square) -> Square {
    Square::new(start.row, dest.col)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::layout_parser::parse_layout;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn knight_jumps_in_l_shapes_only() {
        let board = parse_layout("8/8/8/3N4/8/8/8/8").expect("layout should parse");
        let from = sq(3, 3);
        let targets = board
            .squares()
            .filter(|d| piece_geometry(&board, from, *d).is_legal())
            .count();
        assert_eq!(targets, 8);
        assert_eq!(piece_geometry(&board, from, sq(5, 4)), Geometry::Regular);
        assert_eq!(piece_geometry(&board, from, sq(5, 5)), Geometry::Illegal);
    }

    #[test]
    fn sliders_follow_lines() {
        let board = parse_layout("8/8/8/3Q4/8/8/8/R6B").expect("layout should parse");
        assert!(piece_geometry(&board, sq(3, 3), sq(3, 7)).is_legal());
        assert!(piece_geometry(&board, sq(3, 3), sq(0, 0)).is_legal());
        assert!(!piece_geometry(&board, sq(3, 3), sq(1, 2)).is_legal());
        assert!(piece_geometry(&board, sq(7, 0), sq(0, 0)).is_legal());
        assert!(!piece_geometry(&board, sq(7, 0), sq(6, 1)).is_legal());
        assert!(piece_geometry(&board, sq(7, 7), sq(4, 4)).is_legal());
        assert!(!piece_geometry(&board, sq(7, 7), sq(7, 6)).is_legal());
    }

    #[test]
    fn king_two_column_step_is_castling_geometry() {
        let board = parse_layout("8/8/8/8/8/8/8/4K3").expect("layout should parse");
        assert_eq!(piece_geometry(&board, sq(7, 4), sq(7, 6)), Geometry::Castling);
        assert_eq!(piece_geometry(&board, sq(7, 4), sq(7, 2)), Geometry::Castling);
        assert_eq!(piece_geometry(&board, sq(7, 4), sq(6, 3)), Geometry::Regular);
        assert_eq!(piece_geometry(&board, sq(7, 4), sq(5, 4)), Geometry::Illegal);
    }

    #[test]
    fn pawn_reach_depends_on_moved_flag() {
        let board = parse_layout("8/8/8/8/8/8/P1P*5/8").expect("layout should parse");
        assert!(piece_geometry(&board, sq(6, 0), sq(4, 0)).is_legal());
        assert!(piece_geometry(&board, sq(6, 2), sq(5, 2)).is_legal());
        assert!(!piece_geometry(&board, sq(6, 2), sq(4, 2)).is_legal());
        assert!(!piece_geometry(&board, sq(6, 0), sq(7, 0)).is_legal());
    }

    #[test]
    fn pawn_diagonal_needs_a_target() {
        let board = parse_layout("8/8/8/8/8/1p6/P7/8").expect("layout should parse");
        assert_eq!(piece_geometry(&board, sq(6, 0), sq(5, 1)), Geometry::Regular);
        let board = parse_layout("8/8/8/8/8/8/P7/8").expect("layout should parse");
        assert_eq!(piece_geometry(&board, sq(6, 0), sq(5, 1)), Geometry::Illegal);
    }

    #[test]
    fn pawn_diagonal_onto_en_passant_target() {
        let mut board = parse_layout("8/8/8/3Pp3/8/8/8/8").expect("layout should parse");
        assert_eq!(piece_geometry(&board, sq(3, 3), sq(2, 4)), Geometry::Illegal);
        board.set_en_passant(Some(sq(2, 4)));
        assert_eq!(piece_geometry(&board, sq(3, 3), sq(2, 4)), Geometry::EnPassant);
        assert_eq!(en_passant_capture_square(sq(3, 3), sq(2, 4)), sq(3, 4));
    }

    #[test]
    fn off_board_and_null_moves_are_illegal() {
        let board = parse_layout("8/8/8/8/8/8/8/Q7").expect("layout should parse");
        assert!(!piece_geometry(&board, sq(7, 0), sq(7, 0)).is_legal());
        assert!(!piece_geometry(&board, sq(7, 0), sq(8, 0)).is_legal());
        assert!(!piece_geometry(&board, sq(0, 0), sq(1, 1)).is_legal());
    }
}
