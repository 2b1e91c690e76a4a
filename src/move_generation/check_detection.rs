//! King safety.
//!
//! There is no separate attack map: a king is in check when some enemy
//! piece passes both the geometry and the collision test against the
//! king's square.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square, Team};
use crate::move_generation::collision::has_collision;
use crate::move_generation::geometry::{piece_geometry, Geometry};

/// First king of `team` in row-major order.
#[inline]
pub fn king_square(board: &Board, team: Team) -> Option<Square> {
    board.squares().find(|square| {
        let tile = board.tile(*square);
        tile.kind == PieceKind::King && tile.team == team
    })
}

/// True when the king of `team` is attacked. A team without a king is
/// never in check.
pub fn is_king_in_check(board: &Board, team: Team) -> bool {
    if team == Team::Neutral {
        return false;
    }
    let Some(king) = king_square(board, team) else {
        return false;
    };
    is_square_threatened_by(board, king, team.opposite())
}

/// True when a piece of `attacker` could move onto `target`.
///
/// A king's two-column castling shape never counts as a threat.
pub fn is_square_threatened_by(board: &Board, target: Square, attacker: Team) -> bool {
    board.squares().any(|from| {
        board.tile(from).team == attacker
            && matches!(
                piece_geometry(board, from, target),
                Geometry::Regular | Geometry::EnPassant
            )
            && !has_collision(board, from, target)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::layout_parser::parse_layout;

    #[test]
    fn standard_position_has_no_checks() {
        let board = Board::standard();
        assert!(!is_king_in_check(&board, Team::White));
        assert!(!is_king_in_check(&board, Team::Black));
        assert_eq!(king_square(&board, Team::White), Some(Square::new(7, 4)));
    }

    #[test]
    fn rook_on_open_file_gives_check() {
        let board = parse_layout("4r3/8/8/8/8/8/8/4K3").expect("layout should parse");
        assert!(is_king_in_check(&board, Team::White));
        let blocked = parse_layout("4r3/8/8/4P3/8/8/8/4K3").expect("layout should parse");
        assert!(!is_king_in_check(&blocked, Team::White));
    }

    #[test]
    fn pawns_attack_diagonally_only() {
        let diagonal = parse_layout("8/8/8/8/8/8/3p4/4K3").expect("layout should parse");
        assert!(is_king_in_check(&diagonal, Team::White));
        let straight = parse_layout("8/8/8/8/8/8/4p3/4K3").expect("layout should parse");
        assert!(!is_king_in_check(&straight, Team::White));
    }

    #[test]
    fn knight_checks_over_pieces() {
        let board = parse_layout("8/8/8/8/8/5n2/3PPP2/4K3").expect("layout should parse");
        assert!(is_king_in_check(&board, Team::White));
    }

    #[test]
    fn castling_shape_is_not_a_threat() {
        let board = parse_layout("8/8/8/8/8/8/8/2k1K3").expect("layout should parse");
        assert!(!is_square_threatened_by(&board, Square::new(7, 4), Team::Black));
        let adjacent = parse_layout("8/8/8/8/8/8/8/3kK3").expect("layout should parse");
        assert!(is_king_in_check(&adjacent, Team::White));
    }

    #[test]
    fn kingless_team_is_never_in_check() {
        let board = parse_layout("8/8/8/8/8/8/8/q7").expect("layout should parse");
        assert!(!is_king_in_check(&board, Team::White));
        assert!(!is_king_in_check(&board, Team::Neutral));
    }
}
