//! Fixed-depth minimax over one shared board.
//!
//! Every descent applies the candidate in place with `make_move` and strictly
//! undoes it with `unmake_move` on the way back, so the caller's board is
//! bit-identical before and after a completed search.
//!
//! Value of a candidate at ply `k`: its own signed delta plus the folded value
//! of ply `k + 1` below it. Even plies fold with `max`, odd plies with `min`,
//! each starting from a large sentinel. Candidates on the deepest ply
//! contribute their delta only.

use tracing::debug;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Team};
use crate::move_generation::move_apply::{make_move, unmake_move};
use crate::search::search_moves::{generate_search_moves, SearchMove};

/// Starting bound of a maximizing ply.
pub const MAX_PLY_SENTINEL: i32 = i32::MIN / 2;
/// Starting bound of a minimizing ply.
pub const MIN_PLY_SENTINEL: i32 = i32::MAX / 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchStrategy {
    /// Apply/undo on the caller's board.
    #[default]
    InPlace,
    /// Clone the board at every node. Reference implementation.
    CopyPerNode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub depth: u8,
    pub strategy: SearchStrategy,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: 3,
            strategy: SearchStrategy::InPlace,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub best: SearchMove,
    pub value: i32,
    /// Propagated value of every root candidate, in generation order.
    pub root_values: Vec<i32>,
    pub nodes: u64,
}

/// Search from `team`'s point of view with the configured strategy.
pub fn search(board: &mut Board, team: Team, config: SearchConfig) -> Option<SearchResult> {
    match config.strategy {
        SearchStrategy::InPlace => search_in_place(board, team, config.depth),
        SearchStrategy::CopyPerNode => {
            crate::search::minimax_copy::search_copy_per_node(board, team, config.depth)
        }
    }
}

/// In-place minimax to `depth` plies.
///
/// Root candidates are the side to move's moves. Returns `None` for a zero
/// depth, a neutral team, or when there is nothing to play.
pub fn search_in_place(board: &mut Board, team: Team, depth: u8) -> Option<SearchResult> {
    if depth == 0 || team == Team::Neutral {
        return None;
    }

    let mut root = Vec::new();
    generate_search_moves(board, false, &mut root);

    let mut nodes = root.len() as u64;
    let root_values: Vec<i32> = root
        .iter()
        .map(|candidate| {
            if depth > 1 {
                let value = candidate_value(board, team, candidate, 0, depth, &mut nodes);
                fold_ply(0, MAX_PLY_SENTINEL, value)
            } else {
                candidate.value
            }
        })
        .collect();

    select_root(board, &root, root_values, nodes)
}

/// Value of `candidate` played at `ply`, with the board restored afterwards.
fn candidate_value(
    board: &mut Board,
    team: Team,
    candidate: &SearchMove,
    ply: u8,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    if ply + 1 >= depth {
        return candidate.value;
    }

    let record = make_move(board, candidate.mv, candidate.promotion);
    let below = ply_value(board, team, ply + 1, depth, nodes);
    unmake_move(board, &record);

    candidate.value + below
}

/// Folded value of every reply available at `ply`.
fn ply_value(board: &mut Board, team: Team, ply: u8, depth: u8, nodes: &mut u64) -> i32 {
    let mut replies = Vec::new();
    let negate = board.turn() != team;
    *nodes += generate_search_moves(board, negate, &mut replies) as u64;

    replies.iter().fold(ply_sentinel(ply), |bound, reply| {
        let value = candidate_value(board, team, reply, ply, depth, nodes);
        fold_ply(ply, bound, value)
    })
}

#[inline]
pub(crate) const fn ply_sentinel(ply: u8) -> i32 {
    if ply % 2 == 0 {
        MAX_PLY_SENTINEL
    } else {
        MIN_PLY_SENTINEL
    }
}

#[inline]
pub(crate) fn fold_ply(ply: u8, bound: i32, value: i32) -> i32 {
    if ply % 2 == 0 {
        bound.max(value)
    } else {
        bound.min(value)
    }
}

/// Pick the root candidate.
///
/// Scans in generation order; each candidate matching the best value replaces
/// the current choice, and the scan stops at the first matching candidate
/// whose moving piece is a pawn.
pub(crate) fn select_root(
    board: &Board,
    root: &[SearchMove],
    root_values: Vec<i32>,
    nodes: u64,
) -> Option<SearchResult> {
    let best_value = root_values.iter().copied().max()?;
    debug!(values = ?root_values, "root candidate values");

    let mut chosen = None;
    for (candidate, value) in root.iter().zip(&root_values) {
        if *value != best_value {
            continue;
        }
        chosen = Some(*candidate);
        if board.tile(candidate.mv.start).kind == PieceKind::Pawn {
            break;
        }
    }

    let best = chosen?;
    debug!(
        mv = %best.mv,
        promotion = ?best.promotion,
        value = best_value,
        nodes,
        "search selected move"
    );
    Some(SearchResult {
        best,
        value: best_value,
        root_values,
        nodes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Move, Square};
    use crate::search::minimax_copy::search_copy_per_node;
    use crate::utils::layout_parser::parse_layout;

    fn sq(row: i32, col: i32) -> Square {
        Square::new(row, col)
    }

    #[test]
    fn zero_depth_or_neutral_team_yields_nothing() {
        let mut board = Board::standard();
        assert!(search_in_place(&mut board, Team::White, 0).is_none());
        assert!(search_in_place(&mut board, Team::Neutral, 2).is_none());
    }

    #[test]
    fn depth_one_takes_the_biggest_capture() {
        let mut board = parse_layout("k7/8/8/1r1q4/8/8/8/1R1R2K1 w").expect("layout should parse");
        let result = search_in_place(&mut board, Team::White, 1)
            .expect("search should find a move");
        assert_eq!(result.best.mv, Move::new(sq(7, 3), sq(3, 3)));
        assert_eq!(result.value, 9);
    }

    #[test]
    fn depth_two_sees_the_recapture() {
        // Taking the rook walks into the queen's recapture.
        let mut board = parse_layout("k7/8/8/8/1q6/8/1r6/1R5K w").expect("layout should parse");
        let shallow = search_in_place(&mut board, Team::White, 1)
            .expect("search should find a move");
        assert_eq!(shallow.best.mv, Move::new(sq(7, 1), sq(6, 1)));
        let deep = search_in_place(&mut board, Team::White, 2).expect("search should find a move");
        assert_eq!(deep.value, 0);
    }

    #[test]
    fn ties_prefer_the_last_candidate() {
        let mut board = parse_layout("k7/8/8/8/8/8/8/7K w").expect("layout should parse");
        let result = search_in_place(&mut board, Team::White, 1)
            .expect("search should find a move");
        assert_eq!(result.root_values, vec![0, 0, 0]);
        assert_eq!(result.best.mv, Move::new(sq(7, 7), sq(7, 6)));
    }

    #[test]
    fn ties_stop_at_the_first_pawn_candidate() {
        let mut board = parse_layout("k7/8/8/8/8/8/P7/7K w").expect("layout should parse");
        let result = search_in_place(&mut board, Team::White, 1)
            .expect("search should find a move");
        assert!(result.root_values.iter().all(|v| *v == 0));
        assert_eq!(result.best.mv, Move::new(sq(6, 0), sq(4, 0)));
    }

    #[test]
    fn search_restores_the_board() {
        let mut board = parse_layout("r3k2r/pP3ppp/2n5/3Pp3/8/5N2/PP3PpP/R3K2R w")
            .expect("layout should parse");
        board.set_en_passant(Some(sq(2, 4)));
        let before = board.clone();
        let result = search_in_place(&mut board, Team::White, 3);
        assert!(result.is_some());
        assert_eq!(board, before);
    }

    #[test]
    fn in_place_matches_copy_per_node() {
        let layouts = [
            "r3k2r/pP3ppp/2n5/3Pp3/8/5N2/PP3PpP/R3K2R w",
            "4k3/8/8/3q4/8/2N5/8/3QK3 w",
            "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR b",
        ];
        for layout in layouts {
            for depth in 1..=3 {
                let mut board = parse_layout(layout).expect("layout should parse");
                let team = board.turn();
                let copy = search_copy_per_node(&board, team, depth);
                let in_place = search_in_place(&mut board, team, depth);
                assert_eq!(
                    copy.as_ref().map(|r| (r.best, r.value, &r.root_values)),
                    in_place.as_ref().map(|r| (r.best, r.value, &r.root_values)),
                    "{layout} at depth {depth}"
                );
            }
        }
    }

    #[test]
    fn sentinel_propagates_when_the_opponent_has_no_reply() {
        // Some white moves leave black without a reply.
        let mut board = parse_layout("k7/2Q5/1K6/8/8/8/8/8 w").expect("layout should parse");
        let result = search_in_place(&mut board, Team::White, 2)
            .expect("search should find a move");
        assert!(result.root_values.iter().any(|v| *v >= MIN_PLY_SENTINEL));
    }
}
