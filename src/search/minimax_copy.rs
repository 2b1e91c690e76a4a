//! Copy-per-node minimax.
//!
//! Same traversal and folding as the in-place search, but every node works
//! on its own clone of the board, so no undo bookkeeping is needed. Slower;
//! kept as a cross-check for the in-place variant.

use crate::game_state::board::Board;
use crate::game_state::chess_types::Team;
use crate::move_generation::move_apply::make_move;
use crate::search::minimax::{fold_ply, ply_sentinel, select_root, SearchResult, MAX_PLY_SENTINEL};
use crate::search::search_moves::{generate_search_moves, SearchMove};

pub fn search_copy_per_node(board: &Board, team: Team, depth: u8) -> Option<SearchResult> {
    if depth == 0 || team == Team::Neutral {
        return None;
    }

    let mut scratch = board.clone();
    let mut root = Vec::new();
    generate_search_moves(&mut scratch, false, &mut root);

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

fn candidate_value(
    board: &Board,
    team: Team,
    candidate: &SearchMove,
    ply: u8,
    depth: u8,
    nodes: &mut u64,
) -> i32 {
    if ply + 1 >= depth {
        return candidate.value;
    }

    let mut child = board.clone();
    make_move(&mut child, candidate.mv, candidate.promotion);

    let mut replies = Vec::new();
    let negate = child.turn() != team;
    *nodes += generate_search_moves(&mut child, negate, &mut replies) as u64;

    let below = replies.iter().fold(ply_sentinel(ply + 1), |bound, reply| {
        let value = candidate_value(&child, team, reply, ply + 1, depth, nodes);
        fold_ply(ply + 1, bound, value)
    });

    candidate.value + below
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::chess_types::{Move, Square};
    use crate::utils::layout_parser::parse_layout;

    #[test]
    fn leaves_the_callers_board_alone() {
        let board = Board::standard();
        let before = board.clone();
        let result = search_copy_per_node(&board, Team::White, 2)
            .expect("search should find a move");
        assert_eq!(result.root_values.len(), 20);
        assert_eq!(board, before);
    }

    #[test]
    fn takes_the_hanging_queen() {
        let board = parse_layout("4k3/8/8/3q4/8/8/8/3RK3 w").expect("layout should parse");
        let result = search_copy_per_node(&board, Team::White, 2)
            .expect("search should find a move");
        assert_eq!(
            result.best.mv,
            Move::new(Square::new(7, 3), Square::new(3, 3))
        );
        assert_eq!(result.value, 9);
    }
}
