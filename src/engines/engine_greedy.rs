//! Capture-first opponent.
//!
//! Visits the side to move's pieces in a random order without repetition;
//! the first piece that can capture takes a random one of its captures.
//! When nothing can capture, plays like the random engine.

use rand::prelude::{IndexedRandom, SliceRandom};
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::engines::engine_random::random_move;
use crate::engines::engine_trait::{ChosenMove, Engine, EngineOutput, GoParams};
use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_generation::legal_moves::legal_destinations;

pub struct GreedyEngine {
    rng: StdRng,
}

impl GreedyEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    fn first_capture(&mut self, board: &mut Board) -> Option<ChosenMove> {
        let mut own = board.team_squares(board.turn());
        own.shuffle(&mut self.rng);

        for start in own {
            let captures: Vec<_> = legal_destinations(board, start)
                .into_iter()
                .filter(|dest| !board.tile(*dest).is_empty())
                .collect();
            if let Some(dest) = captures.choose(&mut self.rng) {
                return Some(ChosenMove::promoting_to_queen(board, Move::new(start, *dest)));
            }
        }
        None
    }
}

impl Default for GreedyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for GreedyEngine {
    fn name(&self) -> &str {
        "GridChess Greedy"
    }

    fn choose_move(
        &mut self,
        board: &mut Board,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError> {
        let mut out = EngineOutput::default();
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string greedy_engine requested_depth {depth}"));
        }

        match self.first_capture(board) {
            Some(capture) => {
                out.info_lines.push(format!(
                    "info string greedy_engine capture {} takes {:?}",
                    capture.mv,
                    board.tile(capture.mv.dest).kind
                ));
                out.best_move = Some(capture);
            }
            None => {
                out.info_lines
                    .push("info string greedy_engine no_capture fallback random".to_owned());
                out.best_move = random_move(board, &mut self.rng);
            }
        }
        Ok(out)
    }
}
