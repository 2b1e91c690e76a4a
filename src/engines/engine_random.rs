//! Random-move opponent.
//!
//! Picks a random piece of the side to move, retrying until one with a legal
//! destination turns up, then a random destination of that piece. Used for
//! diagnostics, self-play smoke tests and low-strength play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::engines::engine_trait::{ChosenMove, Engine, EngineOutput, GoParams};
use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::Move;
use crate::move_generation::legal_moves::legal_destinations;

/// Random piece picks before falling back to a full scan.
pub const MAX_PICK_ATTEMPTS: usize = 1024;

pub struct RandomEngine {
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible engine for tests and seeded matches.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "GridChess Random"
    }

    fn choose_move(
        &mut self,
        board: &mut Board,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError> {
        let mut out = EngineOutput::default();
        if let Some(depth) = params.depth {
            out.info_lines
                .push(format!("info string random_engine requested_depth {depth}"));
        }

        out.best_move = random_move(board, &mut self.rng);
        out.info_lines.push(format!(
            "info string random_engine picked {}",
            out.best_move
                .map_or_else(|| "none".to_owned(), |chosen| chosen.mv.to_string())
        ));
        Ok(out)
    }
}

/// Random legal move for the side to move, or `None` when it has none.
pub(crate) fn random_move<R: Rng>(board: &mut Board, rng: &mut R) -> Option<ChosenMove> {
    let own = board.team_squares(board.turn());
    if own.is_empty() {
        return None;
    }

    for _ in 0..MAX_PICK_ATTEMPTS {
        let start = own[rng.random_range(0..own.len())];
        let destinations = legal_destinations(board, start);
        if let Some(dest) = destinations.choose(rng) {
            return Some(ChosenMove::promoting_to_queen(board, Move::new(start, *dest)));
        }
    }

    // Unlucky draws or a side with very few mobile pieces.
    own.iter().find_map(|start| {
        legal_destinations(board, *start)
            .first()
            .map(|dest| ChosenMove::promoting_to_queen(board, Move::new(*start, *dest)))
    })
}
