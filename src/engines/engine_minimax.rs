//! Fixed-depth minimax opponent.

use crate::engines::engine_trait::{ChosenMove, Engine, EngineOutput, GoParams};
use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::search::minimax::{search, SearchConfig};

#[derive(Debug, Clone, Default)]
pub struct MinimaxEngine {
    config: SearchConfig,
}

impl MinimaxEngine {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> SearchConfig {
        self.config
    }
}

impl Engine for MinimaxEngine {
    fn name(&self) -> &str {
        "GridChess Minimax"
    }

    fn choose_move(
        &mut self,
        board: &mut Board,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError> {
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth),
            ..self.config
        };
        let team = board.turn();

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info string minimax_engine depth {} strategy {:?}",
            config.depth, config.strategy
        ));

        if let Some(result) = search(board, team, config) {
            out.info_lines.push(format!(
                "info depth {} score material {} nodes {} pv {}",
                config.depth, result.value, result.nodes, result.best.mv
            ));
            out.best_move = Some(ChosenMove {
                mv: result.best.mv,
                promotion: result.best.promotion,
            });
        }
        Ok(out)
    }
}
