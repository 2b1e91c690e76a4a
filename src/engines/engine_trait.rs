//! Engine abstraction shared by the automated opponents.
//!
//! Every engine reads the side to move from the board it is handed and
//! answers with at most one move plus free-form info lines. Engines may probe
//! the board while choosing but must hand it back unchanged.

use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{Move, PieceKind};

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured search depth when set.
    pub depth: Option<u8>,
}

/// A move together with the promotion it resolves, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChosenMove {
    pub mv: Move,
    pub promotion: Option<PieceKind>,
}

impl ChosenMove {
    /// `mv` with a queen promotion attached when a pawn lands on the first
    /// or last row.
    pub fn promoting_to_queen(board: &Board, mv: Move) -> Self {
        let promotes =
            board.tile(mv.start).kind == PieceKind::Pawn && board.is_promotion_row(mv.dest);
        Self {
            mv,
            promotion: promotes.then_some(PieceKind::Queen),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<ChosenMove>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    fn choose_move(
        &mut self,
        board: &mut Board,
        params: &GoParams,
    ) -> Result<EngineOutput, EngineError>;
}
