//! Head-to-head engine match harness for local testing.
//!
//! Runs two [`Engine`]s against each other on any starting board, with an
//! optional seeded random opening prefix. Every move goes through the
//! validated apply path and is recorded in the board history, so a finished
//! match can be replayed turn by turn.

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info};

use crate::engines::engine_random::random_move;
use crate::engines::engine_trait::{ChosenMove, Engine, GoParams};
use crate::errors::EngineError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Team};
use crate::move_generation::check_detection::is_king_in_check;
use crate::move_generation::legal_moves::legal_destinations;
use crate::utils::board_history::{BoardHistory, RecordingBoard};
use crate::utils::render_board::render_board;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchOutcome {
    WhiteWinCheckmate,
    BlackWinCheckmate,
    DrawStalemate,
    DrawMaxPlies,
}

#[derive(Debug, Clone)]
pub struct MatchConfig {
    pub max_plies: u16,
    /// Random plies played before the engines take over.
    pub opening_plies: u8,
    /// Seed of the opening prefix.
    pub seed: u64,
    pub verbose: bool,
    pub go_params: GoParams,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            max_plies: 200,
            opening_plies: 0,
            seed: 0,
            verbose: false,
            go_params: GoParams::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub outcome: MatchOutcome,
    pub final_board: Board,
    pub history: BoardHistory,
    pub opening_moves: Vec<ChosenMove>,
    pub played_moves: Vec<ChosenMove>,
    pub white_move_count: u32,
    pub black_move_count: u32,
}

/// Play `white` against `black` starting from `board`.
pub fn play_match(
    white: &mut dyn Engine,
    black: &mut dyn Engine,
    board: Board,
    config: &MatchConfig,
) -> Result<MatchResult, EngineError> {
    white.new_game();
    black.new_game();

    let mut recording = RecordingBoard::new(board);
    let mut opening_moves = Vec::new();
    let mut rng = StdRng::seed_from_u64(config.seed);
    for _ in 0..config.opening_plies {
        let mut probe = recording.snapshot();
        let Some(chosen) = random_move(&mut probe, &mut rng) else {
            break;
        };
        play_chosen(&mut recording, chosen)?;
        opening_moves.push(chosen);
    }

    let mut played_moves = Vec::new();
    let mut white_move_count = 0u32;
    let mut black_move_count = 0u32;

    for ply in 0..config.max_plies {
        let mut probe = recording.snapshot();
        let mover = probe.turn();
        if !has_legal_move(&mut probe) {
            let outcome = if is_king_in_check(&probe, mover) {
                match mover {
                    Team::Black => MatchOutcome::WhiteWinCheckmate,
                    _ => MatchOutcome::BlackWinCheckmate,
                }
            } else {
                MatchOutcome::DrawStalemate
            };
            info!(?outcome, ply, "match finished");
            let (final_board, history) = recording.into_parts();
            return Ok(MatchResult {
                outcome,
                final_board,
                history,
                opening_moves,
                played_moves,
                white_move_count,
                black_move_count,
            });
        }

        let engine: &mut dyn Engine = if mover == Team::Black {
            black_move_count = black_move_count.saturating_add(1);
            &mut *black
        } else {
            white_move_count = white_move_count.saturating_add(1);
            &mut *white
        };
        let out = engine.choose_move(&mut probe, &config.go_params)?;
        for line in &out.info_lines {
            debug!(engine = engine.name(), "{line}");
        }
        let chosen = out.best_move.ok_or(EngineError::NoMoveChosen(mover))?;

        play_chosen(&mut recording, chosen)?;
        played_moves.push(chosen);

        if config.verbose {
            println!(
                "[match] ply {} {} {} {}\n{}\n",
                ply + 1,
                mover,
                engine.name(),
                chosen.mv,
                render_board(recording.board())
            );
        }
    }

    info!(plies = config.max_plies, "match reached the ply limit");
    let (final_board, history) = recording.into_parts();
    Ok(MatchResult {
        outcome: MatchOutcome::DrawMaxPlies,
        final_board,
        history,
        opening_moves,
        played_moves,
        white_move_count,
        black_move_count,
    })
}

fn play_chosen(recording: &mut RecordingBoard, chosen: ChosenMove) -> Result<(), EngineError> {
    recording.try_move_piece(chosen.mv.start, chosen.mv.dest)?;
    if recording.board().pending_promotion().is_some() {
        recording.resolve_promotion(chosen.promotion.unwrap_or(PieceKind::Queen))?;
    }
    Ok(())
}

fn has_legal_move(board: &mut Board) -> bool {
    board
        .team_squares(board.turn())
        .into_iter()
        .any(|square| !legal_destinations(board, square).is_empty())
}
