//! Standalone self-play runner.
//!
//! Run with:
//! `cargo run --release --bin self_play`
//! `RUST_LOG=grid_chess=debug cargo run --release --bin self_play -- --verbose`

use tracing_subscriber::EnvFilter;

use grid_chess::engines::engine_greedy::GreedyEngine;
use grid_chess::engines::engine_minimax::MinimaxEngine;
use grid_chess::game_state::board::Board;
use grid_chess::search::minimax::SearchConfig;
use grid_chess::utils::match_harness::{play_match, MatchConfig};
use grid_chess::utils::render_board::render_board;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let verbose = std::env::args().any(|a| a == "--verbose" || a == "-v");

    // Swap engines or depths here to experiment.
    let mut white = MinimaxEngine::new(SearchConfig {
        depth: 3,
        ..SearchConfig::default()
    });
    let mut black = GreedyEngine::new();

    let result = play_match(
        &mut white,
        &mut black,
        Board::standard(),
        &MatchConfig {
            max_plies: 120,
            opening_plies: 2,
            seed: 1234,
            verbose,
            ..MatchConfig::default()
        },
    )?;

    println!("{}", render_board(&result.final_board));
    println!(
        "outcome={:?} plies={} white_moves={} black_moves={}",
        result.outcome,
        result.history.len(),
        result.white_move_count,
        result.black_move_count
    );
    Ok(())
}
