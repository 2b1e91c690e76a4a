//! Crate root module declarations for the Grid Chess engine.
//!
//! Exposes the rule engine (board model, move generation, make/unmake), the
//! fixed-depth material search, the automated opponents and the utility
//! helpers (layouts, rendering, history, self play) under stable paths for
//! binaries, benches and external tooling.

pub mod errors;

pub mod game_state {
    pub mod board;
    pub mod chess_types;
    pub mod move_record;
    pub mod provisional;
}

pub mod move_generation {
    pub mod castling;
    pub mod check_detection;
    pub mod collision;
    pub mod geometry;
    pub mod legal_moves;
    pub mod move_apply;
}

pub mod search {
    pub mod material;
    pub mod minimax;
    pub mod minimax_copy;
    pub mod search_moves;
}

pub mod engines {
    pub mod engine_greedy;
    pub mod engine_minimax;
    pub mod engine_random;
    pub mod engine_trait;
}

pub mod utils {
    pub mod board_history;
    pub mod layout_parser;
    pub mod match_harness;
    pub mod render_board;
}
