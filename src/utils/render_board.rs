//! Plain-text board renderer for terminals and test failure output.
//!
//! Pieces print as their layout letters (uppercase white, lowercase black),
//! empty squares as `·`. Column indices run along the top and bottom, row
//! indices down both sides, so any square can be read off as `[row, col]`.

use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Team, Tile};

pub fn render_board(board: &Board) -> String {
    let (rows, columns) = board.dimensions();
    let cell = digits(columns - 1);
    let label = digits(rows - 1);

    let mut header = " ".repeat(label);
    for col in 0..columns {
        header.push_str(&format!(" {col:>cell$}"));
    }

    let mut out = String::new();
    out.push_str(&header);
    out.push('\n');

    for row in 0..rows {
        out.push_str(&format!("{row:>label$}"));
        for col in 0..columns {
            let glyph = tile_glyph(board.look_up(row, col));
            out.push_str(&format!(" {glyph:>cell$}"));
        }
        out.push_str(&format!(" {row}\n"));
    }

    out.push_str(&header);
    out
}

/// Layout letter of a piece, `·` for an empty square.
pub fn tile_glyph(tile: Tile) -> char {
    let letter = match tile.kind {
        PieceKind::Empty => return '·',
        PieceKind::Pawn => 'p',
        PieceKind::Rook => 'r',
        PieceKind::Knight => 'n',
        PieceKind::Bishop => 'b',
        PieceKind::Queen => 'q',
        PieceKind::King => 'k',
    };
    if tile.team == Team::White {
        letter.to_ascii_uppercase()
    } else {
        letter
    }
}

fn digits(mut value: i32) -> usize {
    let mut count = 1;
    while value >= 10 {
        value /= 10;
        count += 1;
    }
    count
}
