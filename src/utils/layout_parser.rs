//! Text layouts for boards of any size.
//!
//! Rows are separated by `/`, the first row listed is row 0. Uppercase
//! letters are white pieces, lowercase black (`p r n b q k`), a decimal run
//! counts empty squares (`10` is ten empties), and a `*` after a piece marks
//! it as already moved. An optional second field `w` or `b` sets the side to
//! move; white moves when it is absent.
//!
//! ```text
//! rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w
//! ```

use crate::errors::LayoutError;
use crate::game_state::board::Board;
use crate::game_state::chess_types::{PieceKind, Square, Team, Tile};

pub fn parse_layout(layout: &str) -> Result<Board, LayoutError> {
    let mut fields = layout.split_whitespace();
    let rows_part = fields.next().ok_or(LayoutError::Empty)?;
    let turn = match fields.next() {
        None | Some("w") => Team::White,
        Some("b") => Team::Black,
        Some(other) => return Err(LayoutError::InvalidTurn(other.to_owned())),
    };
    if let Some(extra) = fields.next() {
        return Err(LayoutError::InvalidTurn(extra.to_owned()));
    }

    let rows = rows_part
        .split('/')
        .enumerate()
        .map(|(index, text)| parse_row(index, text))
        .collect::<Result<Vec<_>, _>>()?;

    let expected = rows.first().map_or(0, |row| row.width);
    for (index, row) in rows.iter().enumerate() {
        if row.width != expected {
            return Err(LayoutError::RaggedRow {
                row: index,
                found: row.width,
                expected,
            });
        }
    }

    let mut board = Board::new(rows.len() as i32, expected)?;
    for (row_index, row) in rows.iter().enumerate() {
        for &(col, tile) in &row.pieces {
            board.put_tile(Square::new(row_index as i32, col), tile);
        }
    }
    board.set_turn(turn);
    Ok(board)
}

struct ParsedRow {
    width: i32,
    pieces: Vec<(i32, Tile)>,
}

fn parse_row(index: usize, text: &str) -> Result<ParsedRow, LayoutError> {
    let too_wide = || LayoutError::RowTooWide { row: index };
    let mut row = ParsedRow {
        width: 0,
        pieces: Vec::new(),
    };
    let mut empties: i32 = 0;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if let Some(digit) = ch.to_digit(10) {
            empties = empties
                .checked_mul(10)
                .and_then(|value| value.checked_add(digit as i32))
                .ok_or_else(too_wide)?;
            continue;
        }
        row.width = row
            .width
            .checked_add(empties)
            .ok_or_else(too_wide)?;
        empties = 0;

        let mut tile = tile_from_char(ch).ok_or(LayoutError::UnknownToken(ch))?;
        if chars.next_if_eq(&'*').is_some() {
            tile = tile.moved();
        }
        row.pieces.push((row.width, tile));
        row.width = row.width.checked_add(1).ok_or_else(too_wide)?;
    }
    row.width = row.width.checked_add(empties).ok_or_else(too_wide)?;

    Ok(row)
}

fn tile_from_char(ch: char) -> Option<Tile> {
    let team = if ch.is_ascii_uppercase() {
        Team::White
    } else {
        Team::Black
    };
    let kind = match ch.to_ascii_lowercase() {
        'p' => PieceKind::Pawn,
        'r' => PieceKind::Rook,
        'n' => PieceKind::Knight,
        'b' => PieceKind::Bishop,
        'q' => PieceKind::Queen,
        'k' => PieceKind::King,
        _ => return None,
    };
    Some(Tile::new(kind, team))
}
