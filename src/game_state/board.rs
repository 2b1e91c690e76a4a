//! Tile storage and raw mutation layer.
//!
//! `Board` owns a row-major grid of [`Tile`]s together with the turn
//! indicator, the en-passant record and the pending-promotion record. It
//! performs no legality checking of its own; the rule engine in
//! `move_generation` decides what may be applied, and the search relies on
//! [`Board::force_move`] once legality is already established.

use crate::errors::BoardError;
use crate::game_state::chess_types::{PieceKind, Square, Team, Tile};

pub const STANDARD_ROWS: i32 = 8;
pub const STANDARD_COLUMNS: i32 = 8;

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Rows x columns grid of tiles plus side-to-move and special-move records.
///
/// `Clone` produces an independent deep copy with fresh tile storage.
///
/// Positions placed by callers are not validated: the rule engine assumes at
/// most one king per team and locates it by a row-major scan.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    rows: i32,
    columns: i32,
    tiles: Vec<Tile>,
    turn: Team,
    en_passant: Option<Square>,
    pending_promotion: Option<Square>,
}

impl Board {
    /// Empty board of the given dimensions, white to move.
    ///
    /// The tile count is capped at `i32::MAX` so square indices never
    /// overflow; allocation failure is reported instead of aborting.
    pub fn new(rows: i32, columns: i32) -> Result<Self, BoardError> {
        if rows <= 0 || columns <= 0 {
            return Err(BoardError::InvalidDimensions { rows, columns });
        }
        let count = (rows as usize)
            .checked_mul(columns as usize)
            .filter(|count| *count <= i32::MAX as usize)
            .ok_or(BoardError::TooLarge { rows, columns })?;

        let mut tiles = Vec::new();
        tiles
            .try_reserve_exact(count)
            .map_err(|_| BoardError::AllocationFailed { tiles: count })?;
        tiles.resize(count, Tile::EMPTY);

        Ok(Self {
            rows,
            columns,
            tiles,
            turn: Team::White,
            en_passant: None,
            pending_promotion: None,
        })
    }

    /// Classic 8x8 starting position. Black occupies rows 0 and 1.
    pub fn standard() -> Self {
        let mut tiles = vec![Tile::EMPTY; (STANDARD_ROWS * STANDARD_COLUMNS) as usize];
        for (col, kind) in BACK_RANK.iter().enumerate() {
            tiles[col] = Tile::new(*kind, Team::Black);
            tiles[8 + col] = Tile::new(PieceKind::Pawn, Team::Black);
            tiles[48 + col] = Tile::new(PieceKind::Pawn, Team::White);
            tiles[56 + col] = Tile::new(*kind, Team::White);
        }
        Self {
            rows: STANDARD_ROWS,
            columns: STANDARD_COLUMNS,
            tiles,
            turn: Team::White,
            en_passant: None,
            pending_promotion: None,
        }
    }

    /// `(rows, columns)`.
    #[inline]
    pub fn dimensions(&self) -> (i32, i32) {
        (self.rows, self.columns)
    }

    #[inline]
    pub fn rows(&self) -> i32 {
        self.rows
    }

    #[inline]
    pub fn columns(&self) -> i32 {
        self.columns
    }

    #[inline]
    pub fn in_bounds(&self, square: Square) -> bool {
        (0..self.rows).contains(&square.row) && (0..self.columns).contains(&square.col)
    }

    #[inline]
    fn index(&self, square: Square) -> Option<usize> {
        self.in_bounds(square)
            .then(|| (square.row * self.columns + square.col) as usize)
    }

    /// Tile at `square`; off-board squares read as [`Tile::EMPTY`].
    #[inline]
    pub fn tile(&self, square: Square) -> Tile {
        self.index(square)
            .map_or(Tile::EMPTY, |index| self.tiles[index])
    }

    /// Shorthand for `tile(Square::new(row, col))`.
    #[inline]
    pub fn look_up(&self, row: i32, col: i32) -> Tile {
        self.tile(Square::new(row, col))
    }

    /// Overwrite `square`. Off-board writes are ignored.
    #[inline]
    pub fn put_tile(&mut self, square: Square, tile: Tile) {
        if let Some(index) = self.index(square) {
            self.tiles[index] = tile;
        }
    }

    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    pub fn fill_with_pawns(&mut self) {
        self.fill(Tile::new(PieceKind::Pawn, Team::White));
    }

    pub fn clear(&mut self) {
        self.fill(Tile::EMPTY);
    }

    /// Every square in row-major order.
    pub fn squares(&self) -> impl Iterator<Item = Square> {
        let columns = self.columns;
        (0..self.rows).flat_map(move |row| (0..columns).map(move |col| Square::new(row, col)))
    }

    /// Squares holding a piece of `team`, in row-major order.
    pub fn team_squares(&self, team: Team) -> Vec<Square> {
        self.squares()
            .filter(|square| self.tile(*square).team == team)
            .collect()
    }

    #[inline]
    pub fn turn(&self) -> Team {
        self.turn
    }

    #[inline]
    pub fn set_turn(&mut self, team: Team) {
        self.turn = team;
    }

    #[inline]
    pub fn switch_turn(&mut self) {
        self.turn = match self.turn {
            Team::Black => Team::White,
            _ => Team::Black,
        };
    }

    /// Square a pawn skipped with its double step on the previous move.
    #[inline]
    pub fn en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    #[inline]
    pub fn set_en_passant(&mut self, target: Option<Square>) {
        self.en_passant = target;
    }

    /// Square of a pawn that reached the last row and awaits promotion.
    #[inline]
    pub fn pending_promotion(&self) -> Option<Square> {
        self.pending_promotion
    }

    #[inline]
    pub fn set_pending_promotion(&mut self, square: Option<Square>) {
        self.pending_promotion = square;
    }

    /// Relocate the contents of `start` to `dest` without any rule checks.
    ///
    /// The source becomes empty and the destination is marked as moved.
    /// Records, turn and companion pieces (castling rook, en-passant victim)
    /// are left alone; `move_apply::make_move` layers those on top.
    pub fn force_move(&mut self, start: Square, dest: Square) {
        let tile = self.tile(start);
        self.put_tile(start, Tile::EMPTY);
        self.put_tile(dest, tile.moved());
    }

    /// True when `square` is on the first or last row.
    #[inline]
    pub fn is_promotion_row(&self, square: Square) -> bool {
        square.row == 0 || square.row == self.rows - 1
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::standard()
    }
}
