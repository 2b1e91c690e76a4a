//! Scoped provisional board edits.
//!
//! Self-check filtering and castling validation both ask "what if this tile
//! were here?" and then run check detection. [`Provisional`] owns the
//! mutable borrow for the duration of such a probe and writes every saved
//! tile back when it is dropped, so no exit path can leave the board edited.

use std::ops::Deref;

use smallvec::SmallVec;

use crate::game_state::board::Board;
use crate::game_state::chess_types::{Square, Tile};

pub struct Provisional<'a> {
    board: &'a mut Board,
    saved: SmallVec<[(Square, Tile); 4]>,
}

impl<'a> Provisional<'a> {
    pub fn new(board: &'a mut Board) -> Self {
        Self {
            board,
            saved: SmallVec::new(),
        }
    }

    /// Write `tile` at `square`, remembering what was there.
    pub fn place(&mut self, square: Square, tile: Tile) -> &mut Self {
        self.saved.push((square, self.board.tile(square)));
        self.board.put_tile(square, tile);
        self
    }

    pub fn clear(&mut self, square: Square) -> &mut Self {
        self.place(square, Tile::EMPTY)
    }

    /// Move the tile at `start` to `dest` for the probe.
    pub fn relocate(&mut self, start: Square, dest: Square) -> &mut Self {
        let tile = self.board.tile(start);
        self.clear(start).place(dest, tile)
    }
}

impl Deref for Provisional<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl Drop for Provisional<'_> {
    fn drop(&mut self) {
        while let Some((square, tile)) = self.saved.pop() {
            self.board.put_tile(square, tile);
        }
    }
}

/// Apply `edit`, evaluate `probe` on the edited board, then restore.
pub fn probe_with<R>(
    board: &mut Board,
    edit: impl FnOnce(&mut Provisional<'_>),
    probe: impl FnOnce(&Board) -> R,
) -> R {
    let mut provisional = Provisional::new(board);
    edit(&mut provisional);
    probe(&provisional)
}
