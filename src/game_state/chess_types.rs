//! Core value types shared by the board, the rule engine and the search.
//!
//! A board square holds a [`Tile`]: piece kind, owning team and the moved
//! flag. Empty squares are represented explicitly with
//! [`PieceKind::Empty`] and [`Team::Neutral`] so every coordinate, including
//! out-of-bounds ones, has a well-defined occupant.

use std::fmt;

pub use crate::game_state::board::Board;
pub use crate::game_state::move_record::MoveRecord;

/// Owner of a tile. Empty tiles belong to `Neutral`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Team {
    #[default]
    Neutral,
    White,
    Black,
}

impl Team {
    /// The other playing side. `Neutral` has no opponent.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Team::White => Team::Black,
            Team::Black => Team::White,
            Team::Neutral => Team::Neutral,
        }
    }

    /// Row delta of a pawn advancing for this team.
    ///
    /// White starts on the high rows and walks toward row 0.
    #[inline]
    pub const fn pawn_direction(self) -> i32 {
        match self {
            Team::White => -1,
            Team::Black => 1,
            Team::Neutral => 0,
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Team::Neutral => write!(f, "neutral"),
            Team::White => write!(f, "white"),
            Team::Black => write!(f, "black"),
        }
    }
}

/// Piece kind, with `Empty` standing in for an unoccupied square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PieceKind {
    #[default]
    Empty,
    Pawn,
    Rook,
    Bishop,
    Knight,
    Queen,
    King,
}

impl PieceKind {
    /// Kinds a pawn may promote to, in the order the search expands them.
    pub const PROMOTION_CHOICES: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
    ];

    #[inline]
    pub const fn is_slider(self) -> bool {
        matches!(self, PieceKind::Rook | PieceKind::Bishop | PieceKind::Queen)
    }

    #[inline]
    pub const fn is_promotion_choice(self) -> bool {
        matches!(
            self,
            PieceKind::Queen | PieceKind::Rook | PieceKind::Bishop | PieceKind::Knight
        )
    }
}

/// Occupant state of one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Tile {
    pub kind: PieceKind,
    pub team: Team,
    /// Set once the piece has left its starting square. Drives pawn double
    /// steps and castling rights; it cannot be recovered from position alone.
    pub has_moved: bool,
}

impl Tile {
    pub const EMPTY: Tile = Tile {
        kind: PieceKind::Empty,
        team: Team::Neutral,
        has_moved: false,
    };

    #[inline]
    pub const fn new(kind: PieceKind, team: Team) -> Self {
        Self {
            kind,
            team,
            has_moved: false,
        }
    }

    #[inline]
    pub const fn moved(mut self) -> Self {
        self.has_moved = true;
        self
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        matches!(self.kind, PieceKind::Empty)
    }
}

/// Board coordinate. Signed so that off-board neighbours can be named.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i32,
    pub col: i32,
}

impl Square {
    #[inline]
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    #[inline]
    pub const fn offset(self, d_row: i32, d_col: i32) -> Self {
        Self {
            row: self.row + d_row,
            col: self.col + d_col,
        }
    }
}

impl From<(i32, i32)> for Square {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.row, self.col)
    }
}

/// A start/destination pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub start: Square,
    pub dest: Square,
}

impl Move {
    #[inline]
    pub const fn new(start: Square, dest: Square) -> Self {
        Self { start, dest }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.start, self.dest)
    }
}
