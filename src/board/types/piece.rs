//! Piece kinds and colors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds, in roster order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    King,
    Queen,
    Rook,
    Bishop,
    Knight,
    Pawn,
}

impl Piece {
    /// Parse a kind letter (either case).
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_uppercase() {
            'K' => Some(Piece::King),
            'Q' => Some(Piece::Queen),
            'R' => Some(Piece::Rook),
            'B' => Some(Piece::Bishop),
            'N' => Some(Piece::Knight),
            'P' => Some(Piece::Pawn),
            _ => None,
        }
    }

    /// Kind letter, uppercase.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::King => 'K',
            Piece::Queen => 'Q',
            Piece::Rook => 'R',
            Piece::Bishop => 'B',
            Piece::Knight => 'N',
            Piece::Pawn => 'P',
        }
    }

    /// Material weight in classical pawn units; the king's weight sits
    /// far above every other piece combined.
    #[inline]
    #[must_use]
    pub const fn value(self) -> i32 {
        match self {
            Piece::King => 200,
            Piece::Queen => 9,
            Piece::Rook => 5,
            Piece::Bishop | Piece::Knight => 3,
            Piece::Pawn => 1,
        }
    }
}

impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// The opposite color.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// First roster slot of this color's 16-slot block (Black 0, White 16).
    #[inline]
    #[must_use]
    pub const fn base_slot(self) -> usize {
        match self {
            Color::White => 16,
            Color::Black => 0,
        }
    }

    /// Back rank index (White 0, Black 7).
    #[inline]
    #[must_use]
    pub const fn home_rank(self) -> u8 {
        match self {
            Color::White => 0,
            Color::Black => 7,
        }
    }

    /// Pawn starting rank (White 1, Black 6).
    #[inline]
    #[must_use]
    pub const fn pawn_rank(self) -> u8 {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }

    /// Rank a pawn promotes on (White 7, Black 0).
    #[inline]
    #[must_use]
    pub const fn promotion_rank(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Pawn marching direction along the rank axis.
    #[inline]
    #[must_use]
    pub const fn forward(self) -> i8 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// Color owning a roster slot (0..15 Black, 16..31 White).
#[inline]
#[must_use]
pub(crate) const fn slot_color(slot: usize) -> Color {
    if slot < 16 {
        Color::Black
    } else {
        Color::White
    }
}
