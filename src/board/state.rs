//! The board: piece roster, slot grid, castling flags, undo stack.

use std::fmt;

use super::types::{slot_color, CastleFlags, Color, Piece, SquareByte, EMPTY};

/// Everything needed to exactly invert one applied move.
#[derive(Clone, Debug)]
pub(crate) struct UndoRecord {
    /// Roster slot that moved
    pub(crate) slot: usize,
    /// Its square byte before the move
    pub(crate) from_byte: SquareByte,
    /// Captured slot and its byte while still alive, if any
    pub(crate) captured: Option<(usize, SquareByte)>,
    /// Castling flags before the move
    pub(crate) prior_flags: CastleFlags,
    /// En-passant target before the move
    pub(crate) prior_en_passant: Option<(u8, u8)>,
    /// The mover's kind before a promotion overwrote it
    pub(crate) promoted_from: Option<Piece>,
}

/// Terminal result discovered by the search and surfaced to the referee.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum GameStatus {
    ComputerWins,
    HumanWins,
    Stalemate,
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::ComputerWins => write!(f, "Computer wins!"),
            GameStatus::HumanWins => write!(f, "Human wins!"),
            GameStatus::Stalemate => write!(f, "Stalemate"),
        }
    }
}

/// Supplies the piece kind when a pawn reaches the last rank. The board
/// asks the mover at apply time, so one generated pawn move covers every
/// promotion; implementors answer Queen or Knight.
pub trait PromotionSource {
    fn choose_promotion(&mut self) -> Piece;
}

/// Board state: a fixed 32-slot piece roster, an 8x8 grid of slot
/// indices, castling flags, the en-passant target, and the undo stack.
///
/// Slots 0..16 are Black, 16..32 White; within a side the layout is
/// king, queen, two rooks, two bishops, two knights, eight pawns. A slot
/// never changes hands: captures clear the alive bit, promotions rewrite
/// the slot's entry in the kind array.
#[derive(Clone, Debug)]
pub struct Board {
    pub(crate) pieces: [SquareByte; 32],
    pub(crate) kinds: [Piece; 32],
    /// grid[file][rank] = roster slot or `EMPTY`
    pub(crate) grid: [[i8; 8]; 8],
    pub(crate) castle_flags: CastleFlags,
    pub(crate) en_passant: Option<(u8, u8)>,
    pub(crate) undo_stack: Vec<UndoRecord>,
    pub(crate) side_to_move: Color,
    pub(crate) game_over: Option<GameStatus>,
}

/// Kinds assigned to one side's slots at game start, before any
/// overflow or promotion rewrites.
pub(crate) const SLOT_KINDS: [Piece; 16] = [
    Piece::King,
    Piece::Queen,
    Piece::Rook,
    Piece::Rook,
    Piece::Bishop,
    Piece::Bishop,
    Piece::Knight,
    Piece::Knight,
    Piece::Pawn,
    Piece::Pawn,
    Piece::Pawn,
    Piece::Pawn,
    Piece::Pawn,
    Piece::Pawn,
    Piece::Pawn,
    Piece::Pawn,
];

impl Board {
    /// A board with every slot dead and an empty grid.
    pub(crate) fn bare(side_to_move: Color) -> Self {
        let mut pieces = [SquareByte::from_raw(0); 32];
        let mut kinds = [Piece::Pawn; 32];
        for slot in 0..32 {
            pieces[slot] = SquareByte::new(slot_color(slot), 0, 0).captured();
            kinds[slot] = SLOT_KINDS[slot % 16];
        }
        Board {
            pieces,
            kinds,
            grid: [[EMPTY; 8]; 8],
            castle_flags: CastleFlags::none_moved(),
            en_passant: None,
            undo_stack: Vec::new(),
            side_to_move,
            game_over: None,
        }
    }

    /// Square byte of a roster slot (dead bytes keep their last coords).
    #[inline]
    #[must_use]
    pub fn piece_byte(&self, slot: usize) -> SquareByte {
        self.pieces[slot]
    }

    /// Current kind of a roster slot.
    #[inline]
    #[must_use]
    pub fn kind(&self, slot: usize) -> Piece {
        self.kinds[slot]
    }

    #[inline]
    #[must_use]
    pub fn is_live(&self, slot: usize) -> bool {
        self.pieces[slot].is_alive()
    }

    /// Grid cell contents.
    #[inline]
    pub(crate) fn cell(&self, file: u8, rank: u8) -> i8 {
        self.grid[file as usize][rank as usize]
    }

    /// Roster slot occupying (`file`, `rank`), if any.
    #[must_use]
    pub fn slot_at(&self, file: u8, rank: u8) -> Option<usize> {
        let cell = self.cell(file, rank);
        (cell != EMPTY).then_some(cell as usize)
    }

    /// Square byte of the live piece on (`file`, `rank`), if any.
    #[must_use]
    pub fn square_at(&self, file: u8, rank: u8) -> Option<SquareByte> {
        self.slot_at(file, rank).map(|slot| self.pieces[slot])
    }

    /// The slot referenced by `byte`, provided the grid and roster agree
    /// with it exactly. Stale bytes (captured or relocated pieces) fail.
    pub(crate) fn live_slot_for(&self, byte: SquareByte) -> Option<usize> {
        let slot = self.slot_at(byte.file(), byte.rank())?;
        (self.pieces[slot] == byte).then_some(slot)
    }

    #[inline]
    #[must_use]
    pub fn castle_flags(&self) -> CastleFlags {
        self.castle_flags
    }

    /// En-passant target left by the previous half-move, as (file, rank).
    #[inline]
    #[must_use]
    pub fn en_passant(&self) -> Option<(u8, u8)> {
        self.en_passant
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Number of applied moves awaiting undo.
    #[inline]
    #[must_use]
    pub fn undo_depth(&self) -> usize {
        self.undo_stack.len()
    }

    /// Terminal status, once the search has discovered one.
    #[inline]
    #[must_use]
    pub fn game_over(&self) -> Option<GameStatus> {
        self.game_over
    }

    pub(crate) fn set_game_over(&mut self, status: GameStatus) {
        self.game_over = Some(status);
    }

    /// Count of live pieces belonging to `color`.
    #[must_use]
    pub fn live_count(&self, color: Color) -> usize {
        let base = color.base_slot();
        (base..base + 16).filter(|&s| self.is_live(s)).count()
    }
}

impl fmt::Display for Board {
    /// Ranks top-down, uppercase black and lowercase white, dots for
    /// empty squares.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0..8u8).rev() {
            for file in 0..8u8 {
                let c = match self.slot_at(file, rank) {
                    Some(slot) => {
                        let c = self.kinds[slot].to_char();
                        if slot_color(slot) == Color::White {
                            c.to_ascii_lowercase()
                        } else {
                            c
                        }
                    }
                    None => '.',
                };
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
