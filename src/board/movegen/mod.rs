//! Move generation and validation, split per piece family.
//!
//! Both halves work directly on packed square bytes: `validate_move`
//! answers whether a single (from, to) pair is geometrically and
//! occupancy-wise legal for the piece standing on `from`, and
//! `piece_moves` enumerates a slot's candidate destinations. Neither
//! filters self-check; the search does that by trial-applying and
//! probing `in_check`.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::types::{slot_color, Color, Piece, SquareByte};
use super::Board;

pub(crate) use sliders::{BISHOP_DIRS, QUEEN_DIRS, ROOK_DIRS};

/// What a destination square holds, from the mover's point of view.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub(crate) enum Occupancy {
    Empty,
    Own,
    Enemy,
}

impl Board {
    pub(crate) fn occupancy(&self, mover: Color, file: u8, rank: u8) -> Occupancy {
        match self.slot_at(file, rank) {
            None => Occupancy::Empty,
            Some(slot) if slot_color(slot) == mover => Occupancy::Own,
            Some(_) => Occupancy::Enemy,
        }
    }

    /// Whether moving the piece encoded by `from` to `to` is legal for
    /// `mover`, ignoring self-check. `from` must match a live piece of
    /// the mover's color exactly; stale bytes fail. Castling legality
    /// (rights, empty lane, no attacked transit) is fully decided here.
    #[must_use]
    pub fn validate_move(&self, mover: Color, from: SquareByte, to: SquareByte) -> bool {
        let Some(slot) = self.live_slot_for(from) else {
            return false;
        };
        if slot_color(slot) != mover || from.coords() == to.coords() {
            return false;
        }
        match self.kinds[slot] {
            Piece::King => self.validate_king(mover, from, to),
            Piece::Queen => self.validate_slide(mover, from, to, true, true),
            Piece::Rook => self.validate_slide(mover, from, to, true, false),
            Piece::Bishop => self.validate_slide(mover, from, to, false, true),
            Piece::Knight => self.validate_knight(mover, from, to),
            Piece::Pawn => self.validate_pawn(mover, from, to),
        }
    }

    /// Candidate destinations for the piece in `slot`. Dead slots yield
    /// nothing. Sliders emit at most 27 squares, knights 8, kings 10
    /// (castles included), pawns 4 (double-step, two captures, en
    /// passant); a promotion is the one move onto the last rank, with
    /// the kind chosen at apply time.
    #[must_use]
    pub fn piece_moves(&self, slot: usize) -> Vec<SquareByte> {
        if !self.is_live(slot) {
            return Vec::new();
        }
        let from = self.pieces[slot];
        let color = slot_color(slot);
        match self.kinds[slot] {
            Piece::King => self.king_moves(color, from),
            Piece::Queen => self.slide_moves(color, from, &QUEEN_DIRS),
            Piece::Rook => self.slide_moves(color, from, &ROOK_DIRS),
            Piece::Bishop => self.slide_moves(color, from, &BISHOP_DIRS),
            Piece::Knight => self.knight_moves(color, from),
            Piece::Pawn => self.pawn_moves(color, from),
        }
    }

    /// Whether any live piece of `by` attacks (`file`, `rank`). Pawns
    /// count by capture geometry alone, so an empty square diagonally in
    /// front of a pawn is attacked; kings count by their plain step, so
    /// castle checks cannot recurse.
    pub(crate) fn square_attacked(&self, file: u8, rank: u8, by: Color) -> bool {
        let base = by.base_slot();
        for slot in base..base + 16 {
            if !self.is_live(slot) {
                continue;
            }
            let from = self.pieces[slot];
            if from.coords() == (file, rank) {
                continue;
            }
            let hit = match self.kinds[slot] {
                Piece::Pawn => {
                    let df = i8::abs(file as i8 - from.file() as i8);
                    let dr = rank as i8 - from.rank() as i8;
                    df == 1 && dr == by.forward()
                }
                Piece::King => kings::king_step(from, file, rank),
                _ => self.validate_move(by, from, from.with_coords(file, rank)),
            };
            if hit {
                return true;
            }
        }
        false
    }

    /// True iff `color`'s king square is attacked by the other side.
    #[must_use]
    pub fn in_check(&self, color: Color) -> bool {
        let king = self.pieces[color.base_slot()];
        if !king.is_alive() {
            return false;
        }
        self.square_attacked(king.file(), king.rank(), color.opponent())
    }

    /// Post-apply probe for the self-check rule: whether the side that
    /// just moved left its own king attacked. Callers undo if so.
    #[must_use]
    pub fn leaves_king_in_check(&self, mover: Color) -> bool {
        self.in_check(mover)
    }
}

/// On-board test for signed coordinates produced by offset arithmetic.
#[inline]
pub(crate) fn on_board(file: i8, rank: i8) -> bool {
    (0..8).contains(&file) && (0..8).contains(&rank)
}

/// Shared emit helper: destination squares keep the mover's identity
/// bits, only the coordinates change.
#[inline]
pub(crate) fn relocate(from: SquareByte, file: i8, rank: i8) -> SquareByte {
    from.with_coords(file as u8, rank as u8)
}

