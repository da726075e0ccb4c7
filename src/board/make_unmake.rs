//! Applying and undoing moves.
//!
//! `apply` performs a validated move and pushes a record with everything
//! needed to reverse it; `undo` pops the record and restores the board
//! byte for byte. The two form a strict stack: the search undoes every
//! apply before it returns, including on early exits.

use super::state::UndoRecord;
use super::types::{slot_color, Color, Piece, SquareByte, EMPTY};
use super::{Board, PromotionSource};

impl Board {
    /// Perform the move encoded by (`from`, `to`) if it validates.
    /// Handles the castling rook hop, arming and consuming the
    /// en-passant target, and promotion (the mover is asked for the new
    /// kind). Returns false without side effects when the move is
    /// illegal.
    pub fn apply<P>(&mut self, mover: &mut P, from: SquareByte, to: SquareByte) -> bool
    where
        P: PromotionSource + ?Sized,
    {
        let Some(slot) = self.live_slot_for(from) else {
            return false;
        };
        let color = slot_color(slot);
        if !self.validate_move(color, from, to) {
            return false;
        }

        let kind = self.kinds[slot];
        let (ff, fr) = from.coords();
        let (tf, tr) = to.coords();

        let mut record = UndoRecord {
            slot,
            from_byte: from,
            captured: None,
            prior_flags: self.castle_flags,
            prior_en_passant: self.en_passant,
            promoted_from: None,
        };

        // Capture: the destination occupant, or the pawn one rank back
        // for en passant.
        if let Some(victim) = self.slot_at(tf, tr) {
            record.captured = Some((victim, self.pieces[victim]));
            self.pieces[victim] = self.pieces[victim].captured();
            self.grid[tf as usize][tr as usize] = EMPTY;
        } else if kind == Piece::Pawn && tf != ff && self.en_passant == Some((tf, tr)) {
            let victim = self
                .slot_at(tf, fr)
                .expect("armed en-passant target with no pawn behind it");
            record.captured = Some((victim, self.pieces[victim]));
            self.pieces[victim] = self.pieces[victim].captured();
            self.grid[tf as usize][fr as usize] = EMPTY;
        }

        self.grid[ff as usize][fr as usize] = EMPTY;
        self.pieces[slot] = from.with_coords(tf, tr);
        self.grid[tf as usize][tr as usize] = slot as i8;

        // Castling is recognized by the two-file king move; validation
        // already vouched for the rook.
        if kind == Piece::King && ff.abs_diff(tf) == 2 {
            let (corner, hop) = if tf == 6 { (7u8, 5u8) } else { (0u8, 3u8) };
            let rook = self
                .slot_at(corner, fr)
                .expect("validated castle with no rook on the corner");
            self.grid[corner as usize][fr as usize] = EMPTY;
            self.pieces[rook] = self.pieces[rook].with_coords(hop, fr);
            self.grid[hop as usize][fr as usize] = rook as i8;
            self.mark_corner(corner, fr);
        }

        if kind == Piece::Pawn && tr == color.promotion_rank() {
            record.promoted_from = Some(kind);
            self.kinds[slot] = mover.choose_promotion();
        }

        if kind == Piece::King {
            self.castle_flags.mark_king_moved(color);
        }
        self.mark_corner(ff, fr);
        self.mark_corner(tf, tr);

        // A double-step arms en passant for exactly the next half-move;
        // anything else disarms it.
        self.en_passant = if kind == Piece::Pawn && fr.abs_diff(tr) == 2 {
            Some((ff, (fr + tr) / 2))
        } else {
            None
        };

        self.side_to_move = self.side_to_move.opponent();
        self.undo_stack.push(record);
        true
    }

    /// Exactly reverse the most recent apply.
    ///
    /// Panics if no apply is outstanding; an unbalanced stack is a bug,
    /// not a recoverable condition.
    pub fn undo(&mut self) {
        let record = self
            .undo_stack
            .pop()
            .expect("undo without a matching apply");
        let slot = record.slot;
        let here = self.pieces[slot];
        let (cf, cr) = here.coords();
        let (ff, fr) = record.from_byte.coords();

        self.grid[cf as usize][cr as usize] = EMPTY;

        // Walk a castled rook back to its corner before anything else
        // lands on the rank.
        if self.kinds[slot] == Piece::King && cf.abs_diff(ff) == 2 {
            let (corner, hop) = if cf == 6 { (7u8, 5u8) } else { (0u8, 3u8) };
            let rook = self
                .slot_at(hop, cr)
                .expect("castled rook missing on undo");
            self.grid[hop as usize][cr as usize] = EMPTY;
            self.pieces[rook] = self.pieces[rook].with_coords(corner, cr);
            self.grid[corner as usize][cr as usize] = rook as i8;
        }

        if let Some(prior) = record.promoted_from {
            self.kinds[slot] = prior;
        }

        self.pieces[slot] = record.from_byte;
        self.grid[ff as usize][fr as usize] = slot as i8;

        if let Some((victim, byte)) = record.captured {
            self.pieces[victim] = byte;
            self.grid[byte.file() as usize][byte.rank() as usize] = victim as i8;
        }

        self.castle_flags = record.prior_flags;
        self.en_passant = record.prior_en_passant;
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Any move touching a home corner retires that corner's castling
    /// bit: the rook left, or whatever captured it now sits there.
    fn mark_corner(&mut self, file: u8, rank: u8) {
        let color = match rank {
            0 => Color::White,
            7 => Color::Black,
            _ => return,
        };
        match file {
            0 => self.castle_flags.mark_rook_moved(color, false),
            7 => self.castle_flags.mark_rook_moved(color, true),
            _ => {}
        }
    }
}
