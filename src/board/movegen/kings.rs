//! King moves, castling included.

use super::super::types::{Color, Piece, SquareByte};
use super::super::Board;
use super::{on_board, relocate, Occupancy};

const KING_OFFSETS: [(i8, i8); 8] = [
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
];

/// Plain one-square adjacency, used both for ordinary king moves and as
/// the king's contribution to attack detection (castling deliberately
/// excluded there).
#[inline]
pub(crate) fn king_step(from: SquareByte, file: u8, rank: u8) -> bool {
    let df = from.file().abs_diff(file);
    let dr = from.rank().abs_diff(rank);
    df <= 1 && dr <= 1 && (df, dr) != (0, 0)
}

impl Board {
    pub(crate) fn validate_king(&self, mover: Color, from: SquareByte, to: SquareByte) -> bool {
        if king_step(from, to.file(), to.rank()) {
            return self.occupancy(mover, to.file(), to.rank()) != Occupancy::Own;
        }
        let home = mover.home_rank();
        if from.coords() != (4, home) || to.rank() != home {
            return false;
        }
        match to.file() {
            6 => self.castle_legal(mover, true),
            2 => self.castle_legal(mover, false),
            _ => false,
        }
    }

    /// Full castling test: neither the king nor the chosen rook has
    /// moved, the rook still stands on its home corner, the lane between
    /// them is clear, the king is not in check, and neither the transit
    /// square nor the destination is attacked.
    pub(crate) fn castle_legal(&self, mover: Color, kingside: bool) -> bool {
        if !self.castle_flags.wing_available(mover, kingside) {
            return false;
        }
        let home = mover.home_rank();
        let corner = if kingside { 7u8 } else { 0u8 };
        let rook_home = self.slot_at(corner, home).is_some_and(|slot| {
            self.kinds[slot] == Piece::Rook && self.pieces[slot].color() == mover
        });
        if !rook_home {
            return false;
        }

        let lane: &[u8] = if kingside { &[5, 6] } else { &[1, 2, 3] };
        if lane.iter().any(|&f| self.slot_at(f, home).is_some()) {
            return false;
        }

        let enemy = mover.opponent();
        let (transit, landing) = if kingside { (5u8, 6u8) } else { (3u8, 2u8) };
        !self.in_check(mover)
            && !self.square_attacked(transit, home, enemy)
            && !self.square_attacked(landing, home, enemy)
    }

    pub(crate) fn king_moves(&self, mover: Color, from: SquareByte) -> Vec<SquareByte> {
        let mut out = Vec::new();
        for &(df, dr) in &KING_OFFSETS {
            let file = from.file() as i8 + df;
            let rank = from.rank() as i8 + dr;
            if on_board(file, rank)
                && self.occupancy(mover, file as u8, rank as u8) != Occupancy::Own
            {
                out.push(relocate(from, file, rank));
            }
        }
        if from.coords() == (4, mover.home_rank()) {
            if self.castle_legal(mover, true) {
                out.push(from.with_coords(6, mover.home_rank()));
            }
            if self.castle_legal(mover, false) {
                out.push(from.with_coords(2, mover.home_rank()));
            }
        }
        out
    }
}
