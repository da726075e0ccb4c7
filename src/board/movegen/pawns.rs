//! Pawn moves: pushes, captures, en passant.

use super::super::types::{Color, SquareByte};
use super::super::Board;
use super::{on_board, relocate, Occupancy};

impl Board {
    pub(crate) fn validate_pawn(&self, mover: Color, from: SquareByte, to: SquareByte) -> bool {
        let dir = mover.forward();
        let df = to.file() as i8 - from.file() as i8;
        let dr = to.rank() as i8 - from.rank() as i8;

        if df == 0 {
            if dr == dir {
                return self.slot_at(to.file(), to.rank()).is_none();
            }
            if dr == 2 * dir {
                let mid = (from.rank() as i8 + dir) as u8;
                return from.rank() == mover.pawn_rank()
                    && self.slot_at(from.file(), mid).is_none()
                    && self.slot_at(to.file(), to.rank()).is_none();
            }
            return false;
        }

        if df.abs() == 1 && dr == dir {
            return match self.occupancy(mover, to.file(), to.rank()) {
                Occupancy::Enemy => true,
                Occupancy::Own => false,
                Occupancy::Empty => self.en_passant == Some(to.coords()),
            };
        }

        false
    }

    /// At most four squares: single push, double step from the home
    /// rank, and the two diagonal captures (the en-passant target counts
    /// as capturable while it is armed). A push onto the last rank is
    /// emitted as-is; the promotion kind is settled at apply time.
    pub(crate) fn pawn_moves(&self, mover: Color, from: SquareByte) -> Vec<SquareByte> {
        let dir = mover.forward();
        let file = from.file() as i8;
        let rank = from.rank() as i8;
        let mut out = Vec::new();

        let ahead = rank + dir;
        if on_board(file, ahead) && self.slot_at(file as u8, ahead as u8).is_none() {
            out.push(relocate(from, file, ahead));
            let two = rank + 2 * dir;
            if from.rank() == mover.pawn_rank()
                && on_board(file, two)
                && self.slot_at(file as u8, two as u8).is_none()
            {
                out.push(relocate(from, file, two));
            }
        }

        for df in [-1i8, 1] {
            let cf = file + df;
            if !on_board(cf, ahead) {
                continue;
            }
            let takeable = match self.occupancy(mover, cf as u8, ahead as u8) {
                Occupancy::Enemy => true,
                Occupancy::Own => false,
                Occupancy::Empty => self.en_passant == Some((cf as u8, ahead as u8)),
            };
            if takeable {
                out.push(relocate(from, cf, ahead));
            }
        }

        out
    }
}
