//! Knight moves.

use super::super::types::{Color, SquareByte};
use super::super::Board;
use super::{on_board, relocate, Occupancy};

const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (1, 2),
    (2, 1),
    (2, -1),
    (1, -2),
    (-1, -2),
    (-2, -1),
    (-2, 1),
    (-1, 2),
];

impl Board {
    pub(crate) fn validate_knight(&self, mover: Color, from: SquareByte, to: SquareByte) -> bool {
        let df = i8::abs(to.file() as i8 - from.file() as i8);
        let dr = i8::abs(to.rank() as i8 - from.rank() as i8);
        if !matches!((df, dr), (1, 2) | (2, 1)) {
            return false;
        }
        self.occupancy(mover, to.file(), to.rank()) != Occupancy::Own
    }

    pub(crate) fn knight_moves(&self, mover: Color, from: SquareByte) -> Vec<SquareByte> {
        let mut out = Vec::new();
        for &(df, dr) in &KNIGHT_OFFSETS {
            let file = from.file() as i8 + df;
            let rank = from.rank() as i8 + dr;
            if on_board(file, rank)
                && self.occupancy(mover, file as u8, rank as u8) != Occupancy::Own
            {
                out.push(relocate(from, file, rank));
            }
        }
        out
    }
}
