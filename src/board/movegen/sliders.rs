//! Sliding pieces: bishop, rook, queen.

use super::super::types::{Color, SquareByte};
use super::super::Board;
use super::{on_board, relocate, Occupancy};

pub(crate) const ROOK_DIRS: [(i8, i8); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRS: [(i8, i8); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRS: [(i8, i8); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

impl Board {
    /// Ray validity for sliders. `straight` admits rank/file rays,
    /// `diagonal` admits diagonals; the queen passes both. Every square
    /// strictly between `from` and `to` must be empty, and `to` must not
    /// hold the mover's own piece.
    pub(crate) fn validate_slide(
        &self,
        mover: Color,
        from: SquareByte,
        to: SquareByte,
        straight: bool,
        diagonal: bool,
    ) -> bool {
        let df = to.file() as i8 - from.file() as i8;
        let dr = to.rank() as i8 - from.rank() as i8;
        let is_straight = df == 0 || dr == 0;
        let is_diagonal = df.abs() == dr.abs();
        if !((straight && is_straight) || (diagonal && is_diagonal)) {
            return false;
        }

        let (step_f, step_r) = (df.signum(), dr.signum());
        let mut file = from.file() as i8 + step_f;
        let mut rank = from.rank() as i8 + step_r;
        while (file, rank) != (to.file() as i8, to.rank() as i8) {
            if self.slot_at(file as u8, rank as u8).is_some() {
                return false;
            }
            file += step_f;
            rank += step_r;
        }

        self.occupancy(mover, to.file(), to.rank()) != Occupancy::Own
    }

    /// Walk each ray: emit empty squares, emit the first enemy occupant
    /// and stop, stop silently at own pieces or the board edge.
    pub(crate) fn slide_moves(
        &self,
        mover: Color,
        from: SquareByte,
        dirs: &[(i8, i8)],
    ) -> Vec<SquareByte> {
        let mut out = Vec::new();
        for &(df, dr) in dirs {
            let mut file = from.file() as i8 + df;
            let mut rank = from.rank() as i8 + dr;
            while on_board(file, rank) {
                match self.occupancy(mover, file as u8, rank as u8) {
                    Occupancy::Empty => out.push(relocate(from, file, rank)),
                    Occupancy::Enemy => {
                        out.push(relocate(from, file, rank));
                        break;
                    }
                    Occupancy::Own => break,
                }
                file += df;
                rank += dr;
            }
        }
        out
    }
}
