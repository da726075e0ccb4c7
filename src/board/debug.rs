//! Roster/grid consistency checking for the test suite.

use super::types::{slot_color, Color, Piece, EMPTY};
use super::Board;

impl Board {
    /// Panic if any structural invariant is broken: the grid and roster
    /// must describe the same placement, each side has a live king and
    /// at most sixteen live pieces, and no pawn stands on a back rank.
    /// Called from tests after round trips; a failure here is always an
    /// engine bug.
    pub(crate) fn check_consistency(&self) {
        for slot in 0..32 {
            let byte = self.pieces[slot];
            if !byte.is_alive() {
                continue;
            }
            assert_eq!(
                byte.color(),
                slot_color(slot),
                "slot {slot} byte color disagrees with its roster block"
            );
            let cell = self.cell(byte.file(), byte.rank());
            assert_eq!(
                cell, slot as i8,
                "live slot {slot} at {byte} not mirrored by the grid"
            );
            if self.kinds[slot] == Piece::Pawn {
                assert!(
                    byte.rank() != 0 && byte.rank() != 7,
                    "pawn in slot {slot} on back rank at {byte}"
                );
            }
        }

        for file in 0..8u8 {
            for rank in 0..8u8 {
                let cell = self.cell(file, rank);
                if cell == EMPTY {
                    continue;
                }
                assert!(
                    (0..32).contains(&cell),
                    "grid cell ({file},{rank}) holds invalid slot {cell}"
                );
                let byte = self.pieces[cell as usize];
                assert!(
                    byte.is_alive() && byte.coords() == (file, rank),
                    "grid cell ({file},{rank}) references stale slot {cell}"
                );
            }
        }

        for color in [Color::White, Color::Black] {
            let base = color.base_slot();
            assert!(
                self.is_live(base) && self.kinds[base] == Piece::King,
                "{color} king slot is dead or rewritten"
            );
            assert!(
                self.live_count(color) <= 16,
                "{color} has more than sixteen live pieces"
            );
        }
    }
}
