//! The two position evaluators and game-phase detection.
//!
//! Both evaluators score from the searching side's point of view,
//! higher is better. The fast one is material plus a castling nudge;
//! the full one layers phase-dependent positional terms on top. Phase
//! detection runs once per root call, never per node.

use super::types::{CastleFlags, Color, SquareByte};
use super::Board;

/// Which evaluation function the search runs at its leaves.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EvalKind {
    /// Material and a castling nudge only
    Fast,
    /// Phase-aware positional terms on top of material
    Full,
}

/// Game phase booleans; both false means middlegame.
///
/// The detector keys on home-rank occupancy, so positions that did not
/// arise from the standard start can be misclassified (a hand-built
/// middlegame with full back ranks reads as an opening). Retained
/// behavior.
#[derive(Clone, Copy, Default, Debug)]
pub(crate) struct Phase {
    pub(crate) opening: bool,
    pub(crate) endgame: bool,
}

/// Opening holds while at least 7 of the 16 back-rank pieces and at
/// least 9 of the 16 pawns still sit on their starting ranks, summed
/// over both sides. After that, fewer than 7 live pieces in total means
/// endgame.
pub(crate) fn detect_phase(board: &Board) -> Phase {
    let mut opening = true;
    let mut piece_count = 0;
    let mut pawn_count = 0;

    for i in 0..8 {
        if board.is_live(i) && board.piece_byte(i).rank() == 7 {
            piece_count += 1;
        }
        if board.is_live(i + 16) && board.piece_byte(i + 16).rank() == 0 {
            piece_count += 1;
        }
        if board.is_live(i + 8) && board.piece_byte(i + 8).rank() == 6 {
            pawn_count += 1;
        }
        if board.is_live(i + 24) && board.piece_byte(i + 24).rank() == 1 {
            pawn_count += 1;
        }
    }
    if pawn_count < 9 || piece_count < 7 {
        opening = false;
    }

    let mut endgame = false;
    if !opening {
        let live = (0..32).filter(|&slot| board.is_live(slot)).count();
        if live < 7 {
            endgame = true;
        }
    }

    Phase { opening, endgame }
}

fn side_material(board: &Board, base: usize) -> i32 {
    (base..base + 16)
        .filter(|&slot| board.is_live(slot))
        .map(|slot| board.kind(slot).value())
        .sum()
}

/// Material sum for `perspective` minus the opponent's, using the
/// classical weights (K 200, Q 9, R 5, B/N 3, P 1).
#[must_use]
pub fn material_balance(board: &Board, perspective: Color) -> i32 {
    side_material(board, perspective.base_slot())
        - side_material(board, perspective.opponent().base_slot())
}

/// Destination encodings for the centre squares d4, d5, e4, e5; the
/// attacker's color and alive bits are OR-ed in front of them.
const CENTRE_SQUARES: [u8; 4] = [27, 28, 35, 36];

/// A leaf evaluator bound to one search: the searching color, its
/// masked castling bits as they stood at the root, and the phase
/// detected on entry.
pub(crate) struct Evaluator {
    kind: EvalKind,
    color: Color,
    flags_mask: u8,
    root_flags: u8,
    phase: Phase,
}

impl Evaluator {
    pub(crate) fn new(board: &Board, color: Color, kind: EvalKind) -> Self {
        let flags_mask = CastleFlags::side_mask(color);
        let root_flags = board.castle_flags().masked(flags_mask);
        let phase = match kind {
            EvalKind::Full => detect_phase(board),
            EvalKind::Fast => Phase::default(),
        };
        Evaluator {
            kind,
            color,
            flags_mask,
            root_flags,
            phase,
        }
    }

    /// Whether this root call runs under endgame rules (the search digs
    /// two plies deeper there).
    pub(crate) fn endgame(&self) -> bool {
        self.phase.endgame
    }

    pub(crate) fn score(&self, board: &Board) -> i32 {
        match self.kind {
            EvalKind::Fast => self.fast(board),
            EvalKind::Full => self.full(board),
        }
    }

    /// Material plus a +/-2 castling nudge.
    fn fast(&self, board: &Board) -> i32 {
        material_balance(board, self.color) + self.castle_term(board, 2)
    }

    fn full(&self, board: &Board) -> i32 {
        let my_lo = self.color.base_slot();
        let sum = material_balance(board, self.color);
        let mut out = 0;

        if self.phase.opening {
            // Count our moves that hit the four centre squares.
            let mut centre = 0;
            for slot in my_lo..my_lo + 16 {
                let byte = board.piece_byte(slot);
                for &enc in &CENTRE_SQUARES {
                    let target = SquareByte::from_raw((byte.raw() & 0xC0) | enc);
                    if board.validate_move(self.color, byte, target) {
                        centre += 1;
                    }
                }
            }

            // Rooks, bishops and knights off the back ranks.
            let mut development = 0;
            for slot in my_lo + 2..my_lo + 8 {
                if board.is_live(slot) {
                    let rank = board.piece_byte(slot).rank();
                    if rank != 0 && rank != 7 {
                        development += 3;
                    }
                }
            }

            out = sum + centre + development + self.castle_term(board, 4);
        }

        if self.phase.opening || !self.phase.endgame {
            out += self.king_shelter(board);
        }

        if !self.phase.endgame {
            // Pawns past the centre line.
            let mut aggression = 0;
            for slot in my_lo + 8..my_lo + 16 {
                if board.is_live(slot) {
                    let rank = board.piece_byte(slot).rank();
                    let past = match self.color {
                        Color::Black => rank < 4,
                        Color::White => rank > 3,
                    };
                    if past {
                        aggression += 1;
                    }
                }
            }

            // Rooks on files free of friendly pawns.
            let mut open = 0;
            for slot in [my_lo + 2, my_lo + 3] {
                if board.is_live(slot) {
                    let file = board.piece_byte(slot).file();
                    let blocked =
                        (0..8).any(|rank| pawn_slot_at(board, my_lo, file, rank));
                    if !blocked {
                        open += 2;
                    }
                }
            }

            let passed = self.passed_pawns(board);

            // Material lands in this bucket too, so an opening position
            // counts it twice. Retained behavior.
            out += sum + open + passed + aggression;
        }

        if self.phase.endgame {
            let king = board.piece_byte(my_lo);
            let centered =
                (2..=5).contains(&king.file()) && (2..=5).contains(&king.rank());
            out = sum + i32::from(centered);
        }

        out
    }

    /// +bonus once our castling bits show movement this line and the
    /// king stands on a castled file (C or G), -bonus if the rights were
    /// spent without castling. Quiet while the root bits were already
    /// nonzero: a side that had burned its rights before the search
    /// started gets no signal either way.
    fn castle_term(&self, board: &Board, bonus: i32) -> i32 {
        if self.root_flags != 0 || board.castle_flags().masked(self.flags_mask) == 0 {
            return 0;
        }
        let king_file = board.piece_byte(self.color.base_slot()).file();
        if king_file == 2 || king_file == 6 {
            bonus
        } else {
            -bonus
        }
    }

    /// +4 for an intact three-pawn wedge in front of a castled king.
    /// The wedges are literal board coordinates per color and wing.
    fn king_shelter(&self, board: &Board) -> i32 {
        let my_lo = self.color.base_slot();
        let king_file = board.piece_byte(my_lo).file();

        let patterns: &[[(u8, u8); 3]] = match (self.color, king_file) {
            (Color::Black, f) if f > 4 => &[[(5, 6), (6, 6), (7, 5)], [(5, 6), (6, 5), (7, 4)]],
            (Color::Black, f) if f < 3 => &[[(0, 5), (1, 6), (2, 6)], [(0, 4), (1, 5), (2, 6)]],
            (Color::White, f) if f > 4 => &[[(5, 1), (6, 1), (7, 2)], [(5, 1), (6, 2), (7, 3)]],
            (Color::White, f) if f < 3 => &[[(0, 2), (1, 1), (2, 1)], [(0, 3), (1, 2), (2, 1)]],
            _ => return 0,
        };

        for pattern in patterns {
            if pattern
                .iter()
                .all(|&(file, rank)| pawn_slot_at(board, my_lo, file, rank))
            {
                return 4;
            }
        }
        0
    }

    /// +3 per pawn with no enemy pawn ahead on the adjacent files. The
    /// scan never looks at the pawn's own file, and a pawn on the H file
    /// collects nothing; both quirks retained.
    fn passed_pawns(&self, board: &Board) -> i32 {
        let my_lo = self.color.base_slot();
        let their_lo = self.color.opponent().base_slot();
        let dir = self.color.forward();
        let mut passed = 0;

        for slot in my_lo + 8..my_lo + 16 {
            if !board.is_live(slot) {
                continue;
            }
            let byte = board.piece_byte(slot);
            let mut clear = true;

            let left = byte.file() as i8 - 1;
            if left >= 0 {
                let mut rank = byte.rank() as i8 + dir;
                while (0..8).contains(&rank) {
                    if pawn_slot_at(board, their_lo, left as u8, rank as u8) {
                        clear = false;
                        break;
                    }
                    rank += dir;
                }
            }

            if clear {
                let right = byte.file() as i8 + 1;
                if right < 8 {
                    let mut rank = byte.rank() as i8 + dir;
                    while (0..8).contains(&rank) {
                        if pawn_slot_at(board, their_lo, right as u8, rank as u8) {
                            clear = false;
                            break;
                        }
                        rank += dir;
                    }
                    if clear {
                        passed += 3;
                    }
                }
            }
        }

        passed
    }
}

/// Occupant of (`file`, `rank`) is one of `base`'s pawn-range slots.
/// A promoted or spilled piece living in a pawn slot still counts; the
/// slot range is the test, as everywhere else in the evaluators.
fn pawn_slot_at(board: &Board, base: usize, file: u8, rank: u8) -> bool {
    board
        .slot_at(file, rank)
        .is_some_and(|slot| (base + 8..base + 16).contains(&slot))
}
