//! Position construction from character grids.

use super::state::SLOT_KINDS;
use super::types::{Color, Piece, SquareByte};
use super::{Board, SetupError};

/// The standard starting array as grid[file][rank] characters.
/// Uppercase is Black, lowercase is White; '\0' is empty.
fn starting_grid() -> [[char; 8]; 8] {
    let back = ['R', 'N', 'B', 'Q', 'K', 'B', 'N', 'R'];
    let mut cells = [['\0'; 8]; 8];
    for (file, &piece) in back.iter().enumerate() {
        cells[file][0] = piece.to_ascii_lowercase();
        cells[file][1] = 'p';
        cells[file][6] = 'P';
        cells[file][7] = piece;
    }
    cells
}

impl Board {
    /// The standard starting position, White to move.
    #[must_use]
    pub fn new() -> Self {
        Board::from_grid(&starting_grid(), Color::White)
            .expect("standard starting position is valid")
    }

    /// Build a position from an 8x8 character grid indexed
    /// `cells[file][rank]`. Uppercase letters are Black, lowercase
    /// White; `'\0'`, `' '` and `'.'` are empty. An `'x'` in the A1
    /// corner is the producer's rejection marker.
    ///
    /// Every roster invariant is enforced here: exactly one king per
    /// side, at most sixteen pieces per side, no pawn on a back rank,
    /// and the side not on move may not be in check. Pieces beyond a
    /// kind's natural slots (say a second queen) spill into free pawn
    /// slots with the kind array recording what they really are.
    pub fn from_grid(cells: &[[char; 8]; 8], side_to_move: Color) -> Result<Self, SetupError> {
        if cells[0][0] == 'x' {
            return Err(SetupError::Rejected);
        }

        let mut board = Board::bare(side_to_move);

        for rank in 0..8u8 {
            for file in 0..8u8 {
                let c = cells[file as usize][rank as usize];
                if c == '\0' || c == ' ' || c == '.' {
                    continue;
                }
                let Some(kind) = Piece::from_char(c) else {
                    return Err(SetupError::UnknownPiece { char: c, file, rank });
                };
                let color = if c.is_ascii_uppercase() {
                    Color::Black
                } else {
                    Color::White
                };
                if kind == Piece::Pawn && (rank == 0 || rank == 7) {
                    return Err(SetupError::PawnOnBackRank { file, rank });
                }
                let slot = board.claim_slot(color, kind)?;
                board.kinds[slot] = kind;
                board.pieces[slot] = SquareByte::new(color, file, rank);
                board.grid[file as usize][rank as usize] = slot as i8;
            }
        }

        for color in [Color::White, Color::Black] {
            if !board.is_live(color.base_slot()) {
                return Err(SetupError::MissingKing { color });
            }
        }

        board.seed_castle_flags();

        let idle = side_to_move.opponent();
        if board.in_check(idle) {
            return Err(SetupError::OpponentInCheck { color: idle });
        }

        Ok(board)
    }

    /// Build from eight visual rows, rank 8 first, `'.'` for empty.
    /// Convenience wrapper over [`Board::from_grid`].
    pub fn from_rows(rows: [&str; 8], side_to_move: Color) -> Result<Self, SetupError> {
        let mut cells = [['\0'; 8]; 8];
        for (i, row) in rows.iter().enumerate() {
            let rank = 7 - i;
            for (file, c) in row.chars().take(8).enumerate() {
                cells[file][rank] = c;
            }
        }
        Board::from_grid(&cells, side_to_move)
    }

    /// Pick the roster slot for one more piece of (`color`, `kind`):
    /// the kind's own slots first, then any free pawn slot.
    fn claim_slot(&mut self, color: Color, kind: Piece) -> Result<usize, SetupError> {
        let base = color.base_slot();
        for offset in 0..16 {
            if SLOT_KINDS[offset] == kind && !self.is_live(base + offset) {
                return Ok(base + offset);
            }
        }
        if kind == Piece::King {
            return Err(SetupError::DuplicateKing { color });
        }
        for offset in 8..16 {
            if !self.is_live(base + offset) {
                return Ok(base + offset);
            }
        }
        Err(SetupError::TooManyPieces { color })
    }

    /// Initialize castling flags from piece placement: a king away from
    /// its starting square, or a home corner without its side's rook,
    /// counts as already moved.
    fn seed_castle_flags(&mut self) {
        for color in [Color::White, Color::Black] {
            let home = color.home_rank();
            let king = self.pieces[color.base_slot()];
            if king.coords() != (4, home) {
                self.castle_flags.mark_king_moved(color);
            }
            for (corner_file, kingside) in [(0u8, false), (7u8, true)] {
                let rook_at_home = self.slot_at(corner_file, home).is_some_and(|slot| {
                    self.kinds[slot] == Piece::Rook && self.pieces[slot].color() == color
                });
                if !rook_at_home {
                    self.castle_flags.mark_rook_moved(color, kingside);
                }
            }
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new()
    }
}
