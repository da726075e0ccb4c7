//! Board unit tests.

mod movegen;
mod setup;

use crate::board::{Board, CastleFlags, Color, Piece, PromotionSource, SquareByte};

/// Build a position from visual rows (rank 8 first) or die trying.
pub(crate) fn board_from(rows: [&str; 8], side: Color) -> Board {
    let board = Board::from_rows(rows, side).expect("test position must be valid");
    board.check_consistency();
    board
}

/// A promotion source that always answers Queen.
pub(crate) struct QueenPromoter;

impl PromotionSource for QueenPromoter {
    fn choose_promotion(&mut self) -> Piece {
        Piece::Queen
    }
}

/// (file, rank) of an algebraic square like "e2".
pub(crate) fn at(notation: &str) -> (u8, u8) {
    let sq: SquareByte = notation.parse().expect("valid square notation");
    sq.coords()
}

/// The live piece byte on an algebraic square.
pub(crate) fn byte_at(board: &Board, notation: &str) -> SquareByte {
    let (file, rank) = at(notation);
    board
        .square_at(file, rank)
        .unwrap_or_else(|| panic!("no piece on {notation}"))
}

/// Apply `from`-`to` with queen promotions, panicking if it is refused.
pub(crate) fn play(board: &mut Board, from: &str, to: &str) {
    let from_byte = byte_at(board, from);
    let (tf, tr) = at(to);
    assert!(
        board.apply(&mut QueenPromoter, from_byte, from_byte.with_coords(tf, tr)),
        "move {from}-{to} was refused"
    );
}

/// Full board state for byte-identical round-trip assertions.
#[derive(Clone, PartialEq, Eq, Debug)]
pub(crate) struct Snapshot {
    pieces: Vec<u8>,
    kinds: Vec<char>,
    grid: [[i8; 8]; 8],
    flags: CastleFlags,
    en_passant: Option<(u8, u8)>,
    side: Color,
    depth: usize,
}

pub(crate) fn snapshot(board: &Board) -> Snapshot {
    Snapshot {
        pieces: (0..32).map(|slot| board.piece_byte(slot).raw()).collect(),
        kinds: (0..32).map(|slot| board.kind(slot).to_char()).collect(),
        grid: board.grid,
        flags: board.castle_flags(),
        en_passant: board.en_passant(),
        side: board.side_to_move(),
        depth: board.undo_depth(),
    }
}

/// The destination coordinate set a slot's generator emits.
pub(crate) fn emitted(board: &Board, notation: &str) -> Vec<(u8, u8)> {
    let (file, rank) = at(notation);
    let slot = board
        .slot_at(file, rank)
        .unwrap_or_else(|| panic!("no piece on {notation}"));
    let mut coords: Vec<(u8, u8)> = board
        .piece_moves(slot)
        .into_iter()
        .map(SquareByte::coords)
        .collect();
    coords.sort_unstable();
    coords
}
