//! Position construction tests.

use crate::board::{Board, Color, Piece, SetupError};

use super::board_from;

#[test]
fn standard_start_fills_the_roster() {
    let board = Board::new();
    board.check_consistency();

    for color in [Color::White, Color::Black] {
        let base = color.base_slot();
        assert_eq!(board.live_count(color), 16);
        assert_eq!(board.kind(base), Piece::King);
        assert_eq!(board.kind(base + 1), Piece::Queen);
        assert_eq!(board.kind(base + 2), Piece::Rook);
        assert_eq!(board.kind(base + 7), Piece::Knight);
        for offset in 8..16 {
            assert_eq!(board.kind(base + offset), Piece::Pawn);
        }
        assert_eq!(
            board.piece_byte(base).coords(),
            (4, color.home_rank()),
            "{color} king belongs on the E file"
        );
    }

    assert_eq!(board.side_to_move(), Color::White);
    assert_eq!(board.castle_flags().bits(), 0);
    assert_eq!(board.en_passant(), None);
}

#[test]
fn kings_are_required_once_per_side() {
    let missing = Board::from_rows(
        [
            "....K...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
        ],
        Color::White,
    );
    assert_eq!(
        missing.unwrap_err(),
        SetupError::MissingKing {
            color: Color::White
        }
    );

    let doubled = Board::from_rows(
        [
            "....K...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "..k.k...",
        ],
        Color::White,
    );
    assert_eq!(
        doubled.unwrap_err(),
        SetupError::DuplicateKing {
            color: Color::White
        }
    );
}

#[test]
fn pawns_may_not_start_on_back_ranks() {
    let result = Board::from_rows(
        [
            "p...K...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "....k...",
        ],
        Color::White,
    );
    assert_eq!(
        result.unwrap_err(),
        SetupError::PawnOnBackRank { file: 0, rank: 7 }
    );
}

#[test]
fn rejection_marker_is_honored() {
    let mut cells = [['\0'; 8]; 8];
    cells[0][0] = 'x';
    assert_eq!(
        Board::from_grid(&cells, Color::White).unwrap_err(),
        SetupError::Rejected
    );
}

#[test]
fn unknown_characters_are_reported_with_their_square() {
    let result = Board::from_rows(
        [
            "....K...",
            "........",
            "........",
            "...z....",
            "........",
            "........",
            "........",
            "....k...",
        ],
        Color::White,
    );
    assert_eq!(
        result.unwrap_err(),
        SetupError::UnknownPiece {
            char: 'z',
            file: 3,
            rank: 4
        }
    );
}

#[test]
fn side_not_to_move_may_not_be_in_check() {
    // White queen gives check to the black king, but White is on move.
    let result = Board::from_rows(
        [
            "....K...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "....q...",
            "....k...",
        ],
        Color::White,
    );
    assert_eq!(
        result.unwrap_err(),
        SetupError::OpponentInCheck {
            color: Color::Black
        }
    );
}

#[test]
fn extra_pieces_spill_into_pawn_slots() {
    // Two white queens: the second must land in a pawn slot with its
    // kind recorded.
    let board = board_from(
        [
            "....K...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "..q.q...",
            "....k...",
        ],
        Color::White,
    );
    let natural = Color::White.base_slot() + 1;
    assert_eq!(board.kind(natural), Piece::Queen);
    let spilled = (Color::White.base_slot() + 8..Color::White.base_slot() + 16)
        .find(|&slot| board.is_live(slot))
        .expect("second queen must occupy a pawn slot");
    assert_eq!(board.kind(spilled), Piece::Queen);
}

#[test]
fn overflow_beyond_the_roster_is_rejected() {
    // Eight pawns fill every spill slot, so a second queen has nowhere
    // to go.
    let result = Board::from_rows(
        [
            "....K...",
            "........",
            "........",
            "........",
            "........",
            "..qq....",
            "pppppppp",
            "....k...",
        ],
        Color::White,
    );
    assert_eq!(
        result.unwrap_err(),
        SetupError::TooManyPieces {
            color: Color::White
        }
    );
}

#[test]
fn displaced_rooks_forfeit_castling_at_setup() {
    // White rook on b1 instead of a1: queenside gone, kingside intact.
    let board = board_from(
        [
            "R...K..R",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            ".r..k..r",
        ],
        Color::White,
    );
    assert!(board.castle_flags().rook_moved(Color::White, false));
    assert!(!board.castle_flags().rook_moved(Color::White, true));
    assert!(!board.castle_flags().king_moved(Color::White));
    assert_eq!(
        board
            .castle_flags()
            .masked(crate::board::CastleFlags::side_mask(Color::Black)),
        0
    );
}

#[test]
fn displaced_king_forfeits_castling_at_setup() {
    let board = board_from(
        [
            "R...K..R",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "r..k...r",
        ],
        Color::White,
    );
    assert!(board.castle_flags().king_moved(Color::White));
    assert!(!board.castle_flags().king_moved(Color::Black));
}
