//! Generator and validation tests, including the soundness and
//! completeness sweep that pins the two against each other.

use crate::board::{Board, Color};

use super::{at, board_from, byte_at, emitted, play};

#[test]
fn knight_reach_from_centre_and_corner() {
    let board = board_from(
        [
            "....K...",
            "........",
            "........",
            "........",
            "...n....",
            "........",
            "........",
            "n...k...",
        ],
        Color::White,
    );
    assert_eq!(emitted(&board, "d4").len(), 8);
    let corner = emitted(&board, "a1");
    assert_eq!(corner, vec![at("b3"), at("c2")]);
}

#[test]
fn rook_ray_stops_at_blockers() {
    // Own pawn on d6 blocks upward (the pawn's square excluded); the
    // enemy pawn on f4 is capturable and ends the ray.
    let board = board_from(
        [
            "....K...",
            "........",
            "...p....",
            "........",
            "...r.P..",
            "........",
            "........",
            "....k...",
        ],
        Color::White,
    );
    let moves = emitted(&board, "d4");
    assert!(moves.contains(&at("d5")));
    assert!(!moves.contains(&at("d6")));
    assert!(!moves.contains(&at("d7")));
    assert!(moves.contains(&at("e4")));
    assert!(moves.contains(&at("f4")));
    assert!(!moves.contains(&at("g4")));
    assert!(moves.contains(&at("a4")));
    assert!(moves.contains(&at("d1")));
}

#[test]
fn queen_reach_stays_within_the_slider_bound() {
    let board = board_from(
        [
            "K.......",
            "........",
            "........",
            "........",
            "...q....",
            "........",
            "........",
            "......k.",
        ],
        Color::White,
    );
    // 27 is the slider bound from d4 minus rays clipped by the kings.
    let moves = emitted(&board, "d4");
    assert!(moves.len() <= 27);
    assert!(moves.contains(&at("a7")));
    assert!(moves.contains(&at("d8")));
    assert!(moves.contains(&at("h4")));
    assert!(!moves.contains(&at("g1"))); // own king's square
}

#[test]
fn pawn_moves_cover_push_double_and_captures() {
    let board = board_from(
        [
            "....K...",
            "........",
            "........",
            "........",
            "........",
            "..P.P...",
            "...p....",
            "....k...",
        ],
        Color::White,
    );
    let moves = emitted(&board, "d2");
    assert_eq!(moves, {
        let mut expected = vec![at("c3"), at("d3"), at("d4"), at("e3")];
        expected.sort_unstable();
        expected
    });
}

#[test]
fn blocked_pawn_emits_nothing() {
    let board = board_from(
        [
            "....K...",
            "........",
            "........",
            "........",
            "........",
            "...P....",
            "...p....",
            "....k...",
        ],
        Color::White,
    );
    assert!(emitted(&board, "d2").is_empty());
}

#[test]
fn double_step_arms_en_passant_for_one_half_move() {
    let mut board = board_from(
        [
            "....K...",
            "........",
            "........",
            "........",
            "...P....",
            "........",
            "..p.....",
            "....k...",
        ],
        Color::White,
    );
    play(&mut board, "c2", "c4");
    assert_eq!(board.en_passant(), Some(at("c3")));
    assert!(emitted(&board, "d4").contains(&at("c3")));

    // Any other move disarms the target.
    play(&mut board, "d4", "d3");
    assert_eq!(board.en_passant(), None);
}

#[test]
fn castling_emitted_only_while_fully_legal() {
    let mut board = board_from(
        [
            "R...K..R",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "r...k..r",
        ],
        Color::White,
    );
    let king = emitted(&board, "e1");
    assert!(king.contains(&at("g1")));
    assert!(king.contains(&at("c1")));

    // A black rook raking the transit file kills the kingside castle
    // but not the queenside one.
    play(&mut board, "h8", "f8");
    let king = emitted(&board, "e1");
    assert!(!king.contains(&at("g1")));
    assert!(king.contains(&at("c1")));
}

#[test]
fn castling_refused_while_in_check() {
    let board = board_from(
        [
            "R...K..R",
            "........",
            "........",
            "........",
            "........",
            "....Q...",
            "........",
            "r...k..r",
        ],
        Color::White,
    );
    assert!(board.in_check(Color::White));
    let king = emitted(&board, "e1");
    assert!(!king.contains(&at("g1")));
    assert!(!king.contains(&at("c1")));
}

#[test]
fn castling_refused_after_rook_moved_home_again() {
    let mut board = board_from(
        [
            "R...K..R",
            "........",
            "........",
            "........",
            "........",
            "........",
            "........",
            "r...k..r",
        ],
        Color::White,
    );
    play(&mut board, "h1", "g1");
    play(&mut board, "h8", "g8");
    play(&mut board, "g1", "h1");
    play(&mut board, "g8", "h8");
    let king = emitted(&board, "e1");
    assert!(!king.contains(&at("g1")));
    assert!(king.contains(&at("c1")));
}

#[test]
fn in_check_sees_every_attacker_kind() {
    let knight_check = board_from(
        [
            "....K...",
            "........",
            "........",
            "........",
            "........",
            "...N....",
            "........",
            "....k...",
        ],
        Color::White,
    );
    assert!(knight_check.in_check(Color::White));

    let pawn_check = board_from(
        [
            "....K...",
            "........",
            "........",
            "........",
            "........",
            "........",
            "...P....",
            "....k...",
        ],
        Color::White,
    );
    assert!(pawn_check.in_check(Color::White));
    assert!(!pawn_check.in_check(Color::Black));
}

/// The king-attack definition is symmetric: `in_check` holds exactly
/// when some opposite-color piece validates a capture of the king's
/// square.
#[test]
fn in_check_matches_validate_over_all_attackers() {
    let positions = [
        board_from(
            [
                "....K...",
                "........",
                "..B.....",
                "........",
                "q.......",
                "........",
                "....R...",
                "....k...",
            ],
            Color::White,
        ),
        Board::new(),
    ];

    for board in &positions {
        for color in [Color::White, Color::Black] {
            let king = board.piece_byte(color.base_slot());
            let enemy = color.opponent();
            let mut attacked = false;
            for slot in enemy.base_slot()..enemy.base_slot() + 16 {
                if !board.is_live(slot) {
                    continue;
                }
                let from = board.piece_byte(slot);
                let to = from.with_coords(king.file(), king.rank());
                if board.validate_move(enemy, from, to) {
                    attacked = true;
                }
            }
            assert_eq!(
                board.in_check(color),
                attacked,
                "check detection out of sync for {color}"
            );
        }
    }
}

/// Soundness and completeness in one sweep: the emitted destination set
/// must equal the set of squares that validate, for every live slot.
#[test]
fn generators_agree_with_validation() {
    let mut positions = vec![
        Board::new(),
        board_from(
            [
                "R...K..R",
                "P....P.P",
                "..N.....",
                "...PP...",
                "..p..B..",
                ".....n..",
                "pp..q.pp",
                "r...k..r",
            ],
            Color::White,
        ),
    ];

    // One mid-line position with an armed en-passant target.
    let mut ep = board_from(
        [
            "....K...",
            "........",
            "........",
            "........",
            "...P....",
            "........",
            "..p.....",
            "....k...",
        ],
        Color::White,
    );
    play(&mut ep, "c2", "c4");
    positions.push(ep);

    for board in &positions {
        for slot in 0..32 {
            if !board.is_live(slot) {
                continue;
            }
            let from = board.piece_byte(slot);
            let color = from.color();

            let mut generated: Vec<(u8, u8)> = board
                .piece_moves(slot)
                .into_iter()
                .map(|to| to.coords())
                .collect();
            generated.sort_unstable();

            let mut validated = Vec::new();
            for file in 0..8u8 {
                for rank in 0..8u8 {
                    let to = from.with_coords(file, rank);
                    if board.validate_move(color, from, to) {
                        validated.push((file, rank));
                    }
                }
            }

            assert_eq!(
                generated, validated,
                "slot {slot} ({:?} at {from}) generator disagrees with validate",
                board.kind(slot)
            );
        }
    }
}

#[test]
fn stale_bytes_fail_validation() {
    let mut board = board_from(
        [
            "....K...",
            "........",
            "........",
            "........",
            "...P....",
            "....p...",
            "........",
            "....k...",
        ],
        Color::White,
    );
    let pawn = byte_at(&board, "e3");
    play(&mut board, "e3", "d4"); // capture relocates the pawn
    // The old byte no longer matches the roster, so it validates nothing.
    assert!(!board.validate_move(Color::White, pawn, pawn.with_coords(4, 3)));
}
