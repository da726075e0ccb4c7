//! Chess engine built around a fixed 32-slot piece roster.
//!
//! The board packs each piece's color, liveness and position into one
//! byte and mirrors the placement in an 8x8 grid of roster slots, which
//! makes move generation, apply and undo cheap enough to drive a
//! depth-limited minimax with alpha-beta pruning over a single shared
//! board. Two evaluators are provided: a fast material count and a
//! phase-aware positional function.
//!
//! # Quick start
//!
//! ```
//! use woodpush::board::{Board, Color, EvalKind};
//! use woodpush::player::{Computer, Player, PlayerMove};
//!
//! let mut board = Board::new();
//! let mut engine = Computer::with_seed(Color::White, EvalKind::Fast, 2, 42);
//! match engine.choose_move(&mut board) {
//!     PlayerMove::Move { from, to } => {
//!         assert!(board.apply(&mut engine, from, to));
//!         println!("{from}-{to}");
//!     }
//!     PlayerMove::Resign => println!("no move found"),
//! }
//! ```
//!
//! # Building positions
//!
//! ```
//! use woodpush::board::{Board, Color};
//!
//! // Visual rows, rank 8 first. Uppercase is Black, lowercase White.
//! let board = Board::from_rows(
//!     [
//!         "....K...",
//!         "........",
//!         "........",
//!         "........",
//!         "........",
//!         "........",
//!         "........",
//!         "....k...",
//!     ],
//!     Color::White,
//! )
//! .unwrap();
//! assert!(!board.in_check(Color::White));
//! ```
//!
//! # Features
//!
//! - `serde` - serialization derives for the value types and
//!   `GameOptions`

// Index casts between slot numbers, grid cells and square coordinates
// are pervasive and bounded by construction.
#![warn(clippy::pedantic)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

pub mod board;
pub mod options;
pub mod player;
pub mod referee;
