//! Search value constants.
//!
//! All four sit outside the range either evaluator can produce, so a
//! terminal discovered mid-tree can never be confused with a good
//! position score.

/// Value of a mate delivered by the searching side.
pub const WIN: i32 = 15_000;

/// Value of a mate suffered by the searching side.
pub const LOSS: i32 = -WIN;

/// Value of a stalemate reached on the searching side's ply. A
/// stalemate discovered on the opponent's ply travels as `-STALE` until
/// the root's sign-reversal window folds it back to negative.
pub const STALE: i32 = -14_000;

/// Sentinel for a trial move the board refused (castling through
/// check). The minimum loses every max comparison and the maximum loses
/// every min comparison, so refused moves never influence a window.
pub const IGNORE_MAX: i32 = i32::MIN;
pub const IGNORE_MIN: i32 = i32::MAX;
