//! Depth-limited minimax with alpha-beta pruning.
//!
//! The tree alternates "my ply" and "their ply" nodes over the single
//! shared board; one routine pair serves both colors through the
//! roster's fixed 16-slot split, selected once at the root. Every node
//! recomputes both sides' check bits on entry and classifies terminals
//! by comparing them with the parent's bits: a side still in check that
//! was already in check failed to escape (mate), one that just walked
//! into check stands in for stalemate. That comparison is the only
//! mate/stalemate detector in the engine, so both bits must stay
//! recomputed per node.

mod constants;
mod log;

use rand::Rng;

use super::eval::{EvalKind, Evaluator};
use super::state::GameStatus;
use super::types::{Color, SquareByte};
use super::{Board, PromotionSource};

pub use constants::{IGNORE_MAX, IGNORE_MIN, LOSS, STALE, WIN};
pub use log::{SearchLogger, SearchSummary, SilentLogger, StdoutLogger};

/// Root inputs: who is searching, how deep, and with which evaluator.
#[derive(Clone, Copy, Debug)]
pub struct SearchParams {
    pub color: Color,
    pub depth: u32,
    pub eval: EvalKind,
}

/// What a root call produced.
#[derive(Clone, Debug)]
pub struct SearchReport {
    /// The selected move, `None` when nothing playable emerged
    pub chosen: Option<(SquareByte, SquareByte)>,
    /// Best root value
    pub score: i32,
    /// Effective depth (params depth, plus two in a full-eval endgame)
    pub depth: u32,
    /// Root moves examined / moves tied for best
    pub moves: usize,
    pub ties: usize,
}

/// Both colors' check bits, captured on node entry.
#[derive(Clone, Copy)]
struct Checks {
    black: bool,
    white: bool,
}

impl Checks {
    fn of(board: &Board) -> Self {
        Checks {
            black: board.in_check(Color::Black),
            white: board.in_check(Color::White),
        }
    }

    fn on(self, color: Color) -> bool {
        match color {
            Color::Black => self.black,
            Color::White => self.white,
        }
    }
}

/// A node's (alpha, beta, value) triple. `value` tracks the running
/// best child so a node's result is defined even when every child was
/// refused; it starts at zero, which only surfaces in the vanishing
/// case of a side with no generated moves at all.
#[derive(Clone, Copy)]
struct Window {
    alpha: i32,
    beta: i32,
    value: i32,
    first: bool,
}

impl Window {
    fn root() -> Self {
        Window {
            alpha: i32::MIN,
            beta: i32::MAX,
            value: 0,
            first: true,
        }
    }

    fn child(parent: &Window) -> Self {
        Window {
            alpha: parent.alpha,
            beta: parent.beta,
            value: 0,
            first: true,
        }
    }

    /// Max-node update.
    fn raise(&mut self, v: i32) {
        if v > self.alpha {
            self.alpha = v;
            self.value = v;
        } else if self.first {
            self.value = v;
        }
        self.first = false;
    }

    /// Min-node update.
    fn lower(&mut self, v: i32) {
        if v < self.beta {
            self.beta = v;
            self.value = v;
        } else if self.first {
            self.value = v;
        }
        self.first = false;
    }

    /// The source prunes on a strictly inverted window, not on equality.
    fn pruned(&self) -> bool {
        self.beta < self.alpha
    }
}

/// Deeper terminals are nudged by half the ply count, so a mate or
/// stalemate further away outranks the same result close by wherever
/// that is the preferable order.
fn look_ahead(depth: u32) -> i32 {
    (depth / 2) as i32
}

struct Searcher<'a, P: PromotionSource + ?Sized> {
    board: &'a mut Board,
    promo: &'a mut P,
    my_color: Color,
    their_color: Color,
    my_lo: usize,
    their_lo: usize,
    max_depth: u32,
    eval: Evaluator,
}

impl<P: PromotionSource + ?Sized> Searcher<'_, P> {
    /// Terminal test after one of our moves. Still in check means the
    /// move failed: a repeat of the parent's check is a lost escape
    /// attempt, a fresh one stands in for stalemate.
    fn my_terminal(&self, checks: Checks, parent: Checks) -> i32 {
        if checks.on(self.my_color) {
            if parent.on(self.my_color) {
                return LOSS;
            }
            return STALE;
        }
        0
    }

    /// Mirror image for their moves; a stalemate seen from here comes
    /// back positive and is folded negative at the root.
    fn their_terminal(&self, checks: Checks, parent: Checks) -> i32 {
        if checks.on(self.their_color) {
            if parent.on(self.their_color) {
                return WIN;
            }
            return -STALE;
        }
        0
    }

    /// Apply one of our moves and minimize over the replies.
    fn my_ply(
        &mut self,
        parent: &Window,
        parent_checks: Checks,
        from: SquareByte,
        to: SquareByte,
        depth: u32,
    ) -> i32 {
        if !self.board.apply(self.promo, from, to) {
            return IGNORE_MAX;
        }

        let checks = Checks::of(self.board);
        let terminal = self.my_terminal(checks, parent_checks);
        if terminal != 0 {
            self.board.undo();
            return terminal + look_ahead(depth);
        }

        let next_depth = depth + 1;
        if next_depth >= self.max_depth {
            let score = self.eval.score(self.board);
            self.board.undo();
            return score;
        }

        let mut window = Window::child(parent);
        'pieces: for slot in self.their_lo..self.their_lo + 16 {
            if !self.board.is_live(slot) {
                continue;
            }
            let current = self.board.piece_byte(slot);
            for reply in self.board.piece_moves(slot) {
                let value = self.their_ply(&window, checks, current, reply, next_depth);
                window.lower(value);
                if window.pruned() {
                    break 'pieces;
                }
            }
        }

        self.board.undo();
        window.value
    }

    /// Apply one of their moves and maximize over our replies.
    fn their_ply(
        &mut self,
        parent: &Window,
        parent_checks: Checks,
        from: SquareByte,
        to: SquareByte,
        depth: u32,
    ) -> i32 {
        if !self.board.apply(self.promo, from, to) {
            return IGNORE_MIN;
        }

        let checks = Checks::of(self.board);
        let terminal = self.their_terminal(checks, parent_checks);
        if terminal != 0 {
            self.board.undo();
            return terminal - look_ahead(depth);
        }

        let next_depth = depth + 1;
        if next_depth >= self.max_depth {
            let score = self.eval.score(self.board);
            self.board.undo();
            return score;
        }

        let mut window = Window::child(parent);
        'pieces: for slot in self.my_lo..self.my_lo + 16 {
            if !self.board.is_live(slot) {
                continue;
            }
            let current = self.board.piece_byte(slot);
            for reply in self.board.piece_moves(slot) {
                let value = self.my_ply(&window, checks, current, reply, next_depth);
                window.raise(value);
                if window.pruned() {
                    break 'pieces;
                }
            }
        }

        self.board.undo();
        window.value
    }
}

/// Run one root search and pick a move.
///
/// Iterates the searching side's live slots in roster order, scores
/// every generated move through the tree, and selects uniformly among
/// the moves tied for the best value by reservoir sampling (the k-th
/// tie replaces the pick with probability 1/k). Root values inside
/// `(-STALE-100, -STALE]` have their sign reversed first, which is how
/// an opponent-side stalemate travels back as something to avoid. When
/// the best value is WIN, LOSS or STALE the matching game-over status
/// is set on the board.
pub fn select_move<P, R>(
    board: &mut Board,
    promo: &mut P,
    rng: &mut R,
    params: &SearchParams,
) -> SearchReport
where
    P: PromotionSource + ?Sized,
    R: Rng,
{
    let eval = Evaluator::new(board, params.color, params.eval);
    let max_depth = if eval.endgame() {
        params.depth + 2
    } else {
        params.depth
    };

    let my_lo = params.color.base_slot();
    let their_lo = params.color.opponent().base_slot();
    let mut searcher = Searcher {
        my_color: params.color,
        their_color: params.color.opponent(),
        my_lo,
        their_lo,
        max_depth,
        eval,
        board,
        promo,
    };

    let root_checks = Checks::of(searcher.board);
    let mut root = Window::root();
    let mut evals: Vec<(SquareByte, SquareByte, i32)> = Vec::new();

    for slot in my_lo..my_lo + 16 {
        if !searcher.board.is_live(slot) {
            continue;
        }
        let current = searcher.board.piece_byte(slot);
        for to in searcher.board.piece_moves(slot) {
            let mut value = searcher.my_ply(&root, root_checks, current, to, 0);
            if value > -100 - STALE && value <= -STALE {
                value = -value;
            }
            root.raise(value);
            evals.push((current, to, value));
        }
    }

    let mut chosen = None;
    let mut ties = 0usize;
    if root.alpha > IGNORE_MAX {
        for &(from, to, value) in &evals {
            if value == root.alpha {
                ties += 1;
                if rng.gen::<f64>() < 1.0 / ties as f64 {
                    chosen = Some((from, to));
                }
            }
        }
    }

    match root.alpha {
        WIN => searcher.board.set_game_over(GameStatus::ComputerWins),
        LOSS => searcher.board.set_game_over(GameStatus::HumanWins),
        STALE => searcher.board.set_game_over(GameStatus::Stalemate),
        _ => {}
    }

    SearchReport {
        chosen,
        score: root.alpha,
        depth: max_depth,
        moves: evals.len(),
        ties,
    }
}
