//! The engine player: wraps the alpha-beta search.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::board::search::{
    select_move, SearchLogger, SearchParams, SearchSummary, StdoutLogger,
};
use crate::board::{Board, Color, EvalKind, Piece, PromotionSource};

use super::{Player, PlayerMove, PromotionToggle};

/// The computer player. Owns its promotion toggle, a seedable RNG for
/// the root tie-break, and a logger for per-search summaries; the
/// search itself runs on the shared board through `select_move`.
pub struct Computer {
    color: Color,
    eval: EvalKind,
    depth: u32,
    promo: PromotionToggle,
    rng: StdRng,
    logger: Box<dyn SearchLogger>,
}

impl Computer {
    /// An engine seeded from the OS; games differ run to run.
    #[must_use]
    pub fn new(color: Color, eval: EvalKind, depth: u32) -> Self {
        Computer {
            color,
            eval,
            depth,
            promo: PromotionToggle::new(),
            rng: StdRng::from_entropy(),
            logger: Box::new(StdoutLogger),
        }
    }

    /// A reproducible engine: the same seed replays the same tie-break
    /// choices.
    #[must_use]
    pub fn with_seed(color: Color, eval: EvalKind, depth: u32, seed: u64) -> Self {
        let mut computer = Computer::new(color, eval, depth);
        computer.rng = StdRng::seed_from_u64(seed);
        computer
    }

    /// Replace the search logger.
    pub fn set_logger(&mut self, logger: Box<dyn SearchLogger>) {
        self.logger = logger;
    }
}

impl PromotionSource for Computer {
    fn choose_promotion(&mut self) -> Piece {
        self.promo.choose_promotion()
    }
}

impl Player for Computer {
    fn choose_move(&mut self, board: &mut Board) -> PlayerMove {
        let params = SearchParams {
            color: self.color,
            depth: self.depth,
            eval: self.eval,
        };
        let report = select_move(board, &mut self.promo, &mut self.rng, &params);

        self.logger.report(&SearchSummary {
            depth: report.depth,
            moves: report.moves,
            ties: report.ties,
            score: report.score,
            chosen: report.chosen,
        });

        match report.chosen {
            Some((from, to)) => PlayerMove::Move { from, to },
            None => PlayerMove::Resign,
        }
    }

    fn color(&self) -> Color {
        self.color
    }

    fn is_computer(&self) -> bool {
        true
    }
}
