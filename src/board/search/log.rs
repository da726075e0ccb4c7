//! Search reporting hook.

use super::super::types::SquareByte;

/// One root call's worth of reporting.
#[derive(Clone, Debug)]
pub struct SearchSummary {
    /// Effective depth searched (after any endgame extension)
    pub depth: u32,
    /// Root moves examined
    pub moves: usize,
    /// Moves tied for the best value
    pub ties: usize,
    /// The best value
    pub score: i32,
    /// The move picked among the ties
    pub chosen: Option<(SquareByte, SquareByte)>,
}

pub trait SearchLogger {
    fn report(&self, summary: &SearchSummary);
}

/// Prints one line per root call.
pub struct StdoutLogger;

impl SearchLogger for StdoutLogger {
    fn report(&self, summary: &SearchSummary) {
        let chosen = match summary.chosen {
            Some((from, to)) => format!("{from}-{to}"),
            None => "none".to_string(),
        };
        println!(
            "search depth {} moves {} ties {} score {} best {}",
            summary.depth, summary.moves, summary.ties, summary.score, chosen
        );
    }
}

/// Discards everything; used where the report would pollute stdout.
pub struct SilentLogger;

impl SearchLogger for SilentLogger {
    fn report(&self, _summary: &SearchSummary) {}
}
