//! Game options and the handoff slot that carries them.
//!
//! The producer of the initial position (a GUI, a file, a test) runs as
//! its own cooperative task. It fills a [`GameOptions`] value and
//! publishes it through an [`OptionsHandoff`]; the game thread polls a
//! shared flag at a coarse interval until the options land. Nothing
//! else crosses the boundary.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use parking_lot::Mutex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::Color;

pub const MIN_DEPTH: u32 = 2;
pub const MAX_DEPTH: u32 = 20;

/// How often the waiting side looks at the completion flag.
const POLL_INTERVAL: Duration = Duration::from_millis(500);

/// Everything the position producer decides: the 8x8 character grid
/// (uppercase black, lowercase white, `'\0'` empty, `'x'` in the A1
/// corner to reject), which color moves first, whether the human is the
/// first mover, the evaluator choice, and the search depth.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GameOptions {
    /// `board[file][rank]`
    pub board: [[char; 8]; 8],
    pub first_colour: Color,
    pub human_first: bool,
    pub simple_eval: bool,
    pub depth: u32,
}

impl GameOptions {
    /// Standard start, White and the human first, full evaluator,
    /// depth 4.
    #[must_use]
    pub fn new() -> Self {
        let back = ['R', 'N', 'B', 'Q', 'K', 'B', 'N', 'R'];
        let mut board = [['\0'; 8]; 8];
        for (file, &piece) in back.iter().enumerate() {
            board[file][0] = piece.to_ascii_lowercase();
            board[file][1] = 'p';
            board[file][6] = 'P';
            board[file][7] = piece;
        }
        GameOptions {
            board,
            first_colour: Color::White,
            human_first: true,
            simple_eval: false,
            depth: 4,
        }
    }

    /// Set the search depth, clamped into `[MIN_DEPTH, MAX_DEPTH]`.
    #[must_use]
    pub fn with_depth(mut self, depth: u32) -> Self {
        self.depth = depth.clamp(MIN_DEPTH, MAX_DEPTH);
        self
    }
}

impl Default for GameOptions {
    fn default() -> Self {
        GameOptions::new()
    }
}

/// One-shot channel built from a mutex-guarded slot and a completion
/// flag. The consumer polls every half second, which is plenty for a
/// human filling in a form.
#[derive(Clone)]
pub struct OptionsHandoff {
    slot: Arc<Mutex<Option<GameOptions>>>,
    ready: Arc<AtomicBool>,
}

impl OptionsHandoff {
    #[must_use]
    pub fn new() -> Self {
        OptionsHandoff {
            slot: Arc::new(Mutex::new(None)),
            ready: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Called by the producer once the options are complete.
    pub fn publish(&self, options: GameOptions) {
        *self.slot.lock() = Some(options);
        self.ready.store(true, Ordering::Release);
    }

    /// Block until the producer publishes, then take the options.
    #[must_use]
    pub fn wait(&self) -> GameOptions {
        while !self.ready.load(Ordering::Acquire) {
            thread::sleep(POLL_INTERVAL);
        }
        self.slot
            .lock()
            .take()
            .expect("ready flag set with an empty options slot")
    }
}

impl Default for OptionsHandoff {
    fn default() -> Self {
        OptionsHandoff::new()
    }
}
