//! Turn alternation between two players.

use crate::board::{Board, GameStatus};
use crate::player::{Player, PlayerMove};

/// Run a game to completion: poll each player in turn, commit the move
/// it returns, and stop when the search flags a terminal position, a
/// player resigns, or a returned move turns out unplayable. Computer
/// moves are echoed as `E2-E4` pairs; the final status string is
/// printed and returned.
pub fn run<'a>(board: &mut Board, first: &'a mut dyn Player, second: &'a mut dyn Player) -> GameStatus {
    let players = [first, second];
    let mut turn = 0;

    let status = loop {
        let mover = &mut *players[turn];

        match mover.choose_move(board) {
            PlayerMove::Resign => {
                break if mover.is_computer() {
                    GameStatus::HumanWins
                } else {
                    GameStatus::ComputerWins
                };
            }
            PlayerMove::Move { from, to } => {
                let color = mover.color();
                let announce = mover.is_computer();

                let mut committed = board.apply(&mut *players[turn], from, to);
                if committed && board.leaves_king_in_check(color) {
                    board.undo();
                    committed = false;
                }

                if announce {
                    println!("{from}-{to}");
                }

                if let Some(status) = board.game_over() {
                    break status;
                }

                if !committed {
                    // A player that produced an unplayable move has
                    // nothing better to offer.
                    break if players[turn].is_computer() {
                        GameStatus::HumanWins
                    } else {
                        GameStatus::ComputerWins
                    };
                }
            }
        }

        turn = 1 - turn;
    };

    println!("{status}");
    status
}
