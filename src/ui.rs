#![cfg(feature = "std")]

use std::fmt::Write;

use crate::{board::Board, common::CellStatus, config::BOARD_SIZE};

/// Render `board` as text. Undamaged ships are only drawn when `reveal_ships`
/// is set, so the same function serves the owner's and the opponent's view.
pub fn render_board(board: &Board, reveal_ships: bool) -> String {
    let mut out = String::new();
    out.push_str("   ");
    for x in 0..BOARD_SIZE {
        let _ = write!(out, " {}", x);
    }
    out.push('\n');
    for y in 0..BOARD_SIZE as i32 {
        let _ = write!(out, "{:2} ", y);
        for x in 0..BOARD_SIZE as i32 {
            let ch = match board.get((x, y).into()).unwrap_or_default() {
                CellStatus::Empty => '.',
                CellStatus::Ship if reveal_ships => 'S',
                CellStatus::Ship => '.',
                CellStatus::Miss => 'o',
                CellStatus::Shot => 'x',
                CellStatus::Killed => '#',
            };
            let _ = write!(out, " {}", ch);
        }
        out.push('\n');
    }
    out
}

/// Print both boards of a player side by side: own fleet and opponent view.
pub fn print_player_view(own: &Board, opponent: &Board) {
    let left = render_board(own, true);
    let right = render_board(opponent, false);
    std::println!("\n{:<25}   {}", "Your fleet", "Opponent");
    for (l, r) in left.lines().zip(right.lines()) {
        std::println!("{:<25}   {}", l, r);
    }
}
