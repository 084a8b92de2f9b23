//! Win and draw conditions for freestyle Gomoku
//!
//! Five or more stones in a row win. Overlines count, there is no
//! renju-style restriction. Draw is a full board with no winner.

use crate::board::{Board, Player, Pos};

/// Number of stones in a row needed to win
pub const WIN_LENGTH: usize = 5;

/// Direction vectors for line checking (4 axes)
pub const DIRECTIONS: [(i32, i32); 4] = [
    (0, 1),  // Horizontal
    (1, 0),  // Vertical
    (1, 1),  // Diagonal SE
    (1, -1), // Anti-diagonal SW
];

/// Contiguous stones of `player` from `pos` (exclusive) along `(dr, dc)`
#[inline]
fn run_length(board: &Board, pos: Pos, dr: i32, dc: i32, player: Player) -> usize {
    let stone = player.stone();
    (1..)
        .map_while(|n| pos.offset(dr, dc, n))
        .take_while(|&p| board.get(p) == stone)
        .count()
}

/// Length of the run through `pos` on one axis, counting `pos` itself
#[inline]
pub fn axis_count(board: &Board, pos: Pos, (dr, dc): (i32, i32), player: Player) -> usize {
    1 + run_length(board, pos, dr, dc, player) + run_length(board, pos, -dr, -dc, player)
}

/// Incremental win check anchored at the last placed stone.
///
/// Only the four axes through `pos` are scanned; a new five can only
/// appear through the stone that was just played.
#[inline]
pub fn check_win(board: &Board, pos: Pos, player: Player) -> bool {
    DIRECTIONS
        .iter()
        .any(|&dir| axis_count(board, pos, dir, player) >= WIN_LENGTH)
}

/// The full winning run through `pos`, ordered from one end to the other.
///
/// Returns every stone of the run (five or more) on the first axis that
/// wins, `None` if no axis does.
pub fn winning_line(board: &Board, pos: Pos, player: Player) -> Option<Vec<Pos>> {
    for &(dr, dc) in &DIRECTIONS {
        let back = run_length(board, pos, -dr, -dc, player) as i32;
        let forward = run_length(board, pos, dr, dc, player) as i32;

        if (back + forward + 1) as usize >= WIN_LENGTH {
            let line = (-back..=forward)
                .filter_map(|n| pos.offset(dr, dc, n))
                .collect();
            return Some(line);
        }
    }
    None
}

/// Board is full. Callers check for a win first.
#[inline]
pub fn is_draw(board: &Board) -> bool {
    board.is_full()
}
