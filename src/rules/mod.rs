//! Game rules for freestyle Gomoku
//!
//! - Win: five or more in a row on any axis through the last move
//! - Draw: board full without a win

pub mod win;

pub use win::{axis_count, check_win, is_draw, winning_line, DIRECTIONS, WIN_LENGTH};
