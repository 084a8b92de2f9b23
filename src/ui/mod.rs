//! GUI module for the Gomoku game
//!
//! Native window built on egui/eframe. The view only reads the session's
//! game state and forwards clicks and restarts to it.

mod app;
mod board_view;
mod theme;

pub use app::GomokuApp;
