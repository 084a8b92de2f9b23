//! Two-player freestyle Gomoku
//!
//! Five in a row on a 15x15 board. Black moves first, players alternate,
//! and five or more stones in an unbroken line on any axis win. Overlines
//! count. A full board without a line is a draw.
//!
//! # Architecture
//!
//! - [`board`]: Board representation with bitboards
//! - [`rules`]: Win and draw conditions
//! - [`game`]: The game engine and its turn protocol
//! - [`session`]: Command dispatch and observer notifications
//! - [`ui`]: egui front end
//! - [`terminal`]: stdin/stdout front end
//! - [`config`]: Command-line options
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameStatus, MoveOutcome, Player, Session};
//!
//! let mut session = Session::new();
//! for (row, col) in [(7, 5), (0, 0), (7, 6), (0, 1), (7, 7), (0, 2), (7, 8), (0, 3)] {
//!     session.on_cell_activated(row, col).unwrap();
//! }
//!
//! let outcome = session.on_cell_activated(7, 9).unwrap();
//! assert!(matches!(outcome, MoveOutcome::Won { winner: Player::Black, .. }));
//! assert_eq!(session.game().status(), GameStatus::Won(Player::Black));
//! assert_eq!(session.message(), "Black wins!");
//!
//! session.on_reset_requested();
//! assert!(session.game().board().is_board_empty());
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod game;
pub mod rules;
pub mod session;
pub mod terminal;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE};
pub use error::{GameError, InvalidMoveReason};
pub use game::{Game, GameStatus, MoveOutcome};
pub use session::{GameEvent, GameObserver, ObserverId, Session, TracingObserver};
