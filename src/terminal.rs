//! Line-oriented presentation adapter
//!
//! Reads commands from any `BufRead`, writes the board and status to any
//! `Write`. Commands: `<row> <col>`, `restart`, `quit`.

use std::cell::RefCell;
use std::io::{self, BufRead, Write};
use std::rc::Rc;

use tracing::debug;

use crate::board::{Pos, Stone, BOARD_SIZE};
use crate::game::Game;
use crate::session::{GameEvent, GameObserver, Session};

/// Text rendering of the board, column numbers on top, row numbers on the left.
/// Both are the zero-based indices taken by `<row> <col>`.
pub fn render_board(game: &Game) -> String {
    let mut out = String::with_capacity((BOARD_SIZE + 1) * (BOARD_SIZE * 3 + 4));

    out.push_str("  ");
    for col in 0..BOARD_SIZE {
        out.push_str(&format!("{:>3}", col));
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        out.push_str(&format!("{:>2}", row));
        for col in 0..BOARD_SIZE {
            let pos = Pos::new(row as u8, col as u8);
            let symbol = match game.board().get(pos) {
                Stone::Black => 'X',
                Stone::White => 'O',
                Stone::Empty => '.',
            };
            let marker = if game.last_move() == Some(pos) { '>' } else { ' ' };
            out.push(' ');
            out.push(marker);
            out.push(symbol);
        }
        out.push('\n');
    }
    out
}

/// Observer that redraws into a shared buffer on every visible change
struct BoardPrinter {
    pending: Rc<RefCell<String>>,
}

impl GameObserver for BoardPrinter {
    fn on_event(&mut self, event: &GameEvent, game: &Game) {
        match event {
            GameEvent::StonePlaced { .. } | GameEvent::MoveRejected(_) => {}
            GameEvent::TurnChanged(_)
            | GameEvent::GameWon { .. }
            | GameEvent::GameDrawn
            | GameEvent::GameReset => {
                *self.pending.borrow_mut() = render_board(game);
            }
        }
    }
}

/// Run the terminal game until `quit` or end of input.
///
/// The board printer is attached to `session` only for the duration of the
/// call, so a session can be driven by several consecutive runs.
pub fn run<R: BufRead, W: Write>(session: &mut Session, input: R, mut output: W) -> io::Result<()> {
    let pending = Rc::new(RefCell::new(String::new()));
    let printer = session.subscribe(Box::new(BoardPrinter {
        pending: Rc::clone(&pending),
    }));

    let result = command_loop(session, input, &mut output, &pending);
    session.unsubscribe(printer);
    result
}

fn command_loop<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    output: &mut W,
    pending: &RefCell<String>,
) -> io::Result<()> {
    write!(output, "{}", render_board(session.game()))?;
    writeln!(output, "{}", session.message())?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        debug!(command, "terminal input");

        match command {
            "quit" | "exit" | "q" => break,
            "restart" | "reset" | "r" => session.on_reset_requested(),
            "" => continue,
            // Errors are already reflected in the session message
            text => {
                let _ = session.on_input(text);
            }
        }

        let board = std::mem::take(&mut *pending.borrow_mut());
        write!(output, "{}", board)?;
        writeln!(output, "{}", session.message())?;
        output.flush()?;
    }
    Ok(())
}
