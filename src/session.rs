//! Command dispatch and state-change notifications
//!
//! A [`Session`] owns one [`Game`] and is the only thing presentation layers
//! talk to. Input comes in through [`Session::on_cell_activated`],
//! [`Session::on_input`] and [`Session::on_reset_requested`]; every state
//! change goes out as a [`GameEvent`] to the registered observers.

use tracing::{debug, info, instrument, warn};

use crate::board::{Player, Pos};
use crate::error::{GameError, InvalidMoveReason};
use crate::game::{Game, MoveOutcome};

/// Prompt shown before the first move
pub const START_PROMPT: &str = "Click the board to start";

/// Something that happened to the game
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    StonePlaced { pos: Pos, player: Player },
    TurnChanged(Player),
    GameWon { winner: Player, line: Vec<Pos> },
    GameDrawn,
    MoveRejected(GameError),
    GameReset,
}

impl GameEvent {
    /// Human-readable status line for this event, if it warrants one
    pub fn message(&self) -> Option<String> {
        match self {
            GameEvent::StonePlaced { .. } => None,
            GameEvent::TurnChanged(player) => Some(format!("{} to move", player)),
            GameEvent::GameWon { winner, .. } => Some(format!("{} wins!", winner)),
            GameEvent::GameDrawn => Some("Draw! The board is full".to_string()),
            GameEvent::MoveRejected(err) => Some(rejection_message(err)),
            GameEvent::GameReset => Some(START_PROMPT.to_string()),
        }
    }
}

fn rejection_message(err: &GameError) -> String {
    match err.reason() {
        InvalidMoveReason::Occupied => "That cell is already taken!".to_string(),
        reason => {
            let text = reason.to_string();
            let mut chars = text.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => text,
            }
        }
    }
}

/// Receives every state change of a session
pub trait GameObserver {
    fn on_event(&mut self, event: &GameEvent, game: &Game);
}

/// Logs every event through `tracing`
#[derive(Debug, Default)]
pub struct TracingObserver;

impl GameObserver for TracingObserver {
    fn on_event(&mut self, event: &GameEvent, game: &Game) {
        match event {
            GameEvent::StonePlaced { pos, player } => {
                debug!(%player, %pos, moves = game.move_count(), "stone placed")
            }
            GameEvent::TurnChanged(player) => debug!(%player, "turn changed"),
            GameEvent::GameWon { winner, line } => {
                info!(%winner, run = line.len(), moves = game.move_count(), "game won")
            }
            GameEvent::GameDrawn => info!(moves = game.move_count(), "game drawn"),
            GameEvent::MoveRejected(err) => warn!(error = %err, "move rejected"),
            GameEvent::GameReset => info!("new game"),
        }
    }
}

/// Handle returned by [`Session::subscribe`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// One play session: the game plus its observers
pub struct Session {
    game: Game,
    observers: Vec<(ObserverId, Box<dyn GameObserver>)>,
    next_observer: u64,
    message: String,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("game", &self.game)
            .field("observers", &self.observer_count())
            .field("message", &self.message)
            .finish()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            game: Game::new(),
            observers: Vec::new(),
            next_observer: 0,
            message: START_PROMPT.to_string(),
        }
    }

    /// Register an observer. It sees every event until unsubscribed.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver>) -> ObserverId {
        let id = ObserverId(self.next_observer);
        self.next_observer += 1;
        self.observers.push((id, observer));
        id
    }

    /// Detach an observer, returning it if it was registered
    pub fn unsubscribe(&mut self, id: ObserverId) -> Option<Box<dyn GameObserver>> {
        let idx = self.observers.iter().position(|(oid, _)| *oid == id)?;
        Some(self.observers.remove(idx).1)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Current status line for display
    pub fn message(&self) -> &str {
        &self.message
    }

    /// A cell was clicked or otherwise chosen
    #[instrument(level = "debug", skip(self))]
    pub fn on_cell_activated(&mut self, row: i32, col: i32) -> Result<MoveOutcome, GameError> {
        let mover = self.game.current_player();

        match self.game.play(row, col) {
            Ok(outcome) => {
                if let Some(pos) = self.game.last_move() {
                    self.emit(GameEvent::StonePlaced { pos, player: mover });
                }
                let event = match &outcome {
                    MoveOutcome::Continue { next } => GameEvent::TurnChanged(*next),
                    MoveOutcome::Won { winner, line } => GameEvent::GameWon {
                        winner: *winner,
                        line: line.clone(),
                    },
                    MoveOutcome::Drawn => GameEvent::GameDrawn,
                };
                self.emit(event);
                Ok(outcome)
            }
            Err(err) => {
                self.emit(GameEvent::MoveRejected(err.clone()));
                Err(err)
            }
        }
    }

    /// Raw text coordinates, `"row col"` or `"row,col"`.
    ///
    /// Anything that is not exactly two integers is rejected as an invalid
    /// move, same as an occupied cell.
    pub fn on_input(&mut self, text: &str) -> Result<MoveOutcome, GameError> {
        match parse_coords(text) {
            Ok((row, col)) => self.on_cell_activated(row, col),
            Err(err) => {
                self.emit(GameEvent::MoveRejected(err.clone()));
                Err(err)
            }
        }
    }

    /// Restart button or shortcut
    pub fn on_reset_requested(&mut self) {
        self.game.reset();
        self.emit(GameEvent::GameReset);
    }

    fn emit(&mut self, event: GameEvent) {
        if let Some(msg) = event.message() {
            self.message = msg;
        }
        for (_, observer) in self.observers.iter_mut() {
            observer.on_event(&event, &self.game);
        }
    }
}

/// Parse `"row col"` or `"row,col"` into signed coordinates
pub fn parse_coords(text: &str) -> Result<(i32, i32), GameError> {
    let malformed = || GameError::from(InvalidMoveReason::Malformed(text.trim().to_string()));

    let mut parts = text
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty());

    let row = parts.next().ok_or_else(malformed)?;
    let col = parts.next().ok_or_else(malformed)?;
    if parts.next().is_some() {
        return Err(malformed());
    }

    let row = row.parse::<i32>().map_err(|_| malformed())?;
    let col = col.parse::<i32>().map_err(|_| malformed())?;
    Ok((row, col))
}
