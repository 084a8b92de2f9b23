//! Game engine: board ownership, turn protocol and terminal states
//!
//! The engine knows nothing about rendering. Presentation layers drive it
//! through [`crate::session::Session`] and read state back through the
//! accessors here.

use tracing::{debug, info, instrument};

use crate::board::{Board, Player, Pos, Stone};
use crate::error::{GameError, InvalidMoveReason};
use crate::rules;

/// Where the game stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Player),
    Drawn,
}

impl GameStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of one successful move
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Game goes on, `next` is to move
    Continue { next: Player },
    /// The mover completed five or more in a row
    Won { winner: Player, line: Vec<Pos> },
    /// The move filled the board without a line
    Drawn,
}

/// A single game of freestyle Gomoku on a 15x15 board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    board: Board,
    current_player: Player,
    status: GameStatus,
    last_move: Option<Pos>,
    winning_line: Option<Vec<Pos>>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Empty board, Black to move
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::Black,
            status: GameStatus::InProgress,
            last_move: None,
            winning_line: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn is_game_over(&self) -> bool {
        self.status.is_terminal()
    }

    pub fn winner(&self) -> Option<Player> {
        match self.status {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.last_move
    }

    /// Stones of the completing run once the game is won
    pub fn winning_line(&self) -> Option<&[Pos]> {
        self.winning_line.as_deref()
    }

    /// Stones on the board
    pub fn move_count(&self) -> u32 {
        self.board.stone_count()
    }

    /// Cell contents, `None` if the coordinates are off the board
    pub fn cell(&self, row: i32, col: i32) -> Option<Stone> {
        Pos::checked(row, col).map(|pos| self.board.get(pos))
    }

    /// Put `player`'s stone on `(row, col)`.
    ///
    /// Fails with [`GameError::InvalidMove`] if the game is over, the
    /// position is off the board, it is not `player`'s turn, or the cell is
    /// taken. On failure nothing changes. This neither evaluates the move
    /// nor passes the turn, so it is only reachable through [`Game::play`].
    pub(crate) fn place(&mut self, row: i32, col: i32, player: Player) -> Result<Pos, GameError> {
        if self.is_game_over() {
            return Err(InvalidMoveReason::GameOver.into());
        }

        let pos = Pos::checked(row, col).ok_or(InvalidMoveReason::OutOfBounds { row, col })?;

        if player != self.current_player {
            return Err(InvalidMoveReason::WrongTurn {
                expected: self.current_player,
            }
            .into());
        }

        if !self.board.is_empty(pos) {
            return Err(InvalidMoveReason::Occupied.into());
        }

        self.board.place_stone(pos, player);
        self.last_move = Some(pos);
        Ok(pos)
    }

    /// Whether the stone at `pos` completes five or more for `player`
    pub fn check_win(&self, pos: Pos, player: Player) -> bool {
        rules::check_win(&self.board, pos, player)
    }

    /// Every cell is occupied
    pub fn check_draw(&self) -> bool {
        rules::is_draw(&self.board)
    }

    /// Play one turn for the player to move.
    ///
    /// Win is evaluated before draw, so a move that fills the board and
    /// completes a line is a win. The turn passes only when the game goes on.
    #[instrument(level = "debug", skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, row: i32, col: i32) -> Result<MoveOutcome, GameError> {
        let player = self.current_player;
        let pos = self.place(row, col, player)?;

        if self.check_win(pos, player) {
            let line = rules::winning_line(&self.board, pos, player).unwrap_or_else(|| vec![pos]);
            info!(winner = %player, %pos, len = line.len(), "five in a row");
            self.status = GameStatus::Won(player);
            self.winning_line = Some(line.clone());
            return Ok(MoveOutcome::Won { winner: player, line });
        }

        if self.check_draw() {
            info!("board full, game drawn");
            self.status = GameStatus::Drawn;
            return Ok(MoveOutcome::Drawn);
        }

        self.current_player = player.opponent();
        debug!(%pos, next = %self.current_player, "stone placed");
        Ok(MoveOutcome::Continue {
            next: self.current_player,
        })
    }

    /// Replace the whole state with a fresh game
    pub fn reset(&mut self) {
        *self = Game::new();
        debug!("game reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{BOARD_SIZE, TOTAL_CELLS};
    use proptest::prelude::*;

    /// Colouring of the full board with no run longer than two on any axis.
    /// 113 black cells, 112 white.
    fn draw_pattern(row: usize, col: usize) -> Player {
        if (col + 2 * row) % 4 < 2 {
            Player::Black
        } else {
            Player::White
        }
    }

    /// Alternating move list that fills the board following `draw_pattern`
    fn drawn_game_moves() -> Vec<(i32, i32)> {
        let (black, white): (Vec<Pos>, Vec<Pos>) = (0..TOTAL_CELLS)
            .map(Pos::from_index)
            .partition(|p| draw_pattern(p.row as usize, p.col as usize) == Player::Black);
        assert_eq!(black.len(), white.len() + 1);

        let mut moves = Vec::with_capacity(TOTAL_CELLS);
        for (i, b) in black.iter().enumerate() {
            moves.push((b.row as i32, b.col as i32));
            if let Some(w) = white.get(i) {
                moves.push((w.row as i32, w.col as i32));
            }
        }
        moves
    }

    fn play_all(game: &mut Game, moves: &[(i32, i32)]) -> MoveOutcome {
        let mut last = None;
        for &(r, c) in moves {
            last = Some(game.play(r, c).unwrap());
        }
        last.unwrap()
    }

    #[test]
    fn test_initial_state() {
        let game = Game::new();
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.is_game_over());
        assert_eq!(game.winner(), None);
        assert!(game.board().is_board_empty());
        assert_eq!(game.last_move(), None);
    }

    #[test]
    fn test_place_sets_cell() {
        let mut game = Game::new();
        let pos = game.place(7, 7, Player::Black).unwrap();
        assert_eq!(pos, Pos::new(7, 7));
        assert_eq!(game.cell(7, 7), Some(Stone::Black));
        assert_eq!(game.last_move(), Some(pos));
    }

    #[test]
    fn test_place_occupied_is_rejected() {
        let mut game = Game::new();
        game.play(7, 7).unwrap();
        let before = game.clone();

        let err = game.play(7, 7).unwrap_err();
        assert_eq!(err, GameError::InvalidMove(InvalidMoveReason::Occupied));
        assert_eq!(game, before);
    }

    #[test]
    fn test_place_out_of_bounds() {
        let mut game = Game::new();
        for (r, c) in [(-1, 0), (0, -1), (15, 0), (0, 15), (i32::MAX, i32::MIN)] {
            let err = game.play(r, c).unwrap_err();
            assert_eq!(
                err.reason(),
                &InvalidMoveReason::OutOfBounds { row: r, col: c }
            );
        }
        assert_eq!(game, Game::new());
    }

    #[test]
    fn test_place_wrong_turn() {
        let mut game = Game::new();
        let err = game.place(0, 0, Player::White).unwrap_err();
        assert_eq!(
            err.reason(),
            &InvalidMoveReason::WrongTurn {
                expected: Player::Black
            }
        );
        assert_eq!(game.cell(0, 0), Some(Stone::Empty));
    }

    #[test]
    fn test_same_colour_cannot_move_twice() {
        let mut game = Game::new();
        game.play(7, 7).unwrap();

        let err = game.place(7, 8, Player::Black).unwrap_err();
        assert_eq!(
            err.reason(),
            &InvalidMoveReason::WrongTurn {
                expected: Player::White
            }
        );
        assert_eq!(game.cell(7, 8), Some(Stone::Empty));

        game.place(7, 8, Player::White).unwrap();
        assert_eq!(game.cell(7, 8), Some(Stone::White));
    }

    #[test]
    fn test_play_alternates_colours_on_every_move() {
        let mut game = Game::new();
        let moves = [(7, 7), (7, 8), (8, 7), (8, 8), (9, 7)];
        for (i, &(r, c)) in moves.iter().enumerate() {
            game.play(r, c).unwrap();
            let expected = if i % 2 == 0 { Stone::Black } else { Stone::White };
            assert_eq!(game.cell(r, c), Some(expected));
        }
        assert_eq!(game.current_player(), Player::White);
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::new();
        assert_eq!(
            game.play(0, 0).unwrap(),
            MoveOutcome::Continue { next: Player::White }
        );
        assert_eq!(game.current_player(), Player::White);
        game.play(0, 1).unwrap();
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.cell(0, 1), Some(Stone::White));
    }

    #[test]
    fn test_horizontal_win_for_black() {
        let mut game = Game::new();
        let outcome = play_all(
            &mut game,
            &[
                (7, 5), (0, 0),
                (7, 6), (0, 2),
                (7, 7), (0, 4),
                (7, 8), (0, 6),
                (7, 9),
            ],
        );

        match outcome {
            MoveOutcome::Won { winner, line } => {
                assert_eq!(winner, Player::Black);
                assert_eq!(line, (5..=9).map(|c| Pos::new(7, c)).collect::<Vec<_>>());
            }
            other => panic!("expected win, got {:?}", other),
        }
        assert_eq!(game.status(), GameStatus::Won(Player::Black));
        assert_eq!(game.winner(), Some(Player::Black));
        // Winner keeps the turn
        assert_eq!(game.current_player(), Player::Black);
        assert_eq!(game.winning_line().map(|l| l.len()), Some(5));
    }

    #[test]
    fn test_each_axis_wins_independently() {
        let axes: [(i32, i32, i32, i32); 4] = [
            (3, 2, 0, 1),  // horizontal
            (2, 3, 1, 0),  // vertical
            (2, 2, 1, 1),  // diagonal
            (2, 12, 1, -1), // anti-diagonal
        ];

        for (r0, c0, dr, dc) in axes {
            let mut game = Game::new();
            let mut moves = Vec::new();
            for i in 0..5 {
                moves.push((r0 + dr * i, c0 + dc * i));
                if i < 4 {
                    // White plays far away on the bottom row
                    moves.push((14, i * 2));
                }
            }
            let outcome = play_all(&mut game, &moves);
            assert!(
                matches!(outcome, MoveOutcome::Won { winner: Player::Black, .. }),
                "axis ({}, {}) not detected",
                dr,
                dc
            );
        }
    }

    #[test]
    fn test_white_can_win() {
        let mut game = Game::new();
        let outcome = play_all(
            &mut game,
            &[
                (0, 0), (5, 5),
                (0, 2), (6, 5),
                (0, 4), (7, 5),
                (0, 6), (8, 5),
                (0, 8), (9, 5),
            ],
        );
        assert!(matches!(outcome, MoveOutcome::Won { winner: Player::White, .. }));
    }

    #[test]
    fn test_overline_is_a_win() {
        let mut game = Game::new();
        // Black fills the gap between two pairs and a single: 6 in a row
        let outcome = play_all(
            &mut game,
            &[
                (4, 0), (10, 0),
                (4, 1), (10, 2),
                (4, 3), (10, 4),
                (4, 4), (10, 6),
                (4, 5), (10, 8),
                (4, 2),
            ],
        );
        match outcome {
            MoveOutcome::Won { winner, line } => {
                assert_eq!(winner, Player::Black);
                assert_eq!(line.len(), 6);
            }
            other => panic!("expected win, got {:?}", other),
        }
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut game = Game::new();
        play_all(
            &mut game,
            &[(7, 5), (0, 0), (7, 6), (0, 2), (7, 7), (0, 4), (7, 8), (0, 6), (7, 9)],
        );
        let before = game.clone();
        let err = game.play(1, 1).unwrap_err();
        assert_eq!(err.reason(), &InvalidMoveReason::GameOver);
        assert_eq!(game, before);
    }

    #[test]
    fn test_full_board_without_line_is_drawn() {
        let mut game = Game::new();
        let moves = drawn_game_moves();
        assert_eq!(moves.len(), BOARD_SIZE * BOARD_SIZE);

        let outcome = play_all(&mut game, &moves);
        assert_eq!(outcome, MoveOutcome::Drawn);
        assert_eq!(game.status(), GameStatus::Drawn);
        assert!(game.is_game_over());
        assert_eq!(game.winner(), None);
        assert!(game.check_draw());

        let err = game.play(0, 0).unwrap_err();
        assert_eq!(err.reason(), &InvalidMoveReason::GameOver);
    }

    #[test]
    fn test_last_move_filling_board_with_five_is_win() {
        let last = Pos::new(0, 4);
        let mut game = Game::new();
        for pos in (0..TOTAL_CELLS).map(Pos::from_index).filter(|&p| p != last) {
            let player = if pos.row == 0 && pos.col < 4 {
                Player::Black
            } else {
                draw_pattern(pos.row as usize, pos.col as usize)
            };
            game.board.place_stone(pos, player);
        }
        assert!(!game.check_draw());

        let outcome = game.play(0, 4).unwrap();
        assert!(game.check_draw());
        assert!(matches!(outcome, MoveOutcome::Won { winner: Player::Black, .. }));
        assert_eq!(game.status(), GameStatus::Won(Player::Black));
    }

    #[test]
    fn test_reset_from_each_state() {
        // Mid-game
        let mut game = Game::new();
        game.play(3, 3).unwrap();
        game.reset();
        assert_eq!(game, Game::new());

        // Won
        play_all(
            &mut game,
            &[(7, 5), (0, 0), (7, 6), (0, 2), (7, 7), (0, 4), (7, 8), (0, 6), (7, 9)],
        );
        assert!(game.is_game_over());
        game.reset();
        assert_eq!(game, Game::new());
        assert!(game.winning_line().is_none());

        // Drawn
        play_all(&mut game, &drawn_game_moves());
        assert_eq!(game.status(), GameStatus::Drawn);
        game.reset();
        assert!(game.board().is_board_empty());
        assert_eq!(game.current_player(), Player::Black);
        assert!(!game.is_game_over());
    }

    proptest! {
        #[test]
        fn prop_empty_cell_accepts_stone(moves in prop::collection::vec((0i32..15, 0i32..15), 1..40)) {
            let mut game = Game::new();
            for (r, c) in moves {
                if game.is_game_over() {
                    break;
                }
                let mover = game.current_player();
                let was_empty = game.cell(r, c) == Some(Stone::Empty);
                let before = game.clone();

                match game.play(r, c) {
                    Ok(outcome) => {
                        prop_assert!(was_empty);
                        prop_assert_eq!(game.cell(r, c), Some(mover.stone()));
                        if let MoveOutcome::Continue { next } = outcome {
                            prop_assert_eq!(next, mover.opponent());
                            prop_assert_eq!(game.current_player(), mover.opponent());
                        }
                    }
                    Err(err) => {
                        prop_assert!(!was_empty);
                        prop_assert_eq!(err.reason(), &InvalidMoveReason::Occupied);
                        prop_assert_eq!(&game, &before);
                    }
                }
            }
        }

        #[test]
        fn prop_out_of_bounds_never_mutates(r in -50i32..50, c in -50i32..50) {
            prop_assume!(!Pos::is_valid(r, c));
            let mut game = Game::new();
            prop_assert!(game.play(r, c).is_err());
            prop_assert_eq!(game, Game::new());
        }
    }
}
