use crate::board::Board;
use crate::common::{Color, GameError, MoveOutcome};
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};

/// Who controls a seat: keyboard input or the built-in computer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerKind {
    User,
    Comp,
}

/// One seat of a game: controller kind plus stone color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerSpec {
    pub kind: PlayerKind,
    pub color: Color,
}

impl PlayerSpec {
    pub fn new(kind: PlayerKind, color: Color) -> Self {
        PlayerSpec { kind, color }
    }
}

/// Current status of a game. `Won` and `Draw` are absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Color),
    Draw,
}

/// Core game logic holding the board, the two seats and the result.
#[derive(Debug)]
pub struct GameEngine {
    board: Board,
    players: [PlayerSpec; 2],
    status: GameStatus,
}

impl GameEngine {
    /// Start a game on an empty `size`×`size` board.
    pub fn new(size: usize, player1: PlayerSpec, player2: PlayerSpec) -> Result<Self, GameError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
            return Err(GameError::SizeOutOfRange { size });
        }
        if player1.color == player2.color {
            return Err(GameError::SameColor);
        }
        Ok(GameEngine {
            board: Board::new(size),
            players: [player1, player2],
            status: GameStatus::InProgress,
        })
    }

    /// Immutable view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// The two seats, in move order of an empty board.
    pub fn players(&self) -> &[PlayerSpec; 2] {
        &self.players
    }

    /// Seat to move, derived from stone-count parity.
    pub fn current_player(&self) -> PlayerSpec {
        self.players[self.board.move_count() % 2]
    }

    /// Color of the side to move.
    pub fn current_color(&self) -> Color {
        self.current_player().color
    }

    /// Place a stone for the side to move and update the game status.
    pub fn play(&mut self, x: i32, y: i32) -> Result<MoveOutcome, GameError> {
        if self.status != GameStatus::InProgress {
            return Err(GameError::NotRunning);
        }
        let size = self.board.size() as i32;
        if x < 0 || y < 0 || x >= size || y >= size {
            return Err(GameError::InvalidPosition { x, y });
        }
        let color = self.current_color();
        self.board.place(x as usize, y as usize, color)?;
        if self.board.has_square(color) {
            self.status = GameStatus::Won(color);
            Ok(MoveOutcome::Win(color))
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
            Ok(MoveOutcome::Draw(color))
        } else {
            Ok(MoveOutcome::Placed(color))
        }
    }
}
