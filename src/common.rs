//! Common types for Squares: stone colors, move outcomes and errors.

use crate::bitgrid::BitGridError;
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use core::fmt;

/// Stone color. The first seat of a game moves first, whatever its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Parse the single-letter color code used by the command grammar.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'W' => Some(Color::White),
            'B' => Some(Color::Black),
            _ => None,
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Color::White => 'W',
            Color::Black => 'B',
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// Result of an applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Stone placed, game continues.
    Placed(Color),
    /// The placed stone completed a square; its owner wins.
    Win(Color),
    /// The placed stone filled the board without a square.
    Draw(Color),
}

impl MoveOutcome {
    /// Color of the stone this outcome reports on.
    pub fn color(self) -> Color {
        match self {
            MoveOutcome::Placed(c) | MoveOutcome::Win(c) | MoveOutcome::Draw(c) => c,
        }
    }
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Position is outside the board.
    OutOfBounds { x: usize, y: usize },
    /// Cell already holds a stone.
    Occupied { x: usize, y: usize },
    /// Underlying bit grid error.
    Grid(BitGridError),
}

impl From<BitGridError> for BoardError {
    fn from(err: BitGridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::OutOfBounds { .. } => write!(f, "Invalid position"),
            BoardError::Occupied { .. } => write!(f, "Cell is not empty"),
            BoardError::Grid(e) => write!(f, "{}", e),
        }
    }
}

/// Errors returned by GameEngine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// No running game to apply the move to.
    NotRunning,
    /// Move coordinates are outside the board.
    InvalidPosition { x: i32, y: i32 },
    /// Requested board size is outside the supported range.
    SizeOutOfRange { size: usize },
    /// Both seats were configured with the same color.
    SameColor,
    /// Underlying board error.
    Board(BoardError),
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::NotRunning => write!(f, "Game not started"),
            GameError::InvalidPosition { .. } => write!(f, "Invalid position"),
            GameError::SizeOutOfRange { .. } => write!(
                f,
                "Board size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ),
            GameError::SameColor => write!(f, "Players must have different colors"),
            GameError::Board(e) => write!(f, "{}", e),
        }
    }
}
