//! Parsing of input lines into typed commands.

use crate::common::Color;
use crate::config::{MAX_BOARD_SIZE, MIN_BOARD_SIZE};
use crate::game::{PlayerKind, PlayerSpec};
use core::fmt;

/// A parsed input line. Keywords are case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `GAME N, TYPE1 C1, TYPE2 C2` - start a new game.
    NewGame {
        size: usize,
        player1: PlayerSpec,
        player2: PlayerSpec,
    },
    /// `MOVE X, Y`, or the bare shorthand `X,Y`.
    Move { x: i32, y: i32 },
    /// `BOARD` - print the current board.
    Board,
    /// `HELP` - print the command summary.
    Help,
    /// `EXIT` or `QUIT` - leave the program.
    Exit,
}

/// Errors produced while parsing a line. The `Display` text is the
/// user-visible message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandError {
    Malformed,
    SizeOutOfRange,
    BadColor,
    DuplicateColors,
}

impl fmt::Display for CommandError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CommandError::Malformed => write!(f, "Incorrect command"),
            CommandError::SizeOutOfRange => write!(
                f,
                "Board size must be between {} and {}",
                MIN_BOARD_SIZE, MAX_BOARD_SIZE
            ),
            CommandError::BadColor => write!(f, "Color must be W or B"),
            CommandError::DuplicateColors => write!(f, "Players must have different colors"),
        }
    }
}

/// Parse one trimmed, non-empty input line.
pub fn parse_command(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (keyword, rest) = match line.split_once(char::is_whitespace) {
        Some((k, r)) => (k, r.trim()),
        None => (line, ""),
    };
    if keyword.eq_ignore_ascii_case("GAME") {
        parse_game(rest)
    } else if keyword.eq_ignore_ascii_case("MOVE") {
        parse_move(rest)
    } else if keyword.eq_ignore_ascii_case("BOARD") {
        Ok(Command::Board)
    } else if keyword.eq_ignore_ascii_case("HELP") {
        Ok(Command::Help)
    } else if keyword.eq_ignore_ascii_case("EXIT") || keyword.eq_ignore_ascii_case("QUIT") {
        Ok(Command::Exit)
    } else {
        // bare `X,Y` placement shorthand
        parse_move(line)
    }
}

fn parse_game(args: &str) -> Result<Command, CommandError> {
    let mut parts = args.split(',');
    let size = parts.next().ok_or(CommandError::Malformed)?;
    let player1 = parts.next().ok_or(CommandError::Malformed)?;
    let player2 = parts.next().ok_or(CommandError::Malformed)?;
    if parts.next().is_some() {
        return Err(CommandError::Malformed);
    }
    let size: i64 = size.trim().parse().map_err(|_| CommandError::Malformed)?;
    if size < MIN_BOARD_SIZE as i64 || size > MAX_BOARD_SIZE as i64 {
        return Err(CommandError::SizeOutOfRange);
    }
    let player1 = parse_player(player1)?;
    let player2 = parse_player(player2)?;
    if player1.color == player2.color {
        return Err(CommandError::DuplicateColors);
    }
    Ok(Command::NewGame {
        size: size as usize,
        player1,
        player2,
    })
}

fn parse_player(arg: &str) -> Result<PlayerSpec, CommandError> {
    let mut words = arg.split_whitespace();
    let kind = words.next().ok_or(CommandError::Malformed)?;
    let color = words.next().ok_or(CommandError::Malformed)?;
    if words.next().is_some() {
        return Err(CommandError::Malformed);
    }
    let kind = if kind.eq_ignore_ascii_case("user") {
        PlayerKind::User
    } else if kind.eq_ignore_ascii_case("comp") {
        PlayerKind::Comp
    } else {
        return Err(CommandError::Malformed);
    };
    let mut chars = color.chars();
    let letter = chars.next().ok_or(CommandError::BadColor)?;
    if chars.next().is_some() {
        return Err(CommandError::BadColor);
    }
    let color = Color::from_char(letter).ok_or(CommandError::BadColor)?;
    Ok(PlayerSpec::new(kind, color))
}

fn parse_move(args: &str) -> Result<Command, CommandError> {
    let (x, y) = args.split_once(',').ok_or(CommandError::Malformed)?;
    let x: i32 = x.trim().parse().map_err(|_| CommandError::Malformed)?;
    let y: i32 = y.trim().parse().map_err(|_| CommandError::Malformed)?;
    Ok(Command::Move { x, y })
}
