#![cfg(feature = "std")]
//! The read-eval-print loop over standard input and output.

use std::io::{self, BufRead, Write};

use log::debug;

use crate::command::{parse_command, Command};
use crate::common::{Color, GameError, MoveOutcome};
use crate::game::{GameEngine, GameStatus, PlayerKind, PlayerSpec};
use crate::player::Player;
use crate::player_comp::CompPlayer;

/// Outcome of processing one input line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Interactive session state: the running game plus the computer
/// controllers of any `comp` seats.
pub struct Session {
    game: GameEngine,
    controllers: [Option<Box<dyn Player>>; 2],
}

impl Session {
    /// A user-vs-user game on a `size`×`size` board is active from the
    /// start; `GAME` replaces it at any time.
    pub fn new(size: usize) -> Result<Self, GameError> {
        let player1 = PlayerSpec::new(PlayerKind::User, Color::White);
        let player2 = PlayerSpec::new(PlayerKind::User, Color::Black);
        let game = GameEngine::new(size, player1, player2)?;
        Ok(Session {
            game,
            controllers: [None, None],
        })
    }

    /// The game currently played in this session.
    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    fn install(&mut self, game: GameEngine) {
        let specs = *game.players();
        self.controllers = specs.map(|p| match p.kind {
            PlayerKind::Comp => Some(Box::new(CompPlayer::new()) as Box<dyn Player>),
            PlayerKind::User => None,
        });
        self.game = game;
    }

    /// Process one trimmed, non-empty input line, writing responses to `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Flow> {
        let command = match parse_command(line) {
            Ok(command) => command,
            Err(e) => {
                debug!("rejected input {:?}: {}", line, e);
                writeln!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };
        match command {
            Command::NewGame {
                size,
                player1,
                player2,
            } => match GameEngine::new(size, player1, player2) {
                Ok(game) => {
                    debug!("new {0}x{0} game", size);
                    self.install(game);
                    writeln!(out, "New game started")?;
                    self.run_computers(out)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Move { x, y } => match self.game.play(x, y) {
                Ok(outcome) => {
                    report(outcome, x, y, out)?;
                    self.run_computers(out)?;
                }
                Err(e) => writeln!(out, "{}", e)?,
            },
            Command::Board => write!(out, "{}", self.game.board())?,
            Command::Help => print_help(out)?,
            Command::Exit => {
                writeln!(out, "Goodbye!")?;
                return Ok(Flow::Quit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Let computer-controlled seats move while it is their turn and the
    /// game is still running.
    fn run_computers<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        while self.game.status() == GameStatus::InProgress {
            let seat = self.game.board().move_count() % 2;
            let controller = match self.controllers[seat].as_mut() {
                Some(controller) => controller,
                None => break,
            };
            let (x, y) = match controller.select_move(self.game.board()) {
                Some((x, y)) => (x as i32, y as i32),
                None => break,
            };
            match self.game.play(x, y) {
                Ok(outcome) => report(outcome, x, y, out)?,
                Err(e) => {
                    writeln!(out, "{}", e)?;
                    break;
                }
            }
        }
        Ok(())
    }
}

fn report<W: Write>(outcome: MoveOutcome, x: i32, y: i32, out: &mut W) -> io::Result<()> {
    writeln!(out, "{} ({}, {})", outcome.color(), x, y)?;
    match outcome {
        MoveOutcome::Win(color) => writeln!(out, "Game finished. {} wins!", color),
        MoveOutcome::Draw(_) => writeln!(out, "Game finished. Draw"),
        MoveOutcome::Placed(_) => Ok(()),
    }
}

fn print_help<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Available commands:")?;
    writeln!(
        out,
        "GAME N, TYPE1 C1, TYPE2 C2 - start new game (N > 2, TYPE: user/comp, C: W/B)"
    )?;
    writeln!(out, "MOVE X, Y - make a move (0 <= X,Y < N)")?;
    writeln!(out, "BOARD - print the current board")?;
    writeln!(out, "EXIT - exit the program")?;
    writeln!(out, "HELP - show this help")
}

/// Run the read-eval-print loop until EXIT, QUIT or end of input.
pub fn run<R: BufRead, W: Write>(mut input: R, mut out: W, mut session: Session) -> io::Result<()> {
    writeln!(out, "Squares Game. Type HELP for commands.")?;
    let mut line = String::new();
    loop {
        line.clear();
        if input.read_line(&mut line)? == 0 {
            debug!("input closed");
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if session.handle_line(trimmed, &mut out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}
