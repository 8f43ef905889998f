#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod bitgrid;
mod board;
mod command;
mod common;
mod config;
mod game;
mod player;
mod player_comp;
#[cfg(feature = "std")]
mod cli;
#[cfg(feature = "std")]
mod logging;

pub use bitgrid::{BitGrid, BitGridError};
pub use board::*;
pub use command::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use player::*;
pub use player_comp::*;
#[cfg(feature = "std")]
pub use cli::*;
#[cfg(feature = "std")]
pub use logging::init_logging;
