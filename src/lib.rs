//! `flipstone` is a bitboard Othello/Reversi engine for UIs and sessions.
//!
//! The crate is split into two levels of abstraction:
//!
//!  - [`bitboard`] contains the raw directional shift-and-mask kernels over
//!    packed 64-bit boards. These are fast but unchecked: passing them an
//!    inconsistent board or a non-legal move is undefined.
//!  - [`Position`] wraps the kernels in the core game operations (legal-move
//!    generation, move application, game-over detection), and [`Game`] adds
//!    the turn-taking state machine with validated moves, forced passes and
//!    move-record replay.

pub mod bitboard;
pub mod test_utils;

mod board;
mod game;
mod location;
mod utils;

pub use board::*;
pub use game::*;
pub use location::*;

/// The number of spaces on one edge of an Othello board.
pub const EDGE_LENGTH: usize = 8;

/// The number of spaces on an Othello board.
pub const NUM_SPACES: usize = 64;
