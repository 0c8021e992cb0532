//! Utilities used for testing and benchmarking.

pub mod perft;

mod play;
pub use play::play_interactive;
