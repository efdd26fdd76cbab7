//! Falling-block minigame.
//!
//! Tetrominoes drop onto a fixed 20x10 board under a one-second gravity
//! tick. Arrow keys shift and rotate the falling piece; a piece that can no
//! longer descend locks into the board, full rows are swept, and the next
//! piece spawns at the top. Spawning onto settled cells ends the game.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
