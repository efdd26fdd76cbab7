//! Flappy bird minigame.
//!
//! A bird under constant gravity flaps through the gaps of pipe pairs
//! scrolling in from the right. Hitting a pipe, the floor, or the ceiling
//! soft-resets the run in place; the game itself never ends.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
