//! Terminal rendering for the arcade.
//!
//! Scenes only read game state (snapshots for the board, plain fields for
//! the bird); all mutation stays in the game logic modules.

pub mod flappy_scene;
pub mod game_common;
pub mod menu_scene;
pub mod tetris_scene;
