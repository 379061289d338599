//! The passive world model shared with the game-logic systems.

pub mod direction;
pub mod state;
