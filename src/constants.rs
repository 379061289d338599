//! This module contains all the constants used in the game.

/// The number of cells in one row of the playfield grid.
pub const COLUMNS: usize = 28;

/// The number of layer slots tracked by each grid cell.
pub const CELL_LAYERS: usize = 4;

/// The number of lives Pac-Man starts a game with.
pub const STARTING_LIVES: u32 = 5;

/// The score a new game starts at.
pub const STARTING_SCORE: u32 = 1;
