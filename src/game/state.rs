//! Plain world-state containers.
//!
//! Nothing here enforces invariants; the game-logic systems own and mutate these values.

use bevy_ecs::resource::Resource;
use glam::{DVec2, IVec2};
use strum_macros::{AsRefStr, EnumIter};

use crate::constants::{CELL_LAYERS, COLUMNS, STARTING_LIVES, STARTING_SCORE};
use crate::game::direction::Direction;

/// The layer slots of one grid cell.
pub type Cell = [char; CELL_LAYERS];

/// One row of the playfield.
pub type Row = [Cell; COLUMNS];

/// The four ghosts, in the order they are packed into the characters atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum GhostKind {
    Ghost1,
    Ghost2,
    Ghost3,
    Ghost4,
}

/// What a power-up does when Pac-Man picks it up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum PowerKind {
    Life,
    Invincibility,
}

/// A grid position with a continuous offset inside the cell.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Position {
    pub cell: IVec2,
    pub offset: DVec2,
    pub direction: Direction,
}

impl Position {
    /// A position at the top-left of a cell, facing north.
    pub fn at_cell(x: i32, y: i32) -> Self {
        Self {
            cell: IVec2::new(x, y),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Pacman {
    pub position: Position,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Power {
    pub position: Position,
    pub kind: PowerKind,
}

impl Power {
    pub fn new(x: i32, y: i32, kind: PowerKind) -> Self {
        Self {
            position: Position::at_cell(x, y),
            kind,
        }
    }
}

/// The whole mutable state of one game session.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameData {
    pub grid: Vec<Row>,
    pub lives: u32,
    pub score: u32,
    pub pacman: Pacman,
    /// Vertical offset applied when drawing the grid, in pixels.
    pub grid_offset_y: f64,
    pub invincible: bool,
}

impl GameData {
    pub fn new() -> Self {
        Self {
            grid: Vec::new(),
            lives: STARTING_LIVES,
            score: STARTING_SCORE,
            pacman: Pacman::default(),
            grid_offset_y: 0.0,
            invincible: false,
        }
    }
}

impl Default for GameData {
    fn default() -> Self {
        Self::new()
    }
}
