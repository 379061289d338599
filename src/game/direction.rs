use glam::I8Vec2;
use strum_macros::{AsRefStr, EnumIter};

/// The four compass directions an entity can face on the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, EnumIter)]
#[repr(usize)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    #[default]
    North,
    East,
    South,
    West,
}

impl Direction {
    /// The four directions, clockwise from north.
    pub const DIRECTIONS: [Direction; 4] = [Direction::North, Direction::East, Direction::South, Direction::West];

    /// Returns the opposite direction. Constant time.
    pub const fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    /// Returns the unit grid step for this direction (rows grow downwards).
    pub fn as_ivec2(self) -> I8Vec2 {
        self.into()
    }

    /// Returns the direction as a usize (0-3), clockwise from north.
    pub const fn as_usize(self) -> usize {
        self as usize
    }
}

impl From<Direction> for I8Vec2 {
    fn from(dir: Direction) -> Self {
        match dir {
            Direction::North => -I8Vec2::Y,
            Direction::East => I8Vec2::X,
            Direction::South => I8Vec2::Y,
            Direction::West => -I8Vec2::X,
        }
    }
}
