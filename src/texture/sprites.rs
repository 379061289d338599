//! The fixed sprite tables for every atlas.
//!
//! Each atlas has one enum naming its sprites and one table of `(sprite, frame)` records.
//! The tables are the only place sprite geometry lives; moving a sprite within its sheet
//! means editing a row here.

use strum_macros::{Display, EnumIter, IntoStaticStr};

use crate::game::state::{GhostKind, PowerKind};
use crate::texture::sprite::SpriteFrame;

/// Sprites packed into the characters atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum CharacterSprite {
    Pacman,
    Ghost1,
    Ghost2,
    Ghost3,
    Ghost4,
}

impl From<GhostKind> for CharacterSprite {
    fn from(kind: GhostKind) -> Self {
        match kind {
            GhostKind::Ghost1 => CharacterSprite::Ghost1,
            GhostKind::Ghost2 => CharacterSprite::Ghost2,
            GhostKind::Ghost3 => CharacterSprite::Ghost3,
            GhostKind::Ghost4 => CharacterSprite::Ghost4,
        }
    }
}

/// Sprites packed into the powers atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum PowerSprite {
    Life,
    Invincibility,
}

impl From<PowerKind> for PowerSprite {
    fn from(kind: PowerKind) -> Self {
        match kind {
            PowerKind::Life => PowerSprite::Life,
            PowerKind::Invincibility => PowerSprite::Invincibility,
        }
    }
}

/// Sprites packed into the walls atlas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "snake_case")]
pub enum WallSprite {
    InactiveCorner,
    InactiveSide,
    ActiveCorner,
    ActiveSide,
}

pub const CHARACTER_FRAMES: [(CharacterSprite, SpriteFrame); 5] = [
    (CharacterSprite::Pacman, SpriteFrame::new(0, 0, 61, 64)),
    (CharacterSprite::Ghost1, SpriteFrame::new(66, 0, 56, 64)),
    (CharacterSprite::Ghost2, SpriteFrame::new(125, 0, 56, 64)),
    (CharacterSprite::Ghost3, SpriteFrame::new(185, 0, 56, 64)),
    (CharacterSprite::Ghost4, SpriteFrame::new(244, 0, 56, 64)),
];

pub const POWER_FRAMES: [(PowerSprite, SpriteFrame); 2] = [
    (PowerSprite::Life, SpriteFrame::new(0, 0, 64, 64)),
    (PowerSprite::Invincibility, SpriteFrame::new(67, 0, 64, 64)),
];

pub const WALL_FRAMES: [(WallSprite, SpriteFrame); 4] = [
    (WallSprite::InactiveCorner, SpriteFrame::new(0, 0, 12, 12)),
    (WallSprite::InactiveSide, SpriteFrame::new(12, 0, 40, 12)),
    (WallSprite::ActiveCorner, SpriteFrame::new(52, 0, 12, 12)),
    (WallSprite::ActiveSide, SpriteFrame::new(64, 0, 40, 12)),
];

/// Looks up the frame of a sprite in its table.
pub fn frame_of<K: PartialEq>(table: &[(K, SpriteFrame)], sprite: K) -> Option<SpriteFrame> {
    table.iter().find(|(key, _)| *key == sprite).map(|&(_, frame)| frame)
}
