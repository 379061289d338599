//! Loading of the visual resource bundle: the skin, the arcade font and the sprite groups.

use bevy_ecs::resource::Resource;
use tracing::{debug, info};

use crate::asset::{Asset, AssetSource, EmbeddedAssets};
use crate::error::{GameResult, TextureError};
use crate::game::state::{GhostKind, PowerKind};
use crate::texture::font::ArcadeFont;
use crate::texture::sprite::{Atlas, Sprite};
use crate::texture::sprites::{CharacterSprite, PowerSprite, WallSprite, CHARACTER_FRAMES, POWER_FRAMES, WALL_FRAMES};

/// Pac-Man and the four ghosts.
#[derive(Debug, Clone, PartialEq)]
pub struct Characters {
    pub pacman: Sprite,
    pub ghost1: Sprite,
    pub ghost2: Sprite,
    pub ghost3: Sprite,
    pub ghost4: Sprite,
}

impl Characters {
    pub fn extract(atlas: &Atlas) -> Result<Self, TextureError> {
        let [pacman, ghost1, ghost2, ghost3, ghost4] = atlas.extract_all(&CHARACTER_FRAMES)?;
        Ok(Self {
            pacman,
            ghost1,
            ghost2,
            ghost3,
            ghost4,
        })
    }

    pub fn get(&self, sprite: CharacterSprite) -> &Sprite {
        match sprite {
            CharacterSprite::Pacman => &self.pacman,
            CharacterSprite::Ghost1 => &self.ghost1,
            CharacterSprite::Ghost2 => &self.ghost2,
            CharacterSprite::Ghost3 => &self.ghost3,
            CharacterSprite::Ghost4 => &self.ghost4,
        }
    }

    pub fn ghost(&self, kind: GhostKind) -> &Sprite {
        self.get(kind.into())
    }
}

/// The power-up icons.
#[derive(Debug, Clone, PartialEq)]
pub struct Powers {
    pub life: Sprite,
    pub invincibility: Sprite,
}

impl Powers {
    pub fn extract(atlas: &Atlas) -> Result<Self, TextureError> {
        let [life, invincibility] = atlas.extract_all(&POWER_FRAMES)?;
        Ok(Self { life, invincibility })
    }

    pub fn get(&self, sprite: PowerSprite) -> &Sprite {
        match sprite {
            PowerSprite::Life => &self.life,
            PowerSprite::Invincibility => &self.invincibility,
        }
    }

    pub fn power(&self, kind: PowerKind) -> &Sprite {
        self.get(kind.into())
    }
}

/// Wall tiles, in an inactive and an active variant.
#[derive(Debug, Clone, PartialEq)]
pub struct Walls {
    pub active_corner: Sprite,
    pub active_side: Sprite,
    pub inactive_corner: Sprite,
    pub inactive_side: Sprite,
}

impl Walls {
    pub fn extract(atlas: &Atlas) -> Result<Self, TextureError> {
        let [inactive_corner, inactive_side, active_corner, active_side] = atlas.extract_all(&WALL_FRAMES)?;
        Ok(Self {
            active_corner,
            active_side,
            inactive_corner,
            inactive_side,
        })
    }

    pub fn get(&self, sprite: WallSprite) -> &Sprite {
        match sprite {
            WallSprite::InactiveCorner => &self.inactive_corner,
            WallSprite::InactiveSide => &self.inactive_side,
            WallSprite::ActiveCorner => &self.active_corner,
            WallSprite::ActiveSide => &self.active_side,
        }
    }
}

/// Everything the renderer needs, addressed by name rather than by coordinate.
#[derive(Resource, Debug, Clone)]
pub struct ResourceBundle {
    pub arcade_font: ArcadeFont,
    pub skin: Sprite,
    pub characters: Characters,
    pub powers: Powers,
    pub walls: Walls,
}

/// Decodes the embedded images and font into a [`ResourceBundle`].
///
/// Every step runs in a fixed order and the first failure is returned as is; the caller
/// never sees a bundle with missing fields.
///
/// # Errors
///
/// Returns `GameError::Asset` when an embedded resource is missing or cannot be decoded,
/// and `GameError::Texture` when a sprite frame does not fit its atlas.
pub fn load_assets() -> GameResult<ResourceBundle> {
    load_assets_from(&EmbeddedAssets)
}

/// Like [`load_assets`], reading the resources from `source`.
pub fn load_assets_from(source: &impl AssetSource) -> GameResult<ResourceBundle> {
    info!("Loading visual resources");

    debug!("Decoding skin");
    let skin = Sprite::from(load_atlas(source, Asset::SkinImage)?.into_image());

    debug!("Parsing arcade font");
    let arcade_font = ArcadeFont::decode(Asset::ArcadeFont, source.get_bytes(Asset::ArcadeFont)?)?;

    debug!("Extracting character sprites");
    let characters = Characters::extract(&load_atlas(source, Asset::CharactersImage)?)?;

    debug!("Extracting power sprites");
    let powers = Powers::extract(&load_atlas(source, Asset::PowersImage)?)?;

    debug!("Extracting wall sprites");
    let walls = Walls::extract(&load_atlas(source, Asset::WallsImage)?)?;

    info!("Visual resources loaded");
    Ok(ResourceBundle {
        arcade_font,
        skin,
        characters,
        powers,
        walls,
    })
}

fn load_atlas(source: &impl AssetSource, asset: Asset) -> GameResult<Atlas> {
    let bytes = source.get_bytes(asset)?;
    Ok(Atlas::decode(asset, &bytes)?)
}
