//! Compile-time embedded game assets.
//!
//! Every asset the game needs is baked into the binary from `assets/game/`.
//! Resource identity is fixed at build time; there are no runtime paths.

use std::borrow::Cow;
use std::fmt;

use rust_embed::Embed;
use strum::IntoEnumIterator;

use crate::audio::Sound;
use crate::error::AssetError;

/// Every embedded resource the game loads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Asset {
    SkinImage,
    CharactersImage,
    PowersImage,
    WallsImage,
    ArcadeFont,
    SoundFile(Sound),
}

impl Asset {
    /// Returns an iterator over every asset, images first, then the font, then the sounds
    /// in loading order.
    pub fn iter() -> impl Iterator<Item = Asset> {
        [
            Asset::SkinImage,
            Asset::CharactersImage,
            Asset::PowersImage,
            Asset::WallsImage,
            Asset::ArcadeFont,
        ]
        .into_iter()
        .chain(Sound::iter().map(Asset::SoundFile))
    }

    /// Path of the asset relative to the embedded `assets/game/` folder.
    pub fn path(self) -> &'static str {
        match self {
            Asset::SkinImage => "images/skin.png",
            Asset::CharactersImage => "images/characters.png",
            Asset::PowersImage => "images/powers.png",
            Asset::WallsImage => "images/walls.png",
            Asset::ArcadeFont => "font/DejaVuSansMono.ttf",
            Asset::SoundFile(sound) => match sound {
                Sound::Beginning => "sound/beginning.mp3",
                Sound::Chomp => "sound/chomp.mp3",
                Sound::Death => "sound/death.mp3",
                Sound::EatFlask => "sound/eat_flask.mp3",
                Sound::EatGhost => "sound/eat_ghost.mp3",
                Sound::ExtraPac => "sound/extra_pac.mp3",
            },
        }
    }

    /// Short name used for atlases and log fields.
    pub fn name(self) -> &'static str {
        match self {
            Asset::SkinImage => "skin",
            Asset::CharactersImage => "characters",
            Asset::PowersImage => "powers",
            Asset::WallsImage => "walls",
            Asset::ArcadeFont => "arcade_font",
            Asset::SoundFile(sound) => sound.into(),
        }
    }

    /// Fetches the asset's bytes from the embedded folder.
    pub fn get_bytes(self) -> Result<Cow<'static, [u8]>, AssetError> {
        EmbeddedAssets.get_bytes(self)
    }
}

impl fmt::Display for Asset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// A provider of raw asset bytes.
///
/// The loaders only ever read through this trait, so a different provider can stand in
/// for the embedded folder (corrupted or truncated assets in tests, for instance).
pub trait AssetSource {
    fn get_bytes(&self, asset: Asset) -> Result<Cow<'static, [u8]>, AssetError>;
}

/// The `assets/game/` folder, embedded at compile time.
#[derive(Embed)]
#[folder = "assets/game/"]
pub struct EmbeddedAssets;

impl AssetSource for EmbeddedAssets {
    fn get_bytes(&self, asset: Asset) -> Result<Cow<'static, [u8]>, AssetError> {
        EmbeddedAssets::get(asset.path())
            .map(|file| file.data)
            .ok_or_else(|| AssetError::NotFound(asset.path().to_string()))
    }
}
