//! Centralized error types for the Pac-Man game.
//!
//! Every loading step surfaces its failure through these types. Nothing in the
//! loading pipeline recovers locally; the caller is expected to treat any
//! `GameError` coming out of a load as fatal.

use bevy_ecs::event::Event;

use crate::asset::Asset;
use crate::audio::Sound;
use crate::texture::sprite::SpriteFrame;

/// Main error type for the Pac-Man game.
///
/// This is the primary error type that should be used in public APIs.
#[derive(thiserror::Error, Debug, Event)]
pub enum GameError {
    #[error("Asset error: {0}")]
    Asset(#[from] AssetError),

    #[error("Texture error: {0}")]
    Texture(#[from] TextureError),

    #[error("Audio error: {0}")]
    Audio(#[from] AudioError),
}

#[derive(thiserror::Error, Debug)]
pub enum AssetError {
    #[error("Asset not found: {0}")]
    NotFound(String),

    #[error("Failed to decode {asset}: {source}")]
    Decode {
        asset: Asset,
        #[source]
        source: DecodeError,
    },
}

/// The embedded bytes of an asset could not be parsed as the expected format.
#[derive(thiserror::Error, Debug)]
pub enum DecodeError {
    #[error("invalid image: {0}")]
    Image(#[from] image::ImageError),

    #[error("invalid font: {0}")]
    Font(#[from] ab_glyph::InvalidFont),

    #[error("invalid sound: {0}")]
    Sound(String),
}

/// Errors related to sprite extraction.
#[derive(thiserror::Error, Debug)]
pub enum TextureError {
    #[error("Frame {frame} exceeds the bounds of the '{atlas}' atlas ({width}x{height})")]
    OutOfBounds {
        atlas: &'static str,
        frame: SpriteFrame,
        width: u32,
        height: u32,
    },
}

/// Errors related to the audio context.
#[derive(thiserror::Error, Debug)]
pub enum AudioError {
    #[error("Could not bind {sound} to the audio context: {reason}")]
    ContextBinding { sound: Sound, reason: String },

    #[error("Could not play {sound}: {reason}")]
    Playback { sound: Sound, reason: String },
}

/// Result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

/// Extension trait for tagging decoder failures with the asset they came from.
pub trait ResultExt<T> {
    fn for_asset(self, asset: Asset) -> Result<T, AssetError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<DecodeError>,
{
    fn for_asset(self, asset: Asset) -> Result<T, AssetError> {
        self.map_err(|e| AssetError::Decode {
            asset,
            source: e.into(),
        })
    }
}
