#![allow(dead_code)]

use std::borrow::Cow;
use std::collections::HashMap;
use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use pacman_arcade::asset::{Asset, AssetSource, EmbeddedAssets};
use pacman_arcade::error::AssetError;
use pacman_arcade::texture::sprite::Atlas;

/// An RGBA image where every pixel encodes its own coordinates.
pub fn coordinate_image(width: u32, height: u32) -> RgbaImage {
    RgbaImage::from_fn(width, height, |x, y| Rgba([(x % 256) as u8, (y % 256) as u8, (x / 256) as u8, 255]))
}

pub fn coordinate_atlas(name: &'static str, width: u32, height: u32) -> Atlas {
    Atlas::new(name, DynamicImage::ImageRgba8(coordinate_image(width, height)))
}

pub fn encode_png(image: &DynamicImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png).unwrap();
    bytes
}

/// The embedded assets, with some of them replaced or removed.
#[derive(Default)]
pub struct PatchedAssets {
    patches: HashMap<Asset, Option<Vec<u8>>>,
}

impl PatchedAssets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, asset: Asset, bytes: impl Into<Vec<u8>>) -> Self {
        self.patches.insert(asset, Some(bytes.into()));
        self
    }

    pub fn without(mut self, asset: Asset) -> Self {
        self.patches.insert(asset, None);
        self
    }
}

impl AssetSource for PatchedAssets {
    fn get_bytes(&self, asset: Asset) -> Result<Cow<'static, [u8]>, AssetError> {
        match self.patches.get(&asset) {
            Some(Some(bytes)) => Ok(Cow::Owned(bytes.clone())),
            Some(None) => Err(AssetError::NotFound(asset.path().to_string())),
            None => EmbeddedAssets.get_bytes(asset),
        }
    }
}
