use std::fmt;

use glam::UVec2;
use image::{DynamicImage, ImageFormat};
use tracing::{debug, trace};

use crate::asset::Asset;
use crate::error::{AssetError, ResultExt, TextureError};

/// A rectangle within an atlas, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SpriteFrame {
    pub pos: UVec2,
    pub size: UVec2,
}

impl SpriteFrame {
    pub const fn new(x: u32, y: u32, width: u32, height: u32) -> Self {
        Self {
            pos: UVec2::new(x, y),
            size: UVec2::new(width, height),
        }
    }

    /// Exclusive right edge, `None` on overflow.
    pub fn right(&self) -> Option<u32> {
        self.pos.x.checked_add(self.size.x)
    }

    /// Exclusive bottom edge, `None` on overflow.
    pub fn bottom(&self) -> Option<u32> {
        self.pos.y.checked_add(self.size.y)
    }

    /// Whether the frame lies entirely within an image of the given size.
    pub fn fits_within(&self, bounds: UVec2) -> bool {
        self.right().is_some_and(|right| right <= bounds.x) && self.bottom().is_some_and(|bottom| bottom <= bounds.y)
    }

    /// Whether two frames share at least one pixel.
    pub fn overlaps(&self, other: &SpriteFrame) -> bool {
        let (Some(right), Some(bottom), Some(other_right), Some(other_bottom)) =
            (self.right(), self.bottom(), other.right(), other.bottom())
        else {
            return true;
        };
        self.pos.x < other_right && other.pos.x < right && self.pos.y < other_bottom && other.pos.y < bottom
    }
}

impl fmt::Display for SpriteFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}+{}+{}", self.size.x, self.size.y, self.pos.x, self.pos.y)
    }
}

/// An independently owned image holding one visual element.
///
/// Sprites are immutable once created; the pixel format is whatever the source image used.
#[derive(Debug, Clone, PartialEq)]
pub struct Sprite {
    image: DynamicImage,
}

impl Sprite {
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.image.width(), self.image.height())
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Raw pixel bytes in the sprite's native pixel layout.
    pub fn as_bytes(&self) -> &[u8] {
        self.image.as_bytes()
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

impl From<DynamicImage> for Sprite {
    fn from(image: DynamicImage) -> Self {
        Self { image }
    }
}

/// A decoded image with several sprites packed at fixed coordinates.
pub struct Atlas {
    name: &'static str,
    image: DynamicImage,
}

impl Atlas {
    pub fn new(name: &'static str, image: DynamicImage) -> Self {
        Self { name, image }
    }

    /// Decodes PNG bytes into an atlas named after the asset.
    pub fn decode(asset: Asset, bytes: &[u8]) -> Result<Self, AssetError> {
        let image = image::load_from_memory_with_format(bytes, ImageFormat::Png).for_asset(asset)?;
        debug!(atlas = asset.name(), width = image.width(), height = image.height(), "Decoded atlas");
        Ok(Self::new(asset.name(), image))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn size(&self) -> UVec2 {
        UVec2::new(self.image.width(), self.image.height())
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }

    /// Ensures the frame lies within the atlas.
    pub fn check(&self, frame: SpriteFrame) -> Result<(), TextureError> {
        if frame.fits_within(self.size()) {
            return Ok(());
        }
        Err(TextureError::OutOfBounds {
            atlas: self.name,
            frame,
            width: self.image.width(),
            height: self.image.height(),
        })
    }

    /// Copies the pixels inside `frame` into a new sprite.
    ///
    /// The copy is bit-exact: no scaling, no filtering, same pixel format as the atlas.
    /// Frames reaching past the atlas edge are rejected rather than clamped.
    pub fn extract(&self, frame: SpriteFrame) -> Result<Sprite, TextureError> {
        self.check(frame)?;
        trace!(atlas = self.name, %frame, "Extracting sprite");
        Ok(self.crop(frame))
    }

    /// Extracts every frame of a sprite table, in table order.
    ///
    /// All frames are checked before any pixels are copied, so an inconsistent table fails
    /// without allocating a single sprite.
    pub fn extract_all<K, const N: usize>(&self, table: &[(K, SpriteFrame); N]) -> Result<[Sprite; N], TextureError>
    where
        K: Copy + Into<&'static str>,
    {
        for &(key, frame) in table {
            self.check(frame).inspect_err(|_| {
                let sprite: &'static str = key.into();
                debug!(atlas = self.name, sprite, %frame, "Sprite frame outside atlas");
            })?;
        }
        Ok(std::array::from_fn(|i| self.crop(table[i].1)))
    }

    fn crop(&self, frame: SpriteFrame) -> Sprite {
        Sprite::from(self.image.crop_imm(frame.pos.x, frame.pos.y, frame.size.x, frame.size.y))
    }
}

/// Extracts a `width` x `height` sprite whose top-left corner sits at (`offset_x`, `offset_y`).
pub fn extract(width: u32, height: u32, offset_x: u32, offset_y: u32, atlas: &Atlas) -> Result<Sprite, TextureError> {
    atlas.extract(SpriteFrame::new(offset_x, offset_y, width, height))
}
