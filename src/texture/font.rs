//! The arcade font handle.
//!
//! The font is parsed once at load time and shared by every text-drawing call afterwards.
//! Rasterizing glyphs is the renderer's business; this module only exposes the metrics
//! it needs for layout.

use std::borrow::Cow;
use std::fmt;

use ab_glyph::{Font, FontArc, PxScale, ScaleFont};
use tracing::debug;

use crate::asset::Asset;
use crate::error::{AssetError, ResultExt};

/// A parsed, scalable outline font. Cloning shares the parsed data.
#[derive(Clone)]
pub struct ArcadeFont {
    font: FontArc,
}

impl ArcadeFont {
    /// Parses font bytes, borrowing them when they live for the whole program.
    pub fn decode(asset: Asset, bytes: Cow<'static, [u8]>) -> Result<Self, AssetError> {
        let font = match bytes {
            Cow::Borrowed(slice) => FontArc::try_from_slice(slice),
            Cow::Owned(vec) => FontArc::try_from_vec(vec),
        }
        .for_asset(asset)?;
        debug!(glyphs = font.glyph_count(), "Parsed font");
        Ok(Self { font })
    }

    pub fn font(&self) -> &FontArc {
        &self.font
    }

    /// Whether the font has an outline for `c` (rather than falling back to `.notdef`).
    pub fn has_glyph(&self, c: char) -> bool {
        self.font.glyph_id(c).0 != 0
    }

    /// Horizontal advance of `text` at a pixel height of `px`, kerning included.
    pub fn text_width(&self, text: &str, px: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(px));
        let mut width = 0.0;
        let mut previous = None;
        for c in text.chars() {
            let glyph = scaled.glyph_id(c);
            if let Some(previous) = previous {
                width += scaled.kern(previous, glyph);
            }
            width += scaled.h_advance(glyph);
            previous = Some(glyph);
        }
        width
    }

    /// Distance between two baselines at a pixel height of `px`.
    pub fn line_height(&self, px: f32) -> f32 {
        let scaled = self.font.as_scaled(PxScale::from(px));
        scaled.height() + scaled.line_gap()
    }
}

impl fmt::Debug for ArcadeFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArcadeFont").field("glyphs", &self.font.glyph_count()).finish()
    }
}
