//! Bit-packing encoder for monospaced bitmap fonts.
//!
//! The image is cut into a grid of glyph cells ([`GlyphGrid`]); every pixel
//! of a cell is thresholded into one bit and fed through a [`BitPacker`] by
//! the [`GlyphEncoder`]. [`encode_font`] drives the whole run in code order.
//!
//! # Padding
//!
//! - [`Padding::Row`] zero-fills the partial byte at the end of every row.
//! - [`Padding::Char`] lets rows share bytes within a glyph and pads once per glyph.
//! - [`Padding::None`] pads only after the final glyph; a partial byte at the
//!   end of one glyph is continued by the next glyph's bits.

mod encoder;
mod grid;
mod packer;
mod params;

pub use encoder::{BitMatrix, EncodedGlyph, GlyphEncoder};
pub use grid::{GlyphCell, GlyphGrid, GridIter};
pub use packer::BitPacker;
pub use params::{BitOrder, EncodeParams, Padding, RunConfig};

use crate::error::EncodeError;
use crate::pixels::PixelSource;

/// Result of one encoding run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedFont {
    pub glyphs: Vec<EncodedGlyph>,
    /// Glyphs asked for by the code range.
    pub requested: u32,
}

impl EncodedFont {
    pub fn emitted(&self) -> u32 {
        self.glyphs.len() as u32
    }

    /// Glyphs requested but missing because the image ran out of cells.
    pub fn shortfall(&self) -> u32 {
        self.requested.saturating_sub(self.emitted())
    }

    /// Every byte of the font in output order.
    pub fn bytes(&self) -> Vec<u8> {
        self.glyphs.iter().flat_map(EncodedGlyph::bytes).collect()
    }
}

/// Encode every glyph in the code range of `params`.
///
/// Running out of grid cells before the end code is not an error; check
/// [`EncodedFont::shortfall`].
pub fn encode_font<S: PixelSource>(
    source: &S,
    params: &EncodeParams,
) -> Result<EncodedFont, EncodeError> {
    let grid = GlyphGrid::new(source.width(), source.height(), params);
    log::debug!(
        "Glyph grid: {}x{} cells, codes {}..={}",
        grid.columns(),
        grid.rows(),
        params.start(),
        params.end()
    );

    let mut encoder = GlyphEncoder::new(source, params);
    let mut glyphs = Vec::with_capacity(grid.iter().size_hint().0);
    let mut cells = grid.iter().peekable();

    while let Some(cell) = cells.next() {
        let last = cells.peek().is_none();
        glyphs.push(encoder.encode(cell, last)?);
    }

    Ok(EncodedFont {
        glyphs,
        requested: params.requested(),
    })
}
