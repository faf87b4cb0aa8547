//! Per-glyph sampling and packing.

use super::grid::GlyphCell;
use super::packer::BitPacker;
use super::params::{EncodeParams, Padding};
use crate::error::EncodeError;
use crate::pixels::PixelSource;

/// Thresholded pixels of one glyph, row by row, left to right.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BitMatrix {
    width: u32,
    rows: Vec<Vec<bool>>,
}

impl BitMatrix {
    pub fn new(width: u32) -> Self {
        Self {
            width,
            rows: Vec::new(),
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.rows.len() as u32
    }

    pub fn rows(&self) -> &[Vec<bool>] {
        &self.rows
    }

    /// Row rendered as `0`/`1` characters.
    pub fn row_string(&self, y: usize) -> String {
        self.rows
            .get(y)
            .map(|row| row.iter().map(|&bit| if bit { '1' } else { '0' }).collect())
            .unwrap_or_default()
    }
}

/// A glyph after packing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedGlyph {
    pub code: u32,
    /// Position in the output, `code - start`.
    pub index: u32,
    pub bits: BitMatrix,
    /// Bytes completed while each row was sampled. Bytes flushed after the
    /// final row belong to the last row.
    pub row_bytes: Vec<Vec<u8>>,
    /// Bits of a partial byte inherited from the previous glyph. Only
    /// non-zero with [`Padding::None`]; the glyph's first byte then straddles
    /// both glyphs.
    pub carried_in: u8,
}

impl EncodedGlyph {
    /// All bytes of the glyph in emission order.
    pub fn bytes(&self) -> Vec<u8> {
        self.row_bytes.iter().flatten().copied().collect()
    }
}

/// Samples glyph cells and drives the run's single [`BitPacker`].
pub struct GlyphEncoder<'a, S: PixelSource> {
    source: &'a S,
    params: &'a EncodeParams,
    packer: BitPacker,
}

impl<'a, S: PixelSource> GlyphEncoder<'a, S> {
    pub fn new(source: &'a S, params: &'a EncodeParams) -> Self {
        Self {
            source,
            params,
            packer: BitPacker::new(params.bit_order()),
        }
    }

    /// The accumulator carried between glyphs.
    pub fn packer(&self) -> &BitPacker {
        &self.packer
    }

    /// Encode one cell. `last` marks the final glyph of the run, after which
    /// any partial byte is padded out regardless of the padding policy.
    pub fn encode(&mut self, cell: GlyphCell, last: bool) -> Result<EncodedGlyph, EncodeError> {
        let (start, end) = (self.params.start(), self.params.end());
        if !(start..=end).contains(&cell.code) {
            return Err(EncodeError::CodeOutOfRange {
                code: cell.code,
                start,
                end,
            });
        }
        let width = self.params.char_width();
        let height = self.params.char_height();
        let padding = self.params.padding();
        let carried_in = self.packer.pending_bits();

        let clipped = cell.x.saturating_add(width) > self.source.width()
            || cell.y.saturating_add(height) > self.source.height();
        if clipped {
            log::debug!(
                "Glyph {} at ({}, {}) extends past the {}x{} image, clipping",
                cell.code,
                cell.x,
                cell.y,
                self.source.width(),
                self.source.height()
            );
        }

        let mut bits = BitMatrix::new(width);
        let mut row_bytes = Vec::with_capacity(height as usize);

        for dy in 0..height {
            let y = cell.y.saturating_add(dy);
            let mut row = Vec::with_capacity(width as usize);
            for dx in 0..width {
                let x = cell.x.saturating_add(dx);
                // Pixels outside the image read as unset.
                let bit = if x < self.source.width() && y < self.source.height() {
                    self.source.sample(x, y)?
                } else {
                    false
                };
                row.push(bit);
                self.packer.push(bit);
            }
            if padding == Padding::Row {
                self.packer.flush(true);
            }
            bits.rows.push(row);
            row_bytes.push(self.packer.take_emitted());
        }

        if padding == Padding::Char || last {
            self.packer.flush(true);
        }
        let tail = self.packer.take_emitted();
        if let Some(last_row) = row_bytes.last_mut() {
            last_row.extend(tail);
        }

        log::debug!(
            "Encoded glyph {} ({} bytes, {} bits pending)",
            cell.code,
            row_bytes.iter().map(Vec::len).sum::<usize>(),
            self.packer.pending_bits()
        );

        Ok(EncodedGlyph {
            code: cell.code,
            index: cell.code - start,
            bits,
            row_bytes,
            carried_in,
        })
    }
}
