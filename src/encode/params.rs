//! Encoding parameters: the raw run configuration and its resolved form.

use crate::error::ConfigurationError;
use crate::format::{FontMetadata, Format};
use crate::pixels::Channel;

/// Longest glyph side in pixels. Every glyph is buffered whole, even one
/// that lies entirely past the image edge.
pub const MAX_GLYPH_SIDE: u32 = 4096;

/// Placement of the first sampled pixel of a byte group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BitOrder {
    /// First pixel lands in bit 0.
    #[default]
    Lsb,
    /// First pixel lands in bit 7.
    Msb,
}

impl BitOrder {
    pub fn name(&self) -> &'static str {
        match self {
            BitOrder::Lsb => "lsb",
            BitOrder::Msb => "msb",
        }
    }
}

/// Boundary at which a partial byte is zero-filled and emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// Only after the last glyph of the run. Partial bytes carry across glyphs.
    None,
    /// After every glyph row.
    #[default]
    Row,
    /// After every glyph.
    Char,
}

impl Padding {
    pub fn name(&self) -> &'static str {
        match self {
            Padding::None => "none",
            Padding::Row => "row",
            Padding::Char => "char",
        }
    }
}

/// Settings for one run as the user gave them, before they are checked
/// against the image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Horizontal cell pitch including the border; `0` derives `image_width / 16`.
    pub char_width: u32,
    pub char_height: u32,
    pub border: u32,
    pub start: char,
    pub end: char,
    pub bit_order: BitOrder,
    pub padding: Padding,
    pub format: Format,
    pub channel: Channel,
    /// Emit the width/height metadata header before the glyph data.
    pub header: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            char_width: 0,
            char_height: 8,
            border: 0,
            start: ' ',
            end: '~',
            bit_order: BitOrder::default(),
            padding: Padding::default(),
            format: Format::default(),
            channel: Channel::default(),
            header: false,
        }
    }
}

/// Validated encoding parameters for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeParams {
    char_width: u32,
    char_height: u32,
    border: u32,
    start: u32,
    end: u32,
    bit_order: BitOrder,
    padding: Padding,
}

impl EncodeParams {
    /// Build parameters from an effective glyph size.
    ///
    /// `char_width` here is the glyph width proper, with the border already
    /// taken off.
    pub fn new(
        char_width: u32,
        char_height: u32,
        border: u32,
        start: u32,
        end: u32,
        bit_order: BitOrder,
        padding: Padding,
    ) -> Result<Self, ConfigurationError> {
        if char_width == 0 {
            return Err(ConfigurationError::NonPositiveWidth {
                pitch: border,
                border,
            });
        }
        if char_height == 0 {
            return Err(ConfigurationError::NonPositiveHeight);
        }
        for (field, size) in [("width", char_width), ("height", char_height)] {
            if size > MAX_GLYPH_SIDE {
                return Err(ConfigurationError::GlyphTooLarge {
                    field,
                    value: size,
                    max: MAX_GLYPH_SIDE,
                });
            }
            if size.checked_add(border).is_none() {
                return Err(ConfigurationError::PitchOverflow {
                    field,
                    size,
                    border,
                });
            }
        }
        if end < start {
            return Err(ConfigurationError::ReversedRange { start, end });
        }
        Ok(Self {
            char_width,
            char_height,
            border,
            start,
            end,
            bit_order,
            padding,
        })
    }

    /// Resolve a run configuration against the image dimensions.
    pub fn resolve(
        run: &RunConfig,
        image_width: u32,
        image_height: u32,
    ) -> Result<Self, ConfigurationError> {
        if image_width == 0 || image_height == 0 {
            return Err(ConfigurationError::EmptyImage {
                width: image_width,
                height: image_height,
            });
        }

        let pitch = if run.char_width == 0 {
            image_width / 16
        } else {
            run.char_width
        };
        let char_width = pitch.saturating_sub(run.border);
        if char_width == 0 {
            return Err(ConfigurationError::NonPositiveWidth {
                pitch,
                border: run.border,
            });
        }

        let params = Self::new(
            char_width,
            run.char_height,
            run.border,
            run.start as u32,
            run.end as u32,
            run.bit_order,
            run.padding,
        )?;
        if run.header {
            FontMetadata::from(&params).header_bytes()?;
        }
        Ok(params)
    }

    /// Horizontal and vertical cell pitch, glyph plus border.
    pub fn pitch(&self) -> (u32, u32) {
        (
            self.char_width + self.border,
            self.char_height + self.border,
        )
    }

    pub fn char_width(&self) -> u32 {
        self.char_width
    }

    pub fn char_height(&self) -> u32 {
        self.char_height
    }

    pub fn border(&self) -> u32 {
        self.border
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    pub fn bit_order(&self) -> BitOrder {
        self.bit_order
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Number of glyphs the code range asks for.
    pub fn requested(&self) -> u32 {
        self.end - self.start + 1
    }
}
