//! CLI enum types for bit order, padding, format, channel and dialect options.

use clap::ValueEnum;

use font_packer::encode::{BitOrder, Padding};
use font_packer::format::{Dialect, Format};
use font_packer::pixels::Channel;

/// Bit order within each packed byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Order {
    /// First pixel of a byte group in the least significant bit
    #[default]
    Lsb,
    /// First pixel of a byte group in the most significant bit
    Msb,
}

impl From<Order> for BitOrder {
    fn from(o: Order) -> Self {
        match o {
            Order::Lsb => BitOrder::Lsb,
            Order::Msb => BitOrder::Msb,
        }
    }
}

/// Boundary at which partial bytes are zero-padded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum PaddingMode {
    /// Only after the last glyph; bits of neighbouring glyphs may share a byte
    None,
    /// After every pixel row
    #[default]
    Row,
    /// After every glyph
    Char,
}

impl From<PaddingMode> for Padding {
    fn from(p: PaddingMode) -> Self {
        match p {
            PaddingMode::None => Padding::None,
            PaddingMode::Row => Padding::Row,
            PaddingMode::Char => Padding::Char,
        }
    }
}

/// Annotation level of the generated array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    Minified,
    #[default]
    Short,
    Long,
}

impl From<OutputFormat> for Format {
    fn from(f: OutputFormat) -> Self {
        match f {
            OutputFormat::Minified => Format::Minified,
            OutputFormat::Short => Format::Short,
            OutputFormat::Long => Format::Long,
        }
    }
}

/// Colour channel used for thresholding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorChannel {
    R,
    #[default]
    G,
    B,
}

impl From<ColorChannel> for Channel {
    fn from(c: ColorChannel) -> Self {
        match c {
            ColorChannel::R => Channel::Red,
            ColorChannel::G => Channel::Green,
            ColorChannel::B => Channel::Blue,
        }
    }
}

/// Declaration wrapped around the array.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum DeclarationDialect {
    Bare,
    C,
    #[default]
    Arduino,
}

impl From<DeclarationDialect> for Dialect {
    fn from(d: DeclarationDialect) -> Self {
        match d {
            DeclarationDialect::Bare => Dialect::Bare,
            DeclarationDialect::C => Dialect::C,
            DeclarationDialect::Arduino => Dialect::Arduino,
        }
    }
}
