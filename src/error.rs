//! Error types shared by the encoder and the conversion pipeline.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigFileError;

/// Invalid or contradictory encoding parameters.
///
/// Raised while resolving a [`RunConfig`](crate::encode::RunConfig), before
/// any glyph is sampled. A run that hits one of these writes no output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Cell pitch minus border leaves no columns for the glyph.
    #[error("character width must be positive (pitch {pitch}px minus border {border}px)")]
    NonPositiveWidth { pitch: u32, border: u32 },
    /// Glyph height of zero.
    #[error("character height must be positive")]
    NonPositiveHeight,
    /// End character resolves to a code before the start character.
    #[error("end character code {end} comes before start character code {start}")]
    ReversedRange { start: u32, end: u32 },
    /// Glyph side longer than the encoder will buffer.
    #[error("character {field} {value} exceeds the {max}px limit")]
    GlyphTooLarge {
        field: &'static str,
        value: u32,
        max: u32,
    },
    /// Glyph side plus border does not fit in a pixel coordinate.
    #[error("character {field} {size}px plus border {border}px overflows the cell pitch")]
    PitchOverflow {
        field: &'static str,
        size: u32,
        border: u32,
    },
    /// Metadata header values are written as array bytes and must fit in one.
    #[error("{field} {value} does not fit in the one-byte metadata header")]
    HeaderOverflow { field: &'static str, value: u32 },
    /// A start/end argument that is not exactly one character.
    #[error("expected a single character, got '{0}'")]
    NotSingleChar(String),
    /// A config file value outside the accepted set.
    #[error("invalid {key} '{value}' (expected one of: {expected})")]
    InvalidValue {
        key: &'static str,
        value: String,
        expected: String,
    },
    /// The image has no pixels to partition.
    #[error("image is empty ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },
}

/// Failures while encoding glyphs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncodeError {
    /// The encoder asked for a pixel outside the image. The grid clips cells
    /// to the image, so this indicates a bug rather than bad input.
    #[error("sample ({x}, {y}) is outside the {width}x{height} image")]
    SampleOutOfBounds {
        x: u32,
        y: u32,
        width: u32,
        height: u32,
    },
    /// A cell whose code lies outside the run's code range.
    #[error("glyph code {code} is outside the range {start}..={end}")]
    CodeOutOfRange { code: u32, start: u32, end: u32 },
}

/// Errors surfaced by an end-to-end conversion.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
    #[error(transparent)]
    Encode(#[from] EncodeError),
    #[error(transparent)]
    ConfigFile(#[from] ConfigFileError),
    #[error("no input image given (use --input)")]
    MissingInput,
    #[error("no character height given (use --height)")]
    MissingHeight,
    #[error("failed to decode image '{}': {source}", path.display())]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
    #[error("failed to write '{}': {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
