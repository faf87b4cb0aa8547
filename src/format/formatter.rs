//! Byte-array body rendering at three verbosity levels.

use crate::encode::{BitOrder, EncodedFont, EncodedGlyph, EncodeParams};
use crate::error::ConfigurationError;

/// Annotation density of the rendered body.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Format {
    /// Bytes only, on a single line.
    Minified,
    /// One line per glyph with an index/character comment.
    #[default]
    Short,
    /// A header comment per glyph and one line per pixel row with its bits.
    Long,
}

impl Format {
    pub fn name(&self) -> &'static str {
        match self {
            Format::Minified => "minified",
            Format::Short => "short",
            Format::Long => "long",
        }
    }
}

/// Run facts written in the optional metadata header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontMetadata {
    pub char_width: u32,
    pub char_height: u32,
    pub bit_order: BitOrder,
}

impl FontMetadata {
    /// Width and height as the two header bytes of the array.
    pub fn header_bytes(&self) -> Result<[u8; 2], ConfigurationError> {
        let byte = |field, value: u32| {
            u8::try_from(value).map_err(|_| ConfigurationError::HeaderOverflow { field, value })
        };
        Ok([
            byte("width", self.char_width)?,
            byte("height", self.char_height)?,
        ])
    }
}

impl From<&EncodeParams> for FontMetadata {
    fn from(params: &EncodeParams) -> Self {
        Self {
            char_width: params.char_width(),
            char_height: params.char_height(),
            bit_order: params.bit_order(),
        }
    }
}

/// Quoted character for printable ASCII codes (32..=126), `None` otherwise.
pub fn ascii_label(code: u32) -> Option<char> {
    if (32..=126).contains(&code) {
        char::from_u32(code)
    } else {
        None
    }
}

fn hex_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("0x{:02X}", b))
        .collect::<Vec<_>>()
        .join(",")
}

/// Prefix `comment` with the bytes, or leave just the comment when there are none.
fn annotated_line(bytes: &[u8], comment: &str) -> String {
    if bytes.is_empty() {
        format!("\t{}", comment)
    } else {
        format!("\t{}, {}", hex_list(bytes), comment)
    }
}

/// Renders the body of the array: lines start with a tab and are joined by
/// `\n`, with no trailing newline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputFormatter {
    format: Format,
    header: bool,
}

impl OutputFormatter {
    pub fn new(format: Format, header: bool) -> Self {
        Self { format, header }
    }

    /// Render the body. Fails only when the header is on and the glyph size
    /// does not fit in its bytes.
    pub fn render(
        &self,
        font: &EncodedFont,
        metadata: &FontMetadata,
    ) -> Result<String, ConfigurationError> {
        let header = if self.header {
            Some(metadata.header_bytes()?)
        } else {
            None
        };
        let lines = match self.format {
            Format::Minified => render_minified(font, header),
            Format::Short => render_annotated(font, header, metadata.bit_order, short_lines),
            Format::Long => render_annotated(font, header, metadata.bit_order, long_lines),
        };
        Ok(lines.join("\n"))
    }
}

fn render_minified(font: &EncodedFont, header: Option<[u8; 2]>) -> Vec<String> {
    let mut bytes = Vec::new();
    if let Some(header) = header {
        bytes.extend(header);
    }
    bytes.extend(font.bytes());
    if bytes.is_empty() {
        return Vec::new();
    }
    vec![format!("\t{}", hex_list(&bytes))]
}

fn render_annotated(
    font: &EncodedFont,
    header: Option<[u8; 2]>,
    bit_order: BitOrder,
    glyph_lines: fn(&EncodedGlyph, &mut Vec<String>),
) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some([width, height]) = header {
        lines.push(format!(
            "\t/* width: */ {}, /* height: */ {}, /* bit order: {} */",
            width,
            height,
            bit_order.name()
        ));
    }
    for glyph in &font.glyphs {
        glyph_lines(glyph, &mut lines);
    }
    lines
}

fn short_lines(glyph: &EncodedGlyph, lines: &mut Vec<String>) {
    let label = match ascii_label(glyph.code) {
        Some(c) => format!("'{}'", c),
        None => "???".to_string(),
    };
    let comment = format!("/* [{}] {} ({}) */", glyph.index, label, glyph.code);
    lines.push(annotated_line(&glyph.bytes(), &comment));
}

fn long_lines(glyph: &EncodedGlyph, lines: &mut Vec<String>) {
    let label = match ascii_label(glyph.code) {
        Some(c) => format!("ascii=\"{}\"", c),
        None => "(non-ascii)".to_string(),
    };
    let carry = if glyph.carried_in > 0 {
        format!(" carry={}", glyph.carried_in)
    } else {
        String::new()
    };
    lines.push(format!(
        "\t/* index={} code={} hex=0x{:02X} {}{} */",
        glyph.index, glyph.code, glyph.code, label, carry
    ));

    for (y, bytes) in glyph.row_bytes.iter().enumerate() {
        let comment = format!("/* {} */", glyph.bits.row_string(y));
        lines.push(annotated_line(bytes, &comment));
    }
}
