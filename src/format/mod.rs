//! Text rendering of encoded fonts.
//!
//! [`OutputFormatter`] turns an [`EncodedFont`](crate::encode::EncodedFont)
//! into the body of a byte array; [`Dialect`] wraps that body in a
//! declaration for a target language.

mod formatter;
mod wrapper;

pub use formatter::{ascii_label, FontMetadata, Format, OutputFormatter};
pub use wrapper::Dialect;
