//! font-packer library crate.
//!
//! Converts an image of a monospaced character grid into packed glyph bytes
//! and renders them as an annotated array body. The binary adds the CLI and
//! config file handling on top.

pub mod config;
pub mod encode;
pub mod error;
pub mod format;
pub mod output;
pub mod pipeline;
pub mod pixels;
