//! End-to-end conversion of a font image into a wrapped byte array.
//!
//! Stages, in order:
//!
//! 1. Decode the image and pick one colour channel ([`ChannelBuffer`])
//! 2. Resolve the run configuration against the image size ([`EncodeParams`])
//! 3. Encode every glyph in the code range ([`encode_font`])
//! 4. Render the body ([`OutputFormatter`]) and wrap it ([`Dialect`])
//! 5. Write the result to a file or stdout
//!
//! Configuration problems surface in stage 2, before anything is written.

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::encode::{encode_font, EncodeParams, EncodedFont, RunConfig};
use crate::error::PipelineError;
use crate::format::{Dialect, FontMetadata, OutputFormatter};
use crate::output::Destination;
use crate::pixels::{ChannelBuffer, PixelSource};

/// Everything needed to convert one image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Job {
    pub input: PathBuf,
    /// `-` for stdout, a directory, a file, or `None` for a file next to the input.
    pub output: Option<PathBuf>,
    /// Array name; derived from the destination when `None`.
    pub var: Option<String>,
    pub dialect: Dialect,
    pub run: RunConfig,
}

/// Outcome of a successful conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub destination: Destination,
    pub emitted: u32,
    pub requested: u32,
}

impl Report {
    /// Glyphs requested but not present in the image.
    pub fn shortfall(&self) -> u32 {
        self.requested.saturating_sub(self.emitted)
    }
}

/// Encode `source` and render the wrapped declaration.
pub fn render<S: PixelSource>(
    source: &S,
    run: &RunConfig,
    dialect: Dialect,
    var: &str,
) -> Result<(String, EncodedFont), PipelineError> {
    let params = EncodeParams::resolve(run, source.width(), source.height())?;
    log::info!(
        "Encoding {}x{} glyphs (border {}), codes {}..={}, {} order, {} padding",
        params.char_width(),
        params.char_height(),
        params.border(),
        params.start(),
        params.end(),
        params.bit_order().name(),
        params.padding().name()
    );

    let font = encode_font(source, &params)?;
    if font.shortfall() > 0 {
        log::warn!(
            "Image holds only {} of the {} requested glyphs",
            font.emitted(),
            font.requested
        );
    }

    let body =
        OutputFormatter::new(run.format, run.header).render(&font, &FontMetadata::from(&params))?;
    Ok((dialect.wrap(var, &body), font))
}

/// Load the image, convert it and write the output.
pub fn convert(job: &Job) -> Result<Report, PipelineError> {
    let image = image::open(&job.input).map_err(|e| PipelineError::Image {
        path: job.input.clone(),
        source: e,
    })?;
    let source = ChannelBuffer::from_image(&image, job.run.channel);
    log::info!(
        "Loaded {} ({}x{}, channel {})",
        job.input.display(),
        source.width(),
        source.height(),
        job.run.channel.name()
    );

    let destination = Destination::resolve(job.output.as_deref(), &job.input, job.dialect);
    let var = job
        .var
        .clone()
        .unwrap_or_else(|| destination.default_var(&job.input, job.dialect));

    let (text, font) = render(&source, &job.run, job.dialect, &var)?;
    write_output(&destination, &text)?;

    Ok(Report {
        destination,
        emitted: font.emitted(),
        requested: font.requested,
    })
}

fn write_output(destination: &Destination, text: &str) -> Result<(), PipelineError> {
    match destination {
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(text.as_bytes())
                .and_then(|_| stdout.flush())
                .map_err(|e| PipelineError::Write {
                    path: PathBuf::from("-"),
                    source: e,
                })
        }
        Destination::File(path) => write_file(path, text),
    }
}

fn write_file(path: &Path, text: &str) -> Result<(), PipelineError> {
    std::fs::write(path, text).map_err(|e| PipelineError::Write {
        path: path.to_path_buf(),
        source: e,
    })?;
    log::info!("Wrote {} bytes to {}", text.len(), path.display());
    Ok(())
}
