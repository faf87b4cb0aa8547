//! Destination and array-name resolution for generated files.

use std::path::{Path, PathBuf};

use crate::format::Dialect;

/// Where the wrapped output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

impl Destination {
    /// Resolve the `--output` argument.
    ///
    /// `-` writes to stdout, an existing directory receives the fallback
    /// file name, any other path is used as is, and no argument places the
    /// fallback file next to the input image.
    pub fn resolve(output: Option<&Path>, input: &Path, dialect: Dialect) -> Self {
        let fallback = fallback_file_name(input, dialect);
        match output {
            Some(path) if path.as_os_str() == "-" => Destination::Stdout,
            Some(path) if path.is_dir() => {
                let file = path.join(&fallback);
                log::info!("Directory provided for output, saving to {}", file.display());
                Destination::File(file)
            }
            Some(path) => Destination::File(path.to_path_buf()),
            None => {
                let dir = input.parent().unwrap_or_else(|| Path::new(""));
                let file = dir.join(&fallback);
                log::info!("No output specified, saving to {}", file.display());
                Destination::File(file)
            }
        }
    }

    /// Array name derived from the destination file stem.
    pub fn default_var(&self, input: &Path, dialect: Dialect) -> String {
        let stem = match self {
            Destination::File(path) => path
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
            Destination::Stdout => Path::new(&fallback_file_name(input, dialect))
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_default(),
        };
        sanitize_identifier(&stem)
    }
}

/// `font_<input stem>.<ext>`.
pub fn fallback_file_name(input: &Path, dialect: Dialect) -> String {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    format!("font_{}.{}", stem, dialect.extension())
}

/// Replace every character outside `[A-Za-z0-9_]` with `_`.
pub fn sanitize_identifier(name: &str) -> String {
    name.chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect()
}
