//! Configuration file handling for font-packer.
//!
//! Loads encoding defaults from `~/.config/font-packer/config.toml` or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for font-packer.
/// Loaded from ~/.config/font-packer/config.toml (or custom path via --config).
///
/// Every value is optional; command-line flags override what is set here.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub encoding: EncodingConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub image: ImageConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct EncodingConfig {
    /// Bit order: lsb, msb
    pub order: Option<String>,
    /// Padding: none, row, char
    pub padding: Option<String>,
    pub border: Option<u32>,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Format: minified, short, long
    pub format: Option<String>,
    /// Dialect: bare, c, arduino
    pub dialect: Option<String>,
    #[serde(default)]
    pub header: bool,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ImageConfig {
    /// Channel: r, g, b
    pub channel: Option<String>,
}

impl Config {
    /// Load configuration from the default path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load() -> Result<Self, ConfigFileError> {
        let path = default_path();
        if path.exists() {
            Self::read(&path)
        } else {
            Ok(Config::default())
        }
    }

    /// Load configuration from a path given explicitly; the file must exist.
    pub fn load_from_explicit(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Err(ConfigFileError::NotFound(path.to_path_buf()));
        }
        Self::read(path)
    }

    fn read(path: &Path) -> Result<Self, ConfigFileError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigFileError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content).map_err(|e| ConfigFileError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read config file '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("font-packer").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/font-packer/config.toml")
        })
}

/// Commented default configuration written by `config init`.
pub const DEFAULT_CONFIG: &str = r#"# font-packer configuration

[encoding]
# Bit order within each byte: lsb, msb
order = "lsb"
# Where partial bytes are zero-padded: none, row, char
padding = "row"
# Border in pixels around each character
border = 0

[output]
# Annotation level: minified, short, long
format = "short"
# Declaration wrapper: bare, c, arduino
dialect = "arduino"
# Write character width and height before the font data
header = false

[image]
# Colour channel used as monochrome source: r, g, b
channel = "g"
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_empty_config() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert!(!config.output.header);
    }

    #[test]
    fn test_parse_default_config() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert_eq!(config.encoding.order.as_deref(), Some("lsb"));
        assert_eq!(config.encoding.padding.as_deref(), Some("row"));
        assert_eq!(config.encoding.border, Some(0));
        assert_eq!(config.output.format.as_deref(), Some("short"));
        assert_eq!(config.output.dialect.as_deref(), Some("arduino"));
        assert_eq!(config.image.channel.as_deref(), Some("g"));
    }

    #[test]
    fn test_parse_partial_config() {
        let config = Config::parse("[encoding]\npadding = \"char\"\n").unwrap();
        assert_eq!(config.encoding.padding.as_deref(), Some("char"));
        assert!(config.encoding.order.is_none());
        assert!(config.output.format.is_none());
    }

    #[test]
    fn test_parse_rejects_unknown_keys() {
        assert!(Config::parse("[encoding]\nwidth = 8\n").is_err());
    }

    #[test]
    fn test_load_from_explicit_missing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.toml");
        assert!(matches!(
            Config::load_from_explicit(&path),
            Err(ConfigFileError::NotFound(_))
        ));
    }

    #[test]
    fn test_load_from_explicit_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[output\nformat = 1").unwrap();
        let err = Config::load_from_explicit(&path).unwrap_err();
        assert!(matches!(err, ConfigFileError::Parse { .. }));
        assert!(err.to_string().contains("bad.toml"));
    }
}
