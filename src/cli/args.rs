//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::enums::{ColorChannel, DeclarationDialect, OutputFormat, Order, PaddingMode};

/// Parse a start/end argument that must be exactly one character.
pub fn parse_single_char(s: &str) -> Result<char, String> {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(format!("expected a single character, got '{}'", s)),
    }
}

/// Convert a BMP or PNG font sheet into a C/C++/Arduino byte array
#[derive(Parser, Debug)]
#[command(name = "font-packer")]
#[command(version, about = "Convert monospaced font images to packed byte arrays", long_about = None)]
#[command(after_help = "EXAMPLES:
    # 8x8 font, ASCII space to tilde, Arduino header next to the image
    font-packer --input font8x8.png --height 8

    # 5x7 glyphs in 6px cells, MSB first, rows packed per glyph, to stdout
    font-packer -i font5x7.bmp --width 6 --border 1 --height 7 --order msb --padding char -o -")]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the BMP or PNG font image
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Output file, directory, or '-' for stdout (default: next to the input)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// First character to encode
    #[arg(long, default_value = " ", value_parser = parse_single_char)]
    pub start: char,

    /// Last character to encode
    #[arg(long, default_value = "~", value_parser = parse_single_char)]
    pub end: char,

    /// Cell width including border (0: image width / 16)
    #[arg(long, default_value = "0")]
    pub width: u32,

    /// Character height
    #[arg(long)]
    pub height: Option<u32>,

    /// Border in pixels around each character
    #[arg(long)]
    pub border: Option<u32>,

    /// Annotation level of the array body
    #[arg(long, short)]
    pub format: Option<OutputFormat>,

    /// Bit order within each byte
    #[arg(long)]
    pub order: Option<Order>,

    /// Where partial bytes are zero-padded
    #[arg(long)]
    pub padding: Option<PaddingMode>,

    /// Colour channel used as monochrome source
    #[arg(long)]
    pub channel: Option<ColorChannel>,

    /// Declaration wrapped around the array
    #[arg(long, short, visible_alias = "mode")]
    pub dialect: Option<DeclarationDialect>,

    /// Array variable name (default: output file name)
    #[arg(long)]
    pub var: Option<String>,

    /// Write character width and height before the font data
    #[arg(long, overrides_with = "no_header")]
    pub header: bool,

    /// Leave out the metadata header even if the config file enables it
    #[arg(long, overrides_with = "header")]
    pub no_header: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,

    /// Log progress to stderr
    #[arg(long, short)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_defaults() {
        let args = Args::parse_from(["font-packer"]);
        assert!(args.command.is_none());
        assert!(args.input.is_none());
        assert!(args.output.is_none());
        assert_eq!(args.start, ' ');
        assert_eq!(args.end, '~');
        assert_eq!(args.width, 0);
        assert!(args.height.is_none());
        assert!(args.border.is_none());
        assert!(args.format.is_none());
        assert!(args.order.is_none());
        assert!(args.padding.is_none());
        assert!(args.channel.is_none());
        assert!(args.dialect.is_none());
        assert!(args.var.is_none());
        assert!(!args.header);
        assert!(!args.no_header);
        assert!(args.config.is_none());
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_single_char() {
        assert_eq!(parse_single_char("A"), Ok('A'));
        assert_eq!(parse_single_char("é"), Ok('é'));
        assert!(parse_single_char("").is_err());
        assert!(parse_single_char("AB").is_err());
    }

    #[test]
    fn test_args_start_end() {
        let args = Args::parse_from(["font-packer", "--start", "0", "--end", "9"]);
        assert_eq!(args.start, '0');
        assert_eq!(args.end, '9');

        assert!(Args::try_parse_from(["font-packer", "--start", "ab"]).is_err());
    }

    #[test]
    fn test_args_geometry() {
        let args = Args::parse_from([
            "font-packer",
            "--width",
            "6",
            "--height",
            "7",
            "--border",
            "1",
        ]);
        assert_eq!(args.width, 6);
        assert_eq!(args.height, Some(7));
        assert_eq!(args.border, Some(1));
    }

    #[test]
    fn test_args_enum_values() {
        let args = Args::parse_from([
            "font-packer",
            "--format",
            "long",
            "--order",
            "msb",
            "--padding",
            "none",
            "--channel",
            "r",
            "--dialect",
            "c",
        ]);
        assert_eq!(args.format, Some(OutputFormat::Long));
        assert_eq!(args.order, Some(Order::Msb));
        assert_eq!(args.padding, Some(PaddingMode::None));
        assert_eq!(args.channel, Some(ColorChannel::R));
        assert_eq!(args.dialect, Some(DeclarationDialect::C));

        let args = Args::parse_from(["font-packer", "--mode", "arduino", "-f", "minified"]);
        assert_eq!(args.dialect, Some(DeclarationDialect::Arduino));
        assert_eq!(args.format, Some(OutputFormat::Minified));
    }

    #[test]
    fn test_args_invalid_enum_value() {
        assert!(Args::try_parse_from(["font-packer", "--padding", "glyph"]).is_err());
    }

    #[test]
    fn test_args_paths_and_flags() {
        let args = Args::parse_from([
            "font-packer",
            "-i",
            "font.png",
            "-o",
            "-",
            "--var",
            "font8",
            "--header",
            "-c",
            "/tmp/fp.toml",
            "-v",
        ]);
        assert_eq!(args.input, Some(PathBuf::from("font.png")));
        assert_eq!(args.output, Some(PathBuf::from("-")));
        assert_eq!(args.var.as_deref(), Some("font8"));
        assert!(args.header);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/fp.toml")));
        assert!(args.verbose);
    }

    #[test]
    fn test_args_header_flags_last_one_wins() {
        let args = Args::parse_from(["font-packer", "--header", "--no-header"]);
        assert!(!args.header);
        assert!(args.no_header);

        let args = Args::parse_from(["font-packer", "--no-header", "--header"]);
        assert!(args.header);
        assert!(!args.no_header);
    }

    #[test]
    fn test_args_config_subcommands() {
        let args = Args::parse_from(["font-packer", "config", "show"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Show
            })
        ));

        let args = Args::parse_from(["font-packer", "config", "init"]);
        assert!(matches!(
            args.command,
            Some(Command::Config {
                action: ConfigAction::Init
            })
        ));
    }
}
