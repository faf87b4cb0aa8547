//! Merge command-line flags with the config file into a conversion job.
//!
//! Precedence: CLI args > config file > built-in defaults.

use clap::ValueEnum;

use font_packer::config::Config;
use font_packer::encode::RunConfig;
use font_packer::error::{ConfigurationError, PipelineError};
use font_packer::pipeline::Job;

use super::args::Args;
use super::enums::{ColorChannel, DeclarationDialect, OutputFormat, Order, PaddingMode};

/// Parse a config-file value with the same names the CLI accepts.
fn config_value<T: ValueEnum>(key: &'static str, value: &str) -> Result<T, ConfigurationError> {
    T::from_str(value, true).map_err(|_| ConfigurationError::InvalidValue {
        key,
        value: value.to_string(),
        expected: T::value_variants()
            .iter()
            .filter_map(|v| v.to_possible_value())
            .map(|v| v.get_name().to_string())
            .collect::<Vec<_>>()
            .join(", "),
    })
}

/// CLI value, else config value, else the default.
fn pick<T: ValueEnum + Default>(
    cli: Option<T>,
    key: &'static str,
    file: Option<&str>,
) -> Result<T, ConfigurationError> {
    match (cli, file) {
        (Some(v), _) => Ok(v),
        (None, Some(s)) => config_value(key, s),
        (None, None) => Ok(T::default()),
    }
}

/// Build the job for the default (convert) command.
pub fn build_job(args: &Args, config: &Config) -> Result<Job, PipelineError> {
    let input = args.input.clone().ok_or(PipelineError::MissingInput)?;
    let char_height = args.height.ok_or(PipelineError::MissingHeight)?;

    let order: Order = pick(args.order, "order", config.encoding.order.as_deref())?;
    let padding: PaddingMode = pick(args.padding, "padding", config.encoding.padding.as_deref())?;
    let format: OutputFormat = pick(args.format, "format", config.output.format.as_deref())?;
    let dialect: DeclarationDialect =
        pick(args.dialect, "dialect", config.output.dialect.as_deref())?;
    let channel: ColorChannel = pick(args.channel, "channel", config.image.channel.as_deref())?;

    let run = RunConfig {
        char_width: args.width,
        char_height,
        border: args.border.or(config.encoding.border).unwrap_or(0),
        start: args.start,
        end: args.end,
        bit_order: order.into(),
        padding: padding.into(),
        format: format.into(),
        channel: channel.into(),
        header: match (args.header, args.no_header) {
            (true, _) => true,
            (_, true) => false,
            _ => config.output.header,
        },
    };

    Ok(Job {
        input,
        output: args.output.clone(),
        var: args.var.clone(),
        dialect: dialect.into(),
        run,
    })
}
