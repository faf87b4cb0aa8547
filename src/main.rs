mod cli;

use clap::Parser;
use cli::{Args, Command};
use font_packer::config::Config;
use font_packer::error::PipelineError;
use font_packer::output::Destination;
use font_packer::pipeline;

fn init_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

/// Load the config file.
/// If --config is specified, require the file to exist.
/// Otherwise, fall back to defaults if the default config can't be used.
fn load_config(args: &Args) -> Result<Config, PipelineError> {
    if let Some(ref path) = args.config {
        return Ok(Config::load_from_explicit(path)?);
    }
    match Config::load() {
        Ok(c) => Ok(c),
        Err(e) => {
            log::warn!("Failed to load config file: {}", e);
            log::warn!("Using default settings.");
            Ok(Config::default())
        }
    }
}

fn run_convert(args: &Args) -> Result<(), PipelineError> {
    let cfg = load_config(args)?;
    let job = cli::build_job(args, &cfg)?;
    // A shortfall is already logged as a warning by the pipeline.
    let report = pipeline::convert(&job)?;

    if let Destination::File(path) = &report.destination {
        eprintln!(
            "Saved {} of {} glyphs to {}",
            report.emitted,
            report.requested,
            path.display()
        );
    }
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Some(Command::Config { ref action }) => {
            cli::handle_config_action(action.clone(), args.config.as_deref()).map_err(|e| e.to_string())
        }
        None => run_convert(&args).map_err(|e| e.to_string()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
