//! Subcommand handlers for config actions.

use std::path::Path;

use font_packer::config::{self, Config, ConfigFileError, DEFAULT_CONFIG};

use super::args::ConfigAction;

/// Errors from the `config` subcommands.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error(transparent)]
    Config(#[from] ConfigFileError),
    #[error("Config file already exists: {}\nUse 'font-packer config show' to view current settings.", .0.display())]
    AlreadyExists(std::path::PathBuf),
    #[error("Error writing config file '{}': {source}", path.display())]
    Write {
        path: std::path::PathBuf,
        source: std::io::Error,
    },
}

/// Handle config subcommand actions.
pub fn handle_config_action(action: ConfigAction, explicit: Option<&Path>) -> Result<(), CommandError> {
    let config_path = explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(config::default_path);

    match action {
        ConfigAction::Show => {
            let cfg = match explicit {
                Some(path) => Config::load_from_explicit(path)?,
                None => Config::load()?,
            };
            let or_default = |v: &Option<String>, d: &'static str| v.clone().unwrap_or_else(|| d.to_string());

            println!("Current configuration:");
            println!("  Order: {}", or_default(&cfg.encoding.order, "lsb"));
            println!("  Padding: {}", or_default(&cfg.encoding.padding, "row"));
            println!("  Border: {}", cfg.encoding.border.unwrap_or(0));
            println!("  Format: {}", or_default(&cfg.output.format, "short"));
            println!("  Dialect: {}", or_default(&cfg.output.dialect, "arduino"));
            println!("  Header: {}", if cfg.output.header { "yes" } else { "no" });
            println!("  Channel: {}", or_default(&cfg.image.channel, "g"));
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(CommandError::AlreadyExists(config_path));
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent).map_err(|e| CommandError::Write {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }

            std::fs::write(&config_path, DEFAULT_CONFIG).map_err(|e| CommandError::Write {
                path: config_path.clone(),
                source: e,
            })?;

            println!("Created config file: {}", config_path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_writes_default_config() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        handle_config_action(ConfigAction::Init, Some(&path)).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, DEFAULT_CONFIG);

        // Second init refuses to overwrite.
        let err = handle_config_action(ConfigAction::Init, Some(&path)).unwrap_err();
        assert!(matches!(err, CommandError::AlreadyExists(_)));
    }

    #[test]
    fn test_show_requires_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.toml");
        let err = handle_config_action(ConfigAction::Show, Some(&path)).unwrap_err();
        assert!(matches!(err, CommandError::Config(ConfigFileError::NotFound(_))));
    }
}
