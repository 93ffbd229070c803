//! Configuration file loading for the CLI
//!
//! This module handles finding and loading TOML configuration files
//! from various locations (explicit path, local directory, system
//! directory) and applying command-line overrides on top.

use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use penstock::PenstockError;
use penstock::config::{AppConfig, StyleConfig, parse_color};

use crate::args::Args;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration: {0}")]
    Parse(String),

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),
}

impl From<ConfigError> for PenstockError {
    fn from(err: ConfigError) -> Self {
        PenstockError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            err.to_string(),
        ))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (penstock/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Arguments
///
/// * `explicit_path` - Optional explicit path to config file
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, PenstockError> {
    // 1. Try the explicitly provided path first if available
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    // 2. Try the local project directory
    let local_config = Path::new("penstock/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    // 3. Try the platform-specific config directory
    if let Some(proj_dirs) = ProjectDirs::from("com", "penstock", "penstock") {
        let config_dir = proj_dirs.config_dir();
        let system_config = config_dir.join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    // 4. If no config is found, return default config
    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Load configuration from a TOML file
///
/// # Arguments
///
/// * `path` - Path to the TOML configuration file
///
/// # Errors
///
/// Returns error if:
/// - File doesn't exist
/// - File cannot be read
/// - TOML parsing fails
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, PenstockError> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    // Read file content
    let content = fs::read_to_string(path)?;

    // Parse TOML content
    let config: AppConfig =
        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))?;

    Ok(config)
}

/// Apply command-line overrides on top of a resolved configuration
///
/// Flags that were not given on the command line leave the configuration
/// untouched, so the precedence is defaults, then file, then flags.
///
/// # Errors
///
/// Returns error if a flag carries an unparseable color, unit, or
/// canvas policy.
pub fn apply_overrides(config: &mut StyleConfig, args: &Args) -> Result<(), PenstockError> {
    if let Some(fontsize) = args.fontsize {
        config.set_font_size(fontsize);
    }
    if let Some(color) = &args.color {
        config.set_box_color(parse_color("box color", color)?);
    }
    if let Some(opacity) = args.opacity {
        config.set_opacity(opacity);
    }
    if let Some(width) = args.width {
        config.set_canvas_width(width);
    }
    if let Some(height) = args.height {
        config.set_canvas_height(height);
    }
    if let Some(unit) = &args.unit {
        config.set_unit(unit.parse()?);
    }
    if let Some(horizontal_space) = args.horizontal_space {
        config.set_horizontal_space(horizontal_space);
    }
    if let Some(max_length) = args.storage_path_max_length {
        config.set_storage_path_max_length(Some(max_length));
    }
    if let Some(marker_padding) = args.marker_padding {
        config.set_marker_padding(marker_padding);
    }
    if let Some(key_color) = &args.key_color {
        config.set_key_color(parse_color("key color", key_color)?);
    }
    if let Some(value_color) = &args.value_color {
        config.set_value_color(parse_color("value color", value_color)?);
    }
    if let Some(canvas) = &args.canvas {
        config.set_canvas_policy(canvas.parse()?);
    }
    Ok(())
}
