//! Configuration file loading for the CLI
//!
//! This module finds and loads the TOML configuration file from an explicit
//! path, the working directory or the platform config directory, and applies
//! the layout overrides given on the command line.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use log::{debug, info};
use thiserror::Error;

use tessella::{
    TessellaError,
    config::{AppConfig, LayoutConfig},
};

use crate::Args;

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<ConfigError> for TessellaError {
    fn from(err: ConfigError) -> Self {
        TessellaError::Io(io::Error::other(err.to_string()))
    }
}

/// Find and load configuration from various locations
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Local project directory (tessella/config.toml)
/// 3. Platform-specific config directory
/// 4. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be parsed or fails validation
pub fn load_config(explicit_path: Option<impl AsRef<Path>>) -> Result<AppConfig, TessellaError> {
    if let Some(path) = explicit_path {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new("tessella/config.toml");
    if local_config.exists() {
        info!(path = local_config.display().to_string(); "Loading configuration from local path");
        return load_config_file(local_config);
    }

    if let Some(proj_dirs) = ProjectDirs::from("com", "tessella", "tessella") {
        let system_config = proj_dirs.config_dir().join("config.toml");

        if system_config.exists() {
            info!(path = system_config.display().to_string(); "Loading configuration from system path");
            return load_config_file(system_config);
        }

        debug!(path = system_config.display().to_string(); "System configuration file not found");
    } else {
        debug!("Could not determine platform-specific config directory");
    }

    debug!("No configuration file found, using default configuration");
    Ok(AppConfig::default())
}

/// Returns `config` with the layout settings given on the command line
/// replacing the configured ones.
pub fn apply_overrides(config: AppConfig, args: &Args) -> AppConfig {
    let layout = config.layout();
    if args.columns.is_none() && args.traversal.is_none() && args.cell.is_none() {
        return config;
    }

    let overridden = LayoutConfig::new(
        args.traversal.map_or(layout.traversal(), Into::into),
        args.columns.or(layout.columns()),
        args.cell.map_or(layout.cell(), Into::into),
    );
    debug!(layout:? = overridden; "Applied command-line layout overrides");

    AppConfig::new(overridden, config.style().clone())
}

/// Load configuration from a TOML file
fn load_config_file(path: impl AsRef<Path>) -> Result<AppConfig, TessellaError> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()).into());
    }

    let content = fs::read_to_string(path)?;

    let config: AppConfig = toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.message().to_string(),
    })?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &AppConfig) -> Result<(), ConfigError> {
    let style = config.style();

    if !style.margin().is_finite() || style.margin() < 0.0 {
        return Err(ConfigError::Validation(format!(
            "style.margin must be a non-negative number, found {}",
            style.margin()
        )));
    }

    if config.layout().columns() == Some(0) {
        return Err(ConfigError::Validation(
            "layout.columns must be at least 1".to_string(),
        ));
    }

    style.background_color().map_err(ConfigError::Validation)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::tempdir;
    use tessella::layout::{CellShape, Traversal};

    use super::*;
    use crate::args::{CellArg, TraversalArg};

    #[test]
    fn test_load_explicit_config() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(
            &path,
            "[layout]\ntraversal = \"snake\"\ncolumns = 3\n\n[style]\nmargin = 4\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();

        assert_eq!(config.layout().traversal(), Traversal::Snake);
        assert_eq!(config.layout().columns(), Some(3));
        assert_eq!(config.style().margin(), 4.0);
    }

    #[test]
    fn test_missing_explicit_config_is_error() {
        let dir = tempdir().unwrap();
        let result = load_config(Some(dir.path().join("absent.toml")));
        assert!(matches!(result, Err(TessellaError::Io(_))));
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[layout\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Failed to parse TOML configuration"));
    }

    #[test]
    fn test_validation_rejects_negative_margin() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[style]\nmargin = -1\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("style.margin"));
    }

    #[test]
    fn test_validation_rejects_bad_background() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[style]\nbackground_color = \"mauve-ish\"\n").unwrap();

        let err = load_config(Some(&path)).unwrap_err();
        assert!(err.to_string().contains("Invalid background color"));
    }

    #[test]
    fn test_apply_overrides() {
        let mut args = Args::new("in.toml", "out.svg");
        args.columns = Some(7);
        args.traversal = Some(TraversalArg::Snake);
        args.cell = Some(CellArg::Square);

        let config = apply_overrides(AppConfig::default(), &args);

        assert_eq!(config.layout().columns(), Some(7));
        assert_eq!(config.layout().traversal(), Traversal::Snake);
        assert_eq!(config.layout().cell(), CellShape::Square);
    }

    #[test]
    fn test_apply_overrides_keeps_unset_fields() {
        let base: AppConfig = toml::from_str("[layout]\ncolumns = 2\ncell = \"square\"\n").unwrap();
        let mut args = Args::new("in.toml", "out.svg");
        args.traversal = Some(TraversalArg::Snake);

        let config = apply_overrides(base, &args);

        assert_eq!(config.layout().columns(), Some(2));
        assert_eq!(config.layout().cell(), CellShape::Square);
        assert_eq!(config.layout().traversal(), Traversal::Snake);
    }
}
