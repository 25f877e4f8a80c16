//! Configuration file parsing and discovery

use crate::config::types::Config;
use crate::error::{ArgvaultError, ConfigError, ConfigResult};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default configuration file names to search for
pub const CONFIG_FILE_NAMES: &[&str] = &["argvault.yml", "argvault.yaml"];

/// Find the configuration file by searching current and parent directories,
/// then the per-user configuration directory
pub fn find_config_file() -> ConfigResult<PathBuf> {
    let current_dir = env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?;

    match find_config_file_from(current_dir) {
        Ok(path) => Ok(path),
        Err(ConfigError::NotFound(searched)) => match user_config_dir() {
            Some(dir) => find_config_file_in(&dir)
                .ok_or_else(|| ConfigError::NotFound(format!("{}, {}", searched, dir.display()))),
            None => Err(ConfigError::NotFound(searched)),
        },
        Err(e) => Err(e),
    }
}

/// Find the configuration file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        if let Some(config_path) = find_config_file_in(&current_dir) {
            return Ok(config_path);
        }
        searched_paths.push(current_dir.display().to_string());

        // Try parent directory
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => {
                // Reached root without finding config
                return Err(ConfigError::NotFound(searched_paths.join(", ")));
            }
        }
    }
}

/// Look for a config file directly inside `dir`
fn find_config_file_in(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Per-user configuration directory (e.g. `~/.config/argvault`)
pub fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "argvault").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Parse a configuration file from a path
pub fn parse_config_file(path: &Path) -> Result<Config, ArgvaultError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        error: e.to_string(),
    })?;

    parse_config(&contents)
}

/// Parse configuration from a string
pub fn parse_config(yaml: &str) -> Result<Config, ArgvaultError> {
    let config: Config = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Parse configuration with automatic file discovery
pub fn parse_config_auto() -> Result<(Config, PathBuf), ArgvaultError> {
    let config_path = find_config_file()?;
    let config = parse_config_file(&config_path)?;
    Ok((config, config_path))
}

/// Load `.env` next to the config file into the process environment
///
/// Returns whether a file was loaded. Variables already set are kept.
pub fn load_env_file(config_path: &Path) -> ConfigResult<bool> {
    let env_path = config_path
        .parent()
        .unwrap_or_else(|| Path::new("."))
        .join(".env");

    if !env_path.is_file() {
        return Ok(false);
    }

    dotenvy::from_path(&env_path).map_err(|e| ConfigError::EnvFile {
        path: env_path.clone(),
        error: e.to_string(),
    })?;
    Ok(true)
}
