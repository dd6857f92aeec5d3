//! Application definition parsing and discovery

use crate::config::types::AppConfig;
use crate::error::{ConfigError, ConfigResult, RcliError};
use directories::ProjectDirs;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Definition file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["rcli.yml", "rcli.yaml"];

/// Find the definition file in the current directory, its parents, and
/// finally the user configuration directory
pub fn find_config_file() -> ConfigResult<PathBuf> {
    let current_dir = env::current_dir().map_err(|e| {
        ConfigError::Invalid(format!("Failed to get current directory: {}", e))
    })?;

    match find_config_file_from(current_dir) {
        Ok(path) => Ok(path),
        Err(ConfigError::NotFound(searched)) => {
            let user_dir = user_config_dir().ok_or_else(|| ConfigError::NotFound(searched.clone()))?;
            find_in_dir(&user_dir)
                .ok_or_else(|| ConfigError::NotFound(format!("{}, {}", searched, user_dir.display())))
        }
        Err(e) => Err(e),
    }
}

/// Find the definition file starting from a specific directory
pub fn find_config_file_from(start_dir: PathBuf) -> ConfigResult<PathBuf> {
    let mut current_dir = start_dir;
    let mut searched_paths = Vec::new();

    loop {
        if let Some(path) = find_in_dir(&current_dir) {
            return Ok(path);
        }
        searched_paths.push(current_dir.display().to_string());

        // Try parent directory
        match current_dir.parent() {
            Some(parent) => current_dir = parent.to_path_buf(),
            None => return Err(ConfigError::NotFound(searched_paths.join(", "))),
        }
    }
}

fn find_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Per-user configuration directory for rcli
pub fn user_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "rcli").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Parse a definition file from a path
pub fn parse_config_file(path: &Path) -> Result<AppConfig, RcliError> {
    let contents = fs::read_to_string(path)
        .map_err(|e| ConfigError::Invalid(format!("Failed to read {}: {}", path.display(), e)))?;

    parse_config(&contents)
}

/// Parse a definition from a string
pub fn parse_config(yaml: &str) -> Result<AppConfig, RcliError> {
    let config: AppConfig = serde_yaml::from_str(yaml)?;
    Ok(config)
}

/// Parse the definition with automatic file discovery
pub fn parse_config_auto() -> Result<(AppConfig, PathBuf), RcliError> {
    let config_path = find_config_file()?;
    let config = parse_config_file(&config_path)?;
    Ok((config, config_path))
}
