use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use super::AppConfig;

/// Environment variable that points at an explicit config file.
const CONFIG_ENV: &str = "RESIZABLE_CONFIG";

/// Returns the platform-specific base config directory.
///
/// Resolution order:
/// 1. `XDG_CONFIG_HOME`
/// 2. `$HOME/.config`
/// 3. `%USERPROFILE%/.config`
pub(crate) fn config_base_dir() -> Option<PathBuf> {
    if let Some(xdg) = std::env::var_os("XDG_CONFIG_HOME") {
        return Some(PathBuf::from(xdg));
    }
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home).join(".config"));
    }
    std::env::var_os("USERPROFILE").map(|home| PathBuf::from(home).join(".config"))
}

/// Returns `$RESIZABLE_CONFIG`, or `~/.config/resizable/config.ron`.
fn config_path() -> Option<PathBuf> {
    if let Some(explicit) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(explicit));
    }
    config_base_dir().map(|base| base.join("resizable").join("config.ron"))
}

/// Loads the config from disk, falling back to defaults on any error.
pub(crate) fn load_config() -> AppConfig {
    let Some(path) = config_path() else {
        return AppConfig::default();
    };
    load_config_from(&path)
}

fn load_config_from(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return AppConfig::default(),
        Err(err) => {
            warn!("failed to read {}: {err}; using defaults", path.display());
            return AppConfig::default();
        }
    };
    match ron::from_str(&contents) {
        Ok(config) => {
            info!("loaded config from {}", path.display());
            config
        }
        Err(err) => {
            warn!("invalid config {}: {err}; using defaults", path.display());
            AppConfig::default()
        }
    }
}
