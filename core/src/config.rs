//! Settings persistence
//!
//! Settings are stored as a single TOML file. Hosts with their own settings
//! storage can ignore the file helpers and use [`parse_settings`] /
//! [`settings_to_string`] directly.

use std::fs;
use std::path::{Path, PathBuf};

use showbuff_types::OverlaySettings;
use thiserror::Error;
use tracing::{info, warn};

/// Errors that can occur while loading or saving settings
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error for {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("parse error in {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("serialize error for {path:?}: {source}")]
    Serialize {
        path: PathBuf,
        #[source]
        source: toml::ser::Error,
    },
}

/// Parse settings from TOML text. Out-of-range values are clamped.
pub fn parse_settings(text: &str) -> Result<OverlaySettings, toml::de::Error> {
    let mut settings: OverlaySettings = toml::from_str(text)?;
    settings.sanitize();
    Ok(settings)
}

pub fn settings_to_string(settings: &OverlaySettings) -> Result<String, toml::ser::Error> {
    toml::to_string_pretty(settings)
}

/// Load a settings file
pub fn load_settings(path: &Path) -> Result<OverlaySettings, ConfigError> {
    let contents = fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_settings(&contents).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save a settings file, creating parent directories as needed
pub fn save_settings(path: &Path, settings: &OverlaySettings) -> Result<(), ConfigError> {
    let contents = settings_to_string(settings).map_err(|e| ConfigError::Serialize {
        path: path.to_path_buf(),
        source: e,
    })?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    fs::write(path, contents).map_err(|e| ConfigError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    info!(path = ?path, "Saved settings");
    Ok(())
}

/// Load settings, falling back to defaults when the file is missing or broken
pub fn load_or_default(path: &Path) -> OverlaySettings {
    if !path.exists() {
        info!(path = ?path, "No settings file, using defaults");
        return OverlaySettings::default();
    }

    match load_settings(path) {
        Ok(settings) => settings,
        Err(e) => {
            warn!(error = %e, "Failed to load settings, using defaults");
            OverlaySettings::default()
        }
    }
}

/// Get the default settings file location
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("showbuff").join("settings.toml"))
}
