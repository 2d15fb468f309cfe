//! Path management for the Fynix CLI
//!
//! Provides XDG-compliant path resolution for configuration.
//!
//! ## Path Resolution Order
//!
//! 1. `FYNIX_DATA_DIR` environment variable (if set)
//! 2. Unix (Linux/macOS): `$XDG_CONFIG_HOME/fynix` or `~/.config/fynix`
//! 3. Windows: `%APPDATA%\fynix`

use std::path::PathBuf;

use crate::error::FynixError;

/// Manages all paths used by the Fynix CLI
#[derive(Debug, Clone)]
pub struct FynixPaths {
    /// Base directory for all Fynix data
    base_dir: PathBuf,
}

impl FynixPaths {
    /// Create a new FynixPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, FynixError> {
        let base_dir = if let Ok(custom) = std::env::var("FYNIX_DATA_DIR") {
            PathBuf::from(custom)
        } else {
            resolve_default_path()?
        };

        Ok(Self { base_dir })
    }

    /// Create FynixPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory (~/.config/fynix/ or equivalent)
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), FynixError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| FynixError::Io(format!("Failed to create base directory: {}", e)))?;
        Ok(())
    }
}

/// Resolve the default data directory path based on platform
#[cfg(not(windows))]
fn resolve_default_path() -> Result<PathBuf, FynixError> {
    // Unix (Linux/macOS): Use XDG_CONFIG_HOME if set, otherwise ~/.config
    let config_base = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .or_else(|_| {
            std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| FynixError::Config("HOME environment variable not set".to_string()))
        })?;

    Ok(config_base.join("fynix"))
}

/// Resolve the default data directory path based on platform
#[cfg(windows)]
fn resolve_default_path() -> Result<PathBuf, FynixError> {
    let appdata = std::env::var("APPDATA")
        .map_err(|_| FynixError::Config("APPDATA environment variable not set".to_string()))?;

    Ok(PathBuf::from(appdata).join("fynix"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_with_base_dir() {
        let paths = FynixPaths::with_base_dir(PathBuf::from("/tmp/fynix-test"));
        assert_eq!(paths.base_dir(), &PathBuf::from("/tmp/fynix-test"));
        assert_eq!(
            paths.settings_file(),
            PathBuf::from("/tmp/fynix-test/config.json")
        );
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let base = temp_dir.path().join("nested").join("fynix");
        let paths = FynixPaths::with_base_dir(base.clone());

        paths.ensure_directories().unwrap();
        assert!(base.exists());
    }
}
