//! Dashboard configuration

use std::path::{Path, PathBuf};
use std::str::FromStr;

use qm_core::{ViewError, ViewId};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Looked up in the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "qualification-model.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid initial view: {0}")]
    InvalidView(#[from] ViewError),

    #[error("Invalid region slug '{0}': use lowercase letters, digits and '-'")]
    InvalidRegionSlug(String),
}

/// Settings for one regional dashboard
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Filename prefix for exports
    pub region_slug: String,
    /// Shown in the header
    pub region_name: String,
    /// Slug of the tab shown at start-up
    pub initial_view: String,
    /// When set, exports are written here without a save dialog
    pub export_dir: Option<PathBuf>,
    pub dark_mode: bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            region_slug: "central-highlands".to_string(),
            region_name: "Central Highlands".to_string(),
            initial_view: ViewId::default().slug().to_string(),
            export_dir: None,
            dark_mode: true,
        }
    }
}

impl DashboardConfig {
    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        tracing::info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Use `explicit` if given, else `qualification-model.json` in the
    /// working directory if present, else defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load(path),
            None => {
                let local = Path::new(DEFAULT_CONFIG_FILE);
                if local.is_file() {
                    Self::load(local)
                } else {
                    tracing::debug!("No {} found, using defaults", DEFAULT_CONFIG_FILE);
                    Ok(Self::default())
                }
            }
        }
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(self)?;
        std::fs::write(path, text)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let slug_ok = !self.region_slug.is_empty()
            && self
                .region_slug
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
        if !slug_ok {
            return Err(ConfigError::InvalidRegionSlug(self.region_slug.clone()));
        }
        self.initial_view()?;
        Ok(())
    }

    pub fn initial_view(&self) -> Result<ViewId, ViewError> {
        ViewId::from_str(&self.initial_view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();
        assert_eq!(config.region_slug, "central-highlands");
        assert_eq!(config.initial_view().unwrap(), ViewId::Summary);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"initial_view": "rampup", "export_dir": "/tmp/exports"}}"#).unwrap();

        let config = DashboardConfig::load(file.path()).unwrap();
        assert_eq!(config.initial_view().unwrap(), ViewId::RampUp);
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/exports")));
        assert_eq!(config.region_name, "Central Highlands");
    }

    #[test]
    fn test_unknown_initial_view_rejected() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"initial_view": "pdf"}}"#).unwrap();

        assert!(matches!(
            DashboardConfig::load(file.path()),
            Err(ConfigError::InvalidView(ViewError::InvalidView(v))) if v == "pdf"
        ));
    }

    #[test]
    fn test_bad_region_slug_rejected() {
        let config = DashboardConfig {
            region_slug: "Central Highlands".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::InvalidRegionSlug(_))));
    }

    #[test]
    fn test_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();
        assert!(matches!(DashboardConfig::load(file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let config = DashboardConfig {
            region_slug: "grampians".to_string(),
            region_name: "Grampians".to_string(),
            dark_mode: false,
            ..Default::default()
        };
        config.save(&path).unwrap();
        assert_eq!(DashboardConfig::discover(Some(&path)).unwrap(), config);
    }

    #[test]
    fn test_missing_explicit_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = DashboardConfig::discover(Some(&dir.path().join("absent.json")));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
