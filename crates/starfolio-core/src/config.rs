//! Site configuration
//!
//! Every section falls back to its defaults, so a config file only needs the
//! values it changes:
//!
//! ```json
//! {
//!   "theme": "light",
//!   "typewriter": { "pause_after_complete_ms": 3000 },
//!   "starfield": { "count": 2000 }
//! }
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::SiteResult;
use crate::motion::MotionConfig;
use crate::starfield::StarfieldConfig;
use crate::typewriter::TypewriterConfig;

/// Process-wide presentation theme, applied once at the render root
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// CSS class placed on the root element
    pub fn class(&self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub theme: Theme,
    pub typewriter: TypewriterConfig,
    pub starfield: StarfieldConfig,
    pub motion: MotionConfig,
}

impl SiteConfig {
    /// Default location: `<config dir>/starfolio/config.json`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("starfolio").join("config.json"))
    }

    /// Read and validate a config file.
    pub fn load(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)?;
        let config: SiteConfig = serde_json::from_str(&raw)?;
        config.validate()?;
        info!(path = %path.display(), theme = ?config.theme, "Loaded site config");
        Ok(config)
    }

    /// Load `path` when given, else the default location if it exists, else defaults.
    ///
    /// An explicitly given path must exist; the default location may not.
    pub fn load_or_default(path: Option<&Path>) -> SiteResult<Self> {
        if let Some(path) = path {
            return Self::load(path);
        }

        match Self::default_path() {
            Some(default) if default.is_file() => Self::load(default),
            _ => {
                debug!("No config file found, using defaults");
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> SiteResult<()> {
        self.typewriter.validate()?;
        self.starfield.validate()?;
        self.motion.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use std::io::Write;

    #[test]
    fn test_theme_default_is_dark() {
        assert_eq!(Theme::default(), Theme::Dark);
        assert_eq!(Theme::Dark.class(), "dark");
        assert_eq!(Theme::Light.class(), "light");
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = SiteConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.typewriter.type_interval_ms, 30);
        assert_eq!(config.typewriter.delete_interval_ms, 15);
        assert_eq!(config.typewriter.pause_after_complete_ms, 2000);
        assert_eq!(config.starfield.count, 5000);
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "theme": "light", "typewriter": {{ "pause_after_complete_ms": 500 }} }}"#
        )
        .unwrap();

        let config = SiteConfig::load(file.path()).unwrap();
        assert_eq!(config.theme, Theme::Light);
        assert_eq!(config.typewriter.pause_after_complete_ms, 500);
        assert_eq!(config.typewriter.type_interval_ms, 30);
        assert_eq!(config.starfield, StarfieldConfig::default());
    }

    #[test]
    fn test_load_rejects_invalid_values() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "typewriter": {{ "type_interval_ms": 0 }} }}"#).unwrap();

        assert!(matches!(
            SiteConfig::load(file.path()),
            Err(SiteError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_explicit_missing_path_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.json");
        assert!(matches!(
            SiteConfig::load_or_default(Some(&missing)),
            Err(SiteError::Io(_))
        ));
    }

    #[test]
    fn test_round_trips_through_json() {
        let config = SiteConfig {
            theme: Theme::Light,
            ..Default::default()
        };
        let json = serde_json::to_string(&config).unwrap();
        let back: SiteConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }
}
