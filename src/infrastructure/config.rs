//! Configuration management

use crate::domain::{ColorScheme, ThemePreference};
use crate::error::{MoodlogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Environment variable naming a config file
pub const CONFIG_ENV: &str = "MOODLOG_CONFIG";
/// Environment variable standing in for the host's color scheme
pub const SYSTEM_SCHEME_ENV: &str = "MOODLOG_SYSTEM_SCHEME";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: ThemePreference,
    /// Scheme the host reports, when known
    pub system_scheme: Option<ColorScheme>,
    /// Start each run with demonstration entries
    pub seed_samples: bool,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: ThemePreference::System,
            system_scheme: None,
            seed_samples: true,
            log_level: "warn".to_string(),
        }
    }
}

impl Config {
    /// Load config from a TOML file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                MoodlogError::Config(format!("Config file not found: {}", path.display()))
            } else {
                MoodlogError::Io(e)
            }
        })?;

        Self::parse(&contents)
    }

    /// Parse config from TOML text
    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents)
            .map_err(|e| MoodlogError::Config(format!("Failed to parse config: {}", e)))
    }

    /// Load from `explicit` if given, else from $MOODLOG_CONFIG, else defaults
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from_file(path);
        }

        match std::env::var(CONFIG_ENV) {
            Ok(path) if !path.trim().is_empty() => Self::load_from_file(&PathBuf::from(path)),
            _ => Ok(Config::default()),
        }
    }

    /// Host color scheme: the config value, else $MOODLOG_SYSTEM_SCHEME
    pub fn host_scheme(&self) -> Option<ColorScheme> {
        self.host_scheme_with(std::env::var(SYSTEM_SCHEME_ENV).ok().as_deref())
    }

    fn host_scheme_with(&self, env_value: Option<&str>) -> Option<ColorScheme> {
        self.system_scheme
            .or_else(|| env_value.and_then(|value| ColorScheme::from_str(value).ok()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, ThemePreference::System);
        assert_eq!(config.system_scheme, None);
        assert!(config.seed_samples);
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    fn test_parse_partial_file_keeps_defaults() {
        let config = Config::parse("theme = \"light\"\n").unwrap();
        assert_eq!(config.theme, ThemePreference::Light);
        assert!(config.seed_samples);
    }

    #[test]
    fn test_parse_full_file() {
        let config = Config::parse(
            "theme = \"dark\"\nsystem_scheme = \"light\"\nseed_samples = false\nlog_level = \"debug\"\n",
        )
        .unwrap();
        assert_eq!(config.theme, ThemePreference::Dark);
        assert_eq!(config.system_scheme, Some(ColorScheme::Light));
        assert!(!config.seed_samples);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_parse_invalid_theme() {
        let result = Config::parse("theme = \"sepia\"\n");
        assert!(matches!(result, Err(MoodlogError::Config(_))));
    }

    #[test]
    fn test_load_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("moodlog.toml");
        fs::write(&path, "seed_samples = false\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert!(!config.seed_samples);
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = Config::load_from_file(&temp.path().join("missing.toml"));
        match result {
            Err(MoodlogError::Config(msg)) => assert!(msg.contains("not found")),
            other => panic!("Expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn test_discover_explicit_path_wins() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("moodlog.toml");
        fs::write(&path, "theme = \"light\"\n").unwrap();

        let config = Config::discover(Some(&path)).unwrap();
        assert_eq!(config.theme, ThemePreference::Light);
    }

    #[test]
    fn test_host_scheme_resolution() {
        let config = Config::default();
        assert_eq!(config.host_scheme_with(None), None);
        assert_eq!(config.host_scheme_with(Some("light")), Some(ColorScheme::Light));
        assert_eq!(config.host_scheme_with(Some("purple")), None);

        let config = Config {
            system_scheme: Some(ColorScheme::Dark),
            ..Config::default()
        };
        assert_eq!(config.host_scheme_with(Some("light")), Some(ColorScheme::Dark));
    }
}
