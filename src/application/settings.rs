//! Theme settings use case

use crate::domain::{ColorScheme, Palette, ThemePreference, ThemeStore};
use crate::error::{MoodlogError, Result};
use std::str::FromStr;

/// Snapshot of the theme settings for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeSummary {
    pub preference: ThemePreference,
    pub active: ColorScheme,
    pub colors: &'static Palette,
}

/// Service for reading and changing the theme preference
pub struct ThemeService<'a> {
    store: &'a mut ThemeStore,
}

impl<'a> ThemeService<'a> {
    pub fn new(store: &'a mut ThemeStore) -> Self {
        ThemeService { store }
    }

    pub fn summary(&self) -> ThemeSummary {
        ThemeSummary {
            preference: self.store.preference(),
            active: self.store.active_scheme(),
            colors: self.store.colors(),
        }
    }

    /// Parse and apply a preference name (light, dark, system)
    pub fn set(&mut self, value: &str) -> Result<ThemeSummary> {
        let preference =
            ThemePreference::from_str(value).map_err(MoodlogError::InvalidTheme)?;
        self.store.set_theme(preference);
        Ok(self.summary())
    }
}
