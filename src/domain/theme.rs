//! Theme preference and palettes
//!
//! The active scheme is always derived: an explicit `light`/`dark`
//! preference wins, `system` follows the host's reported scheme, and a host
//! that reports nothing falls back to dark.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Theme chosen by the user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

/// A concrete color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorScheme {
    Light,
    Dark,
}

impl ColorScheme {
    /// Scheme used when the preference is `system` and the host reports none
    pub const FALLBACK: ColorScheme = ColorScheme::Dark;

    pub fn palette(&self) -> &'static Palette {
        match self {
            ColorScheme::Light => &LIGHT_PALETTE,
            ColorScheme::Dark => &DARK_PALETTE,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        })
    }
}

impl fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColorScheme::Light => "light",
            ColorScheme::Dark => "dark",
        })
    }
}

impl FromStr for ThemePreference {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            _ => Err(s.to_string()),
        }
    }
}

impl FromStr for ColorScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(ColorScheme::Light),
            "dark" => Ok(ColorScheme::Dark),
            _ => Err(s.to_string()),
        }
    }
}

/// Named colors for one scheme, as hex or rgba strings
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Palette {
    pub background: &'static str,
    pub surface: &'static str,
    pub primary: &'static str,
    pub secondary: &'static str,
    pub accent: &'static str,
    pub text: &'static str,
    pub text_secondary: &'static str,
    pub border: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
    pub card: &'static str,
    pub shadow: &'static str,
}

impl Palette {
    /// (name, value) pairs in declaration order
    pub fn swatches(&self) -> [(&'static str, &'static str); 13] {
        [
            ("background", self.background),
            ("surface", self.surface),
            ("primary", self.primary),
            ("secondary", self.secondary),
            ("accent", self.accent),
            ("text", self.text),
            ("text_secondary", self.text_secondary),
            ("border", self.border),
            ("success", self.success),
            ("warning", self.warning),
            ("error", self.error),
            ("card", self.card),
            ("shadow", self.shadow),
        ]
    }
}

pub const LIGHT_PALETTE: Palette = Palette {
    background: "#FAFBFC",
    surface: "#FFFFFF",
    primary: "#3B82F6",
    secondary: "#14B8A6",
    accent: "#F97316",
    text: "#1F2937",
    text_secondary: "#6B7280",
    border: "#E5E7EB",
    success: "#10B981",
    warning: "#F59E0B",
    error: "#EF4444",
    card: "#FFFFFF",
    shadow: "rgba(0, 0, 0, 0.1)",
};

pub const DARK_PALETTE: Palette = Palette {
    background: "#0F172A",
    surface: "#1E293B",
    primary: "#60A5FA",
    secondary: "#2DD4BF",
    accent: "#FB923C",
    text: "#F8FAFC",
    text_secondary: "#CBD5E1",
    border: "#334155",
    success: "#34D399",
    warning: "#FBBF24",
    error: "#F87171",
    card: "#1E293B",
    shadow: "rgba(0, 0, 0, 0.3)",
};

/// Holds the theme preference and what the host reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ThemeStore {
    preference: ThemePreference,
    system_scheme: Option<ColorScheme>,
}

impl ThemeStore {
    pub fn new(preference: ThemePreference, system_scheme: Option<ColorScheme>) -> Self {
        ThemeStore {
            preference,
            system_scheme,
        }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    pub fn system_scheme(&self) -> Option<ColorScheme> {
        self.system_scheme
    }

    pub fn set_theme(&mut self, preference: ThemePreference) {
        tracing::debug!(%preference, "theme preference changed");
        self.preference = preference;
    }

    pub fn set_system_scheme(&mut self, scheme: Option<ColorScheme>) {
        self.system_scheme = scheme;
    }

    pub fn active_scheme(&self) -> ColorScheme {
        match self.preference {
            ThemePreference::Light => ColorScheme::Light,
            ThemePreference::Dark => ColorScheme::Dark,
            ThemePreference::System => self.system_scheme.unwrap_or(ColorScheme::FALLBACK),
        }
    }

    pub fn colors(&self) -> &'static Palette {
        self.active_scheme().palette()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_preference_ignores_host() {
        let store = ThemeStore::new(ThemePreference::Light, Some(ColorScheme::Dark));
        assert_eq!(store.active_scheme(), ColorScheme::Light);
        assert_eq!(store.colors().background, "#FAFBFC");

        let store = ThemeStore::new(ThemePreference::Dark, Some(ColorScheme::Light));
        assert_eq!(store.active_scheme(), ColorScheme::Dark);
    }

    #[test]
    fn test_system_follows_host() {
        let store = ThemeStore::new(ThemePreference::System, Some(ColorScheme::Light));
        assert_eq!(store.active_scheme(), ColorScheme::Light);
    }

    #[test]
    fn test_system_without_host_falls_back_to_dark() {
        let store = ThemeStore::default();
        assert_eq!(store.preference(), ThemePreference::System);
        assert_eq!(store.active_scheme(), ColorScheme::Dark);
        assert_eq!(store.colors().primary, "#60A5FA");
    }

    #[test]
    fn test_set_theme_recomputes() {
        let mut store = ThemeStore::new(ThemePreference::System, Some(ColorScheme::Dark));
        store.set_theme(ThemePreference::Light);
        assert_eq!(store.colors(), &LIGHT_PALETTE);
        store.set_theme(ThemePreference::System);
        store.set_system_scheme(None);
        assert_eq!(store.colors(), &DARK_PALETTE);
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!("Dark".parse::<ThemePreference>(), Ok(ThemePreference::Dark));
        assert_eq!("system".parse::<ThemePreference>(), Ok(ThemePreference::System));
        assert!("sepia".parse::<ThemePreference>().is_err());
        assert!("system".parse::<ColorScheme>().is_err());
    }

    #[test]
    fn test_swatches_order() {
        let swatches = LIGHT_PALETTE.swatches();
        assert_eq!(swatches[0], ("background", "#FAFBFC"));
        assert_eq!(swatches[12], ("shadow", "rgba(0, 0, 0, 0.1)"));
    }
}
