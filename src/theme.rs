//! Theme preference persistence
//!
//! A single "light"/"dark" string stored under a fixed file name in the
//! user config directory. Read once at startup, written on every toggle.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::debug;

/// Fixed key the preference is stored under
const THEME_FILE_NAME: &str = "theme";

/// Display theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    /// Light theme (the default when nothing is stored)
    #[default]
    Light,
    /// Dark theme
    Dark,
}

impl Theme {
    /// Persisted string form
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other theme
    #[must_use]
    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    fn parse(value: &str) -> Self {
        match value.trim() {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }
}

/// File-backed store for the theme preference
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    /// Store at the default location under the user config directory
    #[must_use]
    pub fn new() -> Self {
        let path = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("weatherboard")
            .join(THEME_FILE_NAME);
        Self { path }
    }

    /// Store at an explicit path
    #[must_use]
    pub fn at(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the stored preference; missing or unreadable state means light
    #[must_use]
    pub fn load(&self) -> Theme {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Theme::parse(&contents),
            Err(_) => {
                debug!("No stored theme preference, defaulting to light");
                Theme::default()
            }
        }
    }

    /// Persist a preference
    pub fn save(&self, theme: Theme) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        fs::write(&self.path, theme.as_str())
            .with_context(|| format!("Failed to write {}", self.path.display()))
    }

    /// Flip the stored preference and return the new value
    pub fn toggle(&self) -> Result<Theme> {
        let next = self.load().toggled();
        self.save(next)?;
        Ok(next)
    }
}

impl Default for ThemeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_defaults_to_light() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::at(dir.path().join("theme"));
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::at(dir.path().join("theme"));

        store.save(Theme::Dark).unwrap();
        assert_eq!(store.load(), Theme::Dark);

        store.save(Theme::Light).unwrap();
        assert_eq!(store.load(), Theme::Light);
    }

    #[test]
    fn test_toggle_persists() {
        let dir = tempdir().unwrap();
        let store = ThemeStore::at(dir.path().join("theme"));

        assert_eq!(store.toggle().unwrap(), Theme::Dark);
        assert_eq!(store.load(), Theme::Dark);
        assert_eq!(store.toggle().unwrap(), Theme::Light);
    }

    #[test]
    fn test_garbage_contents_default_to_light() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("theme");
        fs::write(&path, "neon").unwrap();
        assert_eq!(ThemeStore::at(path).load(), Theme::Light);
    }
}
