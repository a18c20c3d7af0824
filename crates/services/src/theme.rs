use std::sync::Arc;

use storage::KeyValueRepository;

use crate::error::ThemeError;

const THEME_KEY: &str = "theme";

/// Display theme preference.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Resolution order: an explicit saved choice wins, otherwise the
    /// system preference, otherwise light.
    #[must_use]
    pub fn resolve(saved: Option<Theme>, system_prefers_dark: bool) -> Theme {
        match saved {
            Some(theme) => theme,
            None if system_prefers_dark => Theme::Dark,
            None => Theme::Light,
        }
    }

    #[must_use]
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    fn from_saved(raw: &str) -> Option<Theme> {
        match raw {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }
}

/// Persists the theme choice in the key-value store.
#[derive(Clone)]
pub struct ThemeService {
    store: Arc<dyn KeyValueRepository>,
}

impl ThemeService {
    #[must_use]
    pub fn new(store: Arc<dyn KeyValueRepository>) -> Self {
        Self { store }
    }

    /// The saved theme, if one was explicitly chosen. Unrecognized stored
    /// values read as unset.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError` on storage failures.
    pub async fn saved(&self) -> Result<Option<Theme>, ThemeError> {
        let raw = self.store.get(THEME_KEY).await?;
        Ok(raw.as_deref().and_then(Theme::from_saved))
    }

    /// The theme to apply given the system preference.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError` on storage failures.
    pub async fn load(&self, system_prefers_dark: bool) -> Result<Theme, ThemeError> {
        Ok(Theme::resolve(self.saved().await?, system_prefers_dark))
    }

    /// Persists an explicit choice.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError` on storage failures.
    pub async fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        self.store.set(THEME_KEY, theme.as_str()).await?;
        Ok(())
    }

    /// Toggles, persists and returns the new theme.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError` on storage failures.
    pub async fn toggle(&self, system_prefers_dark: bool) -> Result<Theme, ThemeError> {
        let next = self.load(system_prefers_dark).await?.toggled();
        self.save(next).await?;
        Ok(next)
    }

    /// Forgets the saved choice, falling back to the system preference.
    ///
    /// # Errors
    ///
    /// Returns `ThemeError` on storage failures.
    pub async fn clear(&self) -> Result<(), ThemeError> {
        self.store.delete(THEME_KEY).await?;
        Ok(())
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
