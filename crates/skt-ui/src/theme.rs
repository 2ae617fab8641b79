//! Light/dark preference.
//!
//! An explicit choice is persisted in a [`ThemeStore`]. Without one, the
//! effective theme follows the system colour scheme, and system changes are
//! applied only while no explicit choice is stored.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use skt_core::Theme;

use crate::error::ThemeError;
use crate::view::View;

pub trait ThemeStore: Send + Sync {
    /// # Errors
    ///
    /// Returns [`ThemeError`] when the stored preference cannot be read.
    fn load(&self) -> Result<Option<Theme>, ThemeError>;

    /// # Errors
    ///
    /// Returns [`ThemeError`] when the preference cannot be written.
    fn save(&self, theme: Theme) -> Result<(), ThemeError>;

    /// # Errors
    ///
    /// Returns [`ThemeError`] when an existing preference cannot be removed.
    fn clear(&self) -> Result<(), ThemeError>;
}

#[derive(Debug, Serialize, Deserialize)]
struct StoredTheme {
    theme: Theme,
}

/// Preference kept as `{"theme": "dark"}` in a JSON file.
#[derive(Debug, Clone)]
pub struct JsonThemeStore {
    path: PathBuf,
}

impl JsonThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ThemeStore for JsonThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(serde_json::from_str::<StoredTheme>(&raw)?.theme)),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&StoredTheme { theme })?;
        fs::write(&self.path, json)?;
        Ok(())
    }

    fn clear(&self) -> Result<(), ThemeError> {
        match fs::remove_file(&self.path) {
            Err(error) if error.kind() != std::io::ErrorKind::NotFound => Err(error.into()),
            _ => Ok(()),
        }
    }
}

/// In-process store, for views without a config directory.
#[derive(Debug, Default)]
pub struct MemoryThemeStore {
    theme: Mutex<Option<Theme>>,
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, ThemeError> {
        Ok(*self.theme.lock())
    }

    fn save(&self, theme: Theme) -> Result<(), ThemeError> {
        *self.theme.lock() = Some(theme);
        Ok(())
    }

    fn clear(&self) -> Result<(), ThemeError> {
        *self.theme.lock() = None;
        Ok(())
    }
}

pub struct ThemeController<S> {
    store: S,
    view: Arc<dyn View>,
    system: Mutex<Theme>,
}

impl<S: ThemeStore> ThemeController<S> {
    pub fn new(store: S, view: Arc<dyn View>, system: Theme) -> Self {
        Self {
            store,
            view,
            system: Mutex::new(system),
        }
    }

    /// The explicit choice, if any. An unreadable preference counts as unset.
    pub fn stored(&self) -> Option<Theme> {
        self.store.load().unwrap_or_else(|error| {
            tracing::warn!(%error, "ignoring unreadable theme preference");
            None
        })
    }

    pub fn effective(&self) -> Theme {
        self.stored().unwrap_or(*self.system.lock())
    }

    /// Apply the effective theme.
    pub fn init(&self) -> Theme {
        let theme = self.effective();
        self.view.apply_theme(theme);
        theme
    }

    /// Store an explicit choice and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] if the store cannot persist the choice.
    pub fn set(&self, theme: Theme) -> Result<Theme, ThemeError> {
        self.store.save(theme)?;
        tracing::debug!(theme = theme.as_str(), "theme preference stored");
        self.view.apply_theme(theme);
        Ok(theme)
    }

    /// Store and apply the opposite of the effective theme.
    ///
    /// # Errors
    ///
    /// As [`Self::set`].
    pub fn toggle(&self) -> Result<Theme, ThemeError> {
        self.set(self.effective().toggled())
    }

    /// Drop the explicit choice and fall back to the system theme.
    ///
    /// # Errors
    ///
    /// Returns [`ThemeError`] if the stored choice cannot be removed.
    pub fn clear(&self) -> Result<Theme, ThemeError> {
        self.store.clear()?;
        let theme = *self.system.lock();
        self.view.apply_theme(theme);
        Ok(theme)
    }

    /// Record a system colour-scheme change. Returns whether it was applied.
    pub fn system_changed(&self, theme: Theme) -> bool {
        *self.system.lock() = theme;
        if self.stored().is_some() {
            return false;
        }
        self.view.apply_theme(theme);
        true
    }
}
