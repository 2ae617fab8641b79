//! Where the theme preference is stored.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ThemeConfig {
    /// Explicit preference file. Empty means `<config dir>/skilltrack/theme.json`.
    #[serde(default)]
    pub preference_file: String,
}

impl ThemeConfig {
    #[must_use]
    pub fn preference_path(&self) -> Option<PathBuf> {
        if self.preference_file.trim().is_empty() {
            dirs::config_dir().map(|dir| dir.join("skilltrack").join("theme.json"))
        } else {
            Some(PathBuf::from(self.preference_file.trim()))
        }
    }
}
