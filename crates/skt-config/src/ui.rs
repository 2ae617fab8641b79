//! Interaction timing and list sizes.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

const fn default_debounce_ms() -> u64 {
    300
}

const fn default_toast_ttl_secs() -> u64 {
    5
}

const fn default_log_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiConfig {
    /// Quiet period before an input edit is validated.
    #[serde(default = "default_debounce_ms")]
    pub debounce_ms: u64,

    /// Lifetime of a toast notification.
    #[serde(default = "default_toast_ttl_secs")]
    pub toast_ttl_secs: u64,

    /// Number of study logs loaded for the logs section.
    #[serde(default = "default_log_limit")]
    pub log_limit: u32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            debounce_ms: default_debounce_ms(),
            toast_ttl_secs: default_toast_ttl_secs(),
            log_limit: default_log_limit(),
        }
    }
}

impl UiConfig {
    #[must_use]
    pub const fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    #[must_use]
    pub const fn toast_ttl(&self) -> Duration {
        Duration::from_secs(self.toast_ttl_secs)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.debounce_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "ui.debounce_ms".to_string(),
                reason: "must be greater than zero".to_string(),
            });
        }
        if self.log_limit == 0 || self.log_limit > 100 {
            return Err(ConfigError::InvalidValue {
                field: "ui.log_limit".to_string(),
                reason: format!("{} is outside 1..=100", self.log_limit),
            });
        }
        Ok(())
    }
}
