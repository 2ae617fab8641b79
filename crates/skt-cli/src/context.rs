use std::future::Future;
use std::sync::Arc;

use anyhow::Context as _;
use skt_api::ReqwestTransport;
use skt_config::SktConfig;
use skt_core::Theme;
use skt_ui::{Coordinator, JsonThemeStore, ThemeController, UiError};

use crate::cli::GlobalFlags;
use crate::commands::Reported;
use crate::terminal::TerminalView;

/// Everything a command handler needs: configuration, the terminal view
/// and the coordinator driving it.
pub struct AppContext {
    pub config: SktConfig,
    pub view: Arc<TerminalView>,
    pub ui: Coordinator,
}

impl AppContext {
    /// Load configuration and wire the HTTP transport to a terminal view.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails to load or validate, or the
    /// HTTP client cannot be built.
    pub fn init(flags: &GlobalFlags) -> anyhow::Result<Self> {
        let mut config = SktConfig::load_with_dotenv(flags.config.as_deref())
            .context("failed to load configuration")?;
        if let Some(limit) = flags.limit {
            config.ui.log_limit = limit;
        }
        config.validate()?;

        let transport = ReqwestTransport::from_config(&config.api)?;
        tracing::debug!(base_url = transport.base_url(), "api transport ready");

        let view = Arc::new(TerminalView::new(flags));
        let ui = Coordinator::new(Arc::new(transport), view.clone(), &config.ui);
        Ok(Self { config, view, ui })
    }

    /// Run a coordinator task. Failures already shown to the user become
    /// [`Reported`] so `main` only sets the exit code.
    ///
    /// # Errors
    ///
    /// Returns [`Reported`] when the task failed.
    pub async fn run<T, F>(&self, task: F) -> anyhow::Result<T>
    where
        F: Future<Output = Result<T, UiError>>,
    {
        self.ui.guard(task).await.ok_or_else(|| Reported.into())
    }

    /// Theme controller over the configured preference file.
    ///
    /// # Errors
    ///
    /// Returns an error when no preference location can be determined.
    pub fn theme(&self) -> anyhow::Result<ThemeController<JsonThemeStore>> {
        let path = self.config.theme.preference_path().context(
            "no config directory for the theme preference; set theme.preference_file",
        )?;
        Ok(ThemeController::new(
            JsonThemeStore::new(path),
            self.view.clone(),
            system_theme(std::env::var("COLORFGBG").ok().as_deref()),
        ))
    }
}

/// Terminal colour scheme from `COLORFGBG` (`"fg;bg"`). Dark backgrounds
/// are the low ANSI colours except 7 (light grey).
#[must_use]
pub fn system_theme(colorfgbg: Option<&str>) -> Theme {
    let background = colorfgbg
        .and_then(|value| value.rsplit(';').next())
        .and_then(|bg| bg.trim().parse::<u8>().ok());
    match background {
        Some(0..=6 | 8) => Theme::Dark,
        _ => Theme::Light,
    }
}
