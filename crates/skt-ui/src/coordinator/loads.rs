use skt_core::{LogQuery, SkillFilters};

use super::Coordinator;
use crate::error::UiError;
use crate::present;
use crate::view::Section;

/// What happened to a section load's response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Rendered,
    /// A newer load of the same section started first; nothing was drawn.
    Superseded,
}

impl Coordinator {
    fn begin_load(&self, section: Section) -> u64 {
        let ticket = self.state().generations.next(section);
        self.view.show_skeleton(section);
        ticket
    }

    /// Whether the response for `ticket` may be rendered. The skeleton is
    /// cleared only for the current load; a newer one still owns it.
    fn finish_load(&self, section: Section, ticket: u64) -> bool {
        if !self.state().generations.is_current(section, ticket) {
            tracing::debug!(section = section.as_str(), ticket, "dropping stale response");
            return false;
        }
        self.view.clear_skeleton(section);
        true
    }

    /// # Errors
    ///
    /// Returns [`UiError::Request`] if `/stats` fails.
    pub async fn load_dashboard(&self) -> Result<LoadOutcome, UiError> {
        let ticket = self.begin_load(Section::Dashboard);
        let result = self.api.stats().await;
        if !self.finish_load(Section::Dashboard, ticket) {
            return Ok(LoadOutcome::Superseded);
        }
        self.view.render_dashboard(&result?);
        Ok(LoadOutcome::Rendered)
    }

    /// Load skills with the current filters and rebuild the category filter.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Request`] if `/skills` fails.
    pub async fn load_skills(&self) -> Result<LoadOutcome, UiError> {
        let ticket = self.begin_load(Section::Skills);
        let filters = self.filters();
        let result = self.api.skills().list(&filters).await;
        if !self.finish_load(Section::Skills, ticket) {
            return Ok(LoadOutcome::Superseded);
        }
        let skills = result?;
        self.view.render_skills(&skills);
        self.view
            .render_category_filter(&present::categories(&skills), filters.category.as_deref());
        Ok(LoadOutcome::Rendered)
    }

    /// Load the most recent logs, up to the configured limit.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Request`] if `/logs` fails.
    pub async fn load_logs(&self) -> Result<LoadOutcome, UiError> {
        let ticket = self.begin_load(Section::Logs);
        let result = self.api.logs().list(&LogQuery::latest(self.log_limit)).await;
        if !self.finish_load(Section::Logs, ticket) {
            return Ok(LoadOutcome::Superseded);
        }
        self.view.render_logs(&result?);
        Ok(LoadOutcome::Rendered)
    }

    /// Store new filter values and reload the skill list.
    ///
    /// # Errors
    ///
    /// As [`Self::load_skills`].
    pub async fn set_skill_filters(&self, filters: SkillFilters) -> Result<LoadOutcome, UiError> {
        tracing::debug!(?filters, "skill filters changed");
        self.state().filters = filters;
        self.load_skills().await
    }
}
