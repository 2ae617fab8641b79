use skt_core::dates::{DAY_FORMAT, parse_day};
use skt_core::{NewStudyLog, SkillFilters, StudyLog};
use skt_forms::{Choice, Form, ValidationError};

use super::Coordinator;
use crate::error::UiError;
use crate::forms::{TIME_FIELDS, log};
use crate::toast::Toast;
use crate::view::{CloseReason, ModalKind, Section};

pub const LOG_MODAL_TITLE: &str = "Log Study Session";
pub const DELETE_LOG_PROMPT: &str = "Are you sure you want to delete this study log?";

impl Coordinator {
    /// Load skills as checkbox choices, reset the log form with today's
    /// date, and open the log modal.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Request`] if the skill list fails to load; the
    /// modal is not opened.
    pub async fn open_add_log(&self) -> Result<(), UiError> {
        let skills = self.api.skills().list(&SkillFilters::default()).await?;
        let choices: Vec<Choice> = skills
            .iter()
            .map(|s| Choice::new(s.id.to_string(), s.name.clone()))
            .collect();
        let today = self.validator.today().format(DAY_FORMAT).to_string();

        let (fields, submit) = {
            let mut state = self.state();
            let form = &mut state.log_form;
            form.clear_values();
            form.set_choices(log::SKILLS, choices.clone())?;
            form.set_text(log::DATE, today)?;
            let submit = self.validator.reset(form);
            (self.neutral_snapshot(form), submit)
        };

        self.view.render_skill_choices(&choices);
        self.render_snapshot(ModalKind::Log, &fields);
        self.view.render_time_error(None);
        self.view.render_submit(ModalKind::Log, &submit);
        self.open_modal(ModalKind::Log, LOG_MODAL_TITLE);
        Ok(())
    }

    /// Validate the log form and the study time, then create the log.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Validation`] without any request when a field or
    /// the study time is invalid, or [`UiError::Request`] when the save
    /// fails.
    pub async fn submit_log(&self) -> Result<StudyLog, UiError> {
        let body = self.read_log_form()?;

        self.view.set_form_busy(ModalKind::Log, true);
        let result = self.api.logs().create(&body).await;
        self.view.set_form_busy(ModalKind::Log, false);
        let saved = result?;

        tracing::info!(id = saved.id, hours = saved.hours, "study session logged");
        self.toast(Toast::success("Study session logged successfully"));
        self.view.flash_success(ModalKind::Log);
        self.close_modal(ModalKind::Log, CloseReason::Saved);
        self.refresh(Section::Logs).await;
        self.refresh_dashboard_if_visible().await;
        Ok(saved)
    }

    fn read_log_form(&self) -> Result<NewStudyLog, UiError> {
        let (fields, time_error, result) = {
            let mut state = self.state();
            let form = &mut state.log_form;
            let report = self.validator.validate_form(form);
            let time = self.validator.validate_time_inputs(form, TIME_FIELDS);
            let fields = self.snapshot(
                form,
                report.fields.iter().map(|(id, s)| (id.as_str(), s.clone())),
            );
            let time_error = form.time_error().map(str::to_string);
            let result = report
                .into_result(form)
                .and_then(|()| time)
                .and_then(|hours| new_log(form, hours));
            (fields, time_error, result)
        };
        self.render_snapshot(ModalKind::Log, &fields);
        self.view.render_time_error(time_error.as_deref());
        Ok(result?)
    }

    /// Ask for confirmation, then delete. Returns `false` when declined.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Request`] when the delete fails.
    pub async fn delete_log(&self, id: i64) -> Result<bool, UiError> {
        if !self.view.confirm(DELETE_LOG_PROMPT) {
            tracing::debug!(id, "log delete declined");
            return Ok(false);
        }
        self.api.logs().delete(id).await?;
        tracing::info!(id, "study log deleted");
        self.toast(Toast::success("Study log deleted successfully"));
        self.refresh(Section::Logs).await;
        self.refresh_dashboard_if_visible().await;
        Ok(true)
    }
}

fn new_log(form: &Form, hours: f64) -> Result<NewStudyLog, ValidationError> {
    let date = parse_day(form.text(log::DATE)).map_err(|_| ValidationError::InvalidFields {
        fields: vec!["Date".to_string()],
    })?;
    let skill_ids = form
        .checked_values(log::SKILLS)
        .into_iter()
        .filter_map(|value| value.parse::<i64>().ok())
        .collect();
    Ok(NewStudyLog {
        date,
        hours,
        notes: form.text(log::NOTES).trim().to_string(),
        skill_ids,
    })
}
