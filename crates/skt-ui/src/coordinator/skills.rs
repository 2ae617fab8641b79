use std::str::FromStr;

use skt_core::{Skill, SkillDraft, SkillFilters, SkillStatus};
use skt_forms::{Form, SubmitState, ValidationError};

use super::Coordinator;
use super::input::FieldSnapshot;
use crate::error::UiError;
use crate::forms::skill;
use crate::toast::Toast;
use crate::view::{CloseReason, ModalKind, Section};

pub const ADD_SKILL_TITLE: &str = "Add New Skill";
pub const EDIT_SKILL_TITLE: &str = "Edit Skill";
pub const DELETE_SKILL_PROMPT: &str =
    "Are you sure you want to delete this skill? This action cannot be undone.";

impl Coordinator {
    /// Open the skill modal with an empty form. Every field is redrawn
    /// neutral, so errors left from an earlier attempt disappear.
    pub fn open_add_skill(&self) {
        let (fields, submit) = {
            let mut state = self.state();
            state.editing = None;
            state.skill_form.clear_values();
            let submit = self.validator.reset(&mut state.skill_form);
            (self.neutral_snapshot(&state.skill_form), submit)
        };
        self.render_snapshot(ModalKind::Skill, &fields);
        self.view.render_submit(ModalKind::Skill, &submit);
        self.open_modal(ModalKind::Skill, ADD_SKILL_TITLE);
    }

    /// Fetch the skill list, then open the skill modal populated with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::NotFound`] (after a toast) when no skill has this
    /// id, or [`UiError::Request`] if the list fails to load.
    pub async fn edit_skill(&self, id: i64) -> Result<Skill, UiError> {
        let skills = self.api.skills().list(&SkillFilters::default()).await?;
        let Some(found) = skills.into_iter().find(|s| s.id == id) else {
            self.toast(Toast::error("Skill not found"));
            return Err(UiError::NotFound(id));
        };

        let (fields, submit) = self.populate_skill_form(&found)?;
        self.render_snapshot(ModalKind::Skill, &fields);
        self.view.render_submit(ModalKind::Skill, &submit);
        self.open_modal(ModalKind::Skill, EDIT_SKILL_TITLE);
        Ok(found)
    }

    fn populate_skill_form(
        &self,
        found: &Skill,
    ) -> Result<(Vec<FieldSnapshot>, SubmitState), UiError> {
        let mut state = self.state();
        state.editing = Some(found.clone());
        let form = &mut state.skill_form;
        form.set_text(skill::NAME, found.name.clone())?;
        form.set_text(skill::CATEGORY, found.category.clone().unwrap_or_default())?;
        form.set_text(skill::STATUS, found.status.as_str())?;
        let submit = self.validator.reset(form);
        Ok((self.neutral_snapshot(form), submit))
    }

    /// Validate the skill form, then create or update.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Validation`] without any request when a field is
    /// invalid, or [`UiError::Request`] when the save fails.
    pub async fn submit_skill(&self) -> Result<Skill, UiError> {
        let (draft, editing) = self.read_skill_form()?;

        self.view.set_form_busy(ModalKind::Skill, true);
        let result = match editing {
            Some(id) => self.api.skills().update(id, &draft).await,
            None => self.api.skills().create(&draft).await,
        };
        self.view.set_form_busy(ModalKind::Skill, false);
        let saved = result?;

        tracing::info!(id = saved.id, name = %saved.name, "skill saved");
        self.toast(Toast::success(if editing.is_some() {
            "Skill updated successfully"
        } else {
            "Skill added successfully"
        }));
        self.view.flash_success(ModalKind::Skill);
        self.close_modal(ModalKind::Skill, CloseReason::Saved);
        self.refresh(Section::Skills).await;
        self.refresh_dashboard_if_visible().await;
        Ok(saved)
    }

    fn read_skill_form(&self) -> Result<(SkillDraft, Option<i64>), UiError> {
        let (fields, result) = {
            let mut state = self.state();
            let report = self.validator.validate_form(&mut state.skill_form);
            let form = &state.skill_form;
            let fields = self.snapshot(
                form,
                report.fields.iter().map(|(id, s)| (id.as_str(), s.clone())),
            );
            let editing = state.editing.as_ref().map(|s| s.id);
            let result = report
                .into_result(form)
                .and_then(|()| skill_draft(form))
                .map(|draft| (draft, editing));
            (fields, result)
        };
        self.render_snapshot(ModalKind::Skill, &fields);
        Ok(result?)
    }

    /// Ask for confirmation, then delete. Returns `false` when declined.
    ///
    /// # Errors
    ///
    /// Returns [`UiError::Request`] when the delete fails.
    pub async fn delete_skill(&self, id: i64) -> Result<bool, UiError> {
        if !self.view.confirm(DELETE_SKILL_PROMPT) {
            tracing::debug!(id, "skill delete declined");
            return Ok(false);
        }
        self.api.skills().delete(id).await?;
        tracing::info!(id, "skill deleted");
        self.toast(Toast::success("Skill deleted successfully"));
        self.refresh(Section::Skills).await;
        self.refresh_dashboard_if_visible().await;
        Ok(true)
    }
}

fn skill_draft(form: &Form) -> Result<SkillDraft, ValidationError> {
    let status = SkillStatus::from_str(form.text(skill::STATUS)).map_err(|_| {
        ValidationError::InvalidFields {
            fields: vec!["Status".to_string()],
        }
    })?;
    Ok(SkillDraft {
        name: form.text(skill::NAME).trim().to_string(),
        category: form.text(skill::CATEGORY).trim().to_string(),
        status,
    })
}
