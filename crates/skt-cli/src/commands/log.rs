use anyhow::bail;
use skt_forms::FieldInput;
use skt_ui::{ModalKind, Section, Toast, View, forms::log};

use crate::cli::subcommands::LogCommands;
use crate::context::AppContext;

/// Handle `skt log`.
pub async fn handle(action: &LogCommands, ctx: &AppContext) -> anyhow::Result<()> {
    match action {
        LogCommands::List => {
            ctx.run(ctx.ui.show_section(Section::Logs)).await?;
        }
        LogCommands::Add {
            date,
            hours,
            minutes,
            seconds,
            notes,
            skills,
        } => {
            ctx.ui.focus(Section::Logs);
            ctx.run(ctx.ui.open_add_log()).await?;

            for (id, value) in [
                (log::DATE, date),
                (log::HOURS, hours),
                (log::MINUTES, minutes),
                (log::SECONDS, seconds),
                (log::NOTES, notes),
            ] {
                if let Some(value) = value {
                    ctx.ui.set_field_value(ModalKind::Log, id, value.as_str())?;
                }
            }

            let known = skill_choices(ctx);
            for skill_id in skills {
                let value = skill_id.to_string();
                if !known.contains(&value) {
                    bail!("no skill with id {skill_id}");
                }
                ctx.ui
                    .checkbox_toggled(ModalKind::Log, log::SKILLS, &value, true)?;
            }

            ctx.run(ctx.ui.submit_log()).await?;
        }
        LogCommands::Delete { id } => {
            ctx.ui.focus(Section::Logs);
            if !ctx.run(ctx.ui.delete_log(*id)).await? {
                tracing::info!(id, "study log delete cancelled");
                ctx.view.show_toast(&Toast::info("Delete cancelled"));
            }
        }
    }
    Ok(())
}

/// Values of the skill checkboxes the open log form offers.
fn skill_choices(ctx: &AppContext) -> Vec<String> {
    let form = ctx.ui.form(ModalKind::Log);
    match form.field(log::SKILLS).map(|field| &field.input) {
        Some(FieldInput::Choices(choices)) => {
            choices.iter().map(|choice| choice.value.clone()).collect()
        }
        _ => Vec::new(),
    }
}
