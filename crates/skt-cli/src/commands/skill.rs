use skt_core::{SkillFilters, SkillStatus};
use skt_ui::{ModalKind, Section, Toast, View, forms::skill};

use crate::cli::subcommands::SkillCommands;
use crate::commands::parse::parse_status;
use crate::context::AppContext;

/// Handle `skt skill`.
pub async fn handle(action: &SkillCommands, ctx: &AppContext) -> anyhow::Result<()> {
    match action {
        SkillCommands::List { category, status } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            ctx.ui.focus(Section::Skills);
            let filters = SkillFilters {
                category: category.clone(),
                status,
            };
            ctx.run(ctx.ui.set_skill_filters(filters)).await?;
        }
        SkillCommands::Add {
            name,
            category,
            status,
        } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            ctx.ui.focus(Section::Skills);
            ctx.ui.open_add_skill();
            fill(
                ctx,
                Some(name.as_str()),
                category.as_deref(),
                status.map(SkillStatus::as_str),
            )?;
            ctx.run(ctx.ui.submit_skill()).await?;
        }
        SkillCommands::Edit {
            id,
            name,
            category,
            status,
        } => {
            let status = status.as_deref().map(parse_status).transpose()?;
            ctx.ui.focus(Section::Skills);
            ctx.run(ctx.ui.edit_skill(*id)).await?;
            fill(
                ctx,
                name.as_deref(),
                category.as_deref(),
                status.map(SkillStatus::as_str),
            )?;
            ctx.run(ctx.ui.submit_skill()).await?;
        }
        SkillCommands::Delete { id } => {
            ctx.ui.focus(Section::Skills);
            if !ctx.run(ctx.ui.delete_skill(*id)).await? {
                tracing::info!(id, "skill delete cancelled");
                ctx.view.show_toast(&Toast::info("Delete cancelled"));
            }
        }
    }
    Ok(())
}

/// Type the given values into the open skill form.
fn fill(
    ctx: &AppContext,
    name: Option<&str>,
    category: Option<&str>,
    status: Option<&str>,
) -> anyhow::Result<()> {
    for (id, value) in [
        (skill::NAME, name),
        (skill::CATEGORY, category),
        (skill::STATUS, status),
    ] {
        if let Some(value) = value {
            ctx.ui.set_field_value(ModalKind::Skill, id, value)?;
        }
    }
    Ok(())
}
