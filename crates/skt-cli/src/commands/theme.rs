use serde::Serialize;
use skt_core::Theme;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ThemeCommands;
use crate::commands::parse::parse_theme;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ThemeReport {
    stored: Option<Theme>,
    effective: Theme,
}

/// Handle `skt theme`.
pub fn handle(action: &ThemeCommands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let controller = ctx.theme()?;
    let effective = match action {
        ThemeCommands::Show => controller.init(),
        ThemeCommands::Set { theme } => controller.set(parse_theme(theme)?)?,
        ThemeCommands::Toggle => controller.toggle()?,
        ThemeCommands::Clear => controller.clear()?,
    };
    tracing::debug!(applied = ?ctx.view.applied_theme(), "theme applied");

    output(
        &ThemeReport {
            stored: controller.stored(),
            effective,
        },
        flags.format,
    )
}
