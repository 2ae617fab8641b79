use crate::context::AppContext;

/// Handle `skt dashboard`.
pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    ctx.run(ctx.ui.init()).await?;
    Ok(())
}
