use crate::cli::Context;
use crate::display::display_stats;
use crate::error::Result;
use crate::models::store;

pub fn show_stats(ctx: &Context) -> Result<()> {
    let user = store::require_user(&ctx.dir)?;
    let progress = store::load_progress(&ctx.dir)?;

    println!("Stats for {}\n", user.name);
    display_stats(&progress, ctx.today);
    Ok(())
}
