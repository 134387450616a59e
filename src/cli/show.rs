use crate::cli::Context;
use crate::display::display_today;
use crate::error::Result;
use crate::models::{daily_challenges, store};

pub fn show_today(ctx: &Context) -> Result<()> {
    let user = store::require_user(&ctx.dir)?;
    let progress = store::load_progress(&ctx.dir)?;
    let challenges = daily_challenges(ctx.today);

    display_today(ctx.today, &challenges, &progress, &user.name);
    Ok(())
}
