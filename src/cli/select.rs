use crate::cli::Context;
use crate::error::Result;
use crate::models::store;

pub fn select_challenge(ctx: &Context, id: &str) -> Result<()> {
    store::require_user(&ctx.dir)?;
    let mut progress = store::load_progress(&ctx.dir)?;

    let challenge = progress.select(ctx.today, id)?;
    store::save_progress(&ctx.dir, &progress)?;

    println!(
        "Selected '{}' ({}, {}P) for {}",
        challenge.title,
        challenge.difficulty.display_name(),
        challenge.points,
        ctx.today
    );
    println!("Run `ecolife complete` once you've done it.");
    Ok(())
}
