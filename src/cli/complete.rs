use crate::cli::Context;
use crate::error::Result;
use crate::models::store;

pub fn complete_challenge(ctx: &Context) -> Result<()> {
    store::require_user(&ctx.dir)?;
    let mut progress = store::load_progress(&ctx.dir)?;

    if let Some(id) = progress.selected_on(ctx.today) {
        if progress.is_completed(ctx.today, id) {
            println!("You've already completed today's challenge!");
            println!();
            println!("Come back tomorrow for a new challenge.");
            println!(
                "Total points: {} | Current streak: {} day(s)",
                progress.total_points(),
                progress.current_streak(ctx.today)
            );
            return Ok(());
        }
    }

    let challenge = progress.complete_selected(ctx.today)?;
    store::save_progress(&ctx.dir, &progress)?;

    println!("========================================");
    println!("  CHALLENGE COMPLETE!");
    println!("========================================");
    println!();
    println!("  Challenge:  {}", challenge.title);
    println!("  Difficulty: {}", challenge.difficulty.display_name());
    println!("  Points:     +{}", challenge.points);
    println!("  Streak:     {} day(s)", progress.current_streak(ctx.today));
    println!("  Total:      {} points", progress.total_points());
    println!("  Days done:  {}", progress.completed_days());
    println!();
    println!("========================================");
    Ok(())
}
