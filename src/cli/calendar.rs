use chrono::NaiveDate;

use crate::cli::Context;
use crate::display::display_calendar;
use crate::error::Result;
use crate::models::store;

pub fn show_calendar(ctx: &Context, date: Option<NaiveDate>) -> Result<()> {
    store::require_user(&ctx.dir)?;
    let progress = store::load_progress(&ctx.dir)?;

    display_calendar(&progress, date.unwrap_or(ctx.today));
    Ok(())
}
