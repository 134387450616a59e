use crate::cli::{Context, LogLevel};
use crate::error::Result;
use crate::models::config;

pub fn handle_config(
    ctx: &Context,
    api_url: Option<String>,
    log_level: Option<LogLevel>,
) -> Result<()> {
    if api_url.is_none() && log_level.is_none() {
        println!("Config file: {}", config::config_path(&ctx.dir).display());
        println!("API URL:     {}", ctx.settings.effective_api_url());
        println!("Log level:   {}", ctx.settings.log_level);
        println!();
        println!("To change: ecolife config --api-url <URL> --log-level <LEVEL>");
        return Ok(());
    }

    let mut settings = ctx.settings.clone();
    if let Some(url) = api_url {
        settings.api_base_url = url;
    }
    if let Some(level) = log_level {
        settings.log_level = level.as_str().to_string();
    }
    config::save_settings(&ctx.dir, &settings)?;

    println!("Settings saved to {}", config::config_path(&ctx.dir).display());
    Ok(())
}
