mod auth;
mod cli;
mod display;
mod error;
mod logging;
mod models;

use clap::Parser;
use log::debug;

use crate::cli::{Cli, Context};

fn main() {
    let cli = Cli::parse();

    let ctx = Context::load().unwrap_or_else(|e| {
        eprintln!("Failed to load settings: {}", e);
        std::process::exit(1);
    });

    // Keep the handle alive until exit.
    let _logger = logging::init_logging(&ctx.settings.log_level).unwrap_or_else(|e| {
        eprintln!("{}", e);
        std::process::exit(1);
    });
    debug!("data directory: {}", ctx.dir.display());

    if let Err(e) = cli::run(cli, &ctx) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
