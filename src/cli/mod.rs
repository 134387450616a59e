mod account;
mod calendar;
mod complete;
mod config_cmd;
mod guide;
mod select;
mod show;
mod stats;

use std::path::PathBuf;

use chrono::{Local, NaiveDate};
use clap::{Parser, Subcommand, ValueEnum};

use crate::error::Result;
use crate::models::config::{self, Settings};
use crate::models::CategoryFilter;

#[derive(Parser)]
#[command(name = "ecolife")]
#[command(about = "Recycling guide and daily eco challenges", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show today's challenges
    Today,
    /// Pick one of today's challenges
    Select { id: String },
    /// Mark today's selected challenge as done
    Complete,
    /// Points and streaks
    Stats,
    /// Month view of completed days
    Calendar {
        /// Day to inspect (YYYY-MM-DD), defaults to today
        date: Option<NaiveDate>,
    },
    /// Recycling guide
    Guide {
        #[arg(long, value_enum, default_value_t = CategoryFilter::All)]
        category: CategoryFilter,
        #[arg(long, default_value = "")]
        search: String,
    },
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    Register {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        check_password: String,
    },
    Logout,
    Whoami,
    /// Show or change settings
    Config {
        #[arg(long)]
        api_url: Option<String>,
        #[arg(long, value_enum)]
        log_level: Option<LogLevel>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// What every command needs: where state lives, the settings, and the
/// local calendar day.
pub struct Context {
    pub dir: PathBuf,
    pub settings: Settings,
    pub today: NaiveDate,
}

impl Context {
    pub fn load() -> Result<Self> {
        let dir = config::data_dir()?;
        let settings = config::load_settings(&dir)?;
        Ok(Self {
            dir,
            settings,
            today: Local::now().date_naive(),
        })
    }
}

pub fn run(cli: Cli, ctx: &Context) -> Result<()> {
    match cli.command {
        None | Some(Commands::Today) => show::show_today(ctx),
        Some(Commands::Select { id }) => select::select_challenge(ctx, &id),
        Some(Commands::Complete) => complete::complete_challenge(ctx),
        Some(Commands::Stats) => stats::show_stats(ctx),
        Some(Commands::Calendar { date }) => calendar::show_calendar(ctx, date),
        Some(Commands::Guide { category, search }) => {
            guide::show_guide(category, &search);
            Ok(())
        }
        Some(Commands::Login { email, password }) => account::login(ctx, &email, &password),
        Some(Commands::Register {
            name,
            email,
            password,
            check_password,
        }) => account::register(ctx, &name, &email, &password, &check_password),
        Some(Commands::Logout) => account::logout(ctx),
        Some(Commands::Whoami) => account::whoami(ctx),
        Some(Commands::Config { api_url, log_level }) => {
            config_cmd::handle_config(ctx, api_url, log_level)
        }
    }
}
