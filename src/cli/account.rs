use log::info;

use crate::auth::AuthClient;
use crate::cli::Context;
use crate::error::Result;
use crate::models::store::{self, Session};
use crate::models::User;

pub fn login(ctx: &Context, email: &str, password: &str) -> Result<()> {
    let client = AuthClient::new(ctx.settings.effective_api_url())?;
    let user = client.login(email, password)?;
    remember(ctx, user)
}

pub fn register(
    ctx: &Context,
    name: &str,
    email: &str,
    password: &str,
    check_password: &str,
) -> Result<()> {
    let client = AuthClient::new(ctx.settings.effective_api_url())?;
    let user = client.register(name, email, password, check_password)?;
    println!("Account created.");
    remember(ctx, user)
}

fn remember(ctx: &Context, user: User) -> Result<()> {
    println!("Welcome, {}!", user.name);
    store::save_session(&ctx.dir, &Session { user: Some(user) })
}

pub fn logout(ctx: &Context) -> Result<()> {
    store::clear_session(&ctx.dir)?;
    info!("session cleared");
    println!("Logged out.");
    Ok(())
}

pub fn whoami(ctx: &Context) -> Result<()> {
    match store::load_session(&ctx.dir)?.user {
        Some(user) => println!("{} <{}>", user.name, user.email),
        None => println!("Not logged in."),
    }
    Ok(())
}
