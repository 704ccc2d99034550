use std::io;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use log::info;

use caretrack::config::Config;
use caretrack::console::Console;
use caretrack::{menu, Session};

fn main() -> Result<()> {
    dotenv().ok();
    // stdout carries the menu, so logging stays quiet unless RUST_LOG asks
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_env().context("failed to load configuration")?;

    let mut session = Session::open(&config.database_url)
        .with_context(|| format!("failed to open database at {}", config.database_url))?;

    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());
    menu::run(&mut session, &mut console).context("session aborted")?;

    info!("Session closed");
    Ok(())
}
