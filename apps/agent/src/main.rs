mod config;
mod errors;
mod models;
mod outreach;
mod query;
mod session;
mod store;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use chrono::Local;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::session::{Outcome, Session};
use crate::store::JsonStore;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting HR agent v{}", env!("CARGO_PKG_VERSION"));

    // One read at session start; unrecoverable load failures abort here.
    let mut store = JsonStore::open(&config.data_dir)?;
    let mut session = Session::new(Local::now().date_naive());

    println!("HR Agent — type 'Quit' to exit.");
    let stdin = io::stdin();
    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // EOF behaves like quit
            println!("\nBye.");
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match session.handle(line, &mut store) {
            Ok(Outcome::Quit) => {
                println!("Bye.");
                break;
            }
            Ok(Outcome::Reply(text)) => println!("{text}"),
            Err(err) if err.is_fatal() => {
                error!("Data store failure: {err}");
                return Err(err.into());
            }
            Err(err) => println!("{err}"),
        }
    }

    Ok(())
}
