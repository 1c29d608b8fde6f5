// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use smartspend::advice::{AdviceGateway, backend_from_config};
use smartspend::config::Config;
use smartspend::db::{self, SqliteStorage};
use smartspend::tracker::Tracker;
use smartspend::utils::parse_date;
use smartspend::{cli, commands};

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::build_cli();
    let matches = cli.get_matches();

    init_tracing(matches.get_flag("verbose"));

    let config = Config::from_env();
    let today = match matches.get_one::<String>("as_of") {
        Some(d) => parse_date(d)?,
        None => chrono::Local::now().date_naive(),
    };

    let gateway = AdviceGateway::new(backend_from_config(&config)?);

    if !cli::needs_storage(&matches) {
        match matches.subcommand() {
            Some(("categories", _)) => commands::categories::handle(),
            Some(("suggest", sub)) => commands::advice::handle_suggest(&gateway, sub).await?,
            _ => {
                cli::build_cli().print_help()?;
                println!();
            }
        }
        return Ok(());
    }

    let path = match matches.get_one::<String>("db") {
        Some(p) => PathBuf::from(p),
        None => match config.db_path.clone() {
            Some(p) => p,
            None => db::default_db_path()?,
        },
    };
    let conn = db::open_or_init(&path)?;
    let storage = SqliteStorage::new(&conn);
    let mut tracker = Tracker::open(&storage, today)
        .with_context(|| format!("Failed to load transactions from {}", path.display()))?;

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", path.display());
        }
        Some(("overview", sub)) => commands::reports::overview(&tracker, sub)?,
        Some(("tx", sub)) => commands::transactions::handle(&mut tracker, &gateway, sub).await?,
        Some(("report", sub)) => commands::reports::handle(&tracker, sub)?,
        Some(("advise", sub)) => commands::advice::handle_advise(&tracker, &gateway, sub).await?,
        Some(("export", sub)) => commands::exporter::handle(tracker.snapshot(), sub)?,
        Some(("doctor", _)) => {
            commands::doctor::handle(tracker.snapshot(), tracker.reference_date())
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
