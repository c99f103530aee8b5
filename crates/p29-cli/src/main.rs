//! P29 CLI - Provision 29 compliance calendar from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Compliance timeline for a March year-end
//! p29 timeline --year-end march
//!
//! # Remember the year-end for later commands
//! p29 select june
//!
//! # Fiscal quarters of the first compliance year
//! p29 quarters
//!
//! # Record a web vital and check the performance budget
//! p29 vitals record lcp 3100 --url /roadmap
//! p29 vitals budget
//! ```

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod cli;
mod commands;
mod error;
mod output;

use cli::{Cli, Commands};
use commands::CommandContext;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let ctx = CommandContext::new(cli.format, cli.quiet, cli.store)?;

    // Execute command
    match cli.command {
        Commands::Timeline(args) => commands::timeline::execute(args, &ctx)?,
        Commands::Quarters(args) => commands::quarters::execute(args, &ctx)?,
        Commands::Scenarios => commands::scenarios::execute(&ctx)?,
        Commands::Select(args) => commands::select::execute(args, &ctx)?,
        Commands::Banner(args) => commands::countdown::execute_banner(args, &ctx)?,
        Commands::Milestones(args) => commands::countdown::execute_milestones(args, &ctx)?,
        Commands::Vitals(args) => commands::vitals::execute(args, &ctx)?,
    }

    Ok(())
}
