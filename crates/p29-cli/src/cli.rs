//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::commands::{QuartersArgs, SelectArgs, TimelineArgs, TodayArgs, VitalsArgs};

/// P29 - UK Corporate Governance Code Provision 29 compliance calendar
#[derive(Parser)]
#[command(name = "p29")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table", global = true)]
    pub format: OutputFormat,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Store file for the saved year-end and analytics
    #[arg(long, env = "P29_STORE", global = true)]
    pub store: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand)]
pub enum Commands {
    /// Show the first compliance period, report deadline and labels
    Timeline(TimelineArgs),

    /// Show the fiscal quarters of the first compliance period
    Quarters(QuartersArgs),

    /// Compare timelines across all fiscal year-ends
    Scenarios,

    /// Show, save or reset the saved fiscal year-end
    Select(SelectArgs),

    /// Show the timeline context banner for a date
    Banner(TodayArgs),

    /// List emergency-track milestones with days remaining
    Milestones(TodayArgs),

    /// Record and review web-vitals measurements
    Vitals(VitalsArgs),
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format
    Json,
    /// CSV format
    Csv,
    /// Minimal output (just the values)
    Minimal,
}
