//! Banner and milestones command implementations.
//!
//! Both take an optional `--today` so the output can be pinned to a date.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use p29_core::prelude::*;

use crate::cli::OutputFormat;
use crate::commands::{resolve_today, CommandContext};
use crate::output::{print_info, print_json_value, print_output};

/// Arguments for date-relative commands.
#[derive(Args, Debug)]
pub struct TodayArgs {
    /// Date to evaluate (YYYY-MM-DD). Defaults to today.
    #[arg(long)]
    pub today: Option<String>,
}

#[derive(Debug, Serialize)]
struct BannerView {
    date: Date,
    #[serde(flatten)]
    banner: TimelineBanner,
    headline: String,
    body: &'static str,
    accelerated_guidance: bool,
}

/// Execute the banner command.
pub fn execute_banner(args: TodayArgs, ctx: &CommandContext) -> Result<()> {
    let today = resolve_today(args.today.as_deref())?;

    let Some(banner) = TimelineBanner::for_date(today) else {
        match ctx.format {
            OutputFormat::Json => println!("null"),
            _ => {
                if !ctx.quiet {
                    print_info(&format!("No timeline banner applies on {today}"));
                }
            }
        }
        return Ok(());
    };

    let view = BannerView {
        date: today,
        banner,
        headline: banner.headline(),
        body: banner.body(),
        accelerated_guidance: banner.links_accelerated_guidance(),
    };

    match ctx.format {
        OutputFormat::Json => print_json_value(&view)?,
        OutputFormat::Minimal => println!("{}", view.headline),
        OutputFormat::Table | OutputFormat::Csv => {
            ctx.header(&view.headline);
            println!("{}", view.body);
            if view.accelerated_guidance && !ctx.quiet {
                print_info("See `p29 milestones` for the accelerated implementation track.");
            }
        }
    }

    Ok(())
}

#[derive(Debug, Serialize, Tabled)]
struct MilestoneRow {
    #[tabled(rename = "Week Of")]
    week_of: String,
    #[tabled(rename = "Title")]
    title: &'static str,
    #[tabled(rename = "Status")]
    status: &'static str,
    #[tabled(rename = "Priority")]
    priority: Priority,
    #[tabled(rename = "Days")]
    days_remaining: i64,
}

impl MilestoneRow {
    fn new(milestone: &Milestone, today: Date) -> Self {
        Self {
            week_of: milestone.week_of.long_form(),
            title: milestone.title,
            status: milestone.status,
            priority: milestone.priority,
            days_remaining: milestone.days_from(today),
        }
    }
}

/// Execute the milestones command.
pub fn execute_milestones(args: TodayArgs, ctx: &CommandContext) -> Result<()> {
    let today = resolve_today(args.today.as_deref())?;
    let milestones = emergency_milestones();
    let rows: Vec<MilestoneRow> = milestones
        .iter()
        .map(|m| MilestoneRow::new(m, today))
        .collect();

    ctx.header("Emergency Implementation Track");
    print_output(&rows, ctx.format)?;

    if ctx.header_enabled() {
        for milestone in &milestones {
            println!("\n{}: {}", milestone.title, milestone.description);
        }
    }
    Ok(())
}
