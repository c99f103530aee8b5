//! Vitals command implementation.
//!
//! Records web-vitals measurements into the store and reports on them.

use anyhow::Result;
use clap::{Args, Subcommand};
use serde::Serialize;
use tabled::Tabled;

use p29_vitals::{AnalyticsLog, MetricName, Rating, VitalsSummary, WebVitalsMetric};

use crate::cli::OutputFormat;
use crate::commands::CommandContext;
use crate::error::CliError;
use crate::output::{print_info, print_json_value, print_output, print_success, print_warning};

/// Arguments for the vitals command.
#[derive(Args, Debug)]
pub struct VitalsArgs {
    #[command(subcommand)]
    pub command: VitalsCommand,
}

/// Vitals subcommands.
#[derive(Subcommand, Debug)]
pub enum VitalsCommand {
    /// Record one measurement
    Record {
        /// Metric name (CLS, FID, FCP, LCP, TTFB, INP)
        name: String,
        /// Measured value (milliseconds, or unitless for CLS)
        value: f64,
        /// Page the measurement came from
        #[arg(long, default_value = "/")]
        url: String,
    },
    /// Summarise recorded measurements
    Summary,
    /// Check latest measurements against the performance budget
    Budget,
    /// Stop recording measurements
    OptOut,
    /// Resume recording measurements
    OptIn,
    /// Discard recorded measurements
    Clear,
}

#[derive(Debug, Serialize, Tabled)]
struct SummaryRow {
    #[tabled(rename = "Metric")]
    metric: MetricName,
    #[tabled(rename = "Samples")]
    samples: usize,
    #[tabled(rename = "Avg")]
    avg: String,
    #[tabled(rename = "Min")]
    min: String,
    #[tabled(rename = "Max")]
    max: String,
    #[tabled(rename = "Latest")]
    latest: String,
    #[tabled(rename = "Rating")]
    rating: String,
}

fn summary_rows(summary: &VitalsSummary) -> Vec<SummaryRow> {
    summary
        .metrics
        .iter()
        .map(|(&name, stats)| SummaryRow {
            metric: name,
            samples: stats.samples,
            avg: name.format_value(stats.avg),
            min: name.format_value(stats.min),
            max: name.format_value(stats.max),
            latest: name.format_value(stats.latest),
            rating: format!("{} {}", stats.rating.symbol(), stats.rating),
        })
        .collect()
}

#[derive(Debug, Serialize)]
struct RecordOutcome {
    recorded: bool,
    metric: MetricName,
    value: f64,
    rating: Rating,
}

fn report_tracking(ctx: &CommandContext, enabled: bool) -> Result<()> {
    if ctx.format == OutputFormat::Json {
        print_json_value(&serde_json::json!({ "tracking": enabled }))?;
    } else if !ctx.quiet {
        let state = if enabled { "enabled" } else { "disabled" };
        print_success(&format!("Web vitals tracking {state}"));
    }
    Ok(())
}

/// Execute the vitals command.
pub fn execute(args: VitalsArgs, ctx: &CommandContext) -> Result<()> {
    let store = ctx.open_store()?;
    let log = AnalyticsLog::new(&store);

    match args.command {
        VitalsCommand::Record { name, value, url } => {
            let name: MetricName = name.parse()?;
            let metric = WebVitalsMetric::new(name, value);
            let rating = metric.rating;
            let recorded = log.record(metric, &url)?;

            if ctx.format == OutputFormat::Json {
                print_json_value(&RecordOutcome {
                    recorded,
                    metric: name,
                    value,
                    rating,
                })?;
            } else if recorded {
                if !ctx.quiet {
                    print_success(&format!(
                        "Recorded {}: {} ({})",
                        name,
                        name.format_value(value),
                        rating
                    ));
                }
            } else {
                print_warning("Tracking is disabled; run `p29 vitals opt-in` to resume");
            }
        }
        VitalsCommand::Summary => {
            let summary = log.summary();
            match ctx.format {
                OutputFormat::Json => print_json_value(&summary)?,
                _ => {
                    ctx.header(&format!(
                        "Web Vitals Summary ({} measurements)",
                        summary.total_records
                    ));
                    print_output(&summary_rows(&summary), ctx.format)?;
                }
            }
        }
        VitalsCommand::Budget => {
            let report = log.check_budget();
            match ctx.format {
                OutputFormat::Json => print_json_value(&report)?,
                _ => {
                    if report.passed {
                        if !ctx.quiet {
                            print_success("Performance budget passed");
                        }
                    } else {
                        ctx.header("Performance Budget Violations");
                        for violation in &report.violations {
                            println!("{violation}");
                        }
                    }
                }
            }
            if !report.passed {
                return Err(CliError::BudgetFailed(report.violations.len()).into());
            }
        }
        VitalsCommand::OptOut => {
            log.opt_out()?;
            report_tracking(ctx, false)?;
        }
        VitalsCommand::OptIn => {
            log.opt_in()?;
            report_tracking(ctx, true)?;
        }
        VitalsCommand::Clear => {
            let removed = log.clear()?;
            if ctx.format == OutputFormat::Json {
                print_json_value(&serde_json::json!({ "removed": removed }))?;
            } else if !ctx.quiet {
                print_info(&format!("Removed {removed} measurement(s)"));
            }
        }
    }

    Ok(())
}
