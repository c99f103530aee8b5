//! CLI command implementations.

pub mod countdown;
pub mod quarters;
pub mod scenarios;
pub mod select;
pub mod timeline;
pub mod vitals;

// Re-export argument types for convenience
pub use countdown::TodayArgs;
pub use quarters::QuartersArgs;
pub use select::SelectArgs;
pub use timeline::TimelineArgs;
pub use vitals::VitalsArgs;

use std::path::PathBuf;

use p29_core::{Date, FiscalYearEnd};
use p29_storage::{FileStore, FiscalYearSelection};
use tracing::{debug, warn};

use crate::cli::OutputFormat;
use crate::error::{CliError, CliResult};
use crate::output::print_header;

/// Settings shared by every command.
pub struct CommandContext {
    /// Output format.
    pub format: OutputFormat,
    /// Suppress headers and status lines.
    pub quiet: bool,
    store_path: PathBuf,
}

impl CommandContext {
    /// Resolves the store location from the flag/env value or the config dir.
    pub fn new(format: OutputFormat, quiet: bool, store: Option<PathBuf>) -> CliResult<Self> {
        let store_path = match store {
            Some(path) => path,
            None => default_store_path()?,
        };
        debug!(store = %store_path.display(), "resolved store path");

        Ok(Self {
            format,
            quiet,
            store_path,
        })
    }

    /// Opens the file store.
    pub fn open_store(&self) -> anyhow::Result<FileStore> {
        Ok(FileStore::open(&self.store_path)?)
    }

    /// Store file location.
    pub fn store_path(&self) -> &PathBuf {
        &self.store_path
    }

    /// True in table mode unless quiet.
    pub fn header_enabled(&self) -> bool {
        self.format == OutputFormat::Table && !self.quiet
    }

    /// Prints a section header when headers are enabled.
    pub fn header(&self, title: &str) {
        if self.header_enabled() {
            print_header(title);
        }
    }

    /// Uses the explicit year-end if given, otherwise the saved selection.
    ///
    /// An unreadable store falls back to December, like an unknown stored value.
    pub fn resolve_year_end(&self, explicit: Option<&str>) -> anyhow::Result<FiscalYearEnd> {
        if let Some(raw) = explicit {
            return Ok(raw.parse()?);
        }

        match self.open_store() {
            Ok(store) => Ok(FiscalYearSelection::load(&store)?),
            Err(err) => {
                warn!(
                    store = %self.store_path.display(),
                    error = %err,
                    "could not read saved fiscal year-end"
                );
                Ok(FiscalYearEnd::default())
            }
        }
    }
}

/// Default store file location.
fn default_store_path() -> CliResult<PathBuf> {
    let base = dirs::config_dir()
        .or_else(dirs::home_dir)
        .ok_or(CliError::NoStoreLocation)?;
    Ok(base.join("p29").join("store.json"))
}

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Parses an optional `--today` value, defaulting to the local date.
pub fn resolve_today(today: Option<&str>) -> CliResult<Date> {
    today.map_or_else(|| Ok(Date::today()), parse_date)
}
