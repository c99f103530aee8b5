//! Domain types for the compliance calendar.
//!
//! - [`Date`]: Calendar date with month arithmetic
//! - [`FiscalYearEnd`]: The month an organisation's fiscal year closes

mod date;
mod fiscal_year_end;

pub use date::Date;
pub use fiscal_year_end::FiscalYearEnd;
