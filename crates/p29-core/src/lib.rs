//! # P29 Core
//!
//! Compliance calendar for UK Corporate Governance Code Provision 29.
//!
//! This crate provides the date logic behind the P29 playbook:
//!
//! - **Types**: [`Date`] and [`FiscalYearEnd`]
//! - **Fiscal**: the compliance-period calculator, fiscal quarters and the
//!   year-end scenario table
//! - **Timeline**: the late-2025 countdown banner and emergency milestones
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: every calculation takes the fiscal year-end as an
//!   argument; nothing reads ambient selection state
//! - **Authoritative Lookup**: compliance-period boundaries come from a fixed
//!   regulatory table, not from month arithmetic
//! - **Explicit Errors**: out-of-domain input is rejected with
//!   [`PlaybookError::InvalidArgument`]
//!
//! ## Example
//!
//! ```rust
//! use p29_core::prelude::*;
//!
//! let year_end = FiscalYearEnd::March;
//! assert_eq!(compliance_fy_start(year_end).to_string(), "2026-04-01");
//! assert_eq!(compliance_year_label(year_end), "[Compliance FY: 2026-2027]");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::uninlined_format_args)]

pub mod error;
pub mod fiscal;
pub mod timeline;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{PlaybookError, PlaybookResult};
    pub use crate::fiscal::{
        annual_report_due_date, compliance_fy_end, compliance_fy_start, compliance_period,
        compliance_scenario, compliance_scenarios, compliance_year_label, fiscal_quarter,
        fiscal_quarter_label, fiscal_quarters, preparation_year_label, CompliancePeriod,
        ComplianceScenario, FiscalQuarter,
    };
    pub use crate::timeline::{days_until, emergency_milestones, Milestone, Priority, TimelineBanner};
    pub use crate::types::{Date, FiscalYearEnd};
}

// Re-export commonly used types at crate root
pub use error::{PlaybookError, PlaybookResult};
pub use types::{Date, FiscalYearEnd};
