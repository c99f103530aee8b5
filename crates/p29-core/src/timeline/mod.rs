//! Countdown to the Provision 29 effective date.
//!
//! - [`TimelineBanner`]: context banner for the current date
//! - [`emergency_milestones`]: compressed implementation track for late starters

mod banner;
mod milestones;

pub use banner::TimelineBanner;
pub use milestones::{days_until, emergency_milestones, Milestone, Priority};
