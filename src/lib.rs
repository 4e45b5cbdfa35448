//! Uptime status lines in the classic `uptime(1)` format.
//!
//! [`format_long`] gives the full line with wall-clock time, logged-in users
//! and load average; [`format_short`] gives the `-p` style breakdown. Both
//! return an empty string when the uptime counter cannot be read.

pub mod app;
pub mod cli;
pub mod config;
pub mod duration;
pub mod errors;
pub mod report;
pub mod system_info;
pub mod telemetry;

pub use duration::DurationBreakdown;
pub use errors::{AppError, Result};
pub use report::{LiveSystem, SystemSource, format_long, format_short};
pub use system_info::{LoadAverage, UptimeReading, count_active_users, read_load_average, read_uptime};
