use std::fs;
use std::path::Path;

use tracing::debug;

use super::locale::NumericLocaleGuard;
use crate::errors::{AppError, Result};

pub const UPTIME_FILE: &str = "/proc/uptime";

/// One sample of the kernel uptime counter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UptimeReading {
    pub elapsed_seconds: f64,
    pub idle_seconds: f64,
}

impl UptimeReading {
    /// Elapsed time truncated to whole seconds.
    pub fn whole_seconds(&self) -> u64 {
        self.elapsed_seconds as u64
    }
}

pub fn read_uptime() -> Result<UptimeReading> {
    read_uptime_from(UPTIME_FILE)
}

/// Reads a counter file holding `<elapsed> <idle>`. The file is opened and
/// closed within this call.
pub fn read_uptime_from<P: AsRef<Path>>(path: P) -> Result<UptimeReading> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let reading = parse_uptime(&contents)?;
    debug!(
        path = %path.display(),
        elapsed = reading.elapsed_seconds,
        idle = reading.idle_seconds,
        "read uptime counter"
    );
    Ok(reading)
}

pub fn parse_uptime(contents: &str) -> Result<UptimeReading> {
    let _numeric = NumericLocaleGuard::c_numeric();

    let mut fields = contents.split_whitespace();
    let elapsed_seconds = parse_field(fields.next(), "elapsed")?;
    let idle_seconds = parse_field(fields.next(), "idle")?;

    Ok(UptimeReading {
        elapsed_seconds,
        idle_seconds,
    })
}

fn parse_field(field: Option<&str>, name: &str) -> Result<f64> {
    let field = field.ok_or_else(|| AppError::parse(&format!("missing {} seconds", name)))?;
    let value: f64 = field.parse()?;
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::parse(&format!("{} seconds out of range: {}", name, field)));
    }
    Ok(value)
}
