use std::path::PathBuf;

use chrono::{Local, NaiveTime, Timelike};
use tracing::warn;

use crate::duration::{long_uptime, pretty_uptime, users_and_load};
use crate::errors::Result;
use crate::system_info::{
    LoadAverage, UPTIME_FILE, UptimeReading, count_active_users, read_load_average,
    read_uptime_from,
};

/// Everything a status line is built from. Each call is a fresh read.
pub trait SystemSource {
    fn wall_clock(&self) -> Option<NaiveTime>;
    fn uptime(&self) -> Result<UptimeReading>;
    fn active_users(&self) -> usize;
    fn load_average(&self) -> LoadAverage;
}

/// The running host.
#[derive(Debug, Clone)]
pub struct LiveSystem {
    uptime_file: PathBuf,
}

impl LiveSystem {
    pub fn new(uptime_file: impl Into<PathBuf>) -> Self {
        Self {
            uptime_file: uptime_file.into(),
        }
    }
}

impl Default for LiveSystem {
    fn default() -> Self {
        Self::new(UPTIME_FILE)
    }
}

impl SystemSource for LiveSystem {
    fn wall_clock(&self) -> Option<NaiveTime> {
        Some(Local::now().time())
    }

    fn uptime(&self) -> Result<UptimeReading> {
        read_uptime_from(&self.uptime_file)
    }

    fn active_users(&self) -> usize {
        count_active_users()
    }

    fn load_average(&self) -> LoadAverage {
        read_load_average()
    }
}

/// `" 10:42:01 up 3 days,  4:05,  2 users, load average: 0.10, 0.20, 0.30"`.
///
/// Returns an empty string when the clock or the uptime counter cannot be
/// read.
pub fn long_line<S: SystemSource + ?Sized>(source: &S) -> String {
    let Some(now) = source.wall_clock() else {
        warn!("wall clock unavailable");
        return String::new();
    };
    let reading = match source.uptime() {
        Ok(reading) => reading,
        Err(e) => {
            warn!(error = %e, "uptime unavailable");
            return String::new();
        }
    };

    format!(
        " {:02}:{:02}:{:02} {}{}",
        now.hour(),
        now.minute(),
        now.second(),
        long_uptime(reading.elapsed_seconds),
        users_and_load(source.active_users(), &source.load_average())
    )
}

/// `"up 3 days, 4 hours, 5 minutes"`, or an empty string when the uptime
/// counter cannot be read.
pub fn short_line<S: SystemSource + ?Sized>(source: &S) -> String {
    match source.uptime() {
        Ok(reading) => pretty_uptime(reading.elapsed_seconds),
        Err(e) => {
            warn!(error = %e, "uptime unavailable");
            String::new()
        }
    }
}

pub fn format_long() -> String {
    long_line(&LiveSystem::default())
}

pub fn format_short() -> String {
    short_line(&LiveSystem::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::duration::{DAY, HOUR, MINUTE};
    use crate::errors::AppError;

    struct FakeSystem {
        clock: Option<NaiveTime>,
        elapsed: Option<f64>,
        users: usize,
        load: LoadAverage,
    }

    impl Default for FakeSystem {
        fn default() -> Self {
            Self {
                clock: NaiveTime::from_hms_opt(10, 42, 1),
                elapsed: Some(0.0),
                users: 2,
                load: LoadAverage {
                    one: 0.1,
                    five: 0.2,
                    fifteen: 0.3,
                },
            }
        }
    }

    impl SystemSource for FakeSystem {
        fn wall_clock(&self) -> Option<NaiveTime> {
            self.clock
        }

        fn uptime(&self) -> Result<UptimeReading> {
            self.elapsed
                .map(|elapsed_seconds| UptimeReading {
                    elapsed_seconds,
                    idle_seconds: 0.0,
                })
                .ok_or_else(|| AppError::from(std::io::Error::from_raw_os_error(libc::ENOENT)))
        }

        fn active_users(&self) -> usize {
            self.users
        }

        fn load_average(&self) -> LoadAverage {
            self.load
        }
    }

    #[test]
    fn test_long_line_layout() {
        let source = FakeSystem {
            elapsed: Some((3 * DAY + 4 * HOUR + 5 * MINUTE) as f64 + 0.75),
            ..Default::default()
        };
        assert_eq!(
            long_line(&source),
            " 10:42:01 up 3 days,  4:05,  2 users, load average: 0.10, 0.20, 0.30"
        );
    }

    #[test]
    fn test_long_line_minutes_only() {
        let source = FakeSystem {
            clock: NaiveTime::from_hms_opt(0, 5, 9),
            elapsed: Some((DAY + 17 * MINUTE) as f64),
            users: 1,
            ..Default::default()
        };
        assert_eq!(
            long_line(&source),
            " 00:05:09 up 1 day, 17 min,  1 user, load average: 0.10, 0.20, 0.30"
        );
    }

    #[test]
    fn test_long_line_uptime_failure_is_empty() {
        let source = FakeSystem {
            elapsed: None,
            ..Default::default()
        };
        assert_eq!(long_line(&source), "");
    }

    #[test]
    fn test_long_line_clock_failure_is_empty() {
        let source = FakeSystem {
            clock: None,
            ..Default::default()
        };
        assert_eq!(long_line(&source), "");
    }

    #[test]
    fn test_short_line() {
        let source = FakeSystem {
            elapsed: Some(90061.0),
            ..Default::default()
        };
        assert_eq!(short_line(&source), "up 1 day, 1 hour, 1 minute");
        assert_eq!(short_line(&FakeSystem::default()), "up ");
    }

    #[test]
    fn test_short_line_uptime_failure_is_empty() {
        let source = FakeSystem {
            elapsed: None,
            ..Default::default()
        };
        assert_eq!(short_line(&source), "");
    }

    #[test]
    fn test_short_line_ignores_clock() {
        let source = FakeSystem {
            clock: None,
            elapsed: Some(120.0),
            ..Default::default()
        };
        assert_eq!(short_line(&source), "up 2 minutes");
    }

    #[test]
    fn test_live_system_missing_file_degrades() {
        let dir = tempfile::tempdir().unwrap();
        let source = LiveSystem::new(dir.path().join("uptime"));
        assert_eq!(long_line(&source), "");
        assert_eq!(short_line(&source), "");
    }

    #[test]
    fn test_formatting_from_threads() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("uptime");
        std::fs::write(&path, "90061.50 12.00\n").unwrap();

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let source = LiveSystem::new(path.clone());
                std::thread::spawn(move || short_line(&source))
            })
            .collect();

        for handle in handles {
            assert_eq!(handle.join().unwrap(), "up 1 day, 1 hour, 1 minute");
        }
    }
}
