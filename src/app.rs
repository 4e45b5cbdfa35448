use std::io::Write;

use crate::config::{AppConfig, OutputFormat};
use crate::errors::{AppError, Result};
use crate::report::{LiveSystem, SystemSource, long_line, short_line};

pub struct Application<S: SystemSource = LiveSystem> {
    config: AppConfig,
    source: S,
}

impl Application {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            source: LiveSystem::default(),
        }
    }
}

impl<S: SystemSource> Application<S> {
    pub fn with_source(config: AppConfig, source: S) -> Self {
        Self { config, source }
    }

    /// Builds the configured status line. An empty line means the uptime
    /// counter (or clock) could not be read.
    pub fn render(&self) -> Result<String> {
        let line = match self.config.format {
            OutputFormat::Long => long_line(&self.source),
            OutputFormat::Pretty => short_line(&self.source),
        };

        if line.is_empty() {
            return Err(AppError::system_info("Unable to read system uptime"));
        }
        Ok(line)
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        let line = self.render()?;
        writeln!(out, "{}", line)?;
        Ok(())
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }
}
