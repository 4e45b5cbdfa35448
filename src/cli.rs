use crate::config::{AppConfig, ConfigError};

#[derive(Debug)]
pub enum CliCommand {
    Run(AppConfig),
    Help,
    Version,
}

pub struct CliParser;

impl CliParser {
    pub fn parse<I>(args: I) -> Result<CliCommand, ConfigError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut config = AppConfig::from_env(); // Start with environment variables

        for arg in args.into_iter().skip(1) {
            match arg.as_str() {
                "--pretty" | "-p" => config.set_pretty(),
                "--help" | "-h" => return Ok(CliCommand::Help),
                "--version" | "-V" => return Ok(CliCommand::Version),
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }

        Ok(CliCommand::Run(config))
    }

    pub fn print_help(program_name: &str) {
        println!("Usage: {} [OPTIONS]", program_name);
        println!();
        println!("Tell how long the system has been running.");
        println!();
        println!("Options:");
        println!("  --pretty, -p     Show uptime in pretty format");
        println!("  --help, -h       Show this help message");
        println!("  --version, -V    Output version information and exit");
        println!();
        println!("Environment Variables:");
        println!("  UPTIME_PRETTY=<true|false>   Pretty format by default");
        println!("  UPTIME_LOG=<filter>          Log filter for diagnostics (default: warn)");
    }

    pub fn print_version() {
        println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    }
}
