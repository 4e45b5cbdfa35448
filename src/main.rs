use anyhow::{Context, Result};

use uptime_report::app::Application;
use uptime_report::cli::{CliCommand, CliParser};
use uptime_report::telemetry;

fn main() -> Result<()> {
    telemetry::init().context("Failed to initialize logging")?;

    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().cloned().unwrap_or_else(|| "uptime".to_string());

    match CliParser::parse(args).context("Invalid arguments")? {
        CliCommand::Help => CliParser::print_help(&program_name),
        CliCommand::Version => CliParser::print_version(),
        CliCommand::Run(config) => {
            let app = Application::new(config);
            app.run(&mut std::io::stdout().lock())
                .context("Failed to report uptime")?;
        }
    }

    Ok(())
}
