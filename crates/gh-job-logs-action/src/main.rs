mod config;
mod logger;

use anyhow::{Context, Result};
use config::Config;
use gh_job_logs::{ConsoleLogHandler, ConsoleOutput, LogHandler, OctocrabJobsApi, PrintLogsHandler};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = logger::init_logger() {
        eprintln!("Failed to initialize logger: {err}");
    }

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<()> {
    let config = Config::load()?;
    let mut handler = build_handler(&config)?;

    handler
        .handle()
        .await
        .context("Failed to print workflow job logs")
}

/// Token and run are only resolved when logs are printed
fn build_handler(config: &Config) -> Result<ConsoleLogHandler> {
    LogHandler::from_mode(&config.mode, || -> Result<_> {
        let run = config.run_ref()?;
        log::debug!("Printing job logs of workflow run {run}");
        let api = OctocrabJobsApi::from_token(config.token()?, config.api_url.as_deref())?;
        Ok(PrintLogsHandler::new(api, run, ConsoleOutput::stdout()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gh_job_logs::LogMode;

    #[tokio::test]
    async fn test_off_mode_needs_nothing_and_does_nothing() {
        let config = Config {
            mode: "silent".to_string(),
            ..Config::default()
        };

        let mut handler = build_handler(&config).unwrap();
        assert_eq!(handler.mode(), LogMode::Off);
        handler.handle().await.unwrap();
    }

    #[test]
    fn test_print_mode_requires_run() {
        let config = Config {
            mode: "print".to_string(),
            token: Some("ghp_token".to_string()),
            ..Config::default()
        };

        let err = build_handler(&config).unwrap_err();
        assert!(err.to_string().contains("repository"));
    }
}
