//! Log handlers selected by the action's mode input

use crate::api::{JobsApi, OctocrabJobsApi};
use crate::error::{ApiError, HandlerError};
use crate::fetcher::fetch_job_logs;
use crate::output::{ActionsOutput, ConsoleOutput};
use crate::types::{JobLogResult, RunRef};
use log::debug;
use std::fmt;
use std::io;

/// Prefix of every log group label, followed by the quoted job name
pub const GROUP_LABEL_PREFIX: &str = "Logs of job";

/// What to do with the logs of a workflow run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogMode {
    /// Fetch every job log and print it in its own group
    Print,
    /// Do nothing
    Off,
}

impl LogMode {
    /// Map a mode input to a mode
    ///
    /// Only the exact value `print` enables output. Anything else, including
    /// an empty, padded or misspelled value, turns the feature off instead
    /// of failing.
    pub fn from_input(mode: &str) -> Self {
        match mode {
            "print" => Self::Print,
            _ => Self::Off,
        }
    }
}

impl fmt::Display for LogMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Print => write!(f, "print"),
            Self::Off => write!(f, "off"),
        }
    }
}

/// Fetches all job logs of a run and prints them group by group
#[derive(Debug)]
pub struct PrintLogsHandler<A, O> {
    api: A,
    run: RunRef,
    output: O,
}

impl<A: JobsApi, O: ActionsOutput> PrintLogsHandler<A, O> {
    pub fn new(api: A, run: RunRef, output: O) -> Self {
        Self { api, run, output }
    }

    pub fn output(&self) -> &O {
        &self.output
    }

    pub fn into_output(self) -> O {
        self.output
    }

    pub async fn handle(&mut self) -> Result<(), HandlerError> {
        let logs_per_job = fetch_job_logs(&self.api, &self.run).await?;
        debug!(
            "Printing logs of {} jobs of run {}",
            logs_per_job.len(),
            self.run
        );

        for job_logs in &logs_per_job {
            print_job_logs(&mut self.output, job_logs)?;
        }

        Ok(())
    }
}

fn print_job_logs<O: ActionsOutput>(output: &mut O, job_logs: &JobLogResult) -> io::Result<()> {
    output.start_group(&format!("{GROUP_LABEL_PREFIX} '{}'", job_logs.job.name))?;
    if let Some(logs) = job_logs.logs().filter(|logs| !logs.is_empty()) {
        output.info(logs)?;
    }
    if let Some(error) = job_logs.error() {
        output.warning(&error.to_string())?;
    }
    output.end_group()
}

/// Handler chosen for a mode, see [`LogMode`]
#[derive(Debug)]
pub enum LogHandler<A, O> {
    Print(PrintLogsHandler<A, O>),
    NoOp,
}

/// The handler used by the action: octocrab client, stdout output
pub type ConsoleLogHandler = LogHandler<OctocrabJobsApi, ConsoleOutput<io::Stdout>>;

impl<A: JobsApi, O: ActionsOutput> LogHandler<A, O> {
    /// Select the handler for `mode`
    ///
    /// `make_print` is only called in print mode, so nothing is set up for
    /// the no-op handler.
    pub fn from_mode<E>(
        mode: &str,
        make_print: impl FnOnce() -> Result<PrintLogsHandler<A, O>, E>,
    ) -> Result<Self, E> {
        match LogMode::from_input(mode) {
            LogMode::Print => Ok(Self::Print(make_print()?)),
            LogMode::Off => Ok(Self::NoOp),
        }
    }

    pub fn mode(&self) -> LogMode {
        match self {
            Self::Print(_) => LogMode::Print,
            Self::NoOp => LogMode::Off,
        }
    }

    pub async fn handle(&mut self) -> Result<(), HandlerError> {
        match self {
            Self::Print(handler) => handler.handle().await,
            Self::NoOp => Ok(()),
        }
    }
}

/// Select the handler for `mode`, printing to stdout with an octocrab client
///
/// The client is only built in print mode. `api_url` overrides the default
/// GitHub API endpoint.
pub fn select_handler(
    mode: &str,
    token: &str,
    api_url: Option<&str>,
    run: RunRef,
) -> Result<ConsoleLogHandler, ApiError> {
    LogHandler::from_mode(mode, || -> Result<_, ApiError> {
        let api = OctocrabJobsApi::from_token(token, api_url)?;
        Ok(PrintLogsHandler::new(api, run, ConsoleOutput::stdout()))
    })
}
