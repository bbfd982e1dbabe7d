//! GitHub Actions Job Logs
//!
//! Fetches the log of every job in a workflow run and prints each one inside
//! its own foldable log group on the action's console.
//!
//! # Example
//!
//! ```no_run
//! use gh_job_logs::{select_handler, RunRef};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let run = RunRef::from_repository("octo-org/octo-repo", 42)?;
//! let mut handler = select_handler("print", "ghp_token", None, run)?;
//! handler.handle().await?;
//! # Ok(())
//! # }
//! ```

mod api;
mod error;
mod fetcher;
mod handler;
mod output;
mod types;

pub use api::{JobsApi, OctocrabJobsApi};
pub use error::{ApiError, HandlerError};
pub use fetcher::fetch_job_logs;
pub use handler::{
    select_handler, ConsoleLogHandler, LogHandler, LogMode, PrintLogsHandler, GROUP_LABEL_PREFIX,
};
pub use output::{ActionsOutput, ConsoleOutput};
pub use types::*;
