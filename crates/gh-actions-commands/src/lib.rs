//! GitHub Actions Workflow Commands
//!
//! Renders the workflow commands a step writes to stdout (`::group::`,
//! `::endgroup::`, `::warning::`, ...) and parses such lines back into
//! structured commands.
//!
//! # Example
//!
//! ```
//! use gh_actions_commands::{parse_command, WorkflowCommand};
//!
//! let line = WorkflowCommand::group("Logs of job 'build'").to_line();
//! assert_eq!(line, "::group::Logs of job 'build'");
//!
//! let (command, _) = parse_command(&line).unwrap();
//! assert_eq!(command, WorkflowCommand::group("Logs of job 'build'"));
//! ```

mod commands;
mod escape;
mod types;

pub use commands::parse_command;
pub use escape::{escape_data, escape_property, unescape_data, unescape_property};
pub use types::*;
