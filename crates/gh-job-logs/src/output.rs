//! Console output of an action step
//!
//! The runner folds everything between `::group::` and `::endgroup::` and
//! turns `::warning::` lines into annotations.

use gh_actions_commands::WorkflowCommand;
use std::io::{self, Write};

/// Sink for the lines a step writes to its console
pub trait ActionsOutput {
    fn start_group(&mut self, label: &str) -> io::Result<()>;

    /// Write text verbatim, multi-line text included
    fn info(&mut self, text: &str) -> io::Result<()>;

    fn warning(&mut self, message: &str) -> io::Result<()>;

    fn end_group(&mut self) -> io::Result<()>;
}

/// Writes workflow commands to any writer, stdout by default
#[derive(Debug)]
pub struct ConsoleOutput<W: Write> {
    writer: W,
}

impl ConsoleOutput<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> ConsoleOutput<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn get_ref(&self) -> &W {
        &self.writer
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn command(&mut self, command: WorkflowCommand) -> io::Result<()> {
        writeln!(self.writer, "{command}")
    }
}

impl<W: Write> ActionsOutput for ConsoleOutput<W> {
    fn start_group(&mut self, label: &str) -> io::Result<()> {
        self.command(WorkflowCommand::group(label))
    }

    fn info(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.writer, "{text}")
    }

    fn warning(&mut self, message: &str) -> io::Result<()> {
        self.command(WorkflowCommand::warning(message))
    }

    fn end_group(&mut self) -> io::Result<()> {
        self.command(WorkflowCommand::GroupEnd)?;
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn written(output: ConsoleOutput<Vec<u8>>) -> String {
        String::from_utf8(output.into_inner()).unwrap()
    }

    #[test]
    fn test_group_with_info_and_warning() {
        let mut output = ConsoleOutput::new(Vec::new());
        output.start_group("Logs of job 'build'").unwrap();
        output.info("line 1\nline 2").unwrap();
        output.warning("log of job 2 not found").unwrap();
        output.end_group().unwrap();

        assert_eq!(
            written(output),
            "::group::Logs of job 'build'\n\
             line 1\n\
             line 2\n\
             ::warning::log of job 2 not found\n\
             ::endgroup::\n"
        );
    }

    #[test]
    fn test_group_label_is_escaped() {
        let mut output = ConsoleOutput::new(Vec::new());
        output.start_group("odd\nname").unwrap();
        assert_eq!(written(output), "::group::odd%0Aname\n");
    }
}
