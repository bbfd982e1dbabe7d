//! Logger that writes log records as workflow commands
//!
//! Errors and warnings become `::error::` / `::warning::` annotations, info
//! lines are written as is, and debug/trace records become `::debug::`
//! lines, which the runner only shows when step debug logging is enabled.
use gh_actions_commands::WorkflowCommand;
use log::{Level, Log, Metadata, Record};
use std::io::{self, Write};
use std::sync::Mutex;

pub struct ActionsLogger<W: Write + Send> {
    filter: env_logger::Logger,
    writer: Mutex<W>,
}

impl<W: Write + Send> ActionsLogger<W> {
    pub fn new(filter: env_logger::Logger, writer: W) -> Self {
        Self {
            filter,
            writer: Mutex::new(writer),
        }
    }

    pub fn max_level(&self) -> log::LevelFilter {
        self.filter.filter()
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.writer.into_inner().unwrap()
    }
}

/// Default filter: this workspace at Info, dependencies at Warn
///
/// `RUNNER_DEBUG=1` (set by the runner when step debug logging is enabled)
/// raises this workspace to Debug. RUST_LOG replaces the default entirely.
pub fn default_filter(lookup: impl Fn(&str) -> Option<String>) -> env_logger::Logger {
    if let Some(filters) = lookup("RUST_LOG") {
        return env_logger::Builder::new().parse_filters(&filters).build();
    }

    let level = match lookup("RUNNER_DEBUG").as_deref() {
        Some("1") => log::LevelFilter::Debug,
        _ => log::LevelFilter::Info,
    };
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .filter_module("gh_job_logs", level)
        .filter_module("gh_job_logs_action", level)
        .build()
}

fn render(record: &Record) -> String {
    let message = record.args().to_string();
    match record.level() {
        Level::Error => WorkflowCommand::error(message).to_line(),
        Level::Warn => WorkflowCommand::warning(message).to_line(),
        Level::Info => message,
        Level::Debug | Level::Trace => {
            WorkflowCommand::debug(format!("{}: {}", record.target(), message)).to_line()
        }
    }
}

impl<W: Write + Send> Log for ActionsLogger<W> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        self.filter.enabled(metadata)
    }

    fn log(&self, record: &Record) {
        if !self.filter.matches(record) {
            return;
        }

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", render(record));
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

/// Install the logger, writing to stdout
///
/// Call once at startup before any logging occurs.
pub fn init_logger() -> Result<(), log::SetLoggerError> {
    let filter = default_filter(|key| std::env::var(key).ok());
    let logger = ActionsLogger::new(filter, io::stdout());
    let max_level = logger.max_level();

    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(max_level);
    Ok(())
}
