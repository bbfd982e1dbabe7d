//! Type definitions for GitHub Actions workflow commands

use crate::escape::{escape_data, escape_property};
use std::fmt;

/// GitHub Actions workflow command types
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkflowCommand {
    /// Start of a collapsible group: ::group::{title}
    GroupStart {
        /// Group title/name
        title: String,
    },

    /// End of a group: ::endgroup::
    GroupEnd,

    /// Error annotation: ::error file={f},line={l}::{message}
    Error {
        /// Error message
        message: String,
        /// Optional parameters
        params: CommandParams,
    },

    /// Warning annotation: ::warning::{message}
    Warning {
        /// Warning message
        message: String,
        /// Optional parameters
        params: CommandParams,
    },

    /// Debug message: ::debug::{message}
    Debug {
        /// Debug message
        message: String,
    },
}

/// Optional parameters for annotation commands
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandParams {
    /// Source file (file=)
    pub file: Option<String>,

    /// Line number (line=)
    pub line: Option<usize>,

    /// Column number (col=)
    pub col: Option<usize>,

    /// End column (endColumn=)
    pub end_column: Option<usize>,

    /// End line (endLine=)
    pub end_line: Option<usize>,

    /// Optional title (title=)
    pub title: Option<String>,
}

impl CommandParams {
    /// True if no parameter is set
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Render as `key=value,key=value` in the order the runner documents
    fn render(&self) -> String {
        let numbers = [
            ("line", self.line),
            ("endLine", self.end_line),
            ("col", self.col),
            ("endColumn", self.end_column),
        ];

        let mut parts = Vec::new();
        if let Some(title) = &self.title {
            parts.push(format!("title={}", escape_property(title)));
        }
        if let Some(file) = &self.file {
            parts.push(format!("file={}", escape_property(file)));
        }
        for (key, value) in numbers {
            if let Some(value) = value {
                parts.push(format!("{key}={value}"));
            }
        }
        parts.join(",")
    }
}

impl WorkflowCommand {
    pub fn group(title: impl Into<String>) -> Self {
        Self::GroupStart {
            title: title.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::Warning {
            message: message.into(),
            params: CommandParams::default(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::Error {
            message: message.into(),
            params: CommandParams::default(),
        }
    }

    pub fn debug(message: impl Into<String>) -> Self {
        Self::Debug {
            message: message.into(),
        }
    }

    /// Command keyword as written between the leading `::` and the params
    pub fn name(&self) -> &'static str {
        match self {
            Self::GroupStart { .. } => "group",
            Self::GroupEnd => "endgroup",
            Self::Error { .. } => "error",
            Self::Warning { .. } => "warning",
            Self::Debug { .. } => "debug",
        }
    }

    /// Message payload, empty for `endgroup`
    pub fn message(&self) -> &str {
        match self {
            Self::GroupStart { title } => title,
            Self::GroupEnd => "",
            Self::Error { message, .. }
            | Self::Warning { message, .. }
            | Self::Debug { message } => message,
        }
    }

    pub fn params(&self) -> Option<&CommandParams> {
        match self {
            Self::Error { params, .. } | Self::Warning { params, .. } => Some(params),
            _ => None,
        }
    }

    /// Render the command as a single stdout line (without trailing newline)
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for WorkflowCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "::{}", self.name())?;
        if let Some(params) = self.params().filter(|p| !p.is_empty()) {
            write!(f, " {}", params.render())?;
        }
        write!(f, "::{}", escape_data(self.message()))
    }
}
