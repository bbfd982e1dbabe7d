//! GitHub Actions workflow command parsing
//!
//! Parses workflow commands like ::group::, ::error::, ::warning::, etc.

use crate::escape::{unescape_data, unescape_property};
use crate::types::{CommandParams, WorkflowCommand};
use regex::Regex;
use std::sync::OnceLock;

/// Parse a line for GitHub Actions workflow commands
///
/// Supports both formats:
/// - Step output: `::command params::message` or `::command::message`
/// - Runner log: `##[command]message`
///
/// Returns `Some((command, message))` if a command is found, where `message`
/// is the unescaped payload. Returns `None` if no known command is present.
pub fn parse_command(line: &str) -> Option<(WorkflowCommand, String)> {
    let line = line.trim_end_matches(['\r', '\n']);

    if let Some(result) = parse_hash_bracket_command(line) {
        return Some(result);
    }

    parse_colon_command(line)
}

/// Parse ::command params::message syntax
fn parse_colon_command(line: &str) -> Option<(WorkflowCommand, String)> {
    static COMMAND_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = COMMAND_REGEX.get_or_init(|| {
        Regex::new(r"^::([a-zA-Z-]+)(?:\s+([^:]+?))?::(.*)$").expect("valid command regex")
    });

    let captures = re.captures(line)?;
    let command_name = captures.get(1)?.as_str();
    let params = parse_params(captures.get(2).map_or("", |m| m.as_str()));
    let message = unescape_data(captures.get(3)?.as_str());

    let command = build_command(command_name, message.clone(), params)?;
    Some((command, message))
}

/// Parse ##[command]message syntax as found in downloaded job logs
fn parse_hash_bracket_command(line: &str) -> Option<(WorkflowCommand, String)> {
    static HASH_BRACKET_REGEX: OnceLock<Regex> = OnceLock::new();

    let re = HASH_BRACKET_REGEX.get_or_init(|| {
        Regex::new(r"^##\[([a-zA-Z-]+)\](.*)$").expect("valid hash bracket regex")
    });

    let captures = re.captures(line.trim_start())?;
    let command_name = captures.get(1)?.as_str();
    let message = captures.get(2)?.as_str().trim().to_string();

    let command = build_command(command_name, message.clone(), CommandParams::default())?;
    Some((command, message))
}

fn build_command(name: &str, message: String, params: CommandParams) -> Option<WorkflowCommand> {
    let command = match name.to_lowercase().as_str() {
        "group" => WorkflowCommand::GroupStart { title: message },
        "endgroup" => WorkflowCommand::GroupEnd,
        "error" => WorkflowCommand::Error { message, params },
        "warning" => WorkflowCommand::Warning { message, params },
        "debug" => WorkflowCommand::Debug { message },
        _ => return None, // Unknown command
    };
    Some(command)
}

/// Parse command parameters like "file=foo.rs,line=42,col=10"
fn parse_params(params_str: &str) -> CommandParams {
    let mut params = CommandParams::default();

    for param in params_str.split(',') {
        let param = param.trim();
        if param.is_empty() {
            continue;
        }

        if let Some((key, value)) = param.split_once('=') {
            let value = unescape_property(value.trim());

            match key.trim() {
                "file" => params.file = Some(value),
                "line" => params.line = value.parse().ok(),
                "col" => params.col = value.parse().ok(),
                "endColumn" => params.end_column = value.parse().ok(),
                "endLine" => params.end_line = value.parse().ok(),
                "title" => params.title = Some(value),
                _ => {} // Ignore unknown parameters
            }
        }
    }

    params
}
