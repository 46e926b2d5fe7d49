//! Trigger command parser and help text.
//!
//! A message addressed to the bot looks like `<trigger><command> <args>`,
//! e.g. `crabbot: join ##rust #tokio`. [`parse_command`] turns the text into
//! a typed [`ParsedCommand`].

use std::collections::BTreeSet;
use std::fmt;

/// A command addressed to the bot.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedCommand {
    Help,
    Join { channels: BTreeSet<String> },
    Unknown,
}

/// Parse `text` if it starts with `trigger`.
///
/// Returns `None` for messages not addressed to the bot. Command words are
/// case-sensitive.
pub fn parse_command(trigger: &str, text: &str) -> Option<ParsedCommand> {
    let input = text.strip_prefix(trigger)?;
    let (cmd, args) = match input.split_once(' ') {
        Some((cmd, args)) => (cmd, Some(args)),
        None => (input, None),
    };

    let command = match cmd {
        "help" => ParsedCommand::Help,
        "join" => {
            let channels: BTreeSet<String> = args
                .unwrap_or_default()
                .split_whitespace()
                .map(str::to_string)
                .collect();
            if channels.is_empty() {
                ParsedCommand::Unknown
            } else {
                ParsedCommand::Join { channels }
            }
        }
        _ => ParsedCommand::Unknown,
    };
    Some(command)
}

/// Help entry for one command.
#[derive(Debug, Clone)]
pub struct CommandInfo {
    pub trigger: String,
    pub name: &'static str,
    pub explanation: &'static str,
    pub example: &'static str,
    pub syntax: Option<&'static str>,
}

impl fmt::Display for CommandInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        if let Some(syntax) = self.syntax {
            write!(f, " ({})", syntax)?;
        }
        write!(
            f,
            " - {} (e.g., {}{})",
            self.explanation, self.trigger, self.example
        )
    }
}

/// Every command the bot understands, in help order.
pub fn command_infos(trigger: &str) -> Vec<CommandInfo> {
    vec![
        CommandInfo {
            trigger: trigger.to_string(),
            name: "help",
            explanation: "Explains the bot's commands",
            example: "help",
            syntax: None,
        },
        CommandInfo {
            trigger: trigger.to_string(),
            name: "join",
            explanation: "Joins channels",
            example: "join #python ##android",
            syntax: Some("join <space-separated list of channels>"),
        },
    ]
}

/// One-line help listing for `trigger`.
pub fn help_text(trigger: &str) -> String {
    command_infos(trigger)
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
