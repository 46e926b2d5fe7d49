//! The channel bot: answers `help` and `join` commands addressed to it.

pub mod commands;

use crate::irc::{ChatEvent, ChatHandler, Connection};
use crate::logging::ChatLogger;
use async_trait::async_trait;
use commands::{help_text, parse_command, ParsedCommand};

pub struct Bot {
    trigger: Option<String>,
    chat_logger: ChatLogger,
}

impl Bot {
    /// `trigger` overrides the default `"<nick>: "` prefix.
    pub fn new(trigger: Option<String>, chat_logger: ChatLogger) -> Self {
        Self {
            trigger,
            chat_logger,
        }
    }

    fn trigger_for(&self, nick: &str) -> String {
        self.trigger
            .clone()
            .unwrap_or_else(|| format!("{}: ", nick))
    }
}

#[async_trait(?Send)]
impl ChatHandler for Bot {
    async fn on_chat_event(&mut self, conn: &mut Connection, event: ChatEvent) -> anyhow::Result<()> {
        conn.log(format_args!("Got message {}", event));
        self.chat_logger.log_event(&event);

        let trigger = self.trigger_for(conn.nick());
        let Some(command) = parse_command(&trigger, event.text()) else {
            return Ok(());
        };

        match command {
            ParsedCommand::Help => {
                let reply = format!("{}: Commands => {}", event.nick(), help_text(&trigger));
                conn.send_message(&reply, event.channel()).await?;
            }
            ParsedCommand::Join { channels } => {
                for channel in &channels {
                    if conn.is_member(channel) {
                        conn.send_message(&format!("I'm already in {}", channel), channel)
                            .await?;
                    } else {
                        conn.join_channel(channel).await?;
                    }
                }
            }
            ParsedCommand::Unknown => {
                let reply = format!(
                    "{}: I didn't understand that. Check my commands with <{}: help>.",
                    event.nick(),
                    conn.nick()
                );
                conn.send_message(&reply, event.channel()).await?;
            }
        }
        Ok(())
    }
}
