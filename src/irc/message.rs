//! Channel chat messages.
//!
//! Extracts a [`ChatEvent`] from a line of the form
//! `:<nick>!<user@host> PRIVMSG <#channel> :<text>`. Callers are expected to
//! have checked the shape with [`is_chat_line`](super::line::is_chat_line)
//! first; anything that still fails extraction is reported as
//! [`Error::MalformedMessage`].

use super::error::{Error, Result};
use std::fmt;

/// Nicknames at or above this length are assumed to be services or bots.
pub const MAX_USER_NICK_LEN: usize = 17;

/// A chat message received in a channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatEvent {
    channel: String,
    nick: String,
    text: String,
    is_user: bool,
}

impl ChatEvent {
    pub fn new(channel: impl Into<String>, nick: impl Into<String>, text: impl Into<String>) -> Self {
        let nick = nick.into();
        let is_user = nick.chars().count() < MAX_USER_NICK_LEN;
        Self {
            channel: channel.into(),
            nick,
            text: text.into(),
            is_user,
        }
    }

    pub fn channel(&self) -> &str {
        &self.channel
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Whether the sender looks like a person rather than a service.
    pub fn is_user(&self) -> bool {
        self.is_user
    }
}

impl fmt::Display for ChatEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = if self.is_user { "User" } else { "Not a user" };
        write!(f, "{} {} ({}): {}", self.channel, self.nick, kind, self.text)
    }
}

/// Parse a chat line into a [`ChatEvent`].
pub fn parse_chat_line(raw: &str) -> Result<ChatEvent> {
    let malformed = || Error::MalformedMessage(raw.to_string());

    let (prefix, rest) = raw.split_once('!').ok_or_else(malformed)?;
    let nick = prefix.strip_prefix(':').unwrap_or(prefix);
    if nick.is_empty() {
        return Err(malformed());
    }

    let (_, target) = rest.split_once("PRIVMSG ").ok_or_else(malformed)?;
    let (channel, text) = target.split_once(' ').ok_or_else(malformed)?;
    if !channel.starts_with('#') {
        return Err(malformed());
    }
    let text = text.strip_prefix(':').unwrap_or(text);

    Ok(ChatEvent::new(channel, nick, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_chat_line() {
        let event = parse_chat_line(":alice!a@host PRIVMSG ##test :hello there").unwrap();
        assert_eq!(event.nick(), "alice");
        assert_eq!(event.channel(), "##test");
        assert_eq!(event.text(), "hello there");
        assert!(event.is_user());
    }

    #[test]
    fn test_text_keeps_exclamation_marks_and_colons() {
        let event =
            parse_chat_line(":bob!~b@example.org PRIVMSG #rust :wow! see :this PRIVMSG x").unwrap();
        assert_eq!(event.nick(), "bob");
        assert_eq!(event.channel(), "#rust");
        assert_eq!(event.text(), "wow! see :this PRIVMSG x");
    }

    #[test]
    fn test_is_user_boundary() {
        let sixteen = "a".repeat(16);
        let seventeen = "a".repeat(17);

        let line = format!(":{}!x@y PRIVMSG #c :hi", sixteen);
        assert!(parse_chat_line(&line).unwrap().is_user());

        let line = format!(":{}!x@y PRIVMSG #c :hi", seventeen);
        assert!(!parse_chat_line(&line).unwrap().is_user());
    }

    #[test]
    fn test_malformed_lines_fail_loudly() {
        for raw in [
            "alice PRIVMSG #c :hi",
            ":!a@h PRIVMSG #c :hi",
            ":alice!a@h NOTICE #c :hi",
            ":alice!a@h PRIVMSG #c",
            ":alice!a@h PRIVMSG bob :hi",
        ] {
            match parse_chat_line(raw) {
                Err(Error::MalformedMessage(line)) => assert_eq!(line, raw),
                other => panic!("{:?} parsed as {:?}", raw, other),
            }
        }
    }

    #[test]
    fn test_display() {
        let event = ChatEvent::new("#c", "NickServServiceBot", "hi");
        assert_eq!(event.to_string(), "#c NickServServiceBot (Not a user): hi");
    }
}
