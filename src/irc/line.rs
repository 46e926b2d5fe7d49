//! Inbound line classification.
//!
//! Each predicate looks at one shape in isolation; [`classify`] applies them
//! in priority order and the first match wins.

const UNAVAILABLE: &str = "Nick/channel is temporarily unavailable";
const NICK_IN_USE: &str = "Nickname is already in use.";
const PING: &str = "PING :";

/// What the event loop should do with a received line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Unavailable,
    Chat,
    NickInUse,
    Ping,
    Other,
}

pub fn classify(line: &str) -> LineKind {
    if is_unavailable(line) {
        LineKind::Unavailable
    } else if is_chat_line(line) {
        LineKind::Chat
    } else if is_nick_in_use(line) {
        LineKind::NickInUse
    } else if is_ping(line) {
        LineKind::Ping
    } else {
        LineKind::Other
    }
}

pub fn is_unavailable(line: &str) -> bool {
    line.contains(UNAVAILABLE)
}

pub fn is_nick_in_use(line: &str) -> bool {
    line.contains(NICK_IN_USE)
}

pub fn is_ping(line: &str) -> bool {
    line.contains(PING)
}

/// Matches `:<nick>!<anything> PRIVMSG #[#]<anything> :<anything>`.
///
/// Only the first `PRIVMSG ` after the first `!` counts as the command, so
/// any line accepted here also parses with
/// [`parse_chat_line`](super::message::parse_chat_line).
pub fn is_chat_line(line: &str) -> bool {
    const COMMAND: &str = "PRIVMSG ";

    let Some(rest) = line.strip_prefix(':') else {
        return false;
    };
    let Some((nick, after_bang)) = rest.split_once('!') else {
        return false;
    };
    if nick.is_empty() {
        return false;
    }
    let Some(command) = after_bang.find(COMMAND) else {
        return false;
    };
    if !after_bang[..command].ends_with(' ') {
        return false;
    }
    match after_bang[command + COMMAND.len()..].strip_prefix('#') {
        Some(target) => target.contains(" :"),
        None => false,
    }
}

/// The token of a `PING :<token>` line, empty if there is none.
pub fn ping_token(line: &str) -> &str {
    line.split_once(PING).map_or("", |(_, token)| token.trim())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::irc::message::parse_chat_line;

    #[test]
    fn test_chat_line_shape() {
        assert!(is_chat_line(":alice!a@host PRIVMSG #test :hello"));
        assert!(is_chat_line(":alice!a@host PRIVMSG ##test :hello"));
        assert!(is_chat_line(":alice!a@host PRIVMSG ##test :"));
        assert!(!is_chat_line("alice!a@host PRIVMSG #test :hello"));
        assert!(!is_chat_line(":alice PRIVMSG #test :hello"));
        assert!(!is_chat_line(":alice!a@host PRIVMSG bob :hello"));
        assert!(!is_chat_line(":alice!a@host PRIVMSG #test hello"));
        assert!(!is_chat_line(":alice!a@host NOTICE #test :hello"));
        assert!(!is_chat_line(":!a@host PRIVMSG #test :hello"));
    }

    #[test]
    fn test_privmsg_inside_text_is_not_the_command() {
        for line in [
            ":eve!e@h PRIVMSG crab :x PRIVMSG #d :y",
            ":eve!e@h NOTICE crab :x PRIVMSG #d :y",
            ":eve!e@hPRIVMSG #d :y",
        ] {
            assert!(!is_chat_line(line), "{:?} accepted", line);
        }
    }

    #[test]
    fn test_accepted_lines_always_parse() {
        for line in [
            ":alice!a@host PRIVMSG #test :hello",
            ":alice!a@host PRIVMSG ##test :",
            ":alice!a@h!x PRIVMSG #c :one PRIVMSG #d :two",
            ":eve!e@h PRIVMSG #c :x PRIVMSG bob :y",
            ":eve!e@h PRIVMSG #c extra :words",
            ":eve!e@h PRIVMSG crab :x PRIVMSG #d :y",
            ":!e@h PRIVMSG #c :y",
        ] {
            if is_chat_line(line) {
                assert!(parse_chat_line(line).is_ok(), "{:?} accepted but unparsable", line);
            }
        }
    }

    #[test]
    fn test_classify_priority() {
        assert_eq!(
            classify(":srv 437 * crab :Nick/channel is temporarily unavailable"),
            LineKind::Unavailable
        );
        // Unavailable is checked before chat, even inside message text.
        assert_eq!(
            classify(":eve!e@h PRIVMSG #c :Nick/channel is temporarily unavailable"),
            LineKind::Unavailable
        );
        // Chat wins over nick-in-use and ping.
        assert_eq!(
            classify(":eve!e@h PRIVMSG #c :Nickname is already in use. PING :x"),
            LineKind::Chat
        );
        assert_eq!(
            classify(":srv 433 * crab :Nickname is already in use."),
            LineKind::NickInUse
        );
        assert_eq!(classify("PING :12345"), LineKind::Ping);
        assert_eq!(classify(":srv 001 crab :Welcome"), LineKind::Other);
    }

    #[test]
    fn test_ping_token() {
        assert_eq!(ping_token("PING :12345"), "12345");
        assert_eq!(ping_token("PING :irc.example.net"), "irc.example.net");
        assert_eq!(ping_token("PING :"), "");
    }
}
