//! PING/PONG replies.

use super::line::ping_token;

/// Reply sent to every ping unless token echoing is enabled.
pub const FIXED_PONG: &str = "PONG :pingis";

/// Build the PONG for a received ping line.
///
/// With `echo_token` set the server's token is returned; servers that
/// validate the payload need this. An empty token falls back to the fixed
/// reply.
pub fn pong_for(ping_line: &str, echo_token: bool) -> String {
    let token = ping_token(ping_line);
    if echo_token && !token.is_empty() {
        format!("PONG :{}", token)
    } else {
        FIXED_PONG.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_reply_ignores_token() {
        assert_eq!(pong_for("PING :12345", false), "PONG :pingis");
        assert_eq!(pong_for("PING :other.server", false), "PONG :pingis");
    }

    #[test]
    fn test_echo_reply() {
        assert_eq!(pong_for("PING :12345", true), "PONG :12345");
        assert_eq!(pong_for("PING :", true), "PONG :pingis");
    }
}
