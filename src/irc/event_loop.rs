//! The receive/classify/dispatch loop.

use super::connection::Connection;
use super::error::Result;
use super::line::{classify, LineKind};
use super::message::{parse_chat_line, ChatEvent};
use async_trait::async_trait;
use std::fmt;

/// Receives every chat line the loop recognizes.
///
/// Errors returned here end the loop and surface from
/// [`Connection::run`] as [`Error::Handler`](super::Error::Handler).
#[async_trait(?Send)]
pub trait ChatHandler {
    async fn on_chat_event(&mut self, conn: &mut Connection, event: ChatEvent) -> anyhow::Result<()>;
}

/// Why the loop stopped. Carries the server line that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopReason {
    /// The nickname is taken. Retrying with the same nick will not help.
    NickInUse(String),
    /// The server reports the nick or channel as temporarily unavailable.
    Unavailable(String),
}

impl fmt::Display for StopReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StopReason::NickInUse(_) => f.write_str("Nickname already in use"),
            StopReason::Unavailable(_) => f.write_str("Nick/channel is temporarily unavailable"),
        }
    }
}

impl Connection {
    /// Process server lines until a fatal condition is reported.
    ///
    /// Never returns `Ok` for any other reason; transport failures and
    /// handler errors come back as `Err`.
    pub async fn run<H>(&mut self, handler: &mut H) -> Result<StopReason>
    where
        H: ChatHandler + ?Sized,
    {
        loop {
            let line = self.receive_line().await?;
            if line.is_empty() {
                continue;
            }
            self.log(format_args!("Received message {}", line));

            match classify(&line) {
                LineKind::Unavailable => return Ok(StopReason::Unavailable(line)),
                LineKind::Chat => {
                    let event = parse_chat_line(&line)?;
                    handler.on_chat_event(self, event).await?;
                }
                LineKind::NickInUse => return Ok(StopReason::NickInUse(line)),
                LineKind::Ping => self.respond_to_ping(&line).await?,
                LineKind::Other => {}
            }
        }
    }
}
