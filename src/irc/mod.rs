//! IRC protocol engine: line transport, registration, channel membership,
//! chat parsing, and the receive loop.

pub mod connection;
pub mod error;
pub mod event_loop;
pub mod keepalive;
pub mod line;
pub mod message;
pub mod transport;

#[cfg(test)]
pub(crate) mod test_server;

pub use connection::{Connection, DEFAULT_PORT};
pub use error::{Error, Result};
pub use event_loop::{ChatHandler, StopReason};
pub use message::ChatEvent;
