use std::io;
use tokio_util::codec::AnyDelimiterCodecError;

/// Errors surfaced by the IRC engine.
///
/// Nothing here is retried internally. Fatal server conditions (nickname in
/// use, temporarily unavailable) are not errors; see
/// [`StopReason`](super::StopReason).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to connect to {host}:{port}: {source}")]
    ConnectionFailure {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("failed to read from server: {0}")]
    TransportRead(#[source] io::Error),

    #[error("failed to write to server: {0}")]
    TransportWrite(#[source] AnyDelimiterCodecError),

    #[error("not connected")]
    NotConnected,

    #[error("{0} has already been joined")]
    AlreadyJoined(String),

    #[error("malformed chat line: {0:?}")]
    MalformedMessage(String),

    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
