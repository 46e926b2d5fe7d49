//! Newline-delimited line transport.
//!
//! Wraps a byte stream in an [`AnyDelimiterCodec`] split on `\n` so callers
//! only ever see complete protocol lines, however the peer chunks its writes.
//! Both `\r\n` and `\n` terminators are accepted; outbound lines end in a
//! single `\n`. Lines are decoded as UTF-8 with invalid bytes replaced, so
//! one badly encoded message cannot end the session.

use super::error::{Error, Result};
use futures::{SinkExt, StreamExt};
use std::io;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio::net::TcpStream;
use tokio_util::codec::{AnyDelimiterCodec, AnyDelimiterCodecError, Framed};

/// Longest inbound line accepted before it is discarded.
pub const MAX_LINE_LENGTH: usize = 2048;

/// Any duplex byte stream the transport can run over.
pub trait Io: AsyncRead + AsyncWrite + Unpin + Send {}

impl<T: AsyncRead + AsyncWrite + Unpin + Send> Io for T {}

pub struct LineTransport {
    framed: Framed<Box<dyn Io>, AnyDelimiterCodec>,
}

impl LineTransport {
    /// Open a TCP stream to `host:port`.
    pub async fn connect(host: &str, port: u16) -> Result<Self> {
        let stream = TcpStream::connect((host, port))
            .await
            .map_err(|source| Error::ConnectionFailure {
                host: host.to_string(),
                port,
                source,
            })?;
        Ok(Self::new(stream))
    }

    pub fn new<S: Io + 'static>(stream: S) -> Self {
        let stream: Box<dyn Io> = Box::new(stream);
        let codec =
            AnyDelimiterCodec::new_with_max_length(b"\n".to_vec(), b"\n".to_vec(), MAX_LINE_LENGTH);
        Self {
            framed: Framed::new(stream, codec),
        }
    }

    pub async fn send_line(&mut self, line: &str) -> Result<()> {
        self.framed.send(line).await.map_err(Error::TransportWrite)
    }

    /// Wait for the next line from the peer, without its terminator.
    ///
    /// Returns an empty string for a blank line. End of stream is a
    /// [`Error::TransportRead`] of kind `UnexpectedEof`.
    pub async fn receive_line(&mut self) -> Result<String> {
        let mut after_decode_error = false;
        loop {
            match self.framed.next().await {
                Some(Ok(line)) => {
                    let line = String::from_utf8_lossy(&line);
                    return Ok(line.trim_end_matches(['\r', '\n']).to_string());
                }
                Some(Err(AnyDelimiterCodecError::MaxChunkLengthExceeded)) => {
                    tracing::warn!("Discarding line longer than {} bytes", MAX_LINE_LENGTH);
                    after_decode_error = true;
                }
                Some(Err(AnyDelimiterCodecError::Io(e))) => return Err(Error::TransportRead(e)),
                // Framed yields one `None` after a decode error, then resumes.
                None if after_decode_error => after_decode_error = false,
                None => {
                    return Err(Error::TransportRead(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "connection closed by server",
                    )))
                }
            }
        }
    }
}
