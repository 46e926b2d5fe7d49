//! In-memory server end for exercising a [`Connection`] without a socket.

use super::connection::{Connection, DEFAULT_PORT};
use futures::StreamExt;
use tokio::io::{AsyncWriteExt, DuplexStream};
use tokio_util::codec::{Framed, LinesCodec};

pub struct TestServer {
    framed: Framed<DuplexStream, LinesCodec>,
}

impl TestServer {
    /// A registered connection for `nick` and the server end of its stream.
    pub async fn pair(nick: &str) -> (Connection, TestServer) {
        Self::pair_with(Connection::new(nick, "irc.test", DEFAULT_PORT)).await
    }

    pub async fn pair_with(mut conn: Connection) -> (Connection, TestServer) {
        let (client, server) = tokio::io::duplex(64 * 1024);
        conn.open_on(client).await.unwrap();
        let server = TestServer {
            framed: Framed::new(server, LinesCodec::new()),
        };
        (conn, server)
    }

    /// Write raw bytes to the client, exactly as given.
    pub async fn send_bytes(&mut self, bytes: &[u8]) {
        self.framed.get_mut().write_all(bytes).await.unwrap();
    }

    pub async fn send_raw(&mut self, text: &str) {
        self.send_bytes(text.as_bytes()).await;
    }

    /// Write one `\r\n` terminated line to the client.
    pub async fn send(&mut self, line: &str) {
        self.send_raw(&format!("{}\r\n", line)).await;
    }

    /// Everything the client sent, once it has hung up.
    pub async fn finish(mut self) -> Vec<String> {
        let mut lines = Vec::new();
        while let Some(line) = self.framed.next().await {
            lines.push(line.unwrap());
        }
        lines
    }
}
