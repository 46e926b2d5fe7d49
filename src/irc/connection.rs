//! One IRC session: registration, channel membership, and outbound commands.
//!
//! A [`Connection`] is plain data until [`Connection::open`] (or
//! [`Connection::open_on`]) establishes the transport, so it can be built and
//! inspected without any network I/O.

use super::error::{Error, Result};
use super::keepalive::pong_for;
use super::transport::{Io, LineTransport};
use std::collections::HashSet;
use std::fmt;

pub const DEFAULT_PORT: u16 = 6667;

pub struct Connection {
    nick: String,
    server: String,
    port: u16,
    channels: HashSet<String>,
    should_log: bool,
    echo_ping_token: bool,
    transport: Option<LineTransport>,
}

impl Connection {
    pub fn new(nick: impl Into<String>, server: impl Into<String>, port: u16) -> Self {
        Self {
            nick: nick.into(),
            server: server.into(),
            port,
            channels: HashSet::new(),
            should_log: false,
            echo_ping_token: false,
            transport: None,
        }
    }

    /// Print lifecycle and traffic events.
    pub fn with_logging(mut self, should_log: bool) -> Self {
        self.should_log = should_log;
        self
    }

    /// Answer pings with the server's token instead of the fixed reply.
    pub fn with_echo_ping_token(mut self, echo: bool) -> Self {
        self.echo_ping_token = echo;
        self
    }

    pub fn nick(&self) -> &str {
        &self.nick
    }

    pub fn server(&self) -> &str {
        &self.server
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn channels(&self) -> &HashSet<String> {
        &self.channels
    }

    pub fn is_member(&self, channel: &str) -> bool {
        self.channels.contains(channel)
    }

    pub fn is_open(&self) -> bool {
        self.transport.is_some()
    }

    /// Connect to the server and send USER/NICK.
    ///
    /// Returns as soon as registration has been sent; whether the server
    /// accepted it shows up later in [`run`](Self::run).
    pub async fn open(&mut self) -> Result<()> {
        self.log(format_args!("Connecting to {}:{}...", self.server, self.port));
        let transport = LineTransport::connect(&self.server, self.port).await?;
        self.register(transport).await
    }

    /// Register over an already connected stream.
    pub async fn open_on<S: Io + 'static>(&mut self, stream: S) -> Result<()> {
        self.register(LineTransport::new(stream)).await
    }

    async fn register(&mut self, transport: LineTransport) -> Result<()> {
        self.transport = Some(transport);
        let nick = &self.nick;
        let user = format!("USER {0} {0} {0} {0}", nick);
        let nick = format!("NICK {}", nick);
        self.send_command(&user).await?;
        self.send_command(&nick).await
    }

    /// Join `channel`. Membership is recorded without waiting for the
    /// server to confirm.
    pub async fn join_channel(&mut self, channel: &str) -> Result<()> {
        if self.is_member(channel) {
            return Err(Error::AlreadyJoined(channel.to_string()));
        }
        self.log(format_args!("Joining channel {}", channel));
        self.send_command(&format!("JOIN {}", channel)).await?;
        self.channels.insert(channel.to_string());
        Ok(())
    }

    pub async fn send_message(&mut self, text: &str, channel: &str) -> Result<()> {
        self.send_command(&format!("PRIVMSG {} :{}", channel, text)).await
    }

    pub(crate) async fn respond_to_ping(&mut self, ping_line: &str) -> Result<()> {
        self.log(format_args!("Pinging"));
        let pong = pong_for(ping_line, self.echo_ping_token);
        self.send_command(&pong).await
    }

    pub(crate) async fn receive_line(&mut self) -> Result<String> {
        self.transport
            .as_mut()
            .ok_or(Error::NotConnected)?
            .receive_line()
            .await
    }

    async fn send_command(&mut self, command: &str) -> Result<()> {
        self.transport
            .as_mut()
            .ok_or(Error::NotConnected)?
            .send_line(command)
            .await
    }

    pub(crate) fn log(&self, args: fmt::Arguments<'_>) {
        if self.should_log {
            tracing::info!("{}", args);
        }
    }
}
