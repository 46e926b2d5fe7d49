//! Configuration data model.
//!
//! Every field has a default so an empty (or missing) file still yields a
//! bot that can connect.

use serde::{Deserialize, Serialize};

use super::nickname::generate_nickname;
use crate::irc::DEFAULT_PORT;

/// Root bot configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BotConfig {
    /// Nickname registered with the server.
    #[serde(default = "default_nickname")]
    pub nick: String,
    /// Hostname or IP address of the IRC server.
    #[serde(default = "default_server")]
    pub server: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Channels joined right after registration.
    #[serde(default)]
    pub channels: Vec<String>,
    /// Print connection lifecycle and raw traffic.
    #[serde(default = "default_true")]
    pub should_log: bool,
    /// Prefix that addresses the bot. Defaults to `"<nick>: "`.
    #[serde(default)]
    pub trigger: Option<String>,
    /// Nicknames tried in order when the current one is taken.
    #[serde(default)]
    pub alt_nicks: Vec<String>,
    #[serde(default)]
    pub echo_ping_token: bool,
    #[serde(default = "default_reconnect_delay")]
    pub reconnect_delay_secs: u64,
    #[serde(default = "default_max_reconnects")]
    pub max_reconnects: u32,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            nick: default_nickname(),
            server: default_server(),
            port: default_port(),
            channels: Vec::new(),
            should_log: true,
            trigger: None,
            alt_nicks: Vec::new(),
            echo_ping_token: false,
            reconnect_delay_secs: default_reconnect_delay(),
            max_reconnects: default_max_reconnects(),
            logging: LoggingConfig::default(),
        }
    }
}

/// Chat transcript logging settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub enabled: bool,
    #[serde(default = "default_log_dir")]
    pub log_dir: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            log_dir: default_log_dir(),
        }
    }
}

fn default_nickname() -> String {
    generate_nickname()
}
fn default_server() -> String {
    "irc.libera.chat".to_string()
}
fn default_port() -> u16 {
    DEFAULT_PORT
}
fn default_true() -> bool {
    true
}
fn default_reconnect_delay() -> u64 {
    30
}
fn default_max_reconnects() -> u32 {
    3
}
fn default_log_dir() -> String {
    "~/.local/share/crabbot/logs".to_string()
}
