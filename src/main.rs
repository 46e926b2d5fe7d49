use crabbot::bot::Bot;
use crabbot::config::{self, BotConfig};
use crabbot::irc::{Connection, StopReason};
use crabbot::logging::{self, ChatLogger};
use anyhow::{bail, Result};
use std::path::PathBuf;
use std::time::Duration;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(config::default_config_path);
    let cfg = config::load_config(&config_path)?;

    logging::init();
    tracing::info!("Starting crabbot...");

    let mut bot = Bot::new(cfg.trigger.clone(), ChatLogger::new(&cfg.logging));
    run_bot(&cfg, &mut bot).await
}

/// Keep a session alive across recoverable stops.
///
/// A taken nickname moves on to the next alternate; an unavailable server is
/// retried after a delay. Everything else ends the process.
async fn run_bot(cfg: &BotConfig, bot: &mut Bot) -> Result<()> {
    let mut alt_nicks = cfg.alt_nicks.iter();
    let mut nick = cfg.nick.clone();
    let mut reconnects = 0;

    loop {
        let mut conn = Connection::new(&nick, &cfg.server, cfg.port)
            .with_logging(cfg.should_log)
            .with_echo_ping_token(cfg.echo_ping_token);
        conn.open().await?;
        for channel in &cfg.channels {
            if !conn.is_member(channel) {
                conn.join_channel(channel).await?;
            }
        }

        match conn.run(bot).await? {
            StopReason::NickInUse(_) => match alt_nicks.next() {
                Some(next) => {
                    tracing::warn!("Nickname {} is already in use, trying {}", nick, next);
                    nick = next.clone();
                }
                None => bail!("Nickname {} is already in use and no alternates remain", nick),
            },
            StopReason::Unavailable(line) => {
                reconnects += 1;
                if reconnects > cfg.max_reconnects {
                    bail!("Server still unavailable after {} reconnects: {}", cfg.max_reconnects, line);
                }
                tracing::warn!(
                    "Server reported: {}; reconnecting in {}s ({}/{})",
                    line,
                    cfg.reconnect_delay_secs,
                    reconnects,
                    cfg.max_reconnects
                );
                tokio::time::sleep(Duration::from_secs(cfg.reconnect_delay_secs)).await;
            }
        }
    }
}
