//! Console tracing setup and chat transcript logging.
//!
//! When transcripts are enabled, every chat message the bot sees is appended
//! to a daily file per channel named `<channel>_<date>.log` in the configured
//! log directory (default: `~/.local/share/crabbot/logs/`).

use crate::config::LoggingConfig;
use crate::irc::ChatEvent;
use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;

/// Install the console subscriber. Call once, before connecting.
pub fn init() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::INFO)
        .init();
}

/// Appends chat messages to per-channel daily transcript files.
///
/// File handles are cached for the current day and closed when the date
/// changes. A file that cannot be opened is reported once and its lines are
/// dropped.
pub struct ChatLogger {
    enabled: bool,
    log_dir: PathBuf,
    current_date: String,
    file_handles: HashMap<String, Option<fs::File>>,
}

impl ChatLogger {
    pub fn new(config: &LoggingConfig) -> Self {
        Self {
            enabled: config.enabled,
            log_dir: expand_home(&config.log_dir),
            current_date: String::new(),
            file_handles: HashMap::new(),
        }
    }

    pub fn log_event(&mut self, event: &ChatEvent) {
        self.log_event_at(event, chrono::Local::now());
    }

    fn log_event_at(&mut self, event: &ChatEvent, now: DateTime<Local>) {
        if !self.enabled {
            return;
        }

        let date = now.format("%Y-%m-%d").to_string();
        if date != self.current_date {
            self.file_handles.clear();
            self.current_date = date;
        }

        let line = format!("[{}] <{}> {}", now.format("%H:%M:%S"), event.nick(), event.text());
        let filename = format!("{}_{}.log", sanitize_target(event.channel()), self.current_date);

        let log_dir = &self.log_dir;
        let handle = self.file_handles.entry(filename).or_insert_with_key(|filename| {
            let path = log_dir.join(filename);
            let opened = fs::create_dir_all(log_dir)
                .and_then(|_| OpenOptions::new().create(true).append(true).open(&path));
            match opened {
                Ok(file) => Some(file),
                Err(e) => {
                    tracing::warn!("Cannot open transcript {}: {}", path.display(), e);
                    None
                }
            }
        });

        if let Some(file) = handle {
            if let Err(e) = writeln!(file, "{}", line) {
                tracing::warn!("Failed to write transcript line: {}", e);
            }
        }
    }
}

fn expand_home(dir: &str) -> PathBuf {
    match dir.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .unwrap_or_else(|| PathBuf::from(dir)),
        None => PathBuf::from(dir),
    }
}

/// Make a channel name safe to use as a file name.
fn sanitize_target(target: &str) -> String {
    target
        .chars()
        .map(|c| if c.is_alphanumeric() || c == '-' || c == '_' || c == '.' { c } else { '_' })
        .collect()
}
