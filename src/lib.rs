//! A small IRC channel bot.
//!
//! [`irc`] is the protocol engine: one connection, one nickname, channel
//! membership, and a receive loop that hands chat messages to a
//! [`ChatHandler`](irc::ChatHandler). [`bot`] is the handler the binary runs.

pub mod bot;
pub mod config;
pub mod irc;
pub mod logging;
