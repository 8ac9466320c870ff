//! yh-cli: console front-end for duel Yahtzee.
//!
//! This crate owns everything the rules core deliberately does not: the
//! dice roller (the only randomness in the workspace), the prompt/display
//! layer, the turn and round loops, saved games, the optional config file
//! and the NDJSON event log. `yh-core` answers rules questions and
//! `yh-advisor` makes the computer's decisions; this crate wires them to a
//! terminal.

pub mod config;
pub mod events;
pub mod game;
pub mod help;
pub mod io;
pub mod player;
pub mod roll;
pub mod save;
pub mod turn;

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
