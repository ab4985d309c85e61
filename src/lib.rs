//! Fetches a player's League of Legends match history from the Riot API and
//! exports per-match statistics to a spreadsheet.
//!
//! The history range is walked one calendar month at a time, ids are
//! deduplicated across windows, and every match is flattened into one
//! [`stats::StatRow`] for the tracked player.

pub mod config;
pub mod error;
pub mod export;
pub mod history;
pub mod logging;
pub mod riot;
pub mod stats;
pub mod window;
