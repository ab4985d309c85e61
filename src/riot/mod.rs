//! Typed wrappers around the Riot REST endpoints used by the exporter.

pub mod client;
pub mod endpoints;
pub mod metrics;
pub mod region;
pub mod types;

pub use client::{RetryPolicy, RiotClient};
pub use region::Region;
