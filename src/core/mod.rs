//! Core module for the caddie domain

pub mod config;
pub mod distance;
pub mod error;
pub mod location;
pub mod models;
pub mod recommend;
pub mod round;
pub mod storage;

/// Returns the current version of the `AI Caddie` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
