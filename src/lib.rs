//! Shared library for `AI Caddie`
//! Distance calculation, club recommendation and bag storage used by the CLI.

pub mod core;
pub mod logger;

pub use crate::core::error::{CaddieError, Result};
pub use crate::core::{config, get_version};
