//! CLI command handlers for `AI Caddie`.
//!
//! Each command is implemented in its own submodule.

pub mod bag;
pub mod config;
pub mod courses;
pub mod distance;
pub mod play;
pub mod recommend;
pub mod track;

use std::io::{self, BufRead, Write};

/// Ask a yes/no question on stdin; anything but `y`/`yes` is a no
pub fn ask_confirmation(question: &str) -> bool {
    print!("{question} (y/n): ");
    io::stdout().flush().ok();

    let mut response = String::new();
    if io::stdin().lock().read_line(&mut response).is_err() {
        return false;
    }
    let response = response.trim();
    response.eq_ignore_ascii_case("y") || response.eq_ignore_ascii_case("yes")
}
