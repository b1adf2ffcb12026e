//! Integration tests for logger behavior.

use caddie::logger::{
    close_file_logging, init_file_logging, level, set_level, set_level_from_str, Level,
};
use caddie::{debug, error, info, verbose, warn};
use std::fs;
use tempfile::TempDir;

#[test]
fn level_parse_accepts_valid() {
    assert!(set_level_from_str("error"));
    assert!(set_level_from_str("warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("debug"));
    assert_eq!(level(), Level::Debug);
}

#[test]
fn level_parse_rejects_invalid() {
    assert!(!set_level_from_str("invalid"));
    assert!(!set_level_from_str(""));
}

#[test]
fn logs_do_not_panic() {
    set_level(Level::Debug);
    info!("info integration");
    warn!("warn integration");
    error!("error integration");
    debug!("debug integration");
    verbose!("verbose integration");
}

#[cfg(feature = "file-logging")]
#[test]
fn file_logging_writes_tagged_lines() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("logs").join("caddie.log");

    assert!(init_file_logging(&path));
    error!("shot registered without a fix");
    close_file_logging();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("[ERROR] shot registered without a fix"));
}

#[cfg(not(feature = "file-logging"))]
#[test]
fn file_logging_unavailable() {
    let temp_dir = TempDir::new().unwrap();
    assert!(!init_file_logging(&temp_dir.path().join("caddie.log")));
    close_file_logging();
    assert!(fs::read_dir(temp_dir.path()).unwrap().next().is_none());
}
