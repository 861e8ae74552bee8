//! The file logger records rejected fragments.
//!
//! Kept in its own test binary since a logger can only be installed once per
//! process.

use cssb_rs::CSS_SELECTOR_BUILDER as builder;
use cssb_rs::log_init::init_logger;
use log::LevelFilter;

#[test]
fn test_rejected_append_is_logged() {
    let path = std::env::temp_dir().join(format!("cssb-log-{}.log", std::process::id()));
    let path_str = path.to_string_lossy().to_string();
    let _ = std::fs::remove_file(&path);

    init_logger(&path_str, LevelFilter::Debug).unwrap();
    assert!(init_logger(&path_str, LevelFilter::Debug).is_err());

    let result = builder.id("a").and_then(|s| s.id("b"));
    assert!(result.is_err());

    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.contains("[DEBUG] rejecting duplicate id in `#a`"), "{contents}");

    let _ = std::fs::remove_file(&path);
}
