//! Configuration loading and merging
//!
//! Handles loading from an optional config file and combining it with CLI
//! arguments (CLI > File > Defaults).

pub mod loader;
pub mod merge;

pub use loader::{load_config, Config};
pub use merge::{merge_cli_with_config, CliOverrides, Settings};
