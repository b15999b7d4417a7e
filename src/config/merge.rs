//! Combining CLI arguments with file config.

use super::Config;
use crate::domain::{Priority, DEFAULT_INDENT};
use crate::utils::paths::default_output_path;
use anyhow::Result;
use std::path::PathBuf;

/// Values given explicitly on the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub output: Option<PathBuf>,
    pub priority: Option<Priority>,
}

/// Fully resolved run settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub output: PathBuf,
    pub priority: Priority,
    pub indent: usize,
}

/// Largest accepted `indent` setting.
pub const MAX_INDENT: usize = 16;

pub fn merge_cli_with_config(cli: CliOverrides, config: &Config) -> Result<Settings> {
    let indent = config.indent.unwrap_or(DEFAULT_INDENT);
    if indent > MAX_INDENT {
        anyhow::bail!("Invalid indent {} in config (must be at most {})", indent, MAX_INDENT);
    }

    Ok(Settings {
        output: cli
            .output
            .or_else(|| config.output.clone())
            .unwrap_or_else(default_output_path),
        priority: cli.priority.or(config.priority).unwrap_or_default(),
        indent,
    })
}
