//! Path helpers

use crate::domain::DEFAULT_OUTPUT_NAME;
use std::path::{Path, PathBuf};

/// Default output location: next to the running executable, or the current
/// directory when the executable path is unavailable.
pub fn default_output_path() -> PathBuf {
    let exe_dir = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf));
    match exe_dir {
        Some(dir) => dir.join(DEFAULT_OUTPUT_NAME),
        None => PathBuf::from(DEFAULT_OUTPUT_NAME),
    }
}
