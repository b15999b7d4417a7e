//! Reading input mappings and writing the merged result.

pub mod decode;

use crate::domain::{Mapping, MergedMapping};
use crate::error::{MergeError, MergeResult};
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use serde_json::Value;
use std::fs;
use std::path::Path;

pub use decode::decode_text;

/// Read `path` and parse it as a flat JSON object.
pub fn load_mapping(path: &Path) -> MergeResult<Mapping> {
    let bytes = fs::read(path).map_err(|e| MergeError::io(path, e))?;
    let text = decode_text(&bytes, path)?;

    let value: Value = serde_json::from_str(&text).map_err(|e| MergeError::Parse {
        path: path.to_path_buf(),
        line: e.line(),
        column: e.column(),
        message: e.to_string(),
    })?;

    match value {
        Value::Object(mapping) => {
            tracing::debug!("Loaded {} entries from {}", mapping.len(), path.display());
            Ok(mapping)
        }
        other => Err(MergeError::NotAnObject { path: path.to_path_buf(), found: json_kind(&other) }),
    }
}

/// Render `mapping` as indented UTF-8 JSON. Non-ASCII text is written literally.
pub fn render_mapping(mapping: &MergedMapping, indent: usize) -> MergeResult<Vec<u8>> {
    let indent_bytes = vec![b' '; indent];
    let mut serializer =
        Serializer::with_formatter(Vec::new(), PrettyFormatter::with_indent(&indent_bytes));
    mapping.serialize(&mut serializer)?;
    Ok(serializer.into_inner())
}

/// Write `mapping` to `path`, creating parent directories and overwriting any existing file.
pub fn write_mapping(path: &Path, mapping: &MergedMapping, indent: usize) -> MergeResult<()> {
    let rendered = render_mapping(mapping, indent)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(|e| MergeError::io(parent, e))?;
        }
    }
    fs::write(path, rendered).map_err(|e| MergeError::io(path, e))?;
    tracing::info!("Wrote {} entries to {}", mapping.len(), path.display());
    Ok(())
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
