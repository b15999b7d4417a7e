//! Error types for loading, merging and writing mappings.

use std::path::PathBuf;

/// Errors that can occur while merging two skill maps.
#[derive(Debug, thiserror::Error)]
pub enum MergeError {
    /// A file could not be read or written.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file contents are not valid JSON.
    #[error("invalid JSON in {path} at line {line}, column {column}: {message}")]
    Parse {
        path: PathBuf,
        line: usize,
        column: usize,
        message: String,
    },

    /// The file is valid JSON but its top level is not an object.
    #[error("expected a JSON object at the top level of {path}, found {found}")]
    NotAnObject { path: PathBuf, found: &'static str },

    /// The file bytes could not be decoded as text.
    #[error("{path} is not valid {encoding} text")]
    Encoding { path: PathBuf, encoding: &'static str },

    /// A key could not be interpreted as a base-10 integer.
    #[error("{}", describe_non_numeric(.key, .source_path.as_ref()))]
    NonNumericKey { key: String, source_path: Option<PathBuf> },

    /// Serializing the merged mapping failed.
    #[error("failed to serialize merged mapping: {0}")]
    Serialize(#[from] serde_json::Error),
}

fn describe_non_numeric(key: &str, source_path: Option<&PathBuf>) -> String {
    match source_path {
        Some(path) => format!("key {key:?} in {} is not a base-10 integer", path.display()),
        None => format!("key {key:?} is not a base-10 integer"),
    }
}

impl MergeError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Attach the originating file to a key error that has none yet.
    pub fn with_source_path(self, path: impl Into<PathBuf>) -> Self {
        match self {
            Self::NonNumericKey { key, source_path: None } => {
                Self::NonNumericKey { key, source_path: Some(path.into()) }
            }
            other => other,
        }
    }
}

/// Convenience alias for merge results.
pub type MergeResult<T> = Result<T, MergeError>;
