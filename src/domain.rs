//! Core data types shared across the crate.

use serde::ser::{Serialize, SerializeMap, Serializer};
use serde::Deserialize;
use serde_json::{Map, Value};
use std::fmt;

/// A flat key→value collection loaded from one input file.
pub type Mapping = Map<String, Value>;

/// Default indentation width of the written file.
pub const DEFAULT_INDENT: usize = 4;

/// Default output file name, placed next to the executable.
pub const DEFAULT_OUTPUT_NAME: &str = "skill_names_merged.json";

/// Which input's value wins when a key exists in both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
pub enum Priority {
    #[value(name = "file1")]
    #[serde(rename = "file1")]
    First,
    #[default]
    #[value(name = "file2")]
    #[serde(rename = "file2")]
    Second,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::First => "file1",
            Priority::Second => "file2",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The union of two mappings, iterated in ascending numeric key order once sorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedMapping {
    entries: Vec<(String, Value)>,
}

impl MergedMapping {
    pub(crate) fn from_entries(entries: Vec<(String, Value)>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }

    pub(crate) fn entries_mut(&mut self) -> &mut Vec<(String, Value)> {
        &mut self.entries
    }

    /// Collect into an unordered [`Mapping`].
    pub fn to_mapping(&self) -> Mapping {
        self.entries.iter().cloned().collect()
    }
}

// Serialized as a JSON object in entry order.
impl Serialize for MergedMapping {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// Entry counts reported after a merge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MergeStats {
    pub first_entries: usize,
    pub second_entries: usize,
    pub merged_entries: usize,
    pub overlapping_keys: usize,
}

impl MergeStats {
    pub fn compute(first: &Mapping, second: &Mapping, merged: &MergedMapping) -> Self {
        let overlapping_keys = first.keys().filter(|k| second.contains_key(k.as_str())).count();
        Self {
            first_entries: first.len(),
            second_entries: second.len(),
            merged_entries: merged.len(),
            overlapping_keys,
        }
    }
}
