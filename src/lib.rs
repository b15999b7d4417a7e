//! skill-merge: merge two skill-name JSON maps into one
//!
//! Loads two flat JSON objects keyed by integer strings, unions them with a
//! configurable priority on duplicate keys, orders the result by numeric key
//! and writes it back as indented JSON.

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod files;
pub mod merge;
pub mod utils;

pub use domain::{Mapping, MergeStats, MergedMapping, Priority};
pub use error::{MergeError, MergeResult};
