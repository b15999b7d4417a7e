//! Key-wise union of two mappings under a priority rule.

pub mod numeric;

pub use numeric::{parse_numeric_key, sort_by_numeric_key, validate_numeric_keys};

use crate::domain::{Mapping, MergedMapping, Priority};
use crate::error::MergeResult;

/// Union `first` and `second`; on a shared key the `priority` side's value wins.
///
/// The result is not ordered yet; see [`sort_by_numeric_key`].
pub fn merge(first: &Mapping, second: &Mapping, priority: Priority) -> MergedMapping {
    let (base, winner) = match priority {
        Priority::First => (second, first),
        Priority::Second => (first, second),
    };

    let mut combined = base.clone();
    for (key, value) in winner {
        combined.insert(key.clone(), value.clone());
    }
    tracing::debug!(
        "Merged {} + {} entries into {} (priority {})",
        first.len(),
        second.len(),
        combined.len(),
        priority
    );

    MergedMapping::from_entries(combined.into_iter().collect())
}

/// Merge then order by numeric key.
pub fn merge_sorted(
    first: &Mapping,
    second: &Mapping,
    priority: Priority,
) -> MergeResult<MergedMapping> {
    sort_by_numeric_key(merge(first, second, priority))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::BTreeSet;

    fn mapping(value: serde_json::Value) -> Mapping {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn second_priority_overrides_first() {
        let a = mapping(json!({"1": "x", "2": "y"}));
        let b = mapping(json!({"2": "z", "3": "w"}));
        let merged = merge_sorted(&a, &b, Priority::Second).unwrap();
        assert_eq!(serde_json::to_value(&merged).unwrap(), json!({"1": "x", "2": "z", "3": "w"}));
        assert_eq!(merged.keys().collect::<Vec<_>>(), vec!["1", "2", "3"]);
    }

    #[test]
    fn first_priority_keeps_first_values() {
        let a = mapping(json!({"1": "x", "2": "y"}));
        let b = mapping(json!({"2": "z", "3": "w"}));
        let merged = merge_sorted(&a, &b, Priority::First).unwrap();
        assert_eq!(serde_json::to_value(&merged).unwrap(), json!({"1": "x", "2": "y", "3": "w"}));
    }

    #[test]
    fn key_set_is_union() {
        let a = mapping(json!({"5": 1, "9": 2, "11": 3}));
        let b = mapping(json!({"9": 4, "40": 5}));
        for priority in [Priority::First, Priority::Second] {
            let merged = merge(&a, &b, priority);
            let keys: BTreeSet<&str> = merged.keys().collect();
            let expected: BTreeSet<&str> =
                a.keys().chain(b.keys()).map(String::as_str).collect();
            assert_eq!(keys, expected);
        }
    }

    #[test]
    fn values_are_not_inspected() {
        let a = mapping(json!({"1": {"nested": [1, 2]}, "2": null}));
        let b = mapping(json!({"1": true}));
        let merged = merge(&a, &b, Priority::First);
        assert_eq!(merged.get("1"), Some(&json!({"nested": [1, 2]})));
        assert_eq!(merged.get("2"), Some(&serde_json::Value::Null));
    }

    #[test]
    fn empty_inputs_merge_to_empty() {
        let merged = merge_sorted(&Mapping::new(), &Mapping::new(), Priority::Second).unwrap();
        assert!(merged.is_empty());
    }
}
