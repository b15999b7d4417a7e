//! Numeric key interpretation and ordering.

use crate::domain::{Mapping, MergedMapping};
use crate::error::{MergeError, MergeResult};
use std::path::Path;

/// Interpret a key as a base-10 integer.
///
/// Surrounding whitespace and a single leading sign are accepted, so `" 12"`,
/// `"+5"` and `"-3"` all parse. Anything else is a [`MergeError::NonNumericKey`].
pub fn parse_numeric_key(key: &str) -> MergeResult<i128> {
    let trimmed = key.trim();
    let digits = trimmed.strip_prefix(['+', '-']).unwrap_or(trimmed);
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(non_numeric(key));
    }
    trimmed.parse::<i128>().map_err(|_| non_numeric(key))
}

/// Reject a mapping containing any key that is not an integer.
///
/// Runs before merging so a bad input aborts the run naming the offending file.
pub fn validate_numeric_keys(mapping: &Mapping, source: &Path) -> MergeResult<()> {
    for key in mapping.keys() {
        parse_numeric_key(key).map_err(|e| e.with_source_path(source))?;
    }
    Ok(())
}

/// Reorder entries ascending by the integer value of each key.
///
/// Keys with equal numeric value (`"7"` and `"07"`) fall back to string order.
pub fn sort_by_numeric_key(mut mapping: MergedMapping) -> MergeResult<MergedMapping> {
    let entries = std::mem::take(mapping.entries_mut());

    let mut keyed = Vec::with_capacity(entries.len());
    for (key, value) in entries {
        let number = parse_numeric_key(&key)?;
        keyed.push((number, key, value));
    }
    keyed.sort_by(|a, b| a.0.cmp(&b.0).then_with(|| a.1.cmp(&b.1)));

    *mapping.entries_mut() = keyed.into_iter().map(|(_, key, value)| (key, value)).collect();
    Ok(mapping)
}

fn non_numeric(key: &str) -> MergeError {
    MergeError::NonNumericKey { key: key.to_string(), source_path: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn merged(keys: &[&str]) -> MergedMapping {
        MergedMapping::from_entries(keys.iter().map(|k| (k.to_string(), json!(k))).collect())
    }

    #[test]
    fn parses_signed_and_padded_keys() {
        assert_eq!(parse_numeric_key("42").unwrap(), 42);
        assert_eq!(parse_numeric_key(" 12 ").unwrap(), 12);
        assert_eq!(parse_numeric_key("+5").unwrap(), 5);
        assert_eq!(parse_numeric_key("-3").unwrap(), -3);
        assert_eq!(parse_numeric_key("007").unwrap(), 7);
    }

    #[test]
    fn rejects_non_integer_keys() {
        for key in ["abc", "", " ", "1.5", "1e3", "+", "--1", "0x10", "12a"] {
            assert!(
                matches!(parse_numeric_key(key), Err(MergeError::NonNumericKey { .. })),
                "{key:?} should be rejected"
            );
        }
    }

    #[test]
    fn sorts_numerically_not_lexicographically() {
        let sorted = sort_by_numeric_key(merged(&["10", "2", "1"])).unwrap();
        assert_eq!(sorted.keys().collect::<Vec<_>>(), vec!["1", "2", "10"]);
    }

    #[test]
    fn sort_is_idempotent() {
        let once = sort_by_numeric_key(merged(&["300", "-4", "25", "0"])).unwrap();
        let twice = sort_by_numeric_key(once.clone()).unwrap();
        assert_eq!(once, twice);
        assert_eq!(twice.keys().collect::<Vec<_>>(), vec!["-4", "0", "25", "300"]);
    }

    #[test]
    fn equal_numeric_values_order_by_raw_key() {
        let sorted = sort_by_numeric_key(merged(&["7", "07", "6"])).unwrap();
        assert_eq!(sorted.keys().collect::<Vec<_>>(), vec!["6", "07", "7"]);
    }

    #[test]
    fn sort_fails_on_non_numeric_key() {
        let err = sort_by_numeric_key(merged(&["1", "abc"])).unwrap_err();
        match err {
            MergeError::NonNumericKey { key, source_path } => {
                assert_eq!(key, "abc");
                assert!(source_path.is_none());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn validation_names_the_source_file() {
        let mapping: Mapping = serde_json::from_value(json!({"1": "a", "skill": "b"})).unwrap();
        let err = validate_numeric_keys(&mapping, Path::new("names.json")).unwrap_err();
        assert!(err.to_string().contains("names.json"));
        assert!(err.to_string().contains("\"skill\""));
    }

    #[test]
    fn large_keys_beyond_i64_still_sort() {
        let sorted = sort_by_numeric_key(merged(&["99999999999999999999", "1"])).unwrap();
        assert_eq!(sorted.keys().collect::<Vec<_>>(), vec!["1", "99999999999999999999"]);
    }
}
