//! Post-split checks on the extracted fragment
//!
//! The device config is only usable when every device key is present with a
//! non-empty value. The split itself never fails, so problems found here are
//! reported, not raised.

use std::collections::BTreeMap;

use serde_yaml::Value;

/// Findings about an extracted fragment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Verification {
    /// Configured keys absent, null, or empty at the top level
    pub missing_keys: Vec<String>,
    /// Keys extracted more than once
    pub duplicate_keys: Vec<String>,
    /// Parse error when the fragment is not valid YAML
    pub parse_error: Option<String>,
}

impl Verification {
    pub fn is_clean(&self) -> bool {
        self.missing_keys.is_empty() && self.duplicate_keys.is_empty() && self.parse_error.is_none()
    }
}

/// Check `extracted` against the configured `keys`.
///
/// `extracted_keys` are the key tokens the partitioner matched; they serve as
/// a fallback when the fragment does not parse.
pub fn verify(extracted: &str, keys: &[String], extracted_keys: &[String]) -> Verification {
    let duplicate_keys = duplicates(extracted_keys);

    match serde_yaml::from_str::<Value>(extracted) {
        Ok(document) => Verification {
            missing_keys: keys
                .iter()
                .filter(|key| !has_value(&document, key))
                .cloned()
                .collect(),
            duplicate_keys,
            parse_error: None,
        },
        Err(e) => Verification {
            missing_keys: keys
                .iter()
                .filter(|key| !extracted_keys.contains(*key))
                .cloned()
                .collect(),
            duplicate_keys,
            parse_error: Some(e.to_string()),
        },
    }
}

fn has_value(document: &Value, key: &str) -> bool {
    match document.get(key) {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn duplicates(extracted_keys: &[String]) -> Vec<String> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for key in extracted_keys {
        *counts.entry(key.as_str()).or_default() += 1;
    }
    counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(key, _)| key.to_string())
        .collect()
}
