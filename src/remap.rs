//! Run-scoped mapping from original account identifiers to synthetic ones.

use serde_json::Value;
use std::collections::HashMap;

/// Original identifier (stringified) to the identifier generated for it.
///
/// Entries are only ever added. Re-recording an original key replaces its
/// mapping, and the replaced identifier no longer counts as a live value.
#[derive(Debug, Clone, Default)]
pub struct IdRemapTable {
    mapping: HashMap<String, String>,
    // Generated identifiers in insertion order, for uniform picks
    values: Vec<String>,
}

impl IdRemapTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Map `original` to `generated`.
    pub fn record(&mut self, original: impl Into<String>, generated: impl Into<String>) {
        let generated = generated.into();
        if let Some(previous) = self.mapping.insert(original.into(), generated.clone()) {
            if let Some(pos) = self.values.iter().position(|v| *v == previous) {
                self.values.remove(pos);
            }
        }
        self.values.push(generated);
    }

    /// Generated identifier for `original`, if recorded.
    pub fn get(&self, original: &str) -> Option<&str> {
        self.mapping.get(original).map(String::as_str)
    }

    /// Every generated identifier currently mapped to.
    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.mapping.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mapping.is_empty()
    }
}

/// Lookup key for an identifier value: strings as-is, anything else as its
/// JSON text (so `7` and `"7"` share a key).
pub fn id_key(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
