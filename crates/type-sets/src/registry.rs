//! Type-set registry and field-name aliasing.

use crate::defaults::FALLBACK_TYPE_SETS;
use crate::loader::Definitions;
use std::collections::{BTreeSet, HashMap};

/// Field-name variants (normalized) and the category they resolve to.
const ALIASES: &[(&str, &str)] = &[
    ("owner", "account_owner"),
    ("ownername", "account_owner"),
    ("accountowner", "account_owner"),
    ("account_owner", "account_owner"),
    ("account_owner_type", "account_owner"),
    ("accounttype", "bank_accounts"),
    ("account_type", "bank_accounts"),
    ("bank_accounts", "bank_accounts"),
    ("type", "categories"),
    ("category", "categories"),
    ("categories", "categories"),
    ("billing", "billing"),
    ("borrower", "borrower"),
    ("status", "status"),
    ("tier", "tiers"),
    ("tiers", "tiers"),
    ("accounts", "accounts"),
];

/// Lower-case `field` and drop every character outside `[a-z0-9_]`.
pub fn normalize_key(field: &str) -> String {
    field
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Canonical category for a field name variant, if it has one.
pub fn canonical_key(field: &str) -> Option<&'static str> {
    let normalized = normalize_key(field);
    ALIASES
        .iter()
        .find(|(alias, _)| *alias == normalized)
        .map(|(_, canonical)| *canonical)
}

/// Mapping from canonical category key to its allowed values.
#[derive(Debug, Clone, Default)]
pub struct TypeSetRegistry {
    sets: HashMap<String, Vec<String>>,
    external: BTreeSet<String>,
}

impl TypeSetRegistry {
    /// Registry holding only the built-in fallback table.
    pub fn builtin() -> Self {
        Self::from_definitions(Definitions::new())
    }

    /// Registry from externally loaded definitions, topped up with the
    /// built-in fallback for every key the definitions do not cover.
    ///
    /// Keys are lower-cased; empty value lists are ignored.
    pub fn from_definitions(definitions: Definitions) -> Self {
        let mut registry = Self::default();

        for (name, values) in definitions {
            if values.is_empty() {
                continue;
            }
            let key = name.to_lowercase();
            registry.external.insert(key.clone());
            registry.sets.insert(key, values);
        }

        for (key, values) in FALLBACK_TYPE_SETS {
            registry
                .sets
                .entry((*key).to_string())
                .or_insert_with(|| values.iter().map(|v| (*v).to_string()).collect());
        }

        registry
    }

    /// Values registered under exactly `key` (case-insensitive).
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.sets.get(&key.to_lowercase()).map(Vec::as_slice)
    }

    /// Values for a field name: a direct key match first, then the alias map.
    pub fn resolve(&self, field: &str) -> Option<&[String]> {
        if field.is_empty() {
            return None;
        }
        if let Some(values) = self.get(field) {
            return Some(values);
        }
        canonical_key(field).and_then(|canonical| self.get(canonical))
    }

    /// Whether `key` was supplied by an external definition.
    pub fn is_external(&self, key: &str) -> bool {
        self.external.contains(&key.to_lowercase())
    }

    /// Number of externally supplied sets.
    pub fn external_count(&self) -> usize {
        self.external.len()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_builtin_has_every_fallback() {
        let registry = TypeSetRegistry::builtin();

        assert_eq!(registry.len(), FALLBACK_TYPE_SETS.len());
        assert_eq!(registry.external_count(), 0);
        assert_eq!(registry.get("billing").unwrap(), strings(defaults::BILLING));
    }

    #[test]
    fn test_external_overrides_without_merging() {
        let mut definitions = Definitions::new();
        definitions.insert("Status".to_string(), strings(&["Open", "Closed"]));

        let registry = TypeSetRegistry::from_definitions(definitions);

        assert_eq!(registry.get("status").unwrap(), strings(&["Open", "Closed"]));
        assert!(registry.is_external("STATUS"));
        assert!(!registry.is_external("tiers"));
        assert_eq!(registry.get("tiers").unwrap(), strings(defaults::TIERS));
    }

    #[test]
    fn test_empty_external_set_ignored() {
        let mut definitions = Definitions::new();
        definitions.insert("billing".to_string(), Vec::new());

        let registry = TypeSetRegistry::from_definitions(definitions);
        assert_eq!(registry.get("billing").unwrap(), strings(defaults::BILLING));
        assert_eq!(registry.external_count(), 0);
    }

    #[test]
    fn test_resolve_aliases() {
        let registry = TypeSetRegistry::builtin();

        assert_eq!(
            registry.resolve("accountType").unwrap(),
            strings(defaults::BANK_ACCOUNTS)
        );
        assert_eq!(
            registry.resolve("account_type").unwrap(),
            strings(defaults::BANK_ACCOUNTS)
        );
        assert_eq!(
            registry.resolve("Owner").unwrap(),
            strings(defaults::ACCOUNT_OWNER)
        );
        assert_eq!(registry.resolve("tier").unwrap(), strings(defaults::TIERS));
        assert_eq!(registry.resolve("type").unwrap(), strings(defaults::CATEGORIES));
        assert!(registry.resolve("description").is_none());
        assert!(registry.resolve("").is_none());
    }

    #[test]
    fn test_resolve_prefers_direct_external_key() {
        let mut definitions = Definitions::new();
        definitions.insert("accountType".to_string(), strings(&["Cash", "Margin"]));

        let registry = TypeSetRegistry::from_definitions(definitions);
        assert_eq!(
            registry.resolve("accountType").unwrap(),
            strings(&["Cash", "Margin"])
        );
        assert_eq!(
            registry.resolve("account_type").unwrap(),
            strings(defaults::BANK_ACCOUNTS)
        );
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("Account-Owner Type"), "accountownertype");
        assert_eq!(normalize_key("account_owner"), "account_owner");
        assert_eq!(canonical_key("ACCOUNT_OWNER_TYPE"), Some("account_owner"));
        assert_eq!(canonical_key("amount"), None);
    }
}
