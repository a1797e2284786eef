//! Loading categorical definitions from an external directory.
//!
//! The default loader is deliberately lenient: it scans source files for a
//! constant bound to a bracketed list of quoted string literals, e.g.
//!
//! ```text
//! export const status = ["Active", "Canceled", "OnHold"] as const;
//! ```
//!
//! Anything it cannot read or recognise is skipped.

use crate::defaults::FALLBACK_TYPE_SETS;
use crate::error::TypeSetError;
use crate::registry::TypeSetRegistry;
use async_trait::async_trait;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

/// Category name to ordered values, as read from a source.
pub type Definitions = BTreeMap<String, Vec<String>>;

/// File extensions the textual loader reads.
pub const DEFINITION_EXTENSIONS: &[&str] = &["ts", "js"];

static AS_CONST_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"const\s+([A-Za-z0-9_]+)[^=\n]*=\s*\[([\s\S]*?)\]\s*as\s+const")
        .expect("valid as-const pattern")
});

static PLAIN_ARRAY: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?:export\s+default\s*|const\s+([A-Za-z0-9_]+)[^=\n]*=\s*)\[([\s\S]*?)\]")
        .expect("valid array pattern")
});

static QUOTED_VALUE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"['"`]([^'"`]+?)['"`]"#).expect("valid literal pattern"));

/// Capability for reading categorical definitions from a location.
#[async_trait]
pub trait CategoricalSource: Send + Sync {
    /// Read every definition found under `path`.
    ///
    /// A missing location yields an empty set of definitions.
    async fn load_definitions(&self, path: &Path) -> Result<Definitions, TypeSetError>;
}

/// Extracts string-array literals from `.ts` / `.js` files in a directory.
#[derive(Debug, Clone, Default)]
pub struct TextualDefinitionLoader;

impl TextualDefinitionLoader {
    pub fn new() -> Self {
        Self
    }

    fn is_definition_file(path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| DEFINITION_EXTENSIONS.contains(&ext))
    }

    async fn list_definition_files(path: &Path) -> Result<Vec<PathBuf>, TypeSetError> {
        let mut entries = tokio::fs::read_dir(path)
            .await
            .map_err(|source| TypeSetError::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;

        let mut files = Vec::new();
        while let Some(entry) = entries.next_entry().await? {
            let entry_path = entry.path();
            if Self::is_definition_file(&entry_path) {
                files.push(entry_path);
            }
        }

        // Sort for consistent override order
        files.sort();
        Ok(files)
    }
}

#[async_trait]
impl CategoricalSource for TextualDefinitionLoader {
    async fn load_definitions(&self, path: &Path) -> Result<Definitions, TypeSetError> {
        if !tokio::fs::try_exists(path).await.unwrap_or(false) {
            debug!("Definition directory {} not found", path.display());
            return Ok(Definitions::new());
        }

        let mut definitions = Definitions::new();
        for file in Self::list_definition_files(path).await? {
            let content = match tokio::fs::read_to_string(&file).await {
                Ok(content) => content,
                Err(e) => {
                    warn!("Skipping definition file {}: {e}", file.display());
                    continue;
                }
            };

            let stem = file
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or_default();
            let extracted = extract_definitions(&content, stem);
            debug!(
                "Extracted {} definition(s) from {}",
                extracted.len(),
                file.display()
            );
            definitions.extend(extracted);
        }

        Ok(definitions)
    }
}

/// Pull named string arrays out of one file's text.
///
/// Every `const NAME = [...] as const` declaration is returned. When a file
/// has none, the first `export default [...]` or `const NAME = [...]`
/// declaration is used instead, named `fallback_name` when anonymous.
/// Declarations without any quoted literal are dropped.
pub fn extract_definitions(content: &str, fallback_name: &str) -> Vec<(String, Vec<String>)> {
    let declared: Vec<(String, Vec<String>)> = AS_CONST_ARRAY
        .captures_iter(content)
        .filter_map(|caps| {
            let values = quoted_values(caps.get(2)?.as_str());
            (!values.is_empty()).then(|| (caps[1].to_string(), values))
        })
        .collect();
    if !declared.is_empty() {
        return declared;
    }

    let Some(caps) = PLAIN_ARRAY.captures(content) else {
        return Vec::new();
    };
    let name = caps
        .get(1)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| fallback_name.to_string());
    let values = caps
        .get(2)
        .map(|m| quoted_values(m.as_str()))
        .unwrap_or_default();

    if name.is_empty() || values.is_empty() {
        return Vec::new();
    }
    vec![(name, values)]
}

fn quoted_values(inner: &str) -> Vec<String> {
    QUOTED_VALUE
        .captures_iter(inner)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Build a registry from `source`, falling back to the built-in table.
///
/// Loading failures are logged and never propagated.
pub async fn load_registry(source: &dyn CategoricalSource, path: &Path) -> TypeSetRegistry {
    let definitions = match source.load_definitions(path).await {
        Ok(definitions) => definitions,
        Err(e) => {
            warn!("Using built-in type-sets only: {e}");
            Definitions::new()
        }
    };

    let registry = TypeSetRegistry::from_definitions(definitions);
    info!(
        "Loaded {} type-sets ({} from {})",
        registry.len(),
        registry.external_count(),
        path.display()
    );
    for (key, _) in FALLBACK_TYPE_SETS {
        if registry.is_external(key) {
            debug!("External definition replaces built-in type-set '{key}'");
        }
    }
    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use tempfile::TempDir;

    #[test]
    fn test_extract_as_const() {
        let content = r#"
export const status = ["Open", 'Closed', `Frozen`] as const;
export type Status = (typeof status)[number];
"#;
        let extracted = extract_definitions(content, "status");
        assert_eq!(
            extracted,
            vec![(
                "status".to_string(),
                vec!["Open".to_string(), "Closed".to_string(), "Frozen".to_string()]
            )]
        );
    }

    #[test]
    fn test_extract_multiple_as_const() {
        let content = r#"
const billing = ["Weekly", "Monthly"] as const;
const tiers: readonly string[] = [
  "Gold",
  "Silver",
] as const;
"#;
        let extracted = extract_definitions(content, "misc");
        let names: Vec<&str> = extracted.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["billing", "tiers"]);
        assert_eq!(extracted[1].1, vec!["Gold".to_string(), "Silver".to_string()]);
    }

    #[test]
    fn test_extract_plain_const() {
        let content = r#"export const borrower: string[] = ["Mortgage", "HELOC"];"#;
        let extracted = extract_definitions(content, "ignored");
        assert_eq!(
            extracted,
            vec![(
                "borrower".to_string(),
                vec!["Mortgage".to_string(), "HELOC".to_string()]
            )]
        );
    }

    #[test]
    fn test_extract_export_default_uses_file_stem() {
        let content = r#"export default ["Quarterly", "Yearly"];"#;
        let extracted = extract_definitions(content, "billing");
        assert_eq!(extracted[0].0, "billing");
        assert_eq!(extracted[0].1.len(), 2);
    }

    #[test]
    fn test_extract_nothing() {
        assert!(extract_definitions("export interface Account { id: string }", "x").is_empty());
        assert!(extract_definitions("const empty = [] as const;", "x").is_empty());
    }

    #[tokio::test]
    async fn test_load_missing_directory() {
        let loader = TextualDefinitionLoader::new();
        let definitions = loader
            .load_definitions(Path::new("/definitely/not/here"))
            .await
            .unwrap();
        assert!(definitions.is_empty());
    }

    #[tokio::test]
    async fn test_load_directory() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("status.ts"),
            r#"export const status = ["Open", "Closed"] as const;"#,
        )
        .unwrap();
        std::fs::write(
            temp_dir.path().join("billing.js"),
            r#"export default ["Weekly"];"#,
        )
        .unwrap();
        std::fs::write(temp_dir.path().join("notes.md"), r#"const x = ["a"] as const"#).unwrap();
        std::fs::write(temp_dir.path().join("broken.ts"), [0xffu8, 0xfe, 0x00]).unwrap();

        let loader = TextualDefinitionLoader::new();
        let definitions = loader.load_definitions(temp_dir.path()).await.unwrap();

        assert_eq!(definitions.len(), 2);
        assert_eq!(definitions["status"], vec!["Open", "Closed"]);
        assert_eq!(definitions["billing"], vec!["Weekly"]);
    }

    #[tokio::test]
    async fn test_load_registry_merges_with_fallback() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join("status.ts"),
            r#"export const status = ["Open", "Closed"] as const;"#,
        )
        .unwrap();

        let registry = load_registry(&TextualDefinitionLoader::new(), temp_dir.path()).await;

        assert_eq!(registry.get("status").unwrap(), vec!["Open", "Closed"]);
        assert_eq!(registry.get("tiers").unwrap().len(), defaults::TIERS.len());
        assert_eq!(registry.external_count(), 1);
        assert!(registry.is_external("status"));
    }

    #[tokio::test]
    async fn test_load_registry_file_instead_of_directory() {
        let temp_dir = TempDir::new().unwrap();
        let file = temp_dir.path().join("types.ts");
        std::fs::write(&file, "").unwrap();

        let registry = load_registry(&TextualDefinitionLoader::new(), &file).await;
        assert_eq!(registry.external_count(), 0);
        assert_eq!(registry.len(), defaults::FALLBACK_TYPE_SETS.len());
    }
}
