//! Synthetic Data Library
//!
//! Turns a financial JSON dataset (accounts, transactions, assets,
//! liabilities, chart series) into a structurally faithful copy whose
//! identifiers, names, free text, numbers and dates are all randomized.
//!
//! # Pipeline
//!
//! 1. Load categorical type-sets from an optional definitions directory,
//!    falling back to built-in tables ([`type_sets`]).
//! 2. Read the input document ([`file::read_json`]).
//! 3. Rewrite it ([`orchestrator::synthesize_document`]), keeping account
//!    references consistent through the identifier remap table.
//! 4. Write `<stem>-synthetic.json` next to the input ([`file::write_json`]).
//!
//! # CLI Usage
//!
//! ```bash
//! synthetic-data data/portfolio.json
//! synthetic-data data/portfolio.json --seed 7 --output fixtures/portfolio.json
//! RUST_LOG=debug synthetic-data data/portfolio.json --types-dir app/models/types
//! ```

use anyhow::Context;
use std::path::PathBuf;
use tracing::{debug, info};
use type_sets::{load_registry, TextualDefinitionLoader};

pub mod config;
pub mod file;
pub mod orchestrator;
pub mod remap;
pub mod synthesize;

pub use config::{ConfigError, SynthesisConfig};
pub use file::FileError;
pub use orchestrator::synthesize_document;
pub use synthesize::{SynthesisContext, Synthesizer};

/// Default location of the categorical definitions, relative to the
/// working directory.
pub const DEFAULT_TYPES_DIR: &str = "src/renderer/src/models/types";

/// Inputs for one generation run.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    /// Input JSON document
    pub input: PathBuf,
    /// Output path; defaults to `<dir>/<stem>-synthetic.json`
    pub output: Option<PathBuf>,
    /// Directory of categorical definitions
    pub types_dir: PathBuf,
    pub config: SynthesisConfig,
}

impl GenerateOptions {
    pub fn new(input: impl Into<PathBuf>) -> Self {
        Self {
            input: input.into(),
            output: None,
            types_dir: PathBuf::from(DEFAULT_TYPES_DIR),
            config: SynthesisConfig::default(),
        }
    }

    /// Where the synthetic document will be written.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| file::output_path_for(&self.input))
    }
}

/// Read `options.input`, synthesize it and write the result.
///
/// Returns the path written to.
pub async fn generate_synthetic_file(options: &GenerateOptions) -> anyhow::Result<PathBuf> {
    info!("Generating synthetic data from {}", options.input.display());

    options
        .config
        .validate()
        .context("Invalid synthesis configuration")?;

    let registry = load_registry(&TextualDefinitionLoader::new(), &options.types_dir).await;

    let document = file::read_json(&options.input).await?;

    let mut synth = Synthesizer::new(options.config.clone(), registry);
    match synth.generator().seed() {
        Some(seed) => info!("Using seed {seed}"),
        None => debug!("Seeding from OS entropy"),
    }
    let synthetic = synthesize_document(&mut synth, &document);

    let output = options.output_path();
    file::write_json(&output, &synthetic)
        .await
        .with_context(|| format!("Failed to write synthetic file {}", output.display()))?;

    info!("Synthetic file written to {}", output.display());
    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_generate_writes_next_to_input() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("data.json");
        std::fs::write(
            &input,
            json!({"accounts": [{"id": "a1", "current_value": 10}], "notes": "private"}).to_string(),
        )
        .unwrap();

        let mut options = GenerateOptions::new(&input);
        options.types_dir = temp_dir.path().join("no-types");
        options.config.seed = Some(11);

        let written = generate_synthetic_file(&options).await.unwrap();

        assert_eq!(written, temp_dir.path().join("data-synthetic.json"));
        let out: Value = serde_json::from_str(&std::fs::read_to_string(&written).unwrap()).unwrap();
        assert_ne!(out["notes"], "private");
        assert_eq!(out["accounts"].as_array().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_generate_missing_input() {
        let temp_dir = TempDir::new().unwrap();
        let options = GenerateOptions::new(temp_dir.path().join("missing.json"));

        let err = generate_synthetic_file(&options).await.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<FileError>(),
            Some(FileError::InputNotFound { .. })
        ));
        assert!(!temp_dir.path().join("missing-synthetic.json").exists());
    }

    #[tokio::test]
    async fn test_seeded_runs_are_reproducible() {
        let temp_dir = TempDir::new().unwrap();
        let input = temp_dir.path().join("data.json");
        std::fs::write(
            &input,
            json!({"assets": [{"id": 1, "value": 100.5, "date": "2024-01-01"}]}).to_string(),
        )
        .unwrap();

        let mut options = GenerateOptions::new(&input);
        options.types_dir = temp_dir.path().to_path_buf();
        options.config.seed = Some(5);

        let first = generate_synthetic_file(&options).await.unwrap();
        let first = std::fs::read_to_string(first).unwrap();
        let second = generate_synthetic_file(&options).await.unwrap();
        let second = std::fs::read_to_string(second).unwrap();

        assert_eq!(first, second);
    }
}
