//! Command-line interface for synthetic-data
//!
//! # Usage Examples
//!
//! ```bash
//! # Write data/portfolio-synthetic.json
//! synthetic-data data/portfolio.json
//!
//! # Reproducible fixture with tuned bands
//! synthetic-data data/portfolio.json \
//!   --config synth.yaml \
//!   --seed 42 \
//!   --output tests/fixtures/portfolio.json
//! ```

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use synthetic_data::{generate_synthetic_file, GenerateOptions, SynthesisConfig, DEFAULT_TYPES_DIR};

#[derive(Parser)]
#[command(name = "synthetic-data")]
#[command(about = "Generate a de-identified, value-randomized copy of a financial JSON dataset")]
#[command(long_about = None)]
struct Cli {
    /// Input JSON file
    input: PathBuf,

    /// Output file (default: <input-dir>/<input-stem>-synthetic.json)
    #[arg(long)]
    output: Option<PathBuf>,

    /// Directory of categorical type-set definitions
    #[arg(long, default_value = DEFAULT_TYPES_DIR)]
    types_dir: PathBuf,

    /// YAML file overriding synthesis bands
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for reproducible output
    #[arg(long)]
    seed: Option<u64>,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = run().await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if e.use_stderr() => {
            // Usage errors share the exit status of every other failure
            e.print()?;
            std::process::exit(1);
        }
        Err(e) => e.exit(),
    };

    let config = match &cli.config {
        Some(path) => SynthesisConfig::from_file(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => SynthesisConfig::default(),
    }
    .with_seed(cli.seed);

    let options = GenerateOptions {
        input: cli.input,
        output: cli.output,
        types_dir: cli.types_dir,
        config,
    };

    let written = generate_synthetic_file(&options)
        .await
        .context("Failed to generate synthetic file")?;
    println!("Synthetic file written to {}", written.display());

    Ok(())
}
