use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use satvec_core::batch::{DEFAULT_COUNT, DEFAULT_OUT_DIR};
use satvec_ir::parse::parse_config;
use satvec_ir::GeneratorConfig;

#[derive(Parser)]
#[command(name = "satvec")]
#[command(about = "Randomized test-vector generator for boolean-expression solvers")]
#[command(version)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// Write a batch of test vectors plus a manifest to a directory
    Batch {
        /// Output directory
        #[arg(long, default_value = DEFAULT_OUT_DIR)]
        out: PathBuf,
        /// Number of test vectors
        #[arg(long, default_value_t = DEFAULT_COUNT)]
        count: usize,
        /// Batch seed (defaults to the wall clock)
        #[arg(long)]
        seed: Option<u64>,
        #[command(flatten)]
        generator: GeneratorArgs,
    },
    /// Print a single test vector to stdout
    Single {
        /// Test case seed
        #[arg(long)]
        seed: u64,
        #[command(flatten)]
        generator: GeneratorArgs,
    },
}

#[derive(Args, Debug, Default)]
pub(crate) struct GeneratorArgs {
    /// JSON generator config; flags below override its values
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub min_variables: Option<usize>,
    #[arg(long)]
    pub max_variables: Option<usize>,
}

impl GeneratorArgs {
    /// Config file (or defaults) with flag overrides applied, validated.
    pub fn resolve(&self) -> anyhow::Result<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => {
                let json = fs::read_to_string(path)
                    .with_context(|| format!("failed to read config '{}'", path.display()))?;
                parse_config(&json)
                    .with_context(|| format!("invalid config '{}'", path.display()))?
            }
            None => GeneratorConfig::default(),
        };
        if let Some(min) = self.min_variables {
            config.min_variables = min;
        }
        if let Some(max) = self.max_variables {
            config.max_variables = max;
        }
        config.validate()?;
        Ok(config)
    }
}
