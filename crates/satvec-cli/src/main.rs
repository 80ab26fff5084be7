//! satvec CLI: batch generation of solver test vectors.

mod cli;

use clap::Parser;
use satvec_core::{run_batch, BatchConfig};
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Batch {
            out,
            count,
            seed,
            generator,
        } => {
            let mut config = BatchConfig::new(generator.resolve()?);
            config.out_dir = out;
            config.count = count;
            if let Some(seed) = seed {
                config.batch_seed = seed;
            }
            let manifest = run_batch(&config)?;
            tracing::info!(
                files = manifest.len(),
                batch_seed = manifest.batch_seed,
                "batch complete"
            );
        }
        Command::Single { seed, generator } => {
            let config = generator.resolve()?;
            let case = satvec_gen::assemble(seed, &config)?;
            print!("{}", satvec_gen::render(&case));
        }
    }
    Ok(())
}
