//! Batch driver: assemble many independent test cases and write them out.
//!
//! Case `i` uses seed `batch_seed + i`, so a batch is reproducible from its
//! batch seed alone. Cases are assembled in parallel (each owns its RNG) and
//! written sequentially in index order.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use rayon::prelude::*;
use satvec_gen::rng::case_seed;
use satvec_gen::{assemble, render, GenError};
use satvec_ir::{GeneratorConfig, TestCase};
use tracing::info;

use crate::manifest::Manifest;

/// Default number of test vectors per run.
pub const DEFAULT_COUNT: usize = 50;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUT_DIR: &str = "./build/test_vectors";

#[derive(Debug, thiserror::Error)]
pub enum BatchError {
    #[error("I/O error on '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("test case {index} (seed {seed}) failed: {source}")]
    Generate {
        index: usize,
        seed: u64,
        #[source]
        source: GenError,
    },

    #[error("manifest serialization error: {0}")]
    Manifest(#[from] serde_json::Error),
}

/// Parameters of one batch run.
#[derive(Debug, Clone)]
pub struct BatchConfig {
    pub out_dir: PathBuf,
    pub count: usize,
    pub batch_seed: u64,
    pub generator: GeneratorConfig,
}

impl BatchConfig {
    /// Defaults with a wall-clock batch seed.
    pub fn new(generator: GeneratorConfig) -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            count: DEFAULT_COUNT,
            batch_seed: clock_seed(),
            generator,
        }
    }
}

/// Nanoseconds since the Unix epoch, truncated to 64 bits. Falls back to 0 if
/// the clock is before the epoch.
pub fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

/// File name of case `index`: `tv_000.txt`, `tv_001.txt`, ...
pub fn file_name(index: usize) -> String {
    format!("tv_{index:03}.txt")
}

/// Assemble every case of the batch without touching the file system.
///
/// On failure the error of the lowest failing index is returned.
pub fn generate_cases(config: &BatchConfig) -> Result<Vec<TestCase>, BatchError> {
    let results: Vec<Result<TestCase, BatchError>> = (0..config.count)
        .into_par_iter()
        .map(|index| {
            let seed = case_seed(config.batch_seed, index as u64);
            assemble(seed, &config.generator).map_err(|source| BatchError::Generate {
                index,
                seed,
                source,
            })
        })
        .collect();
    results.into_iter().collect()
}

/// Generate the batch, write one file per case plus the manifest, and return
/// the manifest.
pub fn run_batch(config: &BatchConfig) -> Result<Manifest, BatchError> {
    info!(
        out_dir = %config.out_dir.display(),
        count = config.count,
        batch_seed = config.batch_seed,
        "creating test vectors"
    );

    let cases = generate_cases(config)?;

    fs::create_dir_all(&config.out_dir).map_err(|source| BatchError::Io {
        path: config.out_dir.clone(),
        source,
    })?;
    let mut manifest = Manifest::new(config.batch_seed, config.generator.clone());

    for (index, case) in cases.iter().enumerate() {
        let name = file_name(index);
        let path = config.out_dir.join(&name);
        write_file(&path, &render(case))?;

        let summary = case.summary();
        info!(
            file = %path.display(),
            seed = summary.seed,
            variables = summary.variables,
            assignments = summary.assignments(),
            "wrote test vector"
        );
        manifest.push(name, summary);
    }

    let manifest_path = Manifest::path_in(&config.out_dir);
    write_file(&manifest_path, &manifest.to_json()?)?;
    info!(files = manifest.len(), "creating test vectors done");

    Ok(manifest)
}

fn write_file(path: &Path, contents: &str) -> Result<(), BatchError> {
    fs::write(path, contents).map_err(|source| BatchError::Io {
        path: path.to_path_buf(),
        source,
    })
}
