//! Batch manifest: which file came from which seed.
use std::path::Path;

use satvec_ir::{GeneratorConfig, TestCaseSummary};
use serde::{Deserialize, Serialize};

pub const MANIFEST_FILE: &str = "manifest.json";

/// One written test vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManifestEntry {
    /// File name relative to the batch output directory.
    pub file: String,
    pub seed: u64,
    pub summary: TestCaseSummary,
}

/// Everything needed to regenerate a batch byte for byte.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub batch_seed: u64,
    pub generator: GeneratorConfig,
    pub entries: Vec<ManifestEntry>,
}

impl Manifest {
    pub fn new(batch_seed: u64, generator: GeneratorConfig) -> Self {
        Self {
            batch_seed,
            generator,
            entries: Vec::new(),
        }
    }

    pub fn push(&mut self, file: impl Into<String>, summary: TestCaseSummary) {
        self.entries.push(ManifestEntry {
            file: file.into(),
            seed: summary.seed,
            summary,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Seed recorded for `file`, if it belongs to this batch.
    pub fn seed_of(&self, file: &str) -> Option<u64> {
        self.entries.iter().find(|e| e.file == file).map(|e| e.seed)
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn path_in(dir: &Path) -> std::path::PathBuf {
        dir.join(MANIFEST_FILE)
    }
}
