pub mod batch;
pub mod manifest;

pub use batch::{run_batch, BatchConfig, BatchError};
pub use manifest::{Manifest, ManifestEntry};
