pub mod assemble;
pub mod error;
pub mod pool;
pub mod render;
pub mod rng;
pub mod synth;

pub use assemble::{assemble, assemble_with_rng};
pub use error::GenError;
pub use render::render;
