pub mod config;
pub mod expr;
pub mod parse;
pub mod types;

pub use config::{ConfigError, GeneratorConfig, OperandBounds, RoleWeights, MAX_VARIABLES};
pub use expr::{Expression, Operator};
pub use types::{Forced, ModelError, Role, TestCase, TestCaseSummary, Variable};
