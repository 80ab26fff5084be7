use satvec_ir::{ConfigError, ModelError, Role};

/// Failures while assembling a test case. None of them are recoverable
/// mid-assembly; the caller discards the case and may retry with a new seed.
#[derive(Debug, thiserror::Error)]
pub enum GenError {
    #[error("cannot build an expression for '{assignee}': {available} eligible source(s), need {required}")]
    InsufficientSources {
        assignee: String,
        available: usize,
        required: usize,
    },

    #[error("duplicate variable name '{name}'")]
    DuplicateVariableName { name: String },

    #[error("variable '{name}' with role {role} cannot be an assignee")]
    InvalidRoleAssignment { name: String, role: Role },

    #[error("invalid generator config: {0}")]
    Config(#[from] ConfigError),
}

impl From<ModelError> for GenError {
    fn from(err: ModelError) -> Self {
        match err {
            ModelError::DuplicateVariableName { name } => GenError::DuplicateVariableName { name },
            ModelError::InvalidRoleAssignment { name, role } => {
                GenError::InvalidRoleAssignment { name, role }
            }
        }
    }
}
