//! Generator configuration: size bounds, role weights, operand bounds.
use serde::{Deserialize, Serialize};

use crate::types::Role;

/// Upper bound on `max_variables`; larger pools are rejected by `validate`.
pub const MAX_VARIABLES: usize = 1_000_000;

/// Relative weights for drawing each variable's role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RoleWeights {
    pub input: u32,
    pub assignable: u32,
    pub output: u32,
}

impl RoleWeights {
    pub fn new(input: u32, assignable: u32, output: u32) -> Self {
        Self {
            input,
            assignable,
            output,
        }
    }

    pub fn weight(&self, role: Role) -> u32 {
        match role {
            Role::Input => self.input,
            Role::Assignable => self.assignable,
            Role::Output => self.output,
        }
    }

    /// Weights in [`Role::ALL`] order.
    pub fn as_array(&self) -> [u32; 3] {
        Role::ALL.map(|role| self.weight(role))
    }
}

impl Default for RoleWeights {
    fn default() -> Self {
        Self::new(1, 1, 1)
    }
}

/// Inclusive bounds on the number of operands in one expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperandBounds {
    pub min: usize,
    pub max: usize,
}

impl Default for OperandBounds {
    fn default() -> Self {
        Self { min: 2, max: 10 }
    }
}

/// Parameters for assembling one test case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Lower bound on the variable count (inclusive).
    pub min_variables: usize,
    /// Upper bound on the variable count (inclusive).
    pub max_variables: usize,
    pub role_weights: RoleWeights,
    pub min_operands: usize,
    pub max_operands: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let operands = OperandBounds::default();
        Self {
            min_variables: 4,
            max_variables: 1000,
            role_weights: RoleWeights::default(),
            min_operands: operands.min,
            max_operands: operands.max,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("variable range is empty: min={min}, max={max}")]
    EmptyRange { min: usize, max: usize },

    #[error("test cases need at least one variable")]
    ZeroVariables,

    #[error("too many variables: max={max} exceeds the limit of {limit}")]
    TooManyVariables { max: usize, limit: usize },

    #[error("role weights must not all be zero")]
    ZeroWeights,

    #[error("invalid operand bounds: min={min}, max={max} (need 2 <= min <= max)")]
    OperandBounds { min: usize, max: usize },

    #[error("config JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GeneratorConfig {
    /// Fixed-size configuration: every test case has exactly `n` variables.
    pub fn with_variables(n: usize) -> Self {
        Self {
            min_variables: n,
            max_variables: n,
            ..Self::default()
        }
    }

    pub fn operand_bounds(&self) -> OperandBounds {
        OperandBounds {
            min: self.min_operands,
            max: self.max_operands,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_variables == 0 {
            return Err(ConfigError::ZeroVariables);
        }
        if self.min_variables > self.max_variables {
            return Err(ConfigError::EmptyRange {
                min: self.min_variables,
                max: self.max_variables,
            });
        }
        if self.max_variables > MAX_VARIABLES {
            return Err(ConfigError::TooManyVariables {
                max: self.max_variables,
                limit: MAX_VARIABLES,
            });
        }
        if self.role_weights.as_array().iter().all(|&w| w == 0) {
            return Err(ConfigError::ZeroWeights);
        }
        if self.min_operands < 2 || self.min_operands > self.max_operands {
            return Err(ConfigError::OperandBounds {
                min: self.min_operands,
                max: self.max_operands,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        assert!(GeneratorConfig::default().validate().is_ok());
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = GeneratorConfig {
            min_variables: 10,
            max_variables: 5,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyRange { min: 10, max: 5 })
        ));
    }

    #[test]
    fn test_oversized_pool_rejected() {
        let config = GeneratorConfig::with_variables(usize::MAX);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::TooManyVariables {
                max: usize::MAX,
                limit: MAX_VARIABLES
            })
        ));
        assert!(GeneratorConfig::with_variables(MAX_VARIABLES)
            .validate()
            .is_ok());
    }

    #[test]
    fn test_zero_weights_rejected() {
        let config = GeneratorConfig {
            role_weights: RoleWeights::new(0, 0, 0),
            ..GeneratorConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::ZeroWeights)));
    }

    #[test]
    fn test_single_operand_minimum_rejected() {
        let config = GeneratorConfig {
            min_operands: 1,
            ..GeneratorConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::OperandBounds { min: 1, max: 10 })
        ));
    }

    #[test]
    fn test_weights_follow_role_order() {
        let weights = RoleWeights::new(3, 2, 1);
        assert_eq!(weights.as_array(), [3, 2, 1]);
        assert_eq!(weights.weight(Role::Output), 1);
    }
}
