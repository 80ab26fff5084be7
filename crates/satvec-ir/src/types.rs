use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::expr::Expression;

/// Role of a variable in a generated program.
///
/// Roles are ordered by definition point: inputs exist up front, assignables
/// are computed from inputs, outputs from inputs and assignables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Input,
    Assignable,
    Output,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Input, Role::Assignable, Role::Output];

    /// Position in the dependency order `Input < Assignable < Output`.
    pub fn rank(self) -> u8 {
        match self {
            Role::Input => 0,
            Role::Assignable => 1,
            Role::Output => 2,
        }
    }

    /// Name prefix used by the variable pool.
    pub fn prefix(self) -> &'static str {
        match self {
            Role::Input => "i",
            Role::Assignable => "a",
            Role::Output => "o",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Input => "input",
            Role::Assignable => "assignable",
            Role::Output => "output",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Constant value pinned onto an input variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Forced {
    True,
    False,
}

impl Forced {
    pub fn as_bit(self) -> u8 {
        match self {
            Forced::True => 1,
            Forced::False => 0,
        }
    }
}

impl From<bool> for Forced {
    fn from(value: bool) -> Self {
        if value {
            Forced::True
        } else {
            Forced::False
        }
    }
}

/// Structural violations of the data model.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ModelError {
    #[error("duplicate variable name '{name}'")]
    DuplicateVariableName { name: String },

    #[error("variable '{name}' with role {role} cannot be assigned this expression")]
    InvalidRoleAssignment { name: String, role: Role },
}

/// A named boolean variable.
///
/// Only inputs carry a forced value and only assignables and outputs carry an
/// expression; the constructors and [`Variable::attach`] keep it that way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Variable {
    name: String,
    ordinal: usize,
    role: Role,
    forced: Option<Forced>,
    expression: Option<Expression>,
}

impl Variable {
    pub fn input(name: impl Into<String>, ordinal: usize, forced: Option<Forced>) -> Self {
        Self {
            name: name.into(),
            ordinal,
            role: Role::Input,
            forced,
            expression: None,
        }
    }

    pub fn assignable(name: impl Into<String>, ordinal: usize) -> Self {
        Self::computed(name, ordinal, Role::Assignable)
    }

    pub fn output(name: impl Into<String>, ordinal: usize) -> Self {
        Self::computed(name, ordinal, Role::Output)
    }

    fn computed(name: impl Into<String>, ordinal: usize, role: Role) -> Self {
        Self {
            name: name.into(),
            ordinal,
            role,
            forced: None,
            expression: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ordinal(&self) -> usize {
        self.ordinal
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn forced(&self) -> Option<Forced> {
        self.forced
    }

    pub fn expression(&self) -> Option<&Expression> {
        self.expression.as_ref()
    }

    /// Attach the synthesized expression.
    ///
    /// Fails for inputs, for an expression assigning a different variable, and
    /// for a variable that already has one.
    pub fn attach(&mut self, expression: Expression) -> Result<(), ModelError> {
        if self.role == Role::Input
            || expression.assignee() != self.name
            || self.expression.is_some()
        {
            return Err(ModelError::InvalidRoleAssignment {
                name: self.name.clone(),
                role: self.role,
            });
        }
        self.expression = Some(expression);
        Ok(())
    }
}

/// One complete generated program.
///
/// Variables are kept in ordinal order; `index` maps each name to its
/// position and doubles as the uniqueness check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestCase {
    seed: u64,
    variables: Vec<Variable>,
    #[serde(skip)]
    index: BTreeMap<String, usize>,
}

impl TestCase {
    pub fn new(seed: u64, variables: Vec<Variable>) -> Result<Self, ModelError> {
        let mut index = BTreeMap::new();
        for (pos, var) in variables.iter().enumerate() {
            if index.insert(var.name.clone(), pos).is_some() {
                return Err(ModelError::DuplicateVariableName {
                    name: var.name.clone(),
                });
            }
        }
        Ok(Self {
            seed,
            variables,
            index,
        })
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    pub fn get(&self, name: &str) -> Option<&Variable> {
        self.index.get(name).map(|&pos| &self.variables[pos])
    }

    pub fn with_role(&self, role: Role) -> impl Iterator<Item = &Variable> + '_ {
        self.variables.iter().filter(move |v| v.role == role)
    }

    pub fn inputs(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.with_role(Role::Input)
    }

    pub fn assignables(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.with_role(Role::Assignable)
    }

    pub fn outputs(&self) -> impl Iterator<Item = &Variable> + '_ {
        self.with_role(Role::Output)
    }

    /// Inputs pinned to a constant, with their value.
    pub fn constraints(&self) -> impl Iterator<Item = (&Variable, Forced)> + '_ {
        self.inputs().filter_map(|v| v.forced.map(|f| (v, f)))
    }

    pub fn summary(&self) -> TestCaseSummary {
        TestCaseSummary {
            seed: self.seed,
            variables: self.variables.len(),
            inputs: self.inputs().count(),
            assignables: self.assignables().count(),
            outputs: self.outputs().count(),
            constraints: self.constraints().count(),
        }
    }
}

/// Size figures of a test case, for logs and the batch manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestCaseSummary {
    pub seed: u64,
    pub variables: usize,
    pub inputs: usize,
    pub assignables: usize,
    pub outputs: usize,
    pub constraints: usize,
}

impl TestCaseSummary {
    /// Number of expression lines (assignables plus outputs).
    pub fn assignments(&self) -> usize {
        self.assignables + self.outputs
    }
}
