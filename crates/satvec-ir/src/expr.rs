use rand::distributions::{Distribution, Standard};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Binary bitwise operators understood by the solver under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operator {
    And,
    Or,
    Xor,
    Nand,
    Nor,
    Xnor,
}

impl Operator {
    pub const ALL: [Operator; 6] = [
        Operator::And,
        Operator::Or,
        Operator::Xor,
        Operator::Nand,
        Operator::Nor,
        Operator::Xnor,
    ];

    /// Token used in the solver's input format.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::And => "&",
            Operator::Or => "|",
            Operator::Xor => "^",
            Operator::Nand => "~&",
            Operator::Nor => "~|",
            Operator::Xnor => "~^",
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Uniform over [`Operator::ALL`].
impl Distribution<Operator> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Operator {
        Operator::ALL[rng.gen_range(0..Operator::ALL.len())]
    }
}

/// A left-associative operator chain assigned to one variable:
/// `assignee = head OP1 v1 OP2 v2 ...`.
///
/// The representation keeps one operator per junction, so an expression with
/// `k` operands always carries exactly `k - 1` operators.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Expression {
    assignee: String,
    head: String,
    tail: Vec<(Operator, String)>,
}

impl Expression {
    pub fn chain(
        assignee: impl Into<String>,
        head: impl Into<String>,
        tail: Vec<(Operator, String)>,
    ) -> Self {
        Self {
            assignee: assignee.into(),
            head: head.into(),
            tail,
        }
    }

    /// Single-operand expression: `assignee = source`.
    pub fn alias(assignee: impl Into<String>, source: impl Into<String>) -> Self {
        Self::chain(assignee, source, Vec::new())
    }

    pub fn assignee(&self) -> &str {
        &self.assignee
    }

    /// Operand names, left to right.
    pub fn operands(&self) -> impl Iterator<Item = &str> + '_ {
        std::iter::once(self.head.as_str()).chain(self.tail.iter().map(|(_, v)| v.as_str()))
    }

    /// Operators, left to right.
    pub fn operators(&self) -> impl Iterator<Item = Operator> + '_ {
        self.tail.iter().map(|(op, _)| *op)
    }

    pub fn operand_count(&self) -> usize {
        self.tail.len() + 1
    }

    pub fn is_alias(&self) -> bool {
        self.tail.is_empty()
    }
}

/// Renders `assignee = v0 op v1 ...` without a trailing newline.
impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} = {}", self.assignee, self.head)?;
        for (op, operand) in &self.tail {
            write!(f, " {op} {operand}")?;
        }
        Ok(())
    }
}
