//! Expression synthesis for a single assignee.
//!
//! Eligibility rule: assignables draw only from inputs, outputs draw from
//! inputs and assignables. Outputs are never sources, so no expression can
//! reference a variable defined after its assignee.

use rand::seq::SliceRandom;
use rand::Rng;
use satvec_ir::{Expression, OperandBounds, Operator, Role, Variable};

use crate::error::GenError;

/// Roles a variable of `role` may read from. Empty for inputs.
pub fn eligible_roles(role: Role) -> &'static [Role] {
    match role {
        Role::Input => &[],
        Role::Assignable => &[Role::Input],
        Role::Output => &[Role::Input, Role::Assignable],
    }
}

/// Names among `variables` that an assignee of `role` may reference.
pub fn eligible_sources(variables: &[Variable], role: Role) -> Vec<String> {
    let roles = eligible_roles(role);
    variables
        .iter()
        .filter(|v| roles.contains(&v.role()))
        .map(|v| v.name().to_string())
        .collect()
}

/// Build a random operator chain for `assignee` over distinct `sources`.
///
/// The operand count is uniform in `[bounds.min, min(bounds.max, |sources|)]`.
pub fn synthesize<R: Rng + ?Sized>(
    rng: &mut R,
    assignee: &Variable,
    sources: &[String],
    bounds: OperandBounds,
) -> Result<Expression, GenError> {
    check_assignee(assignee)?;
    if sources.len() < bounds.min {
        return Err(GenError::InsufficientSources {
            assignee: assignee.name().to_string(),
            available: sources.len(),
            required: bounds.min,
        });
    }

    let upper = bounds.max.min(sources.len());
    let k = rng.gen_range(bounds.min..=upper);
    Ok(chain_over(rng, assignee, sources, k))
}

/// Degenerate chain over every source in random order; with a single source
/// this is the bare alias `assignee = source`.
pub fn synthesize_fallback<R: Rng + ?Sized>(
    rng: &mut R,
    assignee: &Variable,
    sources: &[String],
) -> Result<Expression, GenError> {
    check_assignee(assignee)?;
    if sources.is_empty() {
        return Err(GenError::InsufficientSources {
            assignee: assignee.name().to_string(),
            available: 0,
            required: 1,
        });
    }
    Ok(chain_over(rng, assignee, sources, sources.len()))
}

fn check_assignee(assignee: &Variable) -> Result<(), GenError> {
    if assignee.role() == Role::Input {
        return Err(GenError::InvalidRoleAssignment {
            name: assignee.name().to_string(),
            role: assignee.role(),
        });
    }
    Ok(())
}

// Caller guarantees 1 <= k <= sources.len().
fn chain_over<R: Rng + ?Sized>(
    rng: &mut R,
    assignee: &Variable,
    sources: &[String],
    k: usize,
) -> Expression {
    let picked: Vec<&String> = sources.choose_multiple(rng, k).collect();
    let head = picked[0].clone();
    let tail = picked[1..]
        .iter()
        .map(|name| (rng.gen::<Operator>(), (*name).clone()))
        .collect();
    Expression::chain(assignee.name(), head, tail)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::case_rng;
    use std::collections::HashSet;

    fn names(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("i_{i}")).collect()
    }

    #[test]
    fn test_operand_count_within_bounds() {
        let mut rng = case_rng(11);
        let target = Variable::assignable("a_99", 99);
        let sources = names(30);
        for _ in 0..200 {
            let expr = synthesize(&mut rng, &target, &sources, OperandBounds::default()).unwrap();
            assert!((2..=10).contains(&expr.operand_count()));
            assert_eq!(expr.operators().count(), expr.operand_count() - 1);
        }
    }

    #[test]
    fn test_operand_count_clamped_to_sources() {
        let mut rng = case_rng(12);
        let target = Variable::output("o_9", 9);
        let sources = names(3);
        for _ in 0..100 {
            let expr = synthesize(&mut rng, &target, &sources, OperandBounds::default()).unwrap();
            assert!(expr.operand_count() <= 3);
        }
    }

    #[test]
    fn test_operands_are_distinct_sources() {
        let mut rng = case_rng(13);
        let target = Variable::assignable("a_50", 50);
        let sources = names(12);
        for _ in 0..100 {
            let expr = synthesize(&mut rng, &target, &sources, OperandBounds::default()).unwrap();
            let ops: Vec<&str> = expr.operands().collect();
            let unique: HashSet<&str> = ops.iter().copied().collect();
            assert_eq!(unique.len(), ops.len());
            assert!(ops.iter().all(|o| sources.iter().any(|s| s.as_str() == *o)));
        }
    }

    #[test]
    fn test_input_assignee_rejected() {
        let mut rng = case_rng(14);
        let target = Variable::input("i_5", 5, None);
        let result = synthesize(&mut rng, &target, &names(4), OperandBounds::default());
        assert!(matches!(
            result,
            Err(GenError::InvalidRoleAssignment { role: Role::Input, .. })
        ));
    }

    #[test]
    fn test_single_source_is_insufficient() {
        let mut rng = case_rng(15);
        let target = Variable::assignable("a_1", 1);
        let result = synthesize(&mut rng, &target, &names(1), OperandBounds::default());
        assert!(matches!(
            result,
            Err(GenError::InsufficientSources {
                available: 1,
                required: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_fallback_single_source_is_alias() {
        let mut rng = case_rng(16);
        let target = Variable::assignable("a_1", 1);
        let expr = synthesize_fallback(&mut rng, &target, &names(1)).unwrap();
        assert_eq!(expr.to_string(), "a_1 = i_0");
    }

    #[test]
    fn test_fallback_without_sources_fails() {
        let mut rng = case_rng(17);
        let target = Variable::output("o_1", 1);
        assert!(synthesize_fallback(&mut rng, &target, &[]).is_err());
    }

    #[test]
    fn test_eligibility_rule() {
        let vars = vec![
            Variable::input("i_0", 0, None),
            Variable::assignable("a_1", 1),
            Variable::output("o_2", 2),
        ];
        assert_eq!(eligible_sources(&vars, Role::Assignable), vec!["i_0"]);
        assert_eq!(eligible_sources(&vars, Role::Output), vec!["i_0", "a_1"]);
        assert!(eligible_sources(&vars, Role::Input).is_empty());
    }
}
