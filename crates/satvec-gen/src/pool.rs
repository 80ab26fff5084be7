//! Variable pool: draws a role for every ordinal position, names the
//! variables, and pins some inputs to constants.

use std::collections::BTreeSet;

use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;
use satvec_ir::{ConfigError, Forced, Role, RoleWeights, Variable};

use crate::error::GenError;

/// Name of the variable at `ordinal` with the given role, e.g. `a_7`.
pub fn variable_name(role: Role, ordinal: usize) -> String {
    format!("{}_{}", role.prefix(), ordinal)
}

/// Four-way uniform draw: forced true, forced false, or (two outcomes) unforced.
pub fn draw_forced<R: Rng + ?Sized>(rng: &mut R) -> Option<Forced> {
    match rng.gen_range(0..4u8) {
        0 => Some(Forced::True),
        1 => Some(Forced::False),
        _ => None,
    }
}

/// Draw one role per ordinal position according to `weights`.
///
/// If any assignable or output was drawn but no input, the lowest-ordinal
/// position is turned into an input so every assignee has a source.
pub fn draw_roles<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    weights: &RoleWeights,
) -> Result<Vec<Role>, GenError> {
    let dist = WeightedIndex::new(weights.as_array()).map_err(|_| ConfigError::ZeroWeights)?;
    let mut roles: Vec<Role> = (0..n).map(|_| Role::ALL[dist.sample(rng)]).collect();

    if !roles.is_empty() && !roles.contains(&Role::Input) {
        roles[0] = Role::Input;
    }
    Ok(roles)
}

/// Generate `n` variables in ordinal order.
pub fn generate<R: Rng + ?Sized>(
    rng: &mut R,
    n: usize,
    weights: &RoleWeights,
) -> Result<Vec<Variable>, GenError> {
    let roles = draw_roles(rng, n, weights)?;

    let mut seen = BTreeSet::new();
    let mut variables = Vec::with_capacity(n);
    for (ordinal, role) in roles.into_iter().enumerate() {
        let name = variable_name(role, ordinal);
        if !seen.insert(name.clone()) {
            return Err(GenError::DuplicateVariableName { name });
        }
        let var = match role {
            Role::Input => Variable::input(name, ordinal, draw_forced(rng)),
            Role::Assignable => Variable::assignable(name, ordinal),
            Role::Output => Variable::output(name, ordinal),
        };
        variables.push(var);
    }
    Ok(variables)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::case_rng;

    #[test]
    fn test_names_encode_role_and_ordinal() {
        assert_eq!(variable_name(Role::Input, 0), "i_0");
        assert_eq!(variable_name(Role::Assignable, 12), "a_12");
        assert_eq!(variable_name(Role::Output, 3), "o_3");
    }

    #[test]
    fn test_generates_requested_count_in_order() {
        let mut rng = case_rng(1);
        let vars = generate(&mut rng, 50, &RoleWeights::default()).unwrap();
        assert_eq!(vars.len(), 50);
        for (i, v) in vars.iter().enumerate() {
            assert_eq!(v.ordinal(), i);
            assert_eq!(v.name(), variable_name(v.role(), i));
        }
    }

    #[test]
    fn test_only_inputs_are_forced() {
        let mut rng = case_rng(2);
        let vars = generate(&mut rng, 200, &RoleWeights::default()).unwrap();
        for v in &vars {
            if v.role() != Role::Input {
                assert!(v.forced().is_none(), "{} is forced", v.name());
            }
        }
    }

    #[test]
    fn test_forced_distribution_is_roughly_quartered() {
        let mut rng = case_rng(3);
        let draws: Vec<_> = (0..4000).map(|_| draw_forced(&mut rng)).collect();
        let t = draws.iter().filter(|d| **d == Some(Forced::True)).count();
        let f = draws.iter().filter(|d| **d == Some(Forced::False)).count();
        let none = draws.iter().filter(|d| d.is_none()).count();
        assert!((800..1200).contains(&t), "true: {t}");
        assert!((800..1200).contains(&f), "false: {f}");
        assert!((1700..2300).contains(&none), "unforced: {none}");
    }

    #[test]
    fn test_zero_input_weight_still_yields_one_input() {
        let mut rng = case_rng(4);
        let roles = draw_roles(&mut rng, 10, &RoleWeights::new(0, 1, 1)).unwrap();
        assert_eq!(roles[0], Role::Input);
        assert_eq!(roles.iter().filter(|r| **r == Role::Input).count(), 1);
    }

    #[test]
    fn test_input_only_weights() {
        let mut rng = case_rng(5);
        let roles = draw_roles(&mut rng, 8, &RoleWeights::new(1, 0, 0)).unwrap();
        assert!(roles.iter().all(|r| *r == Role::Input));
    }

    #[test]
    fn test_zero_weights_error() {
        let mut rng = case_rng(6);
        let result = draw_roles(&mut rng, 8, &RoleWeights::new(0, 0, 0));
        assert!(matches!(
            result,
            Err(GenError::Config(ConfigError::ZeroWeights))
        ));
    }

    #[test]
    fn test_empty_pool() {
        let mut rng = case_rng(7);
        assert!(generate(&mut rng, 0, &RoleWeights::default())
            .unwrap()
            .is_empty());
    }
}
