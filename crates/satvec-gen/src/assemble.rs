//! Test case assembly: pool generation, per-variable synthesis, constraints.
//!
//! Pipeline:
//! 1. Validate the config and seed a ChaCha8 generator from the case seed
//! 2. Draw the variable count and generate the pool
//! 3. Synthesize every assignable from the inputs
//! 4. Synthesize every output from the inputs and assignables
//! 5. Freeze everything into a `TestCase` (forced constraints ride along on
//!    the inputs)

use rand::Rng;
use satvec_ir::{GeneratorConfig, Role, TestCase};
use tracing::debug;

use crate::error::GenError;
use crate::pool;
use crate::rng::case_rng;
use crate::synth::{eligible_sources, synthesize, synthesize_fallback};

/// Assemble the test case for `seed`. Same seed and config, same test case.
pub fn assemble(seed: u64, config: &GeneratorConfig) -> Result<TestCase, GenError> {
    let mut rng = case_rng(seed);
    assemble_with_rng(&mut rng, seed, config)
}

/// Assemble with a caller-supplied generator. `seed` is only recorded on the
/// resulting test case.
pub fn assemble_with_rng<R: Rng + ?Sized>(
    rng: &mut R,
    seed: u64,
    config: &GeneratorConfig,
) -> Result<TestCase, GenError> {
    config.validate()?;

    let n = rng.gen_range(config.min_variables..=config.max_variables);
    let mut variables = pool::generate(rng, n, &config.role_weights)?;
    let bounds = config.operand_bounds();

    // Assignables first: their names become eligible sources for outputs.
    for role in [Role::Assignable, Role::Output] {
        let sources = eligible_sources(&variables, role);
        for var in variables.iter_mut().filter(|v| v.role() == role) {
            let expr = match synthesize(rng, var, &sources, bounds) {
                Ok(expr) => expr,
                Err(GenError::InsufficientSources { available, .. }) if available > 0 => {
                    debug!(
                        assignee = var.name(),
                        available, "too few sources, using fallback chain"
                    );
                    synthesize_fallback(rng, var, &sources)?
                }
                Err(err) => return Err(err),
            };
            debug!(assignee = var.name(), operands = expr.operand_count(), "synthesized");
            var.attach(expr)?;
        }
    }

    let case = TestCase::new(seed, variables)?;
    let summary = case.summary();
    debug!(
        seed,
        variables = summary.variables,
        inputs = summary.inputs,
        assignables = summary.assignables,
        outputs = summary.outputs,
        constraints = summary.constraints,
        "assembled test case"
    );
    Ok(case)
}
