//! Text rendering in the solver's input format.
//!
//! Layout: assignable lines, blank line, output lines, blank line, forced
//! constraints (`name == 1|0`), then the `end` sentinel. Every line ends in LF.

use std::fmt::Write;

use satvec_ir::{TestCase, Variable};

pub const SENTINEL: &str = "end";

pub fn render(case: &TestCase) -> String {
    let mut out = String::new();

    write_expressions(&mut out, case.assignables());
    out.push('\n');
    write_expressions(&mut out, case.outputs());
    out.push('\n');

    for (var, forced) in case.constraints() {
        // Writing into a String cannot fail.
        let _ = writeln!(out, "{} == {}", var.name(), forced.as_bit());
    }

    out.push_str(SENTINEL);
    out.push('\n');
    out
}

fn write_expressions<'a>(out: &mut String, vars: impl Iterator<Item = &'a Variable>) {
    for expr in vars.filter_map(Variable::expression) {
        let _ = writeln!(out, "{expr}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use satvec_ir::{Expression, Forced, Operator};

    #[test]
    fn test_render_layout() {
        let mut a = Variable::assignable("a_1", 1);
        a.attach(Expression::chain(
            "a_1",
            "i_0",
            vec![(Operator::Xnor, "i_2".to_string())],
        ))
        .unwrap();
        let mut o = Variable::output("o_3", 3);
        o.attach(Expression::chain(
            "o_3",
            "a_1",
            vec![
                (Operator::And, "i_0".to_string()),
                (Operator::Nor, "i_2".to_string()),
            ],
        ))
        .unwrap();
        let case = TestCase::new(
            0,
            vec![
                Variable::input("i_0", 0, Some(Forced::False)),
                a,
                Variable::input("i_2", 2, Some(Forced::True)),
                o,
            ],
        )
        .unwrap();

        let expected = "a_1 = i_0 ~^ i_2\n\
                        \n\
                        o_3 = a_1 & i_0 ~| i_2\n\
                        \n\
                        i_0 == 0\n\
                        i_2 == 1\n\
                        end\n";
        assert_eq!(render(&case), expected);
    }

    #[test]
    fn test_render_inputs_only() {
        let case = TestCase::new(0, vec![Variable::input("i_0", 0, None)]).unwrap();
        assert_eq!(render(&case), "\n\nend\n");
    }
}
