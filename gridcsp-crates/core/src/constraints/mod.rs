//! Builders for the table [`Constraint`]s a model is made of.
//!
//! Every constraint is materialised as the set of tuples which satisfy it, computed from the full
//! domains of the scope at the time the constraint is built. Add the result to the problem with
//! [`Csp::add_constraint`].
mod all_different;
mod arithmetic;

pub use all_different::*;
pub use arithmetic::*;
use itertools::Itertools;

use crate::engine::Constraint;
use crate::engine::VariableId;
use crate::Csp;

/// A constraint over `scope` which is satisfied by exactly the given `tuples`.
pub fn table(
    name: impl Into<String>,
    scope: Vec<VariableId>,
    tuples: impl IntoIterator<Item = Vec<i32>>,
) -> Constraint {
    Constraint::new(name, scope, tuples)
}

/// A constraint over `scope` which is satisfied by every combination of values from the full
/// domains for which `predicate` holds.
///
/// The number of combinations grows exponentially with the arity; for large scopes prefer a
/// dedicated builder such as [`all_different`].
pub fn from_predicate(
    csp: &Csp,
    name: impl Into<String>,
    scope: Vec<VariableId>,
    predicate: impl Fn(&[i32]) -> bool,
) -> Constraint {
    let tuples = scope
        .iter()
        .map(|&variable| csp.variable(variable).full_domain().iter().copied())
        .multi_cartesian_product()
        .filter(|tuple| predicate(tuple))
        .collect::<Vec<_>>();

    Constraint::new(name, scope, tuples)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predicate_is_evaluated_on_the_full_domains() {
        let mut csp = Csp::default();
        let x = csp.new_variable("x", [1, 2, 3]).unwrap();
        let y = csp.new_variable("y", [1, 2]).unwrap();
        let z = csp.new_variable("z", [3, 4]).unwrap();

        csp.variable_mut(x).prune(1);
        let constraint = from_predicate(&csp, "sum", vec![x, y, z], |tuple| {
            tuple[0] + tuple[1] == tuple[2]
        });

        let mut tuples = constraint.tuples().map(<[i32]>::to_vec).collect::<Vec<_>>();
        tuples.sort();
        assert_eq!(
            vec![vec![1, 2, 3], vec![2, 1, 3], vec![2, 2, 4], vec![3, 1, 4]],
            tuples
        );
    }
}
