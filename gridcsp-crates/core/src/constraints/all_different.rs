use crate::containers::HashSet;
use crate::engine::Constraint;
use crate::engine::VariableId;
use crate::Csp;

/// An n-ary constraint which requires every variable in `scope` to take a different value.
///
/// Only the tuples with pairwise distinct values are generated; a partial tuple is abandoned as
/// soon as it repeats a value.
pub fn all_different(csp: &Csp, name: impl Into<String>, scope: Vec<VariableId>) -> Constraint {
    let domains = scope
        .iter()
        .map(|&variable| csp.variable(variable).full_domain())
        .collect::<Vec<_>>();

    let mut tuples = Vec::new();
    extend_distinct(
        &domains,
        &mut Vec::with_capacity(scope.len()),
        &mut HashSet::default(),
        &mut tuples,
    );

    Constraint::new(name, scope, tuples)
}

fn extend_distinct(
    domains: &[&[i32]],
    prefix: &mut Vec<i32>,
    used: &mut HashSet<i32>,
    tuples: &mut Vec<Vec<i32>>,
) {
    let Some(domain) = domains.get(prefix.len()) else {
        tuples.push(prefix.clone());
        return;
    };

    for &value in domain.iter() {
        if !used.insert(value) {
            continue;
        }

        prefix.push(value);
        extend_distinct(domains, prefix, used, tuples);
        let _ = prefix.pop();
        let _ = used.remove(&value);
    }
}
