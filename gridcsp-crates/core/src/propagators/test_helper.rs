use rand::rngs::SmallRng;
use rand::Rng;
use rand::SeedableRng;

use crate::constraints;
use crate::containers::HashSet;
use crate::engine::Constraint;
use crate::engine::VariableId;
use crate::Csp;

/// Creates a problem with `num_variables` variables over `1..=domain_size`, and a random binary
/// constraint between roughly half of the pairs of variables.
pub(crate) fn random_binary_csp(
    seed: u64,
    num_variables: usize,
    domain_size: i32,
) -> (Csp, Vec<VariableId>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let mut csp = Csp::default();

    let variables = (0..num_variables)
        .map(|index| {
            csp.new_variable(format!("x{index}"), 1..=domain_size)
                .expect("valid domain")
        })
        .collect::<Vec<_>>();

    for (index, &x) in variables.iter().enumerate() {
        for &y in &variables[index + 1..] {
            if !rng.gen_bool(0.5) {
                continue;
            }

            let constraint = match rng.gen_range(0..3) {
                0 => constraints::not_equals(&csp, x, y),
                1 => constraints::less_than(&csp, x, y),
                _ => {
                    let tuples = (1..=domain_size)
                        .flat_map(|a| (1..=domain_size).map(move |b| vec![a, b]))
                        .filter(|_| rng.gen_bool(0.6))
                        .collect::<Vec<_>>();
                    constraints::table(format!("table({x}, {y})"), vec![x, y], tuples)
                }
            };
            let _ = csp.add_constraint(constraint).expect("valid constraint");
        }
    }

    (csp, variables)
}

pub(crate) fn domains(csp: &Csp) -> Vec<Vec<i32>> {
    csp.variables()
        .iter()
        .map(|variable| variable.current_domain().collect())
        .collect()
}

/// Asserts that `pruned` contains no duplicates and only values which were in the domains
/// before propagation.
pub(crate) fn assert_valid_pruning(before: &[Vec<i32>], pruned: &[(VariableId, i32)]) {
    let mut seen: HashSet<(VariableId, i32)> = HashSet::default();
    for &(variable, value) in pruned {
        assert!(seen.insert((variable, value)), "pruned {value} from {variable} twice");
        assert!(
            before[variable.id as usize].contains(&value),
            "pruned {value} from {variable}, which was not in its domain"
        );
    }
}

/// Asserts that every value of every scope variable of the selected constraints has a support.
pub(crate) fn assert_supported(csp: &Csp, mut is_selected: impl FnMut(&Constraint) -> bool) {
    for constraint in csp.constraints().iter() {
        if !is_selected(constraint) {
            continue;
        }

        for &variable in constraint.scope() {
            if csp.is_assigned(variable) {
                continue;
            }
            for value in csp.variable(variable).current_domain() {
                assert!(
                    constraint.has_support(csp.variables(), variable, value),
                    "{variable} = {value} has no support in {}",
                    constraint.name()
                );
            }
        }
    }
}
