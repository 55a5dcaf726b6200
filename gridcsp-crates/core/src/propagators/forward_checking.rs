use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::create_statistics_struct;
use crate::engine::ConstraintId;
use crate::engine::VariableId;
use crate::gridcsp_assert_eq_simple;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(ForwardCheckingStatistics {
    /// The number of constraints with a single unassigned variable which were examined
    num_revisions: u64,
    /// The number of values which were tried for the unassigned variable
    num_values_tried: u64,
});

/// Forward checking: for every constraint with exactly one unassigned variable, removes the values
/// of that variable which do not satisfy the constraint together with the assigned values.
#[derive(Clone, Copy, Debug, Default)]
pub struct ForwardChecking {
    statistics: ForwardCheckingStatistics,
}

impl ForwardChecking {
    fn check_unassigned_variable(
        &mut self,
        context: &mut PropagationContext<'_>,
        constraint_id: ConstraintId,
    ) -> Result<(), EmptyDomain> {
        let unassigned = context
            .constraint(constraint_id)
            .unassigned_variables(context.variables())
            .collect::<Vec<_>>();
        gridcsp_assert_eq_simple!(
            1,
            unassigned.len(),
            "{} does not have exactly one unassigned variable",
            context.constraint(constraint_id).name()
        );
        let variable = unassigned[0];

        self.statistics.num_revisions += 1;

        for value in context.domain_values(variable) {
            self.statistics.num_values_tried += 1;

            context.assign(variable, value);
            let constraint = context.constraint(constraint_id);
            let is_satisfied = constraint
                .assigned_values(context.variables())
                .is_some_and(|values| constraint.check(&values));
            context.unassign(variable);

            if !is_satisfied {
                context.remove(variable, value)?;
            }
        }

        Ok(())
    }
}

impl Propagator for ForwardChecking {
    fn name(&self) -> &str {
        "ForwardChecking"
    }

    fn propagate(
        &mut self,
        mut context: PropagationContext<'_>,
        trigger: Option<VariableId>,
    ) -> PropagationStatus {
        let constraints = match trigger {
            Some(variable) => context.constraints_containing(variable).to_vec(),
            None => context.csp().constraint_ids().collect(),
        };

        for constraint_id in constraints {
            if context
                .constraint(constraint_id)
                .num_unassigned(context.variables())
                != 1
            {
                continue;
            }

            self.check_unassigned_variable(&mut context, constraint_id)?;
        }

        Ok(())
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basic_types::Inconsistency;
    use crate::constraints;
    use crate::propagation::propagate;
    use crate::propagators::test_helper;
    use crate::Csp;

    #[test]
    fn prunes_the_unassigned_variable_of_a_binary_constraint() {
        let mut csp = Csp::default();
        let x = csp.new_variable("x", [1, 2]).unwrap();
        let y = csp.new_variable("y", [1, 2]).unwrap();
        let _ = csp.add_constraint(constraints::not_equals(&csp, x, y)).unwrap();

        csp.assign(x, 1);
        let outcome = propagate(&mut ForwardChecking::default(), &mut csp, Some(x));

        assert_eq!(Ok(()), outcome.status);
        assert_eq!(vec![(y, 1)], outcome.pruned);
        assert_eq!(vec![2], csp.variable(y).current_domain().collect::<Vec<_>>());
        assert!(!csp.is_assigned(y));
    }

    #[test]
    fn wipeout_returns_the_values_pruned_before_it() {
        let mut csp = Csp::default();
        let x = csp.new_variable("x", [1, 2, 3]).unwrap();
        let y = csp.new_variable("y", [1, 2, 3]).unwrap();
        let z = csp.new_variable("z", [1, 2]).unwrap();
        let _ = csp.add_constraint(constraints::less_than(&csp, x, y)).unwrap();
        let _ = csp.add_constraint(constraints::less_than(&csp, x, z)).unwrap();

        csp.assign(x, 2);
        let outcome = propagate(&mut ForwardChecking::default(), &mut csp, Some(x));

        assert_eq!(Err(Inconsistency::EmptyDomain(z)), outcome.status);
        assert_eq!(vec![(y, 1), (y, 2), (z, 1), (z, 2)], outcome.pruned);
        assert!(!csp.is_assigned(z));

        csp.restore_all(&outcome.pruned);
        assert_eq!(3, csp.variable(y).domain_size());
        assert_eq!(2, csp.variable(z).domain_size());
    }

    #[test]
    fn fully_assigned_constraints_are_left_to_the_search() {
        let mut csp = Csp::default();
        let x = csp.new_variable("x", [1]).unwrap();
        let y = csp.new_variable("y", [1]).unwrap();
        let _ = csp.add_constraint(constraints::not_equals(&csp, x, y)).unwrap();

        csp.assign(x, 1);
        csp.assign(y, 1);
        let outcome = propagate(&mut ForwardChecking::default(), &mut csp, Some(y));

        assert!(outcome.is_consistent());
        assert!(outcome.pruned.is_empty());
    }

    #[test]
    fn without_trigger_unary_constraints_are_applied() {
        let mut csp = Csp::default();
        let x = csp.new_variable("x", [1, 2, 3]).unwrap();
        let y = csp.new_variable("y", [1, 2, 3]).unwrap();
        let _ = csp
            .add_constraint(constraints::table("x is odd", vec![x], vec![vec![1], vec![3]]))
            .unwrap();
        let _ = csp.add_constraint(constraints::not_equals(&csp, x, y)).unwrap();

        let outcome = propagate(&mut ForwardChecking::default(), &mut csp, None);

        assert!(outcome.is_consistent());
        assert_eq!(vec![(x, 2)], outcome.pruned);
        assert_eq!(3, csp.variable(y).domain_size());
    }

    #[test]
    fn remaining_values_are_locally_consistent() {
        for seed in 0..20 {
            let (mut csp, variables) = test_helper::random_binary_csp(seed, 6, 4);
            let mut propagator = ForwardChecking::default();

            let outcome = propagate(&mut propagator, &mut csp, None);
            assert!(outcome.pruned.is_empty());

            let value = csp.variable(variables[0]).full_domain()[0];
            csp.assign(variables[0], value);
            let before = test_helper::domains(&csp);
            let outcome = propagate(&mut propagator, &mut csp, Some(variables[0]));
            test_helper::assert_valid_pruning(&before, &outcome.pruned);

            if outcome.is_consistent() {
                test_helper::assert_supported(&csp, |constraint| {
                    constraint.num_unassigned(csp.variables()) == 1
                });
            }

            csp.restore_all(&outcome.pruned);
            assert_eq!(before, test_helper::domains(&csp));
        }
    }
}
