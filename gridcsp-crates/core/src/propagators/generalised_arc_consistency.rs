use log::trace;

use crate::basic_types::EmptyDomain;
use crate::basic_types::PropagationStatus;
use crate::create_statistics_struct;
use crate::engine::Csp;
use crate::engine::VariableId;
use crate::gridcsp_assert_advanced;
use crate::gridcsp_assert_simple;
use crate::propagation::ConstraintQueue;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(GeneralisedArcConsistencyStatistics {
    /// The number of times a constraint was taken from the queue
    num_revisions: u64,
    /// The number of values for which a support was looked up
    num_support_checks: u64,
    /// The number of calls which ended in an empty domain
    num_wipeouts: u64,
});

/// Maintains generalised arc consistency: every value in the domain of a scope variable has a
/// support in the constraint.
///
/// Constraints are revised from a FIFO queue. Whenever a value of a variable is removed, every
/// constraint containing that variable is queued again (unless it is already queued), until the
/// queue is empty or a domain is wiped out.
#[derive(Clone, Debug, Default)]
pub struct GeneralisedArcConsistency {
    queue: ConstraintQueue,
    statistics: GeneralisedArcConsistencyStatistics,
}

impl GeneralisedArcConsistency {
    fn revise_until_fixed_point(
        &mut self,
        context: &mut PropagationContext<'_>,
    ) -> Result<(), EmptyDomain> {
        while let Some(constraint_id) = self.queue.pop() {
            self.statistics.num_revisions += 1;

            let scope = context.constraint(constraint_id).scope().to_vec();
            for variable in scope {
                for value in context.domain_values(variable) {
                    self.statistics.num_support_checks += 1;

                    if context
                        .constraint(constraint_id)
                        .has_support(context.variables(), variable, value)
                    {
                        continue;
                    }

                    context.remove(variable, value)?;
                    for &constraint in context.constraints_containing(variable) {
                        self.queue.enqueue(constraint);
                    }
                }
            }
        }

        Ok(())
    }
}

impl Propagator for GeneralisedArcConsistency {
    fn name(&self) -> &str {
        "GeneralisedArcConsistency"
    }

    fn propagate(
        &mut self,
        mut context: PropagationContext<'_>,
        trigger: Option<VariableId>,
    ) -> PropagationStatus {
        gridcsp_assert_simple!(self.queue.is_empty());

        match trigger {
            Some(variable) => {
                let assigned_value = context.variables()[variable].assigned_value();
                gridcsp_assert_simple!(
                    assigned_value.is_some(),
                    "propagation was triggered by {variable}, which is not assigned"
                );

                // The assigned value stays, so this cannot empty the domain.
                if let Some(assigned_value) = assigned_value {
                    for value in context.domain_values(variable) {
                        if value != assigned_value {
                            context.remove(variable, value)?;
                        }
                    }
                }

                for &constraint in context.constraints_containing(variable) {
                    self.queue.enqueue(constraint);
                }
            }
            None => {
                for constraint in context.csp().constraint_ids() {
                    self.queue.enqueue(constraint);
                }
            }
        }

        if let Err(empty_domain) = self.revise_until_fixed_point(&mut context) {
            trace!("wipeout of {}, clearing the queue", empty_domain.0);
            self.queue.clear();
            self.statistics.num_wipeouts += 1;
            return Err(empty_domain.into());
        }

        gridcsp_assert_advanced!(is_arc_consistent(context.csp()));

        Ok(())
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}

/// Returns true if every value of every scope variable has a support in every constraint.
pub(crate) fn is_arc_consistent(csp: &Csp) -> bool {
    csp.constraints().iter().all(|constraint| {
        constraint.scope().iter().all(|&variable| {
            csp.variable(variable)
                .current_domain()
                .all(|value| constraint.has_support(csp.variables(), variable, value))
        })
    })
}
