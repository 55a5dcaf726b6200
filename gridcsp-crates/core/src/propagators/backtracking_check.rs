use crate::basic_types::Inconsistency;
use crate::basic_types::PropagationStatus;
use crate::create_statistics_struct;
use crate::engine::VariableId;
use crate::propagation::PropagationContext;
use crate::propagation::Propagator;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

create_statistics_struct!(BacktrackingCheckStatistics {
    /// The number of fully assigned constraints which were checked
    num_checks: u64,
    /// The number of checks which found a violated constraint
    num_violations: u64,
});

/// Plain backtracking: no pruning, a dead end is only detected once every variable of a
/// constraint containing the trigger is assigned and the assigned tuple is not allowed.
#[derive(Clone, Copy, Debug, Default)]
pub struct BacktrackingCheck {
    statistics: BacktrackingCheckStatistics,
}

impl Propagator for BacktrackingCheck {
    fn name(&self) -> &str {
        "BacktrackingCheck"
    }

    fn propagate(
        &mut self,
        context: PropagationContext<'_>,
        trigger: Option<VariableId>,
    ) -> PropagationStatus {
        let Some(trigger) = trigger else {
            return Ok(());
        };

        for &constraint_id in context.constraints_containing(trigger) {
            let constraint = context.constraint(constraint_id);
            let Some(values) = constraint.assigned_values(context.variables()) else {
                continue;
            };

            self.statistics.num_checks += 1;
            if !constraint.check(&values) {
                self.statistics.num_violations += 1;
                return Err(Inconsistency::ConstraintViolated(constraint_id));
            }
        }

        Ok(())
    }

    fn log_statistics(&self, statistic_logger: StatisticLogger) {
        self.statistics.log(statistic_logger);
    }
}
