use std::time::Duration;

use crate::create_statistics_struct;
use crate::statistics::Statistic;
use crate::statistics::StatisticLogger;

/// Structure responsible for storing several statistics of the solving process of the solver.
#[derive(Debug, Default, Clone, Copy)]
pub struct SolverStatistics {
    /// Statistics of the search tree
    pub search: SearchStatistics,
    /// The amount of time which is spent in the solver.
    pub time_spent_in_solver: Duration,
}

impl SolverStatistics {
    pub(crate) fn log(&self, statistic_logger: StatisticLogger) {
        self.search.log(statistic_logger.clone());
        statistic_logger
            .attach_to_prefix("solve_time")
            .log_statistic(self.time_spent_in_solver.as_secs_f64());
    }
}

create_statistics_struct!(
    /// Statistics of the search tree explored by the solver
    SearchStatistics {
        /// The number of decisions taken by the solver
        num_decisions: u64,
        /// The number of decisions after which propagation found a dead end
        num_dead_ends: u64,
        /// The number of times every value of a decision variable was exhausted
        num_backtracks: u64,
        /// The number of solutions which were found
        num_solutions: u64,
        /// The number of times the propagator was called
        num_propagator_calls: u64,
        /// The total number of values removed by the propagator
        num_pruned_values: u64,
        /// The peak depth of the search tree
        peak_depth: u64,
});
