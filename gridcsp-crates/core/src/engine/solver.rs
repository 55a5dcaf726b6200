use std::ops::ControlFlow;
use std::time::Instant;

use log::debug;
use log::trace;
use log::warn;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use super::termination::TerminationCondition;
use super::Csp;
use super::SolverStatistics;
use super::Variable;
use super::VariableId;
use crate::basic_types::Solution;
use crate::containers::KeyedVec;
use crate::gridcsp_assert_eq_simple;
use crate::gridcsp_assert_moderate;
use crate::options::SolverOptions;
use crate::propagation::propagate;
use crate::propagation::PropagationOutcome;
use crate::propagation::Propagator;
use crate::results::EnumerationResult;
use crate::results::SatisfactionResult;
use crate::statistics::log_statistics_end;
use crate::statistics::should_log_statistics;
use crate::statistics::StatisticLogger;

/// A depth-first backtracking search over a [`Csp`], which calls a single [`Propagator`] after
/// every decision.
///
/// The search keeps an explicit stack of decisions. Each decision remembers the values of its
/// variable which are still to be tried, and the values pruned by the propagation that followed
/// the current assignment. Undoing a decision restores those values before unassigning the
/// variable. When the search ends, every decision and the initial propagation are undone, so the
/// [`Csp`] is handed back in the state it was given.
#[derive(Debug)]
pub struct Solver {
    csp: Csp,
    propagator: Box<dyn Propagator>,
    options: SolverOptions,
    random_generator: SmallRng,
    statistics: SolverStatistics,
}

/// How a run of the search ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum SearchEnd {
    /// Every branch was explored.
    Exhausted,
    /// The termination condition triggered.
    Stopped,
    /// The solution callback asked to stop.
    Interrupted,
}

#[derive(Debug)]
struct Decision {
    variable: VariableId,
    /// The values still to be tried, the next one is at the back.
    remaining_values: Vec<i32>,
    is_assigned: bool,
    pruned: Vec<(VariableId, i32)>,
}

impl Decision {
    fn undo(&mut self, csp: &mut Csp) {
        if self.is_assigned {
            csp.restore_all(&self.pruned);
            self.pruned.clear();
            csp.unassign(self.variable);
            self.is_assigned = false;
        }
    }
}

impl Solver {
    pub fn new(csp: Csp, options: SolverOptions) -> Solver {
        if csp.num_variables() == 0 {
            warn!("The solver was created for a problem without variables");
        }

        Solver {
            csp,
            propagator: options.propagator.create(),
            random_generator: SmallRng::seed_from_u64(options.random_seed),
            options,
            statistics: SolverStatistics::default(),
        }
    }

    pub fn csp(&self) -> &Csp {
        &self.csp
    }

    pub fn into_csp(self) -> Csp {
        self.csp
    }

    pub fn statistics(&self) -> &SolverStatistics {
        &self.statistics
    }

    /// Searches for a single solution.
    pub fn satisfy(&mut self, termination: &mut impl TerminationCondition) -> SatisfactionResult {
        let mut found = None;
        let end = self.search(termination, |solution| {
            found = Some(solution.clone());
            ControlFlow::Break(())
        });

        match (found, end) {
            (Some(solution), _) => SatisfactionResult::Satisfiable(solution),
            (None, SearchEnd::Stopped) => SatisfactionResult::Unknown,
            (None, _) => SatisfactionResult::Unsatisfiable,
        }
    }

    /// Searches for every solution (or the first `limit` solutions), calling `on_solution` for
    /// each of them.
    pub fn enumerate_solutions(
        &mut self,
        termination: &mut impl TerminationCondition,
        limit: Option<usize>,
        mut on_solution: impl FnMut(&Solution),
    ) -> EnumerationResult {
        if limit == Some(0) {
            return EnumerationResult {
                num_solutions: 0,
                is_complete: false,
            };
        }

        let mut num_solutions = 0;
        let end = self.search(termination, |solution| {
            num_solutions += 1;
            on_solution(solution);

            if limit.is_some_and(|limit| num_solutions >= limit) {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        EnumerationResult {
            num_solutions,
            is_complete: end == SearchEnd::Exhausted,
        }
    }

    /// Logs the statistics of the solver and its propagator, if statistic logging is configured
    /// (see [`crate::statistics::enable_statistic_logging`]).
    pub fn log_statistics(&self) {
        if should_log_statistics() {
            self.statistics.log(StatisticLogger::default());
            self.propagator
                .log_statistics(StatisticLogger::new(self.propagator.name()));
            log_statistics_end();
        }
    }

    fn search(
        &mut self,
        termination: &mut impl TerminationCondition,
        mut on_solution: impl FnMut(&Solution) -> ControlFlow<()>,
    ) -> SearchEnd {
        let started_at = Instant::now();

        let root = self.propagate(None);
        let end = if root.is_consistent() {
            self.explore(termination, &mut on_solution)
        } else {
            debug!("initial propagation failed: {:?}", root.status);
            SearchEnd::Exhausted
        };
        self.csp.restore_all(&root.pruned);

        self.statistics.time_spent_in_solver += started_at.elapsed();
        debug!("search ended: {end:?}");

        end
    }

    fn explore(
        &mut self,
        termination: &mut impl TerminationCondition,
        on_solution: &mut impl FnMut(&Solution) -> ControlFlow<()>,
    ) -> SearchEnd {
        let mut decisions: Vec<Decision> = Vec::new();
        let mut descend = true;

        loop {
            if termination.should_stop() {
                self.undo_all(&mut decisions);
                return SearchEnd::Stopped;
            }

            if descend {
                match self.options.variable_selection.select(&self.csp) {
                    Some(variable) => {
                        let mut values = self
                            .csp
                            .variable(variable)
                            .current_domain()
                            .collect::<Vec<_>>();
                        self.options
                            .value_selection
                            .order(&mut values, &mut self.random_generator);
                        values.reverse();

                        decisions.push(Decision {
                            variable,
                            remaining_values: values,
                            is_assigned: false,
                            pruned: Vec::new(),
                        });
                        let depth = decisions.len() as u64;
                        self.statistics.search.peak_depth =
                            self.statistics.search.peak_depth.max(depth);
                    }
                    None => {
                        let solution = self.current_solution();
                        self.statistics.search.num_solutions += 1;
                        debug!("found a solution at depth {}", decisions.len());
                        gridcsp_assert_moderate!(self.csp.is_solution(&solution));

                        if on_solution(&solution).is_break() {
                            self.undo_all(&mut decisions);
                            return SearchEnd::Interrupted;
                        }
                    }
                }
            }

            let Some(decision) = decisions.last_mut() else {
                return SearchEnd::Exhausted;
            };
            decision.undo(&mut self.csp);

            let Some(value) = decision.remaining_values.pop() else {
                let _ = decisions.pop();
                self.statistics.search.num_backtracks += 1;
                descend = false;
                continue;
            };

            trace!("deciding {} = {value}", self.csp.variable(decision.variable).name());
            self.csp.assign(decision.variable, value);
            decision.is_assigned = true;
            self.statistics.search.num_decisions += 1;
            termination.decision_has_been_made();

            let outcome = self.propagate(Some(decision.variable));
            descend = outcome.is_consistent();
            if !descend {
                self.statistics.search.num_dead_ends += 1;
            }
            decision.pruned = outcome.pruned;
        }
    }

    fn propagate(&mut self, trigger: Option<VariableId>) -> PropagationOutcome {
        let outcome = propagate(self.propagator.as_mut(), &mut self.csp, trigger);

        self.statistics.search.num_propagator_calls += 1;
        self.statistics.search.num_pruned_values += outcome.pruned.len() as u64;

        outcome
    }

    fn current_solution(&self) -> Solution {
        let values = self
            .csp
            .variables()
            .iter()
            .filter_map(Variable::assigned_value)
            .collect::<KeyedVec<VariableId, i32>>();
        gridcsp_assert_eq_simple!(self.csp.num_variables(), values.len());

        Solution::new(values)
    }

    fn undo_all(&mut self, decisions: &mut Vec<Decision>) {
        while let Some(mut decision) = decisions.pop() {
            decision.undo(&mut self.csp);
        }
    }
}
