use std::fmt::Debug;

use log::trace;

use super::PropagationContext;
use crate::asserts::GRIDCSP_ASSERT_LEVEL_DEFINITION;
use crate::asserts::GRIDCSP_ASSERT_MODERATE;
use crate::basic_types::PropagationStatus;
use crate::engine::Csp;
use crate::engine::VariableId;
use crate::gridcsp_assert_eq_simple;
use crate::statistics::StatisticLogger;

/// A propagator removes values from domains which cannot be part of any solution extending the
/// current assignment, or declares the current assignment to be a dead end.
///
/// Propagators are interchangeable: the search selects one (see
/// [`crate::propagators::PropagatorKind`]) and calls it through [`propagate`] for its entire run.
pub trait Propagator: Debug {
    /// Return the name of the propagator.
    ///
    /// This is a convenience method that is used for printing.
    fn name(&self) -> &str;

    /// Removes values through [`PropagationContext::remove`].
    ///
    /// When `trigger` is [`None`] the propagator establishes consistency for the whole problem;
    /// otherwise `trigger` is the variable which was just assigned and only the constraints
    /// containing it need to be examined.
    ///
    /// Returns [`Result::Err`] when the current assignment is a dead end. Every temporary
    /// assignment made through the context has to be undone before returning, on both paths.
    fn propagate(
        &mut self,
        context: PropagationContext<'_>,
        trigger: Option<VariableId>,
    ) -> PropagationStatus;

    /// Logs statistics of the propagator using the provided [`StatisticLogger`].
    ///
    /// It is recommended to create a struct through the [`crate::create_statistics_struct!`]
    /// macro!
    fn log_statistics(&self, _statistic_logger: StatisticLogger) {}
}

/// The result of a single call to [`propagate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropagationOutcome {
    pub status: PropagationStatus,
    /// The values removed during the call, in order of removal. They have to be restored by the
    /// caller when the triggering assignment is undone, regardless of `status`.
    pub pruned: Vec<(VariableId, i32)>,
}

impl PropagationOutcome {
    pub fn is_consistent(&self) -> bool {
        self.status.is_ok()
    }
}

/// Runs `propagator` on `csp`, see [`Propagator::propagate`].
pub fn propagate(
    propagator: &mut dyn Propagator,
    csp: &mut Csp,
    trigger: Option<VariableId>,
) -> PropagationOutcome {
    let assignment_depths = (GRIDCSP_ASSERT_LEVEL_DEFINITION >= GRIDCSP_ASSERT_MODERATE).then(|| {
        csp.variables()
            .iter()
            .map(|variable| variable.assignment_depth())
            .collect::<Vec<_>>()
    });

    let mut pruned = Vec::new();
    let status = propagator.propagate(PropagationContext::new(csp, &mut pruned), trigger);

    if let Some(assignment_depths) = assignment_depths {
        for (variable, depth_before) in csp.variables().iter().zip(assignment_depths) {
            gridcsp_assert_eq_simple!(
                depth_before,
                variable.assignment_depth(),
                "{} left {} with a dangling assignment",
                propagator.name(),
                variable.name()
            );
        }
    }

    trace!(
        "{} on {trigger:?}: {status:?} after pruning {} values",
        propagator.name(),
        pruned.len()
    );

    PropagationOutcome { status, pruned }
}
