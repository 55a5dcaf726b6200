//! Options which configure the [`crate::Solver`].
use crate::branching::ValueSelection;
use crate::branching::VariableSelection;
use crate::propagators::PropagatorKind;

/// The options passed to the [`crate::Solver`] upon creation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolverOptions {
    /// The propagator which is called after every decision.
    pub propagator: PropagatorKind,
    /// Which variable is branched on next.
    pub variable_selection: VariableSelection,
    /// The order in which the values of the branching variable are tried.
    pub value_selection: ValueSelection,
    /// The seed of the random generator used by [`ValueSelection::Random`].
    pub random_seed: u64,
}

impl Default for SolverOptions {
    fn default() -> Self {
        Self {
            propagator: PropagatorKind::default(),
            variable_selection: VariableSelection::default(),
            value_selection: ValueSelection::default(),
            random_seed: 42,
        }
    }
}
