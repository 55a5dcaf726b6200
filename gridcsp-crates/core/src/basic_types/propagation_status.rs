use crate::engine::ConstraintId;
use crate::engine::VariableId;

/// The result of invoking a propagator. The propagation can either succeed or identify a dead end.
pub type PropagationStatus = Result<(), Inconsistency>;

/// The reason a propagator declared the current branch to be a dead end.
///
/// A dead end is an expected outcome which drives backtracking; it is not an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Inconsistency {
    /// The domain of the variable was emptied by propagation.
    EmptyDomain(VariableId),
    /// The constraint is violated by the values assigned to its (fully assigned) scope.
    ConstraintViolated(ConstraintId),
}

/// Returned when removing a value leaves the domain of `variable` without values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EmptyDomain(pub VariableId);

impl From<EmptyDomain> for Inconsistency {
    fn from(empty_domain: EmptyDomain) -> Self {
        Inconsistency::EmptyDomain(empty_domain.0)
    }
}
