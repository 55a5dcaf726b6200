//! The propagators which can be used by the search.
//!
//! All of them implement [`Propagator`] and are selected through [`PropagatorKind`]:
//! * [`BacktrackingCheck`] does not prune; it only checks constraints whose scope is fully
//!   assigned.
//! * [`ForwardChecking`] prunes the domain of the single unassigned variable of a constraint.
//! * [`GeneralisedArcConsistency`] prunes every value without support until a fixed point.
mod backtracking_check;
mod forward_checking;
mod generalised_arc_consistency;
#[cfg(test)]
pub(crate) mod test_helper;

use std::fmt::Display;

pub use backtracking_check::*;
pub use forward_checking::*;
pub use generalised_arc_consistency::*;

use crate::propagation::Propagator;

/// The propagation strategy used during search.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum PropagatorKind {
    /// Only check constraints which are fully assigned.
    #[cfg_attr(feature = "clap", value(name = "bt"))]
    BacktrackingCheck,
    /// Prune constraints with exactly one unassigned variable.
    #[cfg_attr(feature = "clap", value(name = "fc"))]
    ForwardChecking,
    /// Maintain generalised arc consistency.
    #[default]
    #[cfg_attr(feature = "clap", value(name = "gac"))]
    GeneralisedArcConsistency,
}

impl PropagatorKind {
    pub fn create(self) -> Box<dyn Propagator> {
        match self {
            PropagatorKind::BacktrackingCheck => Box::<BacktrackingCheck>::default(),
            PropagatorKind::ForwardChecking => Box::<ForwardChecking>::default(),
            PropagatorKind::GeneralisedArcConsistency => {
                Box::<GeneralisedArcConsistency>::default()
            }
        }
    }
}

impl Display for PropagatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PropagatorKind::BacktrackingCheck => write!(f, "bt"),
            PropagatorKind::ForwardChecking => write!(f, "fc"),
            PropagatorKind::GeneralisedArcConsistency => write!(f, "gac"),
        }
    }
}
