//! The contract between the search and the propagators.
//!
//! After the search assigns a variable it calls [`propagate`] with that variable as the trigger; a
//! propagator then removes values which cannot be part of a solution extending the current
//! assignment. Before the first decision, [`propagate`] is called once without a trigger to
//! establish consistency of the whole problem.
//!
//! Every value which is removed during a call is recorded in the [`PropagationOutcome`],
//! whether the call ends in a dead end or not. The caller owns those records and has to restore
//! them (with [`crate::Csp::restore_all`]) when it undoes the assignment which triggered the
//! call. Propagators never restore values themselves.
mod constraint_queue;
mod context;
mod propagator;

pub(crate) use constraint_queue::ConstraintQueue;
pub use context::PropagationContext;
pub use propagator::*;
