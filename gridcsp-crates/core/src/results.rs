//! The outcomes of running the [`crate::Solver`].
use crate::basic_types::Solution;

/// The result of [`crate::Solver::satisfy`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SatisfactionResult {
    /// A solution was found.
    Satisfiable(Solution),
    /// The whole search tree was explored without finding a solution.
    Unsatisfiable,
    /// The termination condition triggered before a conclusion was reached.
    Unknown,
}

/// The result of [`crate::Solver::enumerate_solutions`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EnumerationResult {
    /// The number of solutions which were found.
    pub num_solutions: usize,
    /// Whether the search tree was fully explored, i.e. there are no other solutions.
    pub is_complete: bool,
}
