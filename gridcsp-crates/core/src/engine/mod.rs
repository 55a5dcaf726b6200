mod constraint;
mod csp;
mod solver;
mod solver_statistics;
pub mod termination;
mod variables;

pub use constraint::Constraint;
pub use constraint::ConstraintId;
pub use csp::Csp;
pub use solver::Solver;
pub use solver_statistics::SearchStatistics;
pub use solver_statistics::SolverStatistics;
pub use variables::Variable;
pub use variables::VariableId;
