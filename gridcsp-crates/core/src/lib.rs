//! # gridcsp
//! A propagation core for finite-domain constraint satisfaction problems, of the kind used to model
//! grid puzzles such as Futoshiki.
//!
//! A problem ([`Csp`]) consists of variables with finite integer domains and table constraints,
//! i.e. constraints which list every tuple of values they allow. During search, a [`Solver`]
//! assigns variables one at a time and calls one of three propagators after every assignment:
//! * plain backtracking, which only checks fully assigned constraints;
//! * forward checking, which prunes constraints with a single unassigned variable;
//! * generalised arc consistency, which prunes every unsupported value until a fixed point.
//!
//! # Example
//! ```rust
//! # use gridcsp_core::constraints;
//! # use gridcsp_core::options::SolverOptions;
//! # use gridcsp_core::results::SatisfactionResult;
//! # use gridcsp_core::termination::Indefinite;
//! # use gridcsp_core::Csp;
//! # use gridcsp_core::Solver;
//! let mut csp = Csp::default();
//! let x = csp.new_variable("x", 1..=3).unwrap();
//! let y = csp.new_variable("y", 1..=3).unwrap();
//!
//! let less_than = constraints::less_than(&csp, x, y);
//! let _ = csp.add_constraint(less_than).unwrap();
//! let not_one = constraints::table("x != 1", vec![x], [vec![2], vec![3]]);
//! let _ = csp.add_constraint(not_one).unwrap();
//!
//! let mut solver = Solver::new(csp, SolverOptions::default());
//! let SatisfactionResult::Satisfiable(solution) = solver.satisfy(&mut Indefinite) else {
//!     panic!("the problem has a solution");
//! };
//!
//! assert_eq!(2, solution.value(x));
//! assert_eq!(3, solution.value(y));
//! ```
#[doc(hidden)]
pub mod asserts;

pub(crate) mod basic_types;
pub mod branching;
pub mod constraints;
pub mod containers;
mod engine;
pub mod options;
pub mod propagation;
pub mod propagators;
pub mod results;
pub mod statistics;

pub use basic_types::EmptyDomain;
pub use basic_types::Inconsistency;
pub use basic_types::ModelError;
pub use basic_types::PropagationStatus;
pub use basic_types::Solution;
pub use engine::termination;
pub use engine::Constraint;
pub use engine::ConstraintId;
pub use engine::Csp;
pub use engine::SearchStatistics;
pub use engine::Solver;
pub use engine::SolverStatistics;
pub use engine::Variable;
pub use engine::VariableId;
pub use rand;
