//! # gridcsp
//! A solver for finite-domain constraint satisfaction problems over table constraints, with a
//! command line front-end for Futoshiki puzzles.
//!
//! The library re-exports the propagation core. A problem is built by creating variables and
//! adding constraints to a [`Csp`]; a [`Solver`] then searches it with one of the propagators of
//! [`propagators`]:
//! ```rust
//! # use gridcsp_solver::constraints;
//! # use gridcsp_solver::options::SolverOptions;
//! # use gridcsp_solver::propagators::PropagatorKind;
//! # use gridcsp_solver::termination::Indefinite;
//! # use gridcsp_solver::Csp;
//! # use gridcsp_solver::Solver;
//! let mut csp = Csp::default();
//! let cells = (0..3)
//!     .map(|i| csp.new_variable(format!("cell{i}"), 1..=3).unwrap())
//!     .collect::<Vec<_>>();
//!
//! let all_different = constraints::all_different(&csp, "row", cells.clone());
//! let _ = csp.add_constraint(all_different).unwrap();
//!
//! let mut solver = Solver::new(
//!     csp,
//!     SolverOptions {
//!         propagator: PropagatorKind::ForwardChecking,
//!         ..Default::default()
//!     },
//! );
//! let result = solver.enumerate_solutions(&mut Indefinite, None, |_| {});
//!
//! assert_eq!(6, result.num_solutions);
//! assert!(result.is_complete);
//! ```
pub use gridcsp_core::*;
