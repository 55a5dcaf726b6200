#![cfg(test)] // workaround for https://github.com/rust-lang/rust-clippy/issues/11024

use gridcsp_solver::constraints;
use gridcsp_solver::options::SolverOptions;
use gridcsp_solver::propagation::propagate;
use gridcsp_solver::propagation::PropagationContext;
use gridcsp_solver::propagation::Propagator;
use gridcsp_solver::propagators::PropagatorKind;
use gridcsp_solver::results::SatisfactionResult;
use gridcsp_solver::termination::Indefinite;
use gridcsp_solver::Csp;
use gridcsp_solver::Inconsistency;
use gridcsp_solver::PropagationStatus;
use gridcsp_solver::Solver;
use gridcsp_solver::VariableId;

fn two_different_variables() -> (Csp, VariableId, VariableId) {
    let mut csp = Csp::default();
    let x = csp.new_variable("x", [1, 2]).unwrap();
    let y = csp.new_variable("y", [1, 2]).unwrap();
    let _ = csp.add_constraint(constraints::not_equals(&csp, x, y)).unwrap();

    (csp, x, y)
}

#[test]
fn assignment_is_propagated_to_the_other_variable() {
    let (mut csp, x, y) = two_different_variables();
    csp.assign(x, 1);

    let mut forward_checking = PropagatorKind::ForwardChecking.create();
    let outcome = propagate(forward_checking.as_mut(), &mut csp, Some(x));
    assert!(outcome.is_consistent());
    assert_eq!(vec![(y, 1)], outcome.pruned);
    csp.restore_all(&outcome.pruned);

    let mut arc_consistency = PropagatorKind::GeneralisedArcConsistency.create();
    let outcome = propagate(arc_consistency.as_mut(), &mut csp, Some(x));
    assert!(outcome.is_consistent());
    assert_eq!(vec![(x, 2), (y, 1)], outcome.pruned);
}

#[test]
fn fully_assigned_violation_is_only_found_by_backtracking_check() {
    let (mut csp, x, y) = two_different_variables();
    csp.assign(x, 1);
    csp.assign(y, 1);

    let mut forward_checking = PropagatorKind::ForwardChecking.create();
    let outcome = propagate(forward_checking.as_mut(), &mut csp, Some(y));
    assert!(outcome.is_consistent());
    assert!(outcome.pruned.is_empty());

    let mut backtracking = PropagatorKind::BacktrackingCheck.create();
    let outcome = propagate(backtracking.as_mut(), &mut csp, Some(y));
    assert!(matches!(
        outcome.status,
        Err(Inconsistency::ConstraintViolated(_))
    ));
    assert!(outcome.pruned.is_empty());
}

#[test]
fn pigeonhole_all_different_is_a_dead_end_for_arc_consistency() {
    let mut csp = Csp::default();
    let x = csp.new_variable("x", [1]).unwrap();
    let y = csp.new_variable("y", [1, 2]).unwrap();
    let z = csp.new_variable("z", [1, 2]).unwrap();
    let all_different = constraints::all_different(&csp, "all_different", vec![x, y, z]);
    let _ = csp.add_constraint(all_different).unwrap();

    let mut arc_consistency = PropagatorKind::GeneralisedArcConsistency.create();
    let outcome = propagate(arc_consistency.as_mut(), &mut csp, None);

    assert!(!outcome.is_consistent());
    csp.restore_all(&outcome.pruned);
    assert_eq!(vec![1, 2], csp.variable(y).current_domain().collect::<Vec<_>>());
}

/// Removes every odd value, whatever the constraints.
#[derive(Debug)]
struct EvenValuesOnly;

impl Propagator for EvenValuesOnly {
    fn name(&self) -> &str {
        "EvenValuesOnly"
    }

    fn propagate(
        &mut self,
        mut context: PropagationContext<'_>,
        _trigger: Option<VariableId>,
    ) -> PropagationStatus {
        let variables = context.csp().variable_ids().collect::<Vec<_>>();
        for variable in variables {
            for value in context.domain_values(variable) {
                if value % 2 != 0 {
                    context.remove(variable, value)?;
                }
            }
        }

        Ok(())
    }
}

#[test]
fn propagators_can_be_defined_outside_the_core() {
    let mut csp = Csp::default();
    let x = csp.new_variable("x", [1, 2]).unwrap();
    let y = csp.new_variable("y", [3]).unwrap();

    let outcome = propagate(&mut EvenValuesOnly, &mut csp, None);

    assert_eq!(vec![(x, 1), (y, 3)], outcome.pruned);
    assert_eq!(Err(Inconsistency::EmptyDomain(y)), outcome.status);
}

#[test]
fn solver_returns_the_problem_unchanged() {
    let (csp, x, y) = two_different_variables();
    let mut solver = Solver::new(csp, SolverOptions::default());

    let SatisfactionResult::Satisfiable(solution) = solver.satisfy(&mut Indefinite) else {
        panic!("x != y has a solution");
    };
    assert_eq!((1, 2), (solution.value(x), solution.value(y)));

    let csp = solver.into_csp();
    for variable in [x, y] {
        assert!(!csp.is_assigned(variable));
        assert_eq!(vec![1, 2], csp.variable(variable).current_domain().collect::<Vec<_>>());
    }
}
