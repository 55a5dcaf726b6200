use super::from_predicate;
use crate::engine::Constraint;
use crate::engine::VariableId;
use crate::Csp;

/// `x != y`
pub fn not_equals(csp: &Csp, x: VariableId, y: VariableId) -> Constraint {
    let name = format!("{} != {}", csp.variable(x).name(), csp.variable(y).name());
    from_predicate(csp, name, vec![x, y], |tuple| tuple[0] != tuple[1])
}

/// `x < y`
pub fn less_than(csp: &Csp, x: VariableId, y: VariableId) -> Constraint {
    let name = format!("{} < {}", csp.variable(x).name(), csp.variable(y).name());
    from_predicate(csp, name, vec![x, y], |tuple| tuple[0] < tuple[1])
}
