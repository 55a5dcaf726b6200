use log::trace;

use crate::basic_types::EmptyDomain;
use crate::containers::KeyedVec;
use crate::engine::Constraint;
use crate::engine::ConstraintId;
use crate::engine::Csp;
use crate::engine::Variable;
use crate::engine::VariableId;

/// The view a propagator has of the problem during a single call: read access to the registry,
/// temporary assignments for probing, and value removal which is recorded for the caller.
#[derive(Debug)]
pub struct PropagationContext<'a> {
    csp: &'a mut Csp,
    pruned: &'a mut Vec<(VariableId, i32)>,
}

impl<'a> PropagationContext<'a> {
    pub(crate) fn new(csp: &'a mut Csp, pruned: &'a mut Vec<(VariableId, i32)>) -> Self {
        PropagationContext { csp, pruned }
    }

    pub fn csp(&self) -> &Csp {
        self.csp
    }

    pub fn variables(&self) -> &KeyedVec<VariableId, Variable> {
        self.csp.variables()
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        self.csp.constraint(constraint)
    }

    pub fn constraints_containing(&self, variable: VariableId) -> &[ConstraintId] {
        self.csp.constraints_containing(variable)
    }

    /// The current domain of `variable`, copied so that values can be removed while iterating.
    pub fn domain_values(&self, variable: VariableId) -> Vec<i32> {
        self.csp.variable(variable).current_domain().collect()
    }

    /// Temporarily assign `value` to `variable`; has to be undone with
    /// [`PropagationContext::unassign`] before the propagator returns.
    pub fn assign(&mut self, variable: VariableId, value: i32) {
        self.csp.assign(variable, value);
    }

    pub fn unassign(&mut self, variable: VariableId) {
        self.csp.unassign(variable);
    }

    /// Removes `value` from the domain of `variable` and records the removal.
    ///
    /// Values which are not in the current domain are skipped, so a value is never removed (or
    /// recorded) twice. Returns [`EmptyDomain`] if the domain is left without values.
    pub fn remove(&mut self, variable: VariableId, value: i32) -> Result<(), EmptyDomain> {
        let domain = self.csp.variable_mut(variable);
        if !domain.contains(value) {
            return Ok(());
        }

        domain.prune(value);
        self.pruned.push((variable, value));
        trace!("pruned {value} from {}", domain.name());

        if domain.domain_size() == 0 {
            trace!("domain of {} is empty", domain.name());
            return Err(EmptyDomain(variable));
        }

        Ok(())
    }

    /// The values removed so far during this call, in order of removal.
    pub fn pruned(&self) -> &[(VariableId, i32)] {
        self.pruned
    }
}
