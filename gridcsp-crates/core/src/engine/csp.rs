use log::trace;

use super::Constraint;
use super::ConstraintId;
use super::Variable;
use super::VariableId;
use crate::basic_types::ModelError;
use crate::basic_types::Solution;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;

/// The registry of a constraint satisfaction problem: it owns all variables and constraints, and
/// indexes the constraints by the variables in their scope.
///
/// The registry is populated by a model builder before search; during search only the domains and
/// assignments of the variables change.
#[derive(Clone, Debug, Default)]
pub struct Csp {
    variables: KeyedVec<VariableId, Variable>,
    constraints: KeyedVec<ConstraintId, Constraint>,
    constraints_by_variable: KeyedVec<VariableId, Vec<ConstraintId>>,
}

impl Csp {
    /// Create a new variable with the given (ordered) domain.
    pub fn new_variable(
        &mut self,
        name: impl Into<String>,
        domain: impl IntoIterator<Item = i32>,
    ) -> Result<VariableId, ModelError> {
        let variable = Variable::new(name.into(), domain.into_iter().collect())?;
        let id = self.variables.push(variable);
        self.constraints_by_variable.accomodate(id, Vec::new());

        Ok(id)
    }

    /// Add a constraint to the problem.
    ///
    /// The scope has to be non-empty and consist of distinct variables of this problem, and every
    /// tuple has to match the arity of the scope with values from the full domains.
    pub fn add_constraint(&mut self, constraint: Constraint) -> Result<ConstraintId, ModelError> {
        self.validate(&constraint)?;

        trace!(
            "adding constraint {} with {} tuples",
            constraint.name(),
            constraint.num_tuples()
        );

        let id = ConstraintId::create_from_index(self.constraints.len());
        for &variable in constraint.scope() {
            self.constraints_by_variable[variable].push(id);
        }
        let _ = self.constraints.push(constraint);

        Ok(id)
    }

    fn validate(&self, constraint: &Constraint) -> Result<(), ModelError> {
        let name = || constraint.name().to_owned();

        if constraint.arity() == 0 {
            return Err(ModelError::EmptyScope(name()));
        }

        let mut seen: HashSet<VariableId> = HashSet::default();
        for &variable in constraint.scope() {
            let Some(scope_variable) = self.variables.get(variable) else {
                return Err(ModelError::UnknownVariable(name()));
            };
            if !seen.insert(variable) {
                return Err(ModelError::DuplicateScopeVariable {
                    constraint: name(),
                    variable: scope_variable.name().to_owned(),
                });
            }
        }

        for tuple in constraint.tuples() {
            if tuple.len() != constraint.arity() {
                return Err(ModelError::TupleArityMismatch {
                    constraint: name(),
                    expected: constraint.arity(),
                    found: tuple.len(),
                });
            }

            for (&variable, &value) in constraint.scope().iter().zip(tuple) {
                let scope_variable = &self.variables[variable];
                if !scope_variable.full_domain().contains(&value) {
                    return Err(ModelError::ValueOutsideDomain {
                        constraint: name(),
                        variable: scope_variable.name().to_owned(),
                        value,
                    });
                }
            }
        }

        Ok(())
    }

    pub fn num_variables(&self) -> usize {
        self.variables.len()
    }

    pub fn num_constraints(&self) -> usize {
        self.constraints.len()
    }

    pub fn variables(&self) -> &KeyedVec<VariableId, Variable> {
        &self.variables
    }

    pub fn variable_ids(&self) -> impl Iterator<Item = VariableId> {
        self.variables.keys()
    }

    pub fn variable(&self, variable: VariableId) -> &Variable {
        &self.variables[variable]
    }

    pub fn variable_mut(&mut self, variable: VariableId) -> &mut Variable {
        &mut self.variables[variable]
    }

    pub fn constraints(&self) -> &KeyedVec<ConstraintId, Constraint> {
        &self.constraints
    }

    pub fn constraint_ids(&self) -> impl Iterator<Item = ConstraintId> {
        self.constraints.keys()
    }

    pub fn constraint(&self, constraint: ConstraintId) -> &Constraint {
        &self.constraints[constraint]
    }

    /// The constraints which have `variable` in their scope, in the order they were added.
    pub fn constraints_containing(&self, variable: VariableId) -> &[ConstraintId] {
        &self.constraints_by_variable[variable]
    }

    pub fn assign(&mut self, variable: VariableId, value: i32) {
        self.variables[variable].assign(value);
    }

    pub fn unassign(&mut self, variable: VariableId) {
        self.variables[variable].unassign();
    }

    pub fn is_assigned(&self, variable: VariableId) -> bool {
        self.variables[variable].is_assigned()
    }

    pub fn restore(&mut self, variable: VariableId, value: i32) {
        self.variables[variable].restore(value);
    }

    /// Puts every pruned value back into the domain of its variable.
    pub fn restore_all(&mut self, pruned: &[(VariableId, i32)]) {
        for &(variable, value) in pruned {
            self.restore(variable, value);
        }
    }

    /// Returns true if `solution` satisfies every constraint of the problem.
    pub fn is_solution(&self, solution: &Solution) -> bool {
        solution.num_variables() == self.num_variables()
            && self.constraints.iter().all(|constraint| {
                let values = constraint
                    .scope()
                    .iter()
                    .map(|&variable| solution.value(variable))
                    .collect::<Vec<_>>();
                constraint.check(&values)
            })
    }
}
