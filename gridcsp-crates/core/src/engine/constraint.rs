use super::Variable;
use super::VariableId;
use crate::containers::HashSet;
use crate::containers::KeyedVec;
use crate::containers::StorageKey;
use crate::gridcsp_assert_moderate;

/// Identifies a [`Constraint`] within the [`crate::Csp`] it was added to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConstraintId(pub u32);

impl StorageKey for ConstraintId {
    fn index(&self) -> usize {
        self.0 as usize
    }

    fn create_from_index(index: usize) -> Self {
        ConstraintId(index as u32)
    }
}

impl std::fmt::Display for ConstraintId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "c{}", self.0)
    }
}

/// A table constraint: an ordered scope and the set of tuples which satisfy it.
///
/// A tuple of values (positionally aligned with the scope) satisfies the constraint if and only if
/// it is in the tuple set. Scope and tuples do not change once the constraint is created; all
/// queries which depend on the state of the search take the variables as an argument.
#[derive(Clone, Debug)]
pub struct Constraint {
    name: String,
    scope: Box<[VariableId]>,
    tuples: HashSet<Box<[i32]>>,
}

impl Constraint {
    /// Create a constraint over `scope` which is satisfied by exactly the given `tuples`.
    ///
    /// The constraint is validated when it is added with [`crate::Csp::add_constraint`].
    pub fn new(
        name: impl Into<String>,
        scope: Vec<VariableId>,
        tuples: impl IntoIterator<Item = Vec<i32>>,
    ) -> Constraint {
        Constraint {
            name: name.into(),
            scope: scope.into_boxed_slice(),
            tuples: tuples.into_iter().map(Vec::into_boxed_slice).collect(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn scope(&self) -> &[VariableId] {
        &self.scope
    }

    pub fn arity(&self) -> usize {
        self.scope.len()
    }

    pub fn num_tuples(&self) -> usize {
        self.tuples.len()
    }

    pub fn tuples(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.tuples.iter().map(|tuple| &tuple[..])
    }

    /// Returns true if `values`, aligned with the scope, is a satisfying tuple.
    pub fn check(&self, values: &[i32]) -> bool {
        self.tuples.contains(values)
    }

    /// The number of scope variables which are currently unassigned.
    pub fn num_unassigned(&self, variables: &KeyedVec<VariableId, Variable>) -> usize {
        self.unassigned_variables(variables).count()
    }

    pub fn unassigned_variables<'a>(
        &'a self,
        variables: &'a KeyedVec<VariableId, Variable>,
    ) -> impl Iterator<Item = VariableId> + 'a {
        self.scope
            .iter()
            .copied()
            .filter(|&variable| !variables[variable].is_assigned())
    }

    /// The assigned values of the scope, or [`None`] if some scope variable is unassigned.
    pub fn assigned_values(&self, variables: &KeyedVec<VariableId, Variable>) -> Option<Vec<i32>> {
        self.scope
            .iter()
            .map(|&variable| variables[variable].assigned_value())
            .collect()
    }

    /// Returns true if `variable = value` can be extended to a satisfying tuple, where every other
    /// scope variable takes its assigned value, or a value from its current domain when it is
    /// unassigned.
    pub fn has_support(
        &self,
        variables: &KeyedVec<VariableId, Variable>,
        variable: VariableId,
        value: i32,
    ) -> bool {
        gridcsp_assert_moderate!(
            self.scope.contains(&variable),
            "{variable} is not in the scope of {}",
            self.name
        );

        let candidates = self
            .scope
            .iter()
            .map(|&other| {
                if other == variable {
                    return vec![value];
                }
                let other = &variables[other];
                match other.assigned_value() {
                    Some(assigned) => vec![assigned],
                    None => other.current_domain().collect(),
                }
            })
            .collect::<Vec<_>>();

        if candidates.iter().any(Vec::is_empty) {
            return false;
        }

        let num_combinations = candidates
            .iter()
            .fold(1_usize, |product, values| product.saturating_mul(values.len()));

        if num_combinations <= self.tuples.len() {
            self.find_support_in_product(&candidates)
        } else {
            self.find_support_in_tuples(&candidates)
        }
    }

    /// Enumerates the cartesian product of `candidates` with an odometer, stopping at the first
    /// combination which is a satisfying tuple.
    fn find_support_in_product(&self, candidates: &[Vec<i32>]) -> bool {
        let mut indices = vec![0_usize; candidates.len()];
        let mut tuple = candidates
            .iter()
            .map(|values| values[0])
            .collect::<Vec<_>>();

        loop {
            if self.tuples.contains(tuple.as_slice()) {
                return true;
            }

            let mut position = candidates.len();
            loop {
                if position == 0 {
                    return false;
                }
                position -= 1;

                indices[position] += 1;
                if indices[position] < candidates[position].len() {
                    tuple[position] = candidates[position][indices[position]];
                    break;
                }

                indices[position] = 0;
                tuple[position] = candidates[position][0];
            }
        }
    }

    fn find_support_in_tuples(&self, candidates: &[Vec<i32>]) -> bool {
        self.tuples.iter().any(|tuple| {
            tuple
                .iter()
                .zip(candidates)
                .all(|(value, values)| values.contains(value))
        })
    }
}
