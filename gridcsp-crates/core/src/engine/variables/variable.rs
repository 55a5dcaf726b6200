use crate::basic_types::ModelError;
use crate::containers::HashMap;
use crate::gridcsp_assert_simple;

/// A finite-domain variable.
///
/// The variable keeps its full domain (fixed at creation) and a current domain, which is the
/// subset of the full domain that is still considered plausible. The current domain is only
/// changed through [`Variable::prune`] and [`Variable::restore`], so undoing a sequence of prunings
/// gives back exactly the domain from before.
///
/// Independently of the domain, a variable carries a stack of assigned values. The search assigns
/// a variable once per decision; propagators may additionally assign and unassign values on top
/// of that to test constraints, as long as every such assignment is undone before they return.
#[derive(Clone, Debug)]
pub struct Variable {
    name: String,
    full_domain: Box<[i32]>,
    /// Maps a value to its position in `full_domain`.
    positions: HashMap<i32, usize>,
    is_present: Box<[bool]>,
    size: usize,
    assignments: Vec<i32>,
}

impl Variable {
    pub(crate) fn new(name: String, domain: Vec<i32>) -> Result<Variable, ModelError> {
        if domain.is_empty() {
            return Err(ModelError::EmptyDomain(name));
        }

        let mut positions = HashMap::default();
        for (position, &value) in domain.iter().enumerate() {
            if positions.insert(value, position).is_some() {
                return Err(ModelError::DuplicateDomainValue {
                    variable: name,
                    value,
                });
            }
        }

        Ok(Variable {
            name,
            is_present: vec![true; domain.len()].into_boxed_slice(),
            size: domain.len(),
            full_domain: domain.into_boxed_slice(),
            positions,
            assignments: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The domain the variable was created with, in its original order.
    pub fn full_domain(&self) -> &[i32] {
        &self.full_domain
    }

    /// The values which are currently in the domain, in the order of the full domain.
    pub fn current_domain(&self) -> impl Iterator<Item = i32> + '_ {
        self.full_domain
            .iter()
            .zip(self.is_present.iter())
            .filter_map(|(&value, &is_present)| is_present.then_some(value))
    }

    /// The number of values in the current domain; zero signals a domain wipeout.
    pub fn domain_size(&self) -> usize {
        self.size
    }

    pub fn contains(&self, value: i32) -> bool {
        self.positions
            .get(&value)
            .is_some_and(|&position| self.is_present[position])
    }

    /// Removes `value` from the current domain.
    ///
    /// The value has to be in the current domain; callers check [`Variable::contains`] first.
    pub fn prune(&mut self, value: i32) {
        let position = self.positions.get(&value).copied();
        gridcsp_assert_simple!(
            position.is_some_and(|position| self.is_present[position]),
            "cannot prune {value} from {}, it is not in the current domain",
            self.name
        );

        if let Some(position) = position {
            self.is_present[position] = false;
            self.size -= 1;
        }
    }

    /// Puts a previously pruned `value` back into the current domain.
    pub fn restore(&mut self, value: i32) {
        let position = self.positions.get(&value).copied();
        gridcsp_assert_simple!(
            position.is_some_and(|position| !self.is_present[position]),
            "cannot restore {value} to {}, it is either present or not in the full domain",
            self.name
        );

        if let Some(position) = position {
            self.is_present[position] = true;
            self.size += 1;
        }
    }

    /// Assigns `value` on top of any existing assignment. Does not change the current domain.
    pub fn assign(&mut self, value: i32) {
        gridcsp_assert_simple!(
            self.contains(value),
            "cannot assign {value} to {}, it is not in the current domain",
            self.name
        );
        self.assignments.push(value);
    }

    /// Undoes the most recent [`Variable::assign`].
    pub fn unassign(&mut self) {
        gridcsp_assert_simple!(
            !self.assignments.is_empty(),
            "cannot unassign {}, it is not assigned",
            self.name
        );
        let _ = self.assignments.pop();
    }

    pub fn is_assigned(&self) -> bool {
        !self.assignments.is_empty()
    }

    /// The value of the most recent assignment, if the variable is assigned.
    pub fn assigned_value(&self) -> Option<i32> {
        self.assignments.last().copied()
    }

    pub(crate) fn assignment_depth(&self) -> usize {
        self.assignments.len()
    }
}
