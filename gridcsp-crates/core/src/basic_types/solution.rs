use crate::containers::KeyedVec;
use crate::engine::VariableId;

/// A complete assignment which satisfies every constraint of the problem it was found for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    values: KeyedVec<VariableId, i32>,
}

impl Solution {
    pub(crate) fn new(values: KeyedVec<VariableId, i32>) -> Self {
        Solution { values }
    }

    /// The value of `variable` in this solution.
    pub fn value(&self, variable: VariableId) -> i32 {
        self.values[variable]
    }

    pub fn num_variables(&self) -> usize {
        self.values.len()
    }

    /// Iterate over every variable with its value.
    pub fn iter(&self) -> impl Iterator<Item = (VariableId, i32)> + '_ {
        self.values.keys().zip(self.values.iter().copied())
    }
}
