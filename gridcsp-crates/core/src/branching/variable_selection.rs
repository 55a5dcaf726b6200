use crate::engine::Csp;
use crate::engine::VariableId;

/// Determines which unassigned variable is branched on next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum VariableSelection {
    /// The first unassigned variable in the order of creation.
    #[default]
    InputOrder,
    /// The unassigned variable with the fewest values in its current domain (first-fail); ties
    /// are broken by the order of creation.
    SmallestDomain,
}

impl VariableSelection {
    /// Returns [`None`] only when every variable is assigned.
    pub(crate) fn select(self, csp: &Csp) -> Option<VariableId> {
        let mut unassigned = csp
            .variable_ids()
            .filter(|&variable| !csp.is_assigned(variable));

        match self {
            VariableSelection::InputOrder => unassigned.next(),
            VariableSelection::SmallestDomain => {
                unassigned.min_by_key(|&variable| csp.variable(variable).domain_size())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_order_skips_assigned_variables() {
        let mut csp = Csp::default();
        let x = csp.new_variable("x", [1, 2]).unwrap();
        let y = csp.new_variable("y", [1, 2, 3]).unwrap();

        assert_eq!(Some(x), VariableSelection::InputOrder.select(&csp));

        csp.assign(x, 2);
        assert_eq!(Some(y), VariableSelection::InputOrder.select(&csp));

        csp.assign(y, 1);
        assert_eq!(None, VariableSelection::InputOrder.select(&csp));
    }

    #[test]
    fn smallest_domain_breaks_ties_in_order() {
        let mut csp = Csp::default();
        let _ = csp.new_variable("x", [1, 2, 3]).unwrap();
        let y = csp.new_variable("y", [1, 2]).unwrap();
        let z = csp.new_variable("z", [1, 2, 3]).unwrap();

        assert_eq!(Some(y), VariableSelection::SmallestDomain.select(&csp));

        csp.variable_mut(z).prune(3);
        assert_eq!(Some(y), VariableSelection::SmallestDomain.select(&csp));

        csp.variable_mut(z).prune(2);
        assert_eq!(Some(z), VariableSelection::SmallestDomain.select(&csp));
    }
}
