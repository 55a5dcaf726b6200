use super::TerminationCondition;

/// Lets the search run until the problem is decided or, when enumerating, until every solution has
/// been visited. Decisions are not counted.
#[derive(Clone, Copy, Debug, Default)]
pub struct Indefinite;

impl TerminationCondition for Indefinite {
    fn should_stop(&mut self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Csp;
    use crate::Solver;

    #[test]
    fn enumeration_visits_the_whole_search_tree() {
        let mut csp = Csp::default();
        for name in ["x", "y", "z"] {
            let _ = csp.new_variable(name, 1..=3).unwrap();
        }
        let mut solver = Solver::new(csp, Default::default());

        let mut termination = Indefinite;
        let result = solver.enumerate_solutions(&mut termination, None, |_| {});

        assert_eq!(27, result.num_solutions);
        assert!(result.is_complete);
        assert!(!termination.should_stop());
    }
}
