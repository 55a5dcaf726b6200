use rand::seq::SliceRandom;
use rand::Rng;

/// Determines the order in which the values of the selected variable are tried.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
pub enum ValueSelection {
    /// The order of the domain.
    #[default]
    InDomainOrder,
    /// A random permutation of the domain, drawn from the seeded generator of the search.
    Random,
}

impl ValueSelection {
    pub(crate) fn order(self, values: &mut [i32], rng: &mut impl Rng) {
        match self {
            ValueSelection::InDomainOrder => {}
            ValueSelection::Random => values.shuffle(rng),
        }
    }
}
